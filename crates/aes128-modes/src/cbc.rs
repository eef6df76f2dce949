//! Cipher block chaining mode.

use aes128_core::{xor_in_place, Aes128, Aes128Key, Block, Error, Result, BLOCK_SIZE};
use log::{debug, trace};

use crate::mode::{check_block_aligned, to_block, Mode};

/// AES-128 in CBC mode.
///
/// Each plaintext block is XORed with the previous ciphertext block (the IV for
/// the first one) before encryption. The IV is configuration: it is only
/// changed through [`Cbc::set_iv`], never by encrypting or decrypting.
///
/// Reusing an IV with the same key for two messages reveals whether they share
/// a prefix. Set a fresh IV for each message.
#[derive(Clone, Debug)]
pub struct Cbc {
    cipher: Aes128,
    iv: Block,
}

fn parse_iv(iv: &[u8]) -> Result<Block> {
    iv.try_into().map_err(|_| Error::InvalidIvLength(iv.len()))
}

impl Cbc {
    /// Creates a CBC cipher for `key`; fails unless `iv` is 16 bytes.
    pub fn new(key: &Aes128Key, iv: &[u8]) -> Result<Self> {
        let iv = parse_iv(iv)?;
        debug!("CBC cipher initialised");
        Ok(Self {
            cipher: Aes128::new(key),
            iv,
        })
    }

    /// Current initialization vector.
    pub fn iv(&self) -> &Block {
        &self.iv
    }

    /// Replaces the initialization vector; fails unless `iv` is 16 bytes, in
    /// which case the previous IV is kept.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<&mut Self> {
        self.iv = parse_iv(iv)?;
        debug!("CBC initialization vector replaced");
        Ok(self)
    }

    /// Encrypts block-aligned `plaintext`. Blocks are processed strictly in
    /// order since each depends on the previous ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        check_block_aligned(plaintext)?;
        trace!("CBC encrypting {} blocks", plaintext.len() / BLOCK_SIZE);

        let mut output = Vec::with_capacity(plaintext.len());
        let mut chain = self.iv;
        for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
            let mut block = to_block(chunk);
            xor_in_place(&mut block, &chain);
            chain = self.cipher.encrypt_block(&block);
            output.extend_from_slice(&chain);
        }
        Ok(output)
    }

    /// Decrypts block-aligned `ciphertext`.
    ///
    /// Each block depends only on itself and the raw ciphertext block before
    /// it, so blocks could be decrypted independently.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_block_aligned(ciphertext)?;
        trace!("CBC decrypting {} blocks", ciphertext.len() / BLOCK_SIZE);

        let mut output = Vec::with_capacity(ciphertext.len());
        let mut previous: &[u8] = &self.iv;
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut block = self.cipher.decrypt_block(&to_block(chunk));
            xor_in_place(&mut block, &to_block(previous));
            output.extend_from_slice(&block);
            previous = chunk;
        }
        Ok(output)
    }
}

impl Mode for Cbc {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Cbc::encrypt(self, plaintext)
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Cbc::decrypt(self, ciphertext)
    }
}
