//! Electronic codebook mode.

use aes128_core::{Aes128, Aes128Key, Block, Result, BLOCK_SIZE};
use log::{debug, trace};

use crate::mode::{check_block_aligned, to_block, Mode};

/// AES-128 in ECB mode: each block is encrypted on its own.
///
/// Identical plaintext blocks always produce identical ciphertext blocks under
/// the same key, so patterns in the input remain visible. Prefer [`crate::Cbc`]
/// or [`crate::Ctr`] unless ECB is required for interoperability.
#[derive(Clone, Debug)]
pub struct Ecb {
    cipher: Aes128,
}

impl Ecb {
    /// Creates an ECB cipher for `key`.
    pub fn new(key: &Aes128Key) -> Self {
        debug!("ECB cipher initialised");
        Self {
            cipher: Aes128::new(key),
        }
    }

    /// Encrypts block-aligned `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, Aes128::encrypt_block)
    }

    /// Decrypts block-aligned `ciphertext`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, Aes128::decrypt_block)
    }

    fn process(&self, input: &[u8], op: fn(&Aes128, &Block) -> Block) -> Result<Vec<u8>> {
        check_block_aligned(input)?;
        trace!("ECB processing {} blocks", input.len() / BLOCK_SIZE);

        let mut output = Vec::with_capacity(input.len());
        for chunk in input.chunks_exact(BLOCK_SIZE) {
            output.extend_from_slice(&op(&self.cipher, &to_block(chunk)));
        }
        Ok(output)
    }
}

impl Mode for Ecb {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ecb::encrypt(self, plaintext)
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ecb::decrypt(self, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes128_core::Error;

    fn ecb() -> Ecb {
        Ecb::new(&Aes128Key::from([0x2au8; 16]))
    }

    #[test]
    fn rejects_unaligned_input() {
        assert_eq!(ecb().encrypt(&[1, 2, 3]), Err(Error::InvalidInputLength(3)));
        assert_eq!(ecb().decrypt(&[0u8; 17]), Err(Error::InvalidInputLength(17)));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(ecb().encrypt(&[]), Ok(Vec::new()));
        assert_eq!(ecb().decrypt(&[]), Ok(Vec::new()));
    }

    #[test]
    fn equal_blocks_encrypt_equally() {
        let ct = ecb().encrypt(&[0x11u8; 48]).expect("aligned");
        assert_eq!(ct[..16], ct[16..32]);
        assert_eq!(ct[16..32], ct[32..]);
    }

    #[test]
    fn changing_one_block_leaves_others_alone() {
        let mut plaintext = [0u8; 48];
        let before = ecb().encrypt(&plaintext).expect("aligned");
        plaintext[20] ^= 0x80;
        let after = ecb().encrypt(&plaintext).expect("aligned");
        assert_eq!(before[..16], after[..16]);
        assert_ne!(before[16..32], after[16..32]);
        assert_eq!(before[32..], after[32..]);
    }

    #[test]
    fn decrypt_inverts_encrypt() {
        let plaintext: Vec<u8> = (0u8..64).collect();
        let cipher = ecb();
        let ct = cipher.encrypt(&plaintext).expect("aligned");
        assert_eq!(cipher.decrypt(&ct).expect("aligned"), plaintext);
    }
}
