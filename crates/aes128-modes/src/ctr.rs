//! Counter mode.

use aes128_core::{Aes128, Aes128Key, Block, Result, BLOCK_SIZE};
use log::{debug, trace};

use crate::mode::Mode;

/// 128-bit CTR counter. Arithmetic wraps modulo 2^128.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter(u128);

impl Counter {
    /// Counter starting at `value`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Interprets `bytes` as an unsigned big-endian integer of any length and
    /// reduces it modulo 2^128, i.e. keeps the low 16 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let low = &bytes[bytes.len().saturating_sub(BLOCK_SIZE)..];
        let mut buf = [0u8; BLOCK_SIZE];
        buf[BLOCK_SIZE - low.len()..].copy_from_slice(low);
        Self(u128::from_be_bytes(buf))
    }

    /// Current value.
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// The counter block fed to the cipher.
    pub const fn to_be_bytes(&self) -> Block {
        self.0.to_be_bytes()
    }

    fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

impl From<u128> for Counter {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

/// AES-128 in CTR mode.
///
/// Keystream block `i` is the encryption of the counter value after `i`
/// increments. The counter advances once per chunk of up to 16 bytes, partial
/// chunks included, and keeps advancing across calls: output depends on every
/// call previously made on the same instance.
///
/// The same (key, counter value) pair must never be used for two different
/// plaintexts. Start each new key or message from a fresh counter range.
#[derive(Clone, Debug)]
pub struct Ctr {
    cipher: Aes128,
    counter: Counter,
}

impl Ctr {
    /// Creates a CTR cipher for `key` starting at `counter`.
    pub fn new(key: &Aes128Key, counter: Counter) -> Self {
        debug!("CTR cipher initialised");
        Self {
            cipher: Aes128::new(key),
            counter,
        }
    }

    /// Counter value that the next chunk will use.
    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// XORs `input` with the keystream. Shared by encryption and decryption.
    pub fn apply_keystream(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len());
        let mut steps = 0usize;
        for chunk in input.chunks(BLOCK_SIZE) {
            let keystream = self.cipher.encrypt_block(&self.counter.to_be_bytes());
            output.extend(chunk.iter().zip(keystream.iter()).map(|(b, k)| b ^ k));
            self.counter.increment();
            steps += 1;
        }
        trace!("CTR processed {} bytes, counter advanced by {}", input.len(), steps);
        output
    }

    /// Encrypts `plaintext` of any length.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        self.apply_keystream(plaintext)
    }

    /// Decrypts `ciphertext` of any length.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        self.apply_keystream(ciphertext)
    }
}

impl Mode for Ctr {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(self.apply_keystream(plaintext))
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(self.apply_keystream(ciphertext))
    }
}
