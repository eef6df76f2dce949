//! Mode capability trait and runtime mode selection.

use aes128_core::{Aes128Key, Block, Error, Result, BLOCK_SIZE};
use log::debug;

use crate::cbc::Cbc;
use crate::ctr::{Counter, Ctr};
use crate::ecb::Ecb;

/// Byte-oriented encryption and decryption under a fixed key.
///
/// Methods take `&mut self` because some modes (CTR) advance internal state on
/// every call. An instance must not be shared between messages or threads
/// without external coordination.
pub trait Mode {
    /// Encrypts `plaintext`, returning a ciphertext of the same length.
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext`, returning a plaintext of the same length.
    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Mode selection and its per-mode parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeConfig {
    /// Electronic codebook.
    Ecb,
    /// Cipher block chaining with the given initialization vector.
    Cbc {
        /// Initialization vector; must be 16 bytes.
        iv: Vec<u8>,
    },
    /// Counter mode starting at the given counter value.
    Ctr {
        /// Initial counter.
        counter: Counter,
    },
}

/// A mode of operation chosen at runtime.
#[derive(Clone, Debug)]
pub enum Cipher {
    /// See [`Ecb`].
    Ecb(Ecb),
    /// See [`Cbc`].
    Cbc(Cbc),
    /// See [`Ctr`].
    Ctr(Ctr),
}

impl Cipher {
    /// Builds the mode described by `config` under `key`.
    pub fn new(key: &Aes128Key, config: ModeConfig) -> Result<Self> {
        let cipher = match config {
            ModeConfig::Ecb => Self::Ecb(Ecb::new(key)),
            ModeConfig::Cbc { iv } => Self::Cbc(Cbc::new(key, &iv)?),
            ModeConfig::Ctr { counter } => Self::Ctr(Ctr::new(key, counter)),
        };
        debug!("selected {} mode", cipher.name());
        Ok(cipher)
    }

    /// Short upper-case mode name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ecb(_) => "ECB",
            Self::Cbc(_) => "CBC",
            Self::Ctr(_) => "CTR",
        }
    }
}

impl Mode for Cipher {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Ecb(ecb) => Mode::encrypt(ecb, plaintext),
            Self::Cbc(cbc) => Mode::encrypt(cbc, plaintext),
            Self::Ctr(ctr) => Mode::encrypt(ctr, plaintext),
        }
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Ecb(ecb) => Mode::decrypt(ecb, ciphertext),
            Self::Cbc(cbc) => Mode::decrypt(cbc, ciphertext),
            Self::Ctr(ctr) => Mode::decrypt(ctr, ciphertext),
        }
    }
}

/// Fails with [`Error::InvalidInputLength`] unless `input` is block aligned.
pub(crate) fn check_block_aligned(input: &[u8]) -> Result<()> {
    if input.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidInputLength(input.len()));
    }
    Ok(())
}

/// Copies an exact 16-byte chunk into a block.
#[inline]
pub(crate) fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Aes128Key {
        Aes128Key::from(*b"Be a happy llama")
    }

    #[test]
    fn alignment_check() {
        assert_eq!(check_block_aligned(&[]), Ok(()));
        assert_eq!(check_block_aligned(&[0u8; 32]), Ok(()));
        assert_eq!(
            check_block_aligned(&[0u8; 3]),
            Err(Error::InvalidInputLength(3))
        );
    }

    #[test]
    fn cipher_rejects_short_iv() {
        let err = Cipher::new(&key(), ModeConfig::Cbc { iv: vec![1] }).unwrap_err();
        assert_eq!(err, Error::InvalidIvLength(1));
    }

    #[test]
    fn cipher_dispatches_to_selected_mode() {
        let data = [7u8; 32];
        let configs = [
            ModeConfig::Ecb,
            ModeConfig::Cbc { iv: vec![9u8; 16] },
            ModeConfig::Ctr {
                counter: Counter::new(42),
            },
        ];
        for config in configs {
            let mut direct: Box<dyn Mode> = match &config {
                ModeConfig::Ecb => Box::new(Ecb::new(&key())),
                ModeConfig::Cbc { iv } => Box::new(Cbc::new(&key(), iv).expect("valid iv")),
                ModeConfig::Ctr { counter } => Box::new(Ctr::new(&key(), *counter)),
            };
            let mut cipher = Cipher::new(&key(), config).expect("valid config");
            assert_eq!(
                cipher.encrypt(&data).expect("aligned"),
                direct.encrypt(&data).expect("aligned"),
                "{} mode",
                cipher.name()
            );
        }
    }

    #[test]
    fn cipher_round_trips() {
        let data = *b"sixteen byte msgsixteen byte msg";
        for config in [
            ModeConfig::Ecb,
            ModeConfig::Cbc { iv: vec![3u8; 16] },
            ModeConfig::Ctr {
                counter: Counter::new(u128::MAX),
            },
        ] {
            let mut enc = Cipher::new(&key(), config.clone()).expect("valid config");
            let mut dec = Cipher::new(&key(), config).expect("valid config");
            let ct = enc.encrypt(&data).expect("aligned");
            assert_eq!(dec.decrypt(&ct).expect("aligned"), data);
        }
    }
}
