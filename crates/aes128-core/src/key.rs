//! Key material and the expanded round-key schedule.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Number of rounds performed by AES-128.
pub const ROUNDS: usize = 10;

/// Validated 128-bit AES key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key([u8; 16]);

impl Aes128Key {
    /// Number of bytes in an AES-128 key.
    pub const LENGTH: usize = 16;

    /// Builds a key from a slice, failing unless it is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; Self::LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength(bytes.len()))?;
        Ok(Self(key))
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

/// Expanded round keys for AES-128: the key itself followed by ten derived keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Total size of the schedule in bytes.
    pub const SIZE: usize = (ROUNDS + 1) * BLOCK_SIZE;

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the eleven round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}
