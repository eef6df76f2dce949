//! AES-128 block cipher following FIPS-197.
//!
//! This crate provides:
//! - A validated 128-bit key type and the AES-128 key schedule.
//! - Single-block encryption and decryption, either as free functions over an
//!   expanded schedule or through the [`Aes128`] engine.
//! - The error type shared with the modes of operation.
//!
//! The implementation favours clarity over speed and makes no constant-time
//! claims; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, ROUNDS};
