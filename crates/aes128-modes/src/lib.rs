//! Modes of operation over the AES-128 block cipher.
//!
//! Three independent wrappers around [`aes128_core::Aes128`]:
//! - [`Ecb`]: every block encrypted on its own.
//! - [`Cbc`]: each block chained to the previous ciphertext block through an IV.
//! - [`Ctr`]: a stream cipher driven by a 128-bit [`Counter`].
//!
//! All three implement the [`Mode`] capability trait, and [`Cipher`] wraps
//! them in a tagged union for callers that choose the mode at runtime.
//!
//! ECB and CBC never pad: input must already be a multiple of 16 bytes or the
//! call fails with [`Error::InvalidInputLength`]. CTR accepts any length.
//!
//! None of the modes guard against nonce misuse. Reusing a (key, IV) pair
//! under CBC, or a (key, counter) pair under CTR, for two different messages
//! leaks information about the plaintexts; choosing fresh values is the
//! caller's job.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod ctr;
mod ecb;
mod mode;

pub use crate::cbc::Cbc;
pub use crate::ctr::{Counter, Ctr};
pub use crate::ecb::Ecb;
pub use crate::mode::{Cipher, Mode, ModeConfig};

pub use aes128_core::{Aes128Key, Block, Error, Result, BLOCK_SIZE};
