//! Validation errors shared by the key type and the modes of operation.

use thiserror::Error;

/// Input-shape failures. Each variant carries the offending length and is
/// raised before any cryptographic work is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material was not exactly 16 bytes.
    #[error("AES-128 key must be exactly 16 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Initialization vector was not exactly 16 bytes.
    #[error("initialization vector must be exactly 16 bytes, got {0}")]
    InvalidIvLength(usize),

    /// Block-mode input was not a multiple of the block size.
    #[error("input must be a multiple of 16 bytes, got {0}")]
    InvalidInputLength(usize),
}

/// Result alias used across the workspace.
pub type Result<T> = core::result::Result<T, Error>;
