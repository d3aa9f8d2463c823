//! # Error Types
//!
//! All fallible operations return [`Result<T, KdfError>`](KdfError).

use thiserror::Error;

/// The error type for subkey derivation and input conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Requested subkey length is outside `[min, max]`.
    ///
    /// This is the only way a derivation can fail. It is detected before the
    /// hash runs, so the output buffer is never written.
    #[error("subkey length {len} is outside the supported range {min}..={max}")]
    InvalidLength {
        /// The rejected length.
        len: usize,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },

    /// A context tag built from a slice or string was not exactly 8 bytes.
    #[error("context must be exactly 8 bytes, got {len}")]
    InvalidContextLength {
        /// Length of the rejected input.
        len: usize,
    },

    /// A master key built from a slice was not exactly 32 bytes.
    #[error("master key must be exactly 32 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected input.
        len: usize,
    },
}
