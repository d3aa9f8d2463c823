//! # Constants
//!
//! Fixed sizes of the BLAKE2b key derivation construction, plus the
//! accessors that report them at runtime.

/// Minimum subkey length in bytes.
///
/// Requests shorter than this are rejected with
/// [`KdfError::InvalidLength`](crate::KdfError::InvalidLength).
pub const BYTES_MIN: usize = 16;

/// Maximum subkey length in bytes (the full BLAKE2b digest).
pub const BYTES_MAX: usize = 64;

/// Width of the context tag.
pub const CONTEXTBYTES: usize = 8;

/// Width of the master key.
pub const KEYBYTES: usize = 32;

/// Width of the BLAKE2b salt field. The subkey id occupies the low 8 bytes.
pub const SALTBYTES: usize = 16;

/// Width of the BLAKE2b personalization field. The context occupies the low 8 bytes.
pub const PERSONALBYTES: usize = 16;

/// Subkey length used by [`SubkeyBuilder`](crate::SubkeyBuilder) unless overridden.
pub const DEFAULT_SUBKEY_LENGTH: usize = 32;

/// Smallest supported subkey length.
#[inline(always)]
pub const fn bytes_min() -> usize {
    BYTES_MIN
}

/// Largest supported subkey length.
#[inline(always)]
pub const fn bytes_max() -> usize {
    BYTES_MAX
}

/// Context tag width, always `8`.
#[inline(always)]
pub const fn contextbytes() -> usize {
    CONTEXTBYTES
}

/// Master key width, always `32`.
#[inline(always)]
pub const fn keybytes() -> usize {
    KEYBYTES
}
