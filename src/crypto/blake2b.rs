//! src/crypto/blake2b.rs
//! Keyed BLAKE2b with salt + personalization and a runtime output length.
//!
//! `blake2::Blake2bMac` fixes its output size at compile time, so this drives
//! `Blake2bVarCore` the same way `Blake2bMac` does internally: key padded to a
//! full block and held in a lazy buffer, so for an empty message it becomes
//! the final (and only) compressed block.

use blake2::digest::core_api::{Buffer, VariableOutputCore};
use blake2::digest::Output;
use blake2::Blake2bVarCore;

use crate::aliases::{Personal16, Salt16, SpanBuffer};
use crate::consts::{BYTES_MAX, KEYBYTES};

/// BLAKE2b block size in bytes.
const BLOCK_BYTES: usize = 128;

/// Computes `BLAKE2b(key, salt, personal, digest_length = out.len())` over an
/// empty message and writes the digest into `out`.
///
/// Callers guarantee `1 <= out.len() <= 64`; the KDF layer validates the
/// length before calling in here.
#[inline(always)]
pub fn keyed_hash(key: &[u8; KEYBYTES], salt: &Salt16, personal: &Personal16, out: &mut [u8]) {
    debug_assert!(!out.is_empty() && out.len() <= BYTES_MAX);

    let mut core = Blake2bVarCore::new_with_params(salt, personal, KEYBYTES, out.len());

    let mut padded_key = SpanBuffer::<BLOCK_BYTES>::new([0u8; BLOCK_BYTES]);
    padded_key.expose_secret_mut()[..KEYBYTES].copy_from_slice(key);

    let mut buffer = Buffer::<Blake2bVarCore>::new(padded_key.expose_secret());
    let mut full = Output::<Blake2bVarCore>::default();
    core.finalize_variable_core(&mut buffer, &mut full);

    out.copy_from_slice(&full[..out.len()]);

    // Lazy buffer still holds the padded key block.
    buffer.pad_with_zeros().iter_mut().for_each(|b| *b = 0);
    full.iter_mut().for_each(|b| *b = 0);
}
