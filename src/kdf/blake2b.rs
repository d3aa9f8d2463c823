//! src/kdf/blake2b.rs
//! BLAKE2b subkey derivation — out-param, zero-exposure, libsodium compatible
//!
//! `subkey = BLAKE2b(key = master_key, salt = LE64(id) || 0^8,
//!                   personal = context || 0^8, digest_length = len)`
//! over an empty message.

use tracing::{debug, trace};

use crate::aliases::{MasterKey32, Personal16, Salt16, Subkey};
use crate::consts::{BYTES_MAX, BYTES_MIN, CONTEXTBYTES, KEYBYTES, PERSONALBYTES, SALTBYTES};
use crate::crypto::blake2b::keyed_hash;
use crate::kdf::context::Context;
use crate::KdfError;

/// Reject lengths outside `[BYTES_MIN, BYTES_MAX]`.
#[inline(always)]
pub(crate) fn check_subkey_len(len: usize) -> Result<(), KdfError> {
    if (BYTES_MIN..=BYTES_MAX).contains(&len) {
        return Ok(());
    }
    debug!(len, min = BYTES_MIN, max = BYTES_MAX, "rejected subkey length");
    Err(KdfError::InvalidLength {
        len,
        min: BYTES_MIN,
        max: BYTES_MAX,
    })
}

/// Derive subkey `subkey_id` directly into a caller buffer.
///
/// The subkey length is `out_subkey.len()` and must lie in
/// `[BYTES_MIN, BYTES_MAX]`. On error the buffer is left untouched.
#[inline(always)]
pub fn derive_secure_subkey(
    subkey_id: u64,
    context: &Context,
    master_key: &MasterKey32,
    out_subkey: &mut [u8],
) -> Result<(), KdfError> {
    check_subkey_len(out_subkey.len())?;

    let mut salt: Salt16 = [0u8; SALTBYTES];
    salt[..8].copy_from_slice(&subkey_id.to_le_bytes());

    let mut personal: Personal16 = [0u8; PERSONALBYTES];
    personal[..CONTEXTBYTES].copy_from_slice(context.as_bytes());

    keyed_hash(master_key.expose_secret(), &salt, &personal, out_subkey);

    trace!(subkey_id, len = out_subkey.len(), "derived subkey");
    Ok(())
}

/// Derive a fresh `subkey_len`-byte subkey.
///
/// Same id, context and key always give the same bytes; changing any of them
/// gives an unrelated subkey.
///
/// # Errors
///
/// [`KdfError::InvalidLength`] if `subkey_len` is outside
/// `[BYTES_MIN, BYTES_MAX]`.
pub fn derive_from_key(
    subkey_len: usize,
    subkey_id: u64,
    context: &Context,
    master_key: &MasterKey32,
) -> Result<Subkey, KdfError> {
    check_subkey_len(subkey_len)?;

    let mut subkey = Subkey::new(vec![0u8; subkey_len]);
    derive_secure_subkey(subkey_id, context, master_key, subkey.expose_secret_mut())?;
    Ok(subkey)
}

/// Derive a subkey whose length is fixed at compile time.
///
/// `N` is still checked at runtime against `[BYTES_MIN, BYTES_MAX]`.
#[inline(always)]
pub fn derive_secure_subkey_fixed<const N: usize>(
    subkey_id: u64,
    context: &Context,
    master_key: &MasterKey32,
    out_subkey: &mut secure_gate::Fixed<[u8; N]>,
) -> Result<(), KdfError> {
    derive_secure_subkey(subkey_id, context, master_key, out_subkey.expose_secret_mut())
}

/// Copy a 32-byte slice into a [`MasterKey32`].
///
/// # Errors
///
/// [`KdfError::InvalidKeyLength`] if `bytes` is not exactly 32 bytes.
pub fn master_key_from_slice(bytes: &[u8]) -> Result<MasterKey32, KdfError> {
    let key: [u8; KEYBYTES] = bytes
        .try_into()
        .map_err(|_| KdfError::InvalidKeyLength { len: bytes.len() })?;
    Ok(MasterKey32::new(key))
}
