#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::aliases::{MasterKey32, Subkey};
#[cfg(feature = "batch-ops")]
use crate::kdf::blake2b::check_subkey_len;
#[cfg(feature = "batch-ops")]
use crate::{derive_from_key, Context, KdfError};

/// Derive one subkey per id in parallel. Output order matches `subkey_ids`.
#[cfg(feature = "batch-ops")]
pub fn derive_batch(
    subkey_ids: &[u64],
    subkey_len: usize,
    context: &Context,
    master_key: &MasterKey32,
) -> Result<Vec<Subkey>, KdfError> {
    check_subkey_len(subkey_len)?;
    tracing::trace!(count = subkey_ids.len(), len = subkey_len, "deriving subkey batch");

    subkey_ids
        .par_iter()
        .map(|&id| derive_from_key(subkey_len, id, context, master_key))
        .collect()
}
