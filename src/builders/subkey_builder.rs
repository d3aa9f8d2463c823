//! src/builders/subkey_builder.rs
//! BLAKE2b subkey builder — one context, one length, many ids

use crate::aliases::{MasterKey32, Subkey};
use crate::consts::DEFAULT_SUBKEY_LENGTH;
use crate::kdf::blake2b::{check_subkey_len, derive_from_key, derive_secure_subkey};
use crate::kdf::context::Context;
use crate::KdfError;

/// Subkey derivation preset
///
/// Holds the context tag and subkey length so call sites only pass the id and
/// master key. Defaults to [`DEFAULT_SUBKEY_LENGTH`] (32) bytes.
///
/// # Thread Safety
///
/// `Send + Sync` and holds no secrets; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubkeyBuilder {
    context: Context,
    length: usize,
}

impl SubkeyBuilder {
    #[must_use]
    pub fn new(context: impl Into<Context>) -> Self {
        Self {
            context: context.into(),
            length: DEFAULT_SUBKEY_LENGTH,
        }
    }

    /// Set subkey length; validated when deriving
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<Context>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Derive into caller buffer — **preferred**
    ///
    /// `out_subkey` must be exactly [`length()`](Self::length) bytes.
    #[inline(always)]
    pub fn derive_secure(
        &self,
        subkey_id: u64,
        master_key: &MasterKey32,
        out_subkey: &mut [u8],
    ) -> Result<(), KdfError> {
        check_subkey_len(self.length)?;
        if out_subkey.len() != self.length {
            return Err(KdfError::InvalidLength {
                len: out_subkey.len(),
                min: self.length,
                max: self.length,
            });
        }
        derive_secure_subkey(subkey_id, &self.context, master_key, out_subkey)
    }

    /// Convenience: derive and return a fresh secure subkey
    #[inline(always)]
    pub fn derive_secure_new(
        &self,
        subkey_id: u64,
        master_key: &MasterKey32,
    ) -> Result<Subkey, KdfError> {
        derive_from_key(self.length, subkey_id, &self.context, master_key)
    }
}
