// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod kdf;

// High-level API
pub use error::KdfError;
pub use kdf::blake2b::{
    derive_from_key, derive_secure_subkey, derive_secure_subkey_fixed, master_key_from_slice,
};
pub use kdf::context::Context;

pub use builders::subkey_builder::SubkeyBuilder;
pub use consts::{bytes_max, bytes_min, contextbytes, keybytes};

#[cfg(feature = "rand")]
pub use crypto::rng::generate_master_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::derive_batch;
