// src/crypto/mod.rs

//! Low-level primitives.
//!
//! [`blake2b`] is the only place the crate touches BLAKE2b directly; the KDF
//! layer in [`crate::kdf`] goes through [`blake2b::keyed_hash`].

pub mod blake2b;
#[cfg(feature = "rand")]
pub mod rng;
