//! # Key Derivation
//!
//! Deterministic subkey derivation from a single master key.
//!
//! ## Modules
//!
//! - [`blake2b`] - the BLAKE2b KDF (libsodium `crypto_kdf_blake2b` compatible)
//! - [`context`] - the 8-byte domain-separation tag
//!
//! ## Usage
//!
//! ```
//! use blake2b_kdf::aliases::MasterKey32;
//! use blake2b_kdf::{derive_from_key, Context};
//!
//! let master_key = MasterKey32::new([0x07; 32]);
//! let context = Context::new(b"MyAppV01");
//!
//! let encryption_key = derive_from_key(32, 1, &context, &master_key).unwrap();
//! let signing_key = derive_from_key(32, 2, &context, &master_key).unwrap();
//!
//! assert_ne!(encryption_key.expose_secret(), signing_key.expose_secret());
//! ```
//!
//! Master keys must be uniformly random. Nothing here stretches or salts a
//! low-entropy input; use a password hash for that before deriving.

pub mod blake2b;
pub mod context;
