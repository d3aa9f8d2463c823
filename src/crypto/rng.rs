// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets.
//!
//! Adds `T::random()` to every `Fixed<[u8; N]>` (so to [`MasterKey32`]) using
//! a thread-local `OsRng`.

use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

use crate::aliases::MasterKey32;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Self;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline(always)]
    fn random() -> Self {
        RNG.with(|rng_cell| {
            let mut rng = rng_cell.borrow_mut();
            let mut bytes = [0u8; N];
            // OsRng only fails if the OS entropy source is gone
            if let Err(err) = rng.try_fill_bytes(&mut bytes) {
                tracing::error!(error = %err, "OS random source failed");
                panic!("OS random source failed: {err}");
            }
            Fixed::new(bytes)
        })
    }
}

/// Generate a fresh random master key.
///
/// Keys must come from a strong source; this construction does no stretching
/// and is unsafe to use with passwords or other low-entropy input.
///
/// # Panics
///
/// If the operating system's entropy source is unavailable.
#[must_use]
#[inline(always)]
pub fn generate_master_key() -> MasterKey32 {
    MasterKey32::random()
}
