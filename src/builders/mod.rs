//! # Builders
//!
//! Fluent configuration for subkey derivation.
//!
//! ## Modules
//!
//! - [`subkey_builder`] - context + length preset for BLAKE2b subkey derivation

pub mod subkey_builder;
