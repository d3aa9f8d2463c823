//! # Secure-Gate Type Aliases
//!
//! Secret-bearing types are [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrappers: zeroized on drop, redacted in `Debug`, and only readable through
//! an explicit `.expose_secret()`.
//!
//! - [`MasterKey32`] - 32-byte master key
//! - [`Subkey`] - derived subkey of runtime length
//! - [`SpanBuffer<N>`] - generic secure stack buffer for fixed-length subkeys
//! - [`Salt16`] / [`Personal16`] - BLAKE2b parameter fields

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Parameter block fields, not secret on their own
pub type Salt16 = [u8; 16];
pub type Personal16 = [u8; 16];

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub Subkey, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub MasterKey32, 32);
