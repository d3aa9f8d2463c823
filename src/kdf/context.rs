//! src/kdf/context.rs

use std::fmt;

use crate::consts::CONTEXTBYTES;
use crate::KdfError;

/// Domain-separation tag mixed into every derivation.
///
/// Two applications sharing a master key stay independent as long as their
/// contexts differ. Any 8 bytes are accepted; ASCII such as `b"MyAppV01"` is
/// the usual choice.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context([u8; CONTEXTBYTES]);

impl Context {
    /// Build a context from exactly 8 bytes.
    #[must_use]
    pub const fn new(bytes: &[u8; CONTEXTBYTES]) -> Self {
        Self(*bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CONTEXTBYTES] {
        &self.0
    }
}

impl From<[u8; CONTEXTBYTES]> for Context {
    fn from(bytes: [u8; CONTEXTBYTES]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; CONTEXTBYTES]> for Context {
    fn from(bytes: &[u8; CONTEXTBYTES]) -> Self {
        Self(*bytes)
    }
}

impl TryFrom<&[u8]> for Context {
    type Error = KdfError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; CONTEXTBYTES] = slice
            .try_into()
            .map_err(|_| KdfError::InvalidContextLength { len: slice.len() })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for Context {
    type Error = KdfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.as_bytes())
    }
}

impl AsRef<[u8]> for Context {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Contexts are public labels; show them readably.
impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context(\"{}\")", self.0.escape_ascii())
    }
}
