// error.rs - Error types for pattern compilation and field mapping.
//
// Compile failures come from the regex engine and are carried verbatim;
// mapping errors are configuration mistakes in the caller's field table.

use std::fmt;

/// Error type for pattern compilation and capture-mapping operations.
///
/// A failed match is never an `Error`; the mapping entry points report it
/// as `Ok(None)` or `Ok(false)` instead.
#[derive(Debug, Clone)]
pub enum Error {
    /// The pattern failed to compile. Carries the engine's error.
    Pattern(regex::Error),
    /// A field map referenced a named group the pattern does not declare.
    UnknownGroup { name: String },
    /// A field map referenced a numbered group beyond the pattern's groups.
    ///
    /// `len` is the number of parenthesized groups in the pattern; valid
    /// indices are `0..=len` (index 0 is the whole match).
    GroupOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern(err) => write!(f, "pattern error: {}", err),
            Error::UnknownGroup { name } => {
                write!(f, "pattern declares no capture group named `{}`", name)
            }
            Error::GroupOutOfRange { index, len } => {
                write!(
                    f,
                    "capture group index {} out of range (pattern has {} groups)",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err)
    }
}
