//! Error types for superpermutation construction.

use thiserror::Error;

use crate::Symbol;

/// Result type for construction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a superpermutation for a single alphabet size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The alphabet is too small for the ring cascade construction.
    #[error("alphabet size {n} is below the minimum of {min}")]
    TooFewSymbols { n: usize, min: usize },

    /// Symbols would no longer fit in a single decimal token.
    #[error("alphabet size {n} exceeds the maximum of {max} single-digit symbols")]
    TooManySymbols { n: usize, max: usize },

    /// A slice read fell outside the backing storage.
    #[error("{what} index {index} out of range (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A generated window is not a permutation of the alphabet.
    #[error("window {window:?} is not a permutation of 0..{n}")]
    NotAPermutation { window: Vec<Symbol>, n: usize },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),

    /// Failure injected by a caller, carried through the batch driver as-is.
    #[error("{0}")]
    Other(String),
}
