//! Ring cascade superpermutations
//!
//! This crate constructs, for an alphabet of n symbols, a single token string containing every
//! permutation of {0, ..., n-1} as a contiguous substring. Permutations are produced level by level
//! from a matrix of rotated rows selected by a mixed-radix counter, and stitched together by
//! maximal overlap merging. The resulting length is Σ k! for k = 1..=n.
//!
//! The construction yields an upper bound, not a minimal superpermutation for n ≥ 5.
//!
pub mod config;
pub mod counter;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod merge;
pub mod perm;
pub mod report;
pub mod segment;
pub mod verify;

pub use crate::error::{Error, Result};
pub use crate::generate::{
    generate, generate_timed, permutations, GenerationState, Superpermutation,
};

/// Alphabet symbol.
///
/// Symbols are small non-negative integers serialized as one decimal digit each.
pub type Symbol = u8;

/// Smallest supported alphabet.
pub const MIN_SYMBOLS: usize = 3;

/// Largest alphabet whose symbols are all single decimal digits.
pub const MAX_SYMBOLS: usize = 9;
