//! Cross-checks of a constructed superpermutation.
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, FromPrimitive};

use crate::error::{Error, Result};
use crate::generate::Superpermutation;
use crate::perm::{HeapPermutations, Perm};

/// k! in any integer type, or None on overflow.
pub fn checked_factorial<T>(k: usize) -> Option<T>
where
    T: Integer + CheckedMul + FromPrimitive,
{
    (1..=k).try_fold(T::one(), |acc, i| acc.checked_mul(&T::from_usize(i)?))
}

/// Σ k! for k = 1..=n in any integer type, or None on overflow.
pub fn checked_factorial_sum<T>(n: usize) -> Option<T>
where
    T: Integer + CheckedMul + CheckedAdd + FromPrimitive,
{
    (1..=n).try_fold(T::zero(), |acc, k| acc.checked_add(&checked_factorial(k)?))
}

pub fn factorial(k: usize) -> Result<u64> {
    checked_factorial(k).ok_or(Error::Overflow("factorial"))
}

/// The closed-form length Σ k! for k = 1..=n.
pub fn factorial_sum(n: usize) -> Result<u64> {
    checked_factorial_sum(n).ok_or(Error::Overflow("factorial sum"))
}

/// Permutations of {0..n-1} that do not occur as substrings of `tokens`.
pub fn missing_permutations(tokens: &str, n: usize) -> Vec<Perm> {
    let mut needle = String::with_capacity(n);
    HeapPermutations::new(n)
        .filter(|perm| {
            needle.clear();
            perm.write_tokens(&mut needle);
            !tokens.contains(needle.as_str())
        })
        .collect()
}

pub fn contains_all_permutations(tokens: &str, n: usize) -> bool {
    missing_permutations(tokens, n).is_empty()
}

/// Outcome of checking a superpermutation against the length formula and containment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub n: usize,
    pub length: usize,
    pub formula: u64,
    pub missing: Vec<Perm>,
}

impl Verification {
    pub fn length_matches(&self) -> bool {
        self.length as u64 == self.formula
    }

    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Superpermutation {
    /// Compare the length to Σ k! and search for every permutation.
    pub fn verify(&self) -> Result<Verification> {
        Ok(Verification {
            n: self.n(),
            length: self.len(),
            formula: factorial_sum(self.n())?,
            missing: missing_permutations(self.as_str(), self.n()),
        })
    }
}
