//! Permutations of the symbol alphabet.
use std::fmt;

use crate::Symbol;

/// A permutation of {0, ..., n-1}, stored as the sequence of its images.
///
/// Every window cut from the segment buffer is validated into a `Perm` before it is merged, so
/// holding a `Perm` means holding a sequence that uses each symbol of its alphabet exactly once.
///
/// The [`Display`][fmt::Display] form is the token string used in superpermutations: one decimal
/// digit per symbol without separators.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Perm {
    perm: Box<[Symbol]>,
}

impl Perm {
    /// The identity permutation on `n` symbols.
    pub fn identity(n: usize) -> Perm {
        Perm {
            perm: (0..n).map(|s| s as Symbol).collect(),
        }
    }

    /// Create a permutation from a slice containing the images of 0..n.
    ///
    /// Returns None if the slice does not correspond to a permutation.
    pub fn from_slice(perm: &[Symbol]) -> Option<Perm> {
        Self::from_slice_with_scratch(perm, &mut vec![])
    }

    /// Create a permutation from a slice containing the images of 0..n.
    ///
    /// Returns None if the slice does not correspond to a permutation.
    /// The last parameter is used as scratch space and will be overwritten.
    pub fn from_slice_with_scratch(perm: &[Symbol], scratch: &mut Vec<bool>) -> Option<Perm> {
        let seen = scratch;
        seen.clear();
        seen.resize(perm.len(), false);

        for &p_i in perm.iter() {
            let p_i = p_i as usize;
            if p_i >= perm.len() || seen[p_i] {
                return None;
            }
            seen[p_i] = true;
        }

        Some(Perm { perm: perm.into() })
    }

    /// Number of symbols permuted.
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.perm
    }

    /// Append the token form of this permutation to `out`.
    pub fn write_tokens(&self, out: &mut String) {
        out.reserve(self.perm.len());
        for &s in self.perm.iter() {
            match char::from_digit(u32::from(s), 10) {
                Some(c) => out.push(c),
                None => out.push_str(&s.to_string()),
            }
        }
    }

    /// The token form of this permutation as a new string.
    pub fn to_tokens(&self) -> String {
        let mut out = String::new();
        self.write_tokens(&mut out);
        out
    }
}

impl From<Perm> for Vec<Symbol> {
    fn from(perm: Perm) -> Vec<Symbol> {
        perm.perm.into_vec()
    }
}

impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in self.perm.iter() {
            fmt::Display::fmt(s, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Perm({})", self)
    }
}

/// Iterator over all permutations of {0, ..., n-1} in Heap's order.
///
/// Each step differs from the previous one by a single transposition.
#[derive(Clone)]
pub struct HeapPermutations {
    current: Vec<Symbol>,
    counters: Vec<usize>,
    pos: usize,
    started: bool,
}

impl HeapPermutations {
    pub fn new(n: usize) -> HeapPermutations {
        HeapPermutations {
            current: (0..n).map(|s| s as Symbol).collect(),
            counters: vec![0; n],
            pos: 1,
            started: false,
        }
    }
}

impl Iterator for HeapPermutations {
    type Item = Perm;

    fn next(&mut self) -> Option<Perm> {
        if !self.started {
            self.started = true;
            return Some(Perm {
                perm: self.current.as_slice().into(),
            });
        }

        while self.pos < self.current.len() {
            let i = self.pos;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.current.swap(0, i);
                } else {
                    self.current.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.pos = 1;
                return Some(Perm {
                    perm: self.current.as_slice().into(),
                });
            }
            self.counters[i] = 0;
            self.pos += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use proptest::prelude::*;

    #[test]
    fn fmt_tokens() {
        assert_eq!(format!("{}", Perm::identity(4)), "0123");
        assert_eq!(format!("{:?}", Perm::from_slice(&[2, 0, 1]).unwrap()), "Perm(201)");
        assert_eq!(Perm::from_slice(&[1, 0]).unwrap().to_tokens(), "10");
        assert_eq!(format!("{}", Perm::identity(0)), "");
    }

    #[test]
    fn write_tokens_appends() {
        let mut out = String::from("01");
        Perm::from_slice(&[2, 1, 0]).unwrap().write_tokens(&mut out);
        assert_eq!(out, "01210");
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(Perm::from_slice(&[0, 0, 1]).is_none());
        assert!(Perm::from_slice(&[0, 1, 3]).is_none());
        assert!(Perm::from_slice(&[1]).is_none());
        assert!(Perm::from_slice(&[]).is_some());
    }

    #[test]
    fn heap_enumerates_all() {
        let expected = [1, 1, 2, 6, 24, 120, 720];
        for (n, &count) in expected.iter().enumerate() {
            let perms: Vec<Perm> = HeapPermutations::new(n).collect();
            assert_eq!(perms.len(), count);
            let distinct: HashSet<_> = perms.iter().cloned().collect();
            assert_eq!(distinct.len(), count);
            assert!(perms.iter().all(|p| p.len() == n));
        }
    }

    #[test]
    fn heap_starts_at_identity() {
        let mut perms = HeapPermutations::new(3);
        assert_eq!(perms.next(), Some(Perm::identity(3)));
        assert_eq!(perms.next(), Some(Perm::from_slice(&[1, 0, 2]).unwrap()));
    }

    proptest! {
        #[test]
        fn from_slice_ok(v in (0..200u8).prop_map(|v| (0..v).collect::<Vec<_>>()).prop_shuffle()) {
            prop_assert_eq!(v.clone(), Vec::from(Perm::from_slice(&v).unwrap()));
        }

        #[test]
        fn from_slice_not_injective(
            mut v in prop::collection::vec(0..200u8, 1..200)
        ) {
            let n = v.len() as u32;
            for el in v.iter_mut() {
                *el = (u32::from(*el) % n) as u8;
            }
            let mut v2 = v.clone();
            v2.sort();
            v2.dedup();
            prop_assume!(v2.len() < v.len());
            prop_assert!(Perm::from_slice(&v).is_none())
        }
    }
}
