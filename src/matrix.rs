//! The level matrix of the ring cascade construction.
use crate::counter::CarryCounter;
use crate::error::{Error, Result};
use crate::Symbol;

/// Rows 0..n of symbol indices, one per level of the cascade.
///
/// Row `i` has length `2i + 2` and keeps `i` at position `i`. The `i` symbols on either side of
/// that fixed point are two copies of a length-`i` slice of row `i - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermMatrix {
    rows: Vec<Vec<Symbol>>,
}

impl PermMatrix {
    /// Build every row as two copies of `0..i` around the fixed point `i`.
    pub fn new(n: usize) -> PermMatrix {
        let rows = (0..n)
            .map(|i| {
                let mut row = vec![0; 2 * i + 2];
                for jj in 0..i {
                    row[jj] = jj as Symbol;
                    row[jj + i + 1] = jj as Symbol;
                }
                row[i] = i as Symbol;
                row
            })
            .collect();
        PermMatrix { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> Result<&[Symbol]> {
        self.rows
            .get(i)
            .map(|row| row.as_slice())
            .ok_or(Error::IndexOutOfRange {
                what: "matrix row",
                index: i,
                len: self.rows.len(),
            })
    }

    /// Recompute rows `from + 1 ..= n - 2` from the counter's current digits.
    ///
    /// Row `j` takes the length-`j` slice of row `j - 1` starting at digit `j - 1`.
    pub fn rebuild(&mut self, from: usize, counter: &CarryCounter) -> Result<()> {
        let last = self.rows.len().saturating_sub(2);
        for j in from + 1..=last {
            let offset = counter.digit(j - 1)?;
            let (lower, upper) = self.rows.split_at_mut(j);
            let src_row = &lower[j - 1];
            let src = src_row.get(offset..offset + j).ok_or(Error::IndexOutOfRange {
                what: "matrix column",
                index: offset + j,
                len: src_row.len(),
            })?;
            let dst = &mut upper[0];
            if dst.len() < 2 * j + 1 {
                return Err(Error::IndexOutOfRange {
                    what: "matrix column",
                    index: 2 * j + 1,
                    len: dst.len(),
                });
            }
            dst[..j].copy_from_slice(src);
            dst[j + 1..2 * j + 1].copy_from_slice(src);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_rows() {
        let matrix = PermMatrix::new(4);
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix.row(0).unwrap(), &[0, 0]);
        assert_eq!(matrix.row(1).unwrap(), &[0, 1, 0, 0]);
        assert_eq!(matrix.row(2).unwrap(), &[0, 1, 2, 0, 1, 0]);
        assert_eq!(matrix.row(3).unwrap(), &[0, 1, 2, 3, 0, 1, 2, 0]);
        assert!(matrix.row(4).is_err());
    }

    #[test]
    fn rebuild_after_carry() {
        let mut matrix = PermMatrix::new(5);
        let mut counter = CarryCounter::new(5).unwrap();
        let mut from = counter.top();
        for _ in 0..3 {
            from = counter.advance();
        }
        assert_eq!(&counter.digits()[1..3], &[1, 0]);
        assert_eq!(from, 1);

        matrix.rebuild(from, &counter).unwrap();
        assert_eq!(matrix.row(2).unwrap(), &[1, 0, 2, 1, 0, 0]);
        assert_eq!(matrix.row(3).unwrap(), &[1, 0, 2, 3, 1, 0, 2, 0]);
        // Rows at or below the carry are untouched.
        assert_eq!(matrix.row(1).unwrap(), &[0, 1, 0, 0]);
    }

    #[test]
    fn fixed_points_survive() {
        for n in 3..=7 {
            let mut matrix = PermMatrix::new(n);
            let mut counter = CarryCounter::new(n).unwrap();
            let mut from = counter.top();
            while !counter.is_done() {
                matrix.rebuild(from, &counter).unwrap();
                for i in 0..n {
                    assert_eq!(matrix.row(i).unwrap()[i] as usize, i);
                }
                from = counter.advance();
            }
        }
    }

    #[test]
    fn rebuild_range_empty_for_top_digit() {
        let mut matrix = PermMatrix::new(3);
        let counter = CarryCounter::new(3).unwrap();
        let before = matrix.clone();
        matrix.rebuild(1, &counter).unwrap();
        assert_eq!(matrix, before);
    }
}
