//! Scratch buffer from which permutation windows are sliced.
use std::ops::Range;

use crate::counter::CarryCounter;
use crate::error::{Error, Result};
use crate::matrix::PermMatrix;
use crate::Symbol;

/// A buffer of `3n + 3` symbols holding one ring of windows.
///
/// After [`load`][SegmentBuffer::load] the buffer starts with `n - 2` symbols taken from matrix
/// row `n - 3`, then the trailer `n - 2, n - 1`, followed by two copies of the leading `n - 1`
/// symbols so that every window of a phase has `n` contiguous symbols available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentBuffer {
    n: usize,
    buf: Vec<Symbol>,
}

impl SegmentBuffer {
    pub fn new(n: usize) -> SegmentBuffer {
        SegmentBuffer {
            n,
            buf: vec![0; 3 * n + 3],
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            what: "segment buffer",
            index,
            len: self.buf.len(),
        }
    }

    /// Refill the buffer from the deepest level row, offset by the counter's lowest digit.
    pub fn load(&mut self, matrix: &PermMatrix, counter: &CarryCounter) -> Result<()> {
        let n = self.n;
        let top = counter.top();
        let offset = counter.digit(top)?;
        let row = matrix.row(top)?;
        let src = row
            .get(offset..offset + n - 1)
            .ok_or(Error::IndexOutOfRange {
                what: "matrix column",
                index: offset + n - 1,
                len: row.len(),
            })?;
        if self.buf.len() < 3 * n - 2 {
            return Err(self.out_of_range(3 * n - 2));
        }

        self.buf.iter_mut().for_each(|s| *s = 0);
        self.buf[..n - 1].copy_from_slice(src);
        self.buf[n - 2] = (n - 2) as Symbol;
        self.buf[n - 1] = (n - 1) as Symbol;
        self.buf.copy_within(..n - 1, n);
        self.buf.copy_within(..n - 1, 2 * n - 1);
        Ok(())
    }

    /// Number of rotation phases per load.
    pub fn phases(&self) -> usize {
        self.n - 1
    }

    /// Start positions of the windows in a phase.
    pub fn windows_in_phase(&self, phase: usize) -> Range<usize> {
        phase..phase + self.n
    }

    /// The `n` symbols starting at `start`.
    pub fn window(&self, start: usize) -> Result<&[Symbol]> {
        self.buf
            .get(start..start + self.n)
            .ok_or_else(|| self.out_of_range(start + self.n))
    }

    /// Advance to the next phase by moving one symbol back and parking `n - 1` behind it.
    pub fn rotate(&mut self, phase: usize) -> Result<()> {
        let n = self.n;
        let from = n + phase;
        let moved = *self.buf.get(from).ok_or_else(|| self.out_of_range(from))?;
        self.buf[from - 1] = moved;
        self.buf[from] = (n - 1) as Symbol;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(n: usize) -> SegmentBuffer {
        let matrix = PermMatrix::new(n);
        let counter = CarryCounter::new(n).unwrap();
        let mut buffer = SegmentBuffer::new(n);
        buffer.load(&matrix, &counter).unwrap();
        buffer
    }

    fn phase_tokens(buffer: &SegmentBuffer, phase: usize) -> Vec<String> {
        buffer
            .windows_in_phase(phase)
            .map(|start| {
                buffer
                    .window(start)
                    .unwrap()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rotate_n3() {
        let mut buffer = loaded(3);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(phase_tokens(&buffer, 0), vec!["012", "120", "201"]);

        buffer.rotate(0).unwrap();
        assert_eq!(buffer.as_slice(), &[0, 1, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(phase_tokens(&buffer, 1), vec!["102", "021", "210"]);

        buffer.rotate(1).unwrap();
        assert_eq!(buffer.as_slice(), &[0, 1, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn rotate_n4() {
        let mut buffer = loaded(4);
        assert_eq!(
            buffer.as_slice(),
            &[0, 1, 2, 3, 0, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0]
        );
        assert_eq!(phase_tokens(&buffer, 0), vec!["0123", "1230", "2301", "3012"]);

        buffer.rotate(0).unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[0, 1, 2, 0, 3, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0]
        );
        assert_eq!(phase_tokens(&buffer, 1), vec!["1203", "2031", "0312", "3120"]);

        buffer.rotate(1).unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[0, 1, 2, 0, 1, 3, 2, 0, 1, 2, 0, 0, 0, 0, 0]
        );
        assert_eq!(phase_tokens(&buffer, 2), vec!["2013", "0132", "1320", "3201"]);

        buffer.rotate(2).unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[0, 1, 2, 0, 1, 2, 3, 0, 1, 2, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn reload_clears_rotation() {
        let mut buffer = loaded(4);
        buffer.rotate(0).unwrap();
        buffer.load(&PermMatrix::new(4), &CarryCounter::new(4).unwrap()).unwrap();
        assert_eq!(buffer, loaded(4));
    }

    #[test]
    fn window_bounds() {
        let buffer = loaded(3);
        assert!(buffer.window(9).is_ok());
        assert!(buffer.window(10).is_err());
        assert_eq!(buffer.phases(), 2);
        assert_eq!(buffer.windows_in_phase(1), 1..4);
    }
}
