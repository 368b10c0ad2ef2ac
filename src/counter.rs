//! Mixed-radix carry counter selecting the rotation offset of every matrix level.
use crate::error::{Error, Result};
use crate::MIN_SYMBOLS;

/// An odometer of N+1 digits where digit `i` ranges over 0..=i.
///
/// Digit N-3 is the least significant one. A carry out of digit 1 into digit 0 means every
/// assignment of digits 1..=N-3 has been visited and the counter is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarryCounter {
    digits: Vec<usize>,
    top: usize,
}

impl CarryCounter {
    pub fn new(n: usize) -> Result<CarryCounter> {
        if n < MIN_SYMBOLS {
            return Err(Error::TooFewSymbols {
                n,
                min: MIN_SYMBOLS,
            });
        }
        Ok(CarryCounter {
            digits: vec![0; n + 1],
            top: n - 3,
        })
    }

    /// Index of the least significant digit, N-3.
    pub fn top(&self) -> usize {
        self.top
    }

    pub fn digit(&self, i: usize) -> Result<usize> {
        self.digits.get(i).cloned().ok_or(Error::IndexOutOfRange {
            what: "counter digit",
            index: i,
            len: self.digits.len(),
        })
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Whether the most significant digit has been reached.
    pub fn is_done(&self) -> bool {
        self.digits[0] >= 1
    }

    /// Step the counter once and resolve carries.
    ///
    /// Returns the lowest digit index the carry reached. Matrix rows above that index are stale.
    pub fn advance(&mut self) -> usize {
        let mut i = self.top;
        self.digits[i] += 1;
        while i > 0 && self.digits[i] > i {
            self.digits[i] = 0;
            self.digits[i - 1] += 1;
            i -= 1;
        }
        i
    }

    /// Number of steps from a fresh counter until [`is_done`][CarryCounter::is_done], (N-2)!.
    pub fn steps(n: usize) -> usize {
        (1..n.saturating_sub(1)).product()
    }
}
