//! The ring cascade pipeline for a single alphabet size.
use std::fmt;
use std::mem::take;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::counter::CarryCounter;
use crate::error::{Error, Result};
use crate::matrix::PermMatrix;
use crate::merge::MergedString;
use crate::perm::Perm;
use crate::segment::SegmentBuffer;
use crate::{MAX_SYMBOLS, MIN_SYMBOLS};

/// All state of one construction run.
///
/// A state is created fresh for every alphabet size and consumed by [`GenerationState::run`].
#[derive(Clone, Debug)]
pub struct GenerationState {
    n: usize,
    matrix: PermMatrix,
    counter: CarryCounter,
    buffer: SegmentBuffer,
    merged: MergedString,
    scratch: Vec<bool>,
}

impl GenerationState {
    pub fn new(n: usize) -> Result<GenerationState> {
        if n < MIN_SYMBOLS {
            return Err(Error::TooFewSymbols {
                n,
                min: MIN_SYMBOLS,
            });
        }
        if n > MAX_SYMBOLS {
            return Err(Error::TooManySymbols {
                n,
                max: MAX_SYMBOLS,
            });
        }
        Ok(GenerationState {
            n,
            matrix: PermMatrix::new(n),
            counter: CarryCounter::new(n)?,
            buffer: SegmentBuffer::new(n),
            merged: MergedString::new(),
            scratch: Vec::with_capacity(n),
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Drive the counter to completion, calling `visit` with every window in generation order.
    ///
    /// Each window is checked to be a permutation before it is passed on.
    pub fn for_each_window<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(&Perm),
    {
        let n = self.n;
        let mut from = self.counter.top();
        while !self.counter.is_done() {
            self.matrix.rebuild(from, &self.counter)?;
            self.buffer.load(&self.matrix, &self.counter)?;
            debug!(n, digits = ?self.counter.digits(), "loaded segment");

            for phase in 0..self.buffer.phases() {
                for start in self.buffer.windows_in_phase(phase) {
                    let window = self.buffer.window(start)?;
                    let perm = Perm::from_slice_with_scratch(window, &mut self.scratch)
                        .ok_or_else(|| Error::NotAPermutation {
                            window: window.to_vec(),
                            n,
                        })?;
                    visit(&perm);
                }
                self.buffer.rotate(phase)?;
            }

            from = self.counter.advance();
        }
        Ok(())
    }

    /// Merge every window into the accumulator and return the finished string.
    pub fn run(mut self) -> Result<Superpermutation> {
        let mut merged = take(&mut self.merged);
        let mut tokens = String::with_capacity(self.n);
        self.for_each_window(|perm| {
            tokens.clear();
            perm.write_tokens(&mut tokens);
            merged.merge(&tokens);
        })?;
        Ok(Superpermutation {
            n: self.n,
            tokens: merged.into_string(),
        })
    }
}

/// A string containing every permutation of {0..n-1} as a substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Superpermutation {
    n: usize,
    tokens: String,
}

impl Superpermutation {
    /// Wrap an existing token string, e.g. a known answer to check with `verify`.
    pub fn from_tokens(n: usize, tokens: &str) -> Superpermutation {
        Superpermutation {
            n,
            tokens: tokens.to_owned(),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.tokens
    }

    pub fn into_string(self) -> String {
        self.tokens
    }
}

impl fmt::Display for Superpermutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.tokens)
    }
}

/// Construct the ring cascade superpermutation on `n` symbols.
pub fn generate(n: usize) -> Result<Superpermutation> {
    info!(n, "generating superpermutation");
    let (sp, elapsed) = generate_timed(n)?;
    info!(n, length = sp.len(), ?elapsed, "generated superpermutation");
    Ok(sp)
}

/// Like [`generate`], also returning the wall-clock time of the construction.
pub fn generate_timed(n: usize) -> Result<(Superpermutation, Duration)> {
    let start = Instant::now();
    let sp = GenerationState::new(n)?.run()?;
    Ok((sp, start.elapsed()))
}

/// Every window of the construction in generation order, without merging.
pub fn permutations(n: usize) -> Result<Vec<Perm>> {
    let mut perms = vec![];
    GenerationState::new(n)?.for_each_window(|perm| perms.push(perm.clone()))?;
    Ok(perms)
}
