//! Per-size reports and the best-effort batch driver.
use std::fmt;
use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generate::Superpermutation;
use crate::verify::factorial_sum;

/// The printed outcome of one successful construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub n: usize,
    pub length: usize,
    /// The full string, present only when `n` is within the print limit.
    pub tokens: Option<String>,
    pub formula: u64,
}

impl Report {
    pub fn new(sp: &Superpermutation, print_limit: usize) -> Result<Report> {
        let n = sp.n();
        Ok(Report {
            n,
            length: sp.len(),
            tokens: if n <= print_limit {
                Some(sp.as_str().to_owned())
            } else {
                None
            },
            formula: factorial_sum(n)?,
        })
    }

    pub fn length_matches(&self) -> bool {
        self.length as u64 == self.formula
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "N value: {}", self.n)?;
        writeln!(f, "Length of merged string: {}", self.length)?;
        if let Some(tokens) = &self.tokens {
            writeln!(f, "{}", tokens)?;
        }
        writeln!(f, "Formula value (sum(k!)): {}", self.formula)
    }
}

/// Which sizes of a batch succeeded and which failed.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<usize>,
    pub failed: Vec<(usize, Error)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Construct and report every size in `config`, continuing past failed sizes.
///
/// A failed size is reported as an error line followed by the error's diagnostic form in place of
/// its report. Only write errors on `out` abort the batch.
pub fn run_batch<W, G>(config: &Config, out: &mut W, mut generate: G) -> io::Result<BatchSummary>
where
    W: Write,
    G: FnMut(usize) -> Result<Superpermutation>,
{
    let mut summary = BatchSummary::default();

    for n in config.sizes() {
        writeln!(out, "Generating superpermutation for N={}...", n)?;

        match generate(n).and_then(|sp| Report::new(&sp, config.print_limit)) {
            Ok(report) => {
                if !report.length_matches() {
                    warn!(
                        n,
                        length = report.length,
                        formula = report.formula,
                        "length differs from sum of factorials"
                    );
                }
                writeln!(out, "{}", report)?;
                summary.succeeded.push(n);
            }
            Err(err) => {
                error!(n, error = %err, "generation failed");
                writeln!(out, "Error occurred for N={}: {}", n, err)?;
                writeln!(out, "{:#?}", err)?;
                summary.failed.push((n, err));
            }
        }
    }

    info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failed.len(),
        "batch finished"
    );
    Ok(summary)
}
