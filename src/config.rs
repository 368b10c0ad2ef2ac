//! Batch configuration.
use std::ops::RangeInclusive;

use tracing::warn;

/// Environment variable overriding [`Config::print_limit`].
pub const PRINT_LIMIT_VAR: &str = "RINGPERM_PRINT_LIMIT";

/// Log filter used when `RUST_LOG` is unset. Library events below `warn` stay quiet.
pub const DEFAULT_LOG_FILTER: &str = "superperm=info,ringperm=warn";

/// Which alphabet sizes to construct and how much of each result to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Smallest alphabet size, inclusive.
    pub min_n: usize,
    /// Largest alphabet size, inclusive.
    pub max_n: usize,
    /// Full strings are printed only up to this alphabet size.
    pub print_limit: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            min_n: 3,
            max_n: 7,
            print_limit: 8,
        }
    }
}

impl Config {
    /// Read optional positional `[min_n] [max_n]` arguments, program name excluded.
    ///
    /// Missing or unparsable values keep their defaults. A lone `min_n` above the default
    /// maximum runs that single size. Reversed bounds are swapped.
    pub fn from_args<I>(args: I) -> Config
    where
        I: IntoIterator<Item = String>,
    {
        let defaults = Config::default();
        let args: Vec<String> = args.into_iter().collect();

        let min_n = args
            .first()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_n);
        let max_n = args
            .get(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| defaults.max_n.max(min_n));

        let (min_n, max_n) = if max_n < min_n {
            warn!(min_n, max_n, "reversed size range, swapping bounds");
            (max_n, min_n)
        } else {
            (min_n, max_n)
        };

        Config {
            min_n,
            max_n,
            ..defaults
        }
    }

    /// Override the print limit from a raw value, typically [`PRINT_LIMIT_VAR`].
    pub fn with_print_limit(mut self, value: Option<&str>) -> Config {
        if let Some(limit) = value.and_then(|s| s.trim().parse().ok()) {
            self.print_limit = limit;
        }
        self
    }

    /// Alphabet sizes in processing order.
    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min_n..=self.max_n
    }
}
