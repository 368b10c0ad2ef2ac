//! Superpermutation report binary
//!
//! Constructs the ring cascade superpermutation for each configured alphabet size and prints a
//! report per size. Optional arguments: `[min_n] [max_n]`.

use std::env;
use std::io;

use ringperm::config::{Config, DEFAULT_LOG_FILTER, PRINT_LIMIT_VAR};
use ringperm::generate::generate;
use ringperm::report::run_batch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let print_limit = env::var(PRINT_LIMIT_VAR).ok();
    let config = Config::from_args(env::args().skip(1)).with_print_limit(print_limit.as_deref());
    tracing::debug!(?config, "starting batch");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failed sizes are part of the report; the exit status stays successful.
    match run_batch(&config, &mut out, generate) {
        Ok(summary) if !summary.is_success() => {
            let failed: Vec<usize> = summary.failed.iter().map(|(n, _)| *n).collect();
            tracing::warn!(?failed, "some sizes failed");
        }
        Ok(_) => {}
        Err(err) => tracing::error!(error = %err, "failed to write report"),
    }
}
