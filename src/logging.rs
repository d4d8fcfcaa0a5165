//! Diagnostic logging
//!
//! Logs go to stderr and are silent below `warn` unless `DESIGIT_LOG` asks
//! for more (e.g. `DESIGIT_LOG=debug desigit haalat`). The filter syntax is
//! the usual `tracing_subscriber::EnvFilter` one.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "DESIGIT_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
