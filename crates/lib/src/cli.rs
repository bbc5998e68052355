//! CLI helpers.

mod output;
mod stderr_logger;

use anyhow::{anyhow, Result};
use log::LevelFilter;

pub use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Install the stderr logger, filtering out records above `level`.
pub fn install_logger(level: LevelFilter) -> Result<()> {
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
    log::set_max_level(level);
    Ok(())
}
