//! File-backed logging for the terminal interface.
//!
//! The TUI owns stdout and stderr while it is running, so tracing events go
//! to a log file under the data directory instead. The filter is taken from
//! the `HNQ_LOG` environment variable and defaults to `info`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "hnq.log";
const FILTER_ENV: &str = "HNQ_LOG";

/// Install the global subscriber and return the path it writes to.
pub fn initialize() -> Result<PathBuf> {
	let dir = crate::app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create data directory {}", dir.display()))?;

	let path = dir.join(LOG_FILE);
	let file = File::create(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

	Ok(path)
}
