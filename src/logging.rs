//! Logger setup for the `iconpick` binary.
//!
//! Libraries log through the `log` facade. The binary installs `env_logger`
//! with a `warn` default that `RUST_LOG` can override. While the terminal UI
//! owns the screen, records go to `iconpick.log` in the cache directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::app_dirs;

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "iconpick.log";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

impl LogTarget {
	/// Pick the target for a run: stderr for headless runs, the cache-dir log
	/// file when a terminal UI will be drawn.
	pub fn for_run(interactive: bool) -> Result<Self> {
		if !interactive {
			return Ok(Self::Stderr);
		}
		let dir = app_dirs::get_cache_dir()?;
		Ok(Self::File(dir.join(LOG_FILE_NAME)))
	}
}

fn builder() -> Builder {
	Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	File::create(path).with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global logger. Calling this twice keeps the first logger.
pub fn initialize(target: &LogTarget) -> Result<()> {
	let mut builder = builder();
	match target {
		LogTarget::Stderr => {
			builder.target(Target::Stderr);
		}
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			builder
				.target(Target::Pipe(Box::new(file)))
				.write_style(WriteStyle::Never);
		}
	}

	if builder.try_init().is_err() {
		log::debug!("logger already installed");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn headless_runs_log_to_stderr() {
		assert_eq!(LogTarget::for_run(false).expect("target"), LogTarget::Stderr);
	}

	#[test]
	fn file_target_creates_missing_directories() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		open_log_file(&path).expect("open log file");
		assert!(path.exists());
	}
}
