use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve(cli))
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;

	use super::*;

	fn write_config(contents: &str) -> (tempfile::TempDir, String) {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("iconpick.toml");
		fs::write(&path, contents).expect("write config");
		let path = path.to_string_lossy().into_owned();
		(dir, path)
	}

	#[test]
	fn config_file_values_are_applied() {
		let (_dir, path) = write_config(
			"[layout]\nrows = 2\ncols = 3\n\n[search]\nquiet_window_ms = 0\n\n[catalog]\npath = \"icons.json\"\n",
		);
		let cli = CliArgs::parse_from(["iconpick", "--no-config", "--config", path.as_str()]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.layout.rows(), 2);
		assert_eq!(resolved.layout.cols(), 3);
		assert_eq!(resolved.quiet_window, Duration::ZERO);
		assert_eq!(
			resolved.catalog.as_deref(),
			Some(std::path::Path::new("icons.json"))
		);
	}

	#[test]
	fn cli_overrides_beat_config_files() {
		let (_dir, path) = write_config("[layout]\nrows = 2\ncols = 3\n");
		let cli = CliArgs::parse_from([
			"iconpick",
			"--no-config",
			"--config",
			path.as_str(),
			"--rows",
			"4",
			"--cols",
			"-1",
		]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.layout.rows(), 4);
		assert_eq!(resolved.layout.cols(), 10);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"iconpick",
			"--no-config",
			"--config",
			"/definitely/not/here/iconpick.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
