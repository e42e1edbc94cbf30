use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use iconpick::app_dirs;

use crate::cli::CliArgs;

/// One configuration file to merge, in increasing priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigFile {
	pub(super) path: PathBuf,
	/// Explicit `--config` files must exist; discovered defaults may not.
	pub(super) required: bool,
}

/// Files to merge for this invocation: discovered defaults unless
/// `--no-config`, then every `--config` file in command-line order.
pub(super) fn config_files(cli: &CliArgs) -> Vec<ConfigFile> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let defaults = defaults.into_iter().map(|path| ConfigFile {
		path,
		required: false,
	});
	let explicit = cli.config.iter().cloned().map(|path| ConfigFile {
		path,
		required: true,
	});
	defaults.chain(explicit).collect()
}

/// Merge the config files and `ICONPICK__SECTION__KEY` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let files = config_files(cli);
	log::debug!("merging {} configuration file candidates", files.len());

	let builder = files
		.into_iter()
		.fold(Config::builder(), |builder, file| {
			builder.add_source(File::from(file.path).required(file.required))
		})
		.add_source(
			Environment::with_prefix("iconpick")
				.separator("__")
				.try_parsing(true),
		);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// `config.toml` in the config directory, then `.iconpick.toml` and
/// `iconpick.toml` in the working directory.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".iconpick.toml"), dir.join("iconpick.toml")]);
	user.into_iter().chain(local).collect()
}
