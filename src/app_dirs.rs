//! Per-user directories for `iconpick`.
//!
//! Each [`AppDir`] has an `ICONPICK_*_DIR` override; otherwise the platform
//! location from the `directories` crate is used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// File name of the catalog a user can install into the data directory.
pub const INSTALLED_CATALOG: &str = "icons.json";

/// The directories the binary reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds an installed `icons.json` catalog.
	Data,
	/// Holds `iconpick.log` from interactive runs.
	Cache,
}

impl AppDir {
	/// Environment variable that overrides this directory.
	#[must_use]
	pub fn override_var(self) -> &'static str {
		match self {
			Self::Config => "ICONPICK_CONFIG_DIR",
			Self::Data => "ICONPICK_DATA_DIR",
			Self::Cache => "ICONPICK_CACHE_DIR",
		}
	}

	/// Resolve the directory. An empty override counts as unset.
	pub fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.override_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}

		let dirs = ProjectDirs::from("io", "albo", "iconpick")
			.ok_or_else(|| anyhow!("no home directory to place iconpick's {self:?} directory in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}

pub fn get_cache_dir() -> Result<PathBuf> {
	AppDir::Cache.resolve()
}

/// The installed catalog inside `data_dir`, if the file exists.
#[must_use]
pub fn installed_catalog_in(data_dir: &Path) -> Option<PathBuf> {
	let path = data_dir.join(INSTALLED_CATALOG);
	path.is_file().then_some(path)
}

/// The catalog installed in the data directory, if any.
#[must_use]
pub fn installed_catalog() -> Option<PathBuf> {
	let dir = get_data_dir().ok()?;
	installed_catalog_in(&dir)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn override_variables_are_distinct() {
		let vars = [AppDir::Config, AppDir::Data, AppDir::Cache].map(AppDir::override_var);
		assert_eq!(
			vars,
			["ICONPICK_CONFIG_DIR", "ICONPICK_DATA_DIR", "ICONPICK_CACHE_DIR"]
		);
	}

	#[test]
	fn installed_catalog_requires_the_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		assert_eq!(installed_catalog_in(dir.path()), None);

		let path = dir.path().join(INSTALLED_CATALOG);
		fs::write(&path, "[]").expect("write catalog");
		assert_eq!(installed_catalog_in(dir.path()), Some(path));
	}
}
