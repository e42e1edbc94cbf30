use std::path::PathBuf;
use std::time::Duration;

use iconpick::{PageLayout, SEARCH_QUIET_WINDOW, app_dirs};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides are
/// applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	layout: LayoutSection,
	catalog: CatalogSection,
	search: SearchSection,
}

/// Grid dimensions as written by the user; non-positive values fall back to
/// the defaults during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LayoutSection {
	rows: Option<i64>,
	cols: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	quiet_window_ms: Option<u64>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(rows) = cli.rows {
			self.layout.rows = Some(rows);
		}
		if let Some(cols) = cli.cols {
			self.layout.cols = Some(cols);
		}
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(ms) = cli.quiet_window_ms {
			self.search.quiet_window_ms = Some(ms);
		}
	}

	/// Fill in defaults and produce the configuration the workflow runs with.
	///
	/// Without a configured catalog, an `icons.json` installed in the data
	/// directory is used before the built-in icons.
	pub(super) fn resolve(self, cli: &CliArgs) -> ResolvedConfig {
		self.resolve_with(cli, app_dirs::installed_catalog)
	}

	fn resolve_with(
		self,
		cli: &CliArgs,
		installed_catalog: impl FnOnce() -> Option<PathBuf>,
	) -> ResolvedConfig {
		let catalog = self.catalog.path.or_else(installed_catalog);
		let quiet_window = self
			.search
			.quiet_window_ms
			.map_or(SEARCH_QUIET_WINDOW, Duration::from_millis);

		ResolvedConfig {
			layout: PageLayout::new(self.layout.rows, self.layout.cols),
			quiet_window,
			catalog,
			output: cli.output,
			headless: cli.headless_plan(),
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn empty_config_resolves_to_defaults() {
		let cli = CliArgs::parse_from(["iconpick"]);
		let resolved = RawConfig::default().resolve_with(&cli, || None);

		assert_eq!(resolved.layout, PageLayout::default());
		assert_eq!(resolved.quiet_window, SEARCH_QUIET_WINDOW);
		assert_eq!(resolved.catalog, None);
		assert!(resolved.headless.is_none());
	}

	#[test]
	fn cli_catalog_replaces_configured_path() {
		let cli = CliArgs::parse_from(["iconpick", "--catalog", "cli.json"]);
		let mut raw = RawConfig {
			catalog: CatalogSection {
				path: Some(PathBuf::from("config.json")),
			},
			..RawConfig::default()
		};
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve_with(&cli, || Some(PathBuf::from("installed.json")));
		assert_eq!(resolved.catalog, Some(PathBuf::from("cli.json")));
	}

	#[test]
	fn installed_catalog_is_used_when_none_is_configured() {
		let dir = tempfile::tempdir().expect("tempdir");
		std::fs::write(dir.path().join(app_dirs::INSTALLED_CATALOG), "[]").expect("write catalog");
		let cli = CliArgs::parse_from(["iconpick"]);

		let resolved = RawConfig::default()
			.resolve_with(&cli, || app_dirs::installed_catalog_in(dir.path()));
		assert_eq!(
			resolved.catalog,
			Some(dir.path().join(app_dirs::INSTALLED_CATALOG))
		);
	}
}
