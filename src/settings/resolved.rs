use std::path::PathBuf;
use std::time::Duration;

use iconpick::{PageLayout, SessionOptions};

use crate::cli::{HeadlessPlan, OutputFormat};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub layout: PageLayout,
	pub quiet_window: Duration,
	/// JSON catalog file; `None` selects the built-in icons.
	pub catalog: Option<PathBuf>,
	pub output: OutputFormat,
	pub headless: Option<HeadlessPlan>,
}

impl ResolvedConfig {
	pub fn session_options(&self) -> SessionOptions {
		SessionOptions {
			layout: self.layout,
			quiet_window: self.quiet_window,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!(
			"  Grid: {} rows x {} cols ({} icons per page)",
			self.layout.rows(),
			self.layout.cols(),
			self.layout.page_size()
		);
		match &self.catalog {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (built-in icons)"),
		}
		println!("  Search quiet window: {} ms", self.quiet_window.as_millis());
		println!("  Output: {}", self.output.as_str());
		match &self.headless {
			Some(plan) => {
				println!("  Mode: headless");
				if !plan.search.is_empty() {
					println!("  Search: {}", plan.search);
				}
				if let Some(category) = &plan.category {
					println!("  Category: {category}");
				}
				if let Some(page) = plan.page {
					println!("  Page: {page}");
				}
				if let Some(key) = &plan.pick {
					println!("  Pick: {key}");
				}
			}
			None => println!("  Mode: interactive"),
		}
	}
}
