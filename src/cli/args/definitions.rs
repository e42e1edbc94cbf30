use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `iconpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "iconpick",
	version,
	long_version = long_version(),
	about = "Pick an icon from a categorized, searchable catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ICONPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long,
		value_name = "NUM",
		allow_negative_numbers = true,
		help = "Grid rows per page; non-positive values use the default (default: 5)"
	)]
	pub(crate) rows: Option<i64>,
	#[arg(
		short = 'C',
		long,
		value_name = "NUM",
		allow_negative_numbers = true,
		help = "Grid columns per page; non-positive values use the default (default: 10)"
	)]
	pub(crate) cols: Option<i64>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load icons from a JSON catalog file (default: built-in icons)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		long = "quiet-window",
		value_name = "MS",
		help = "Milliseconds of typing silence before a search is applied (default: 300)"
	)]
	pub(crate) quiet_window_ms: Option<u64>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		help = "Drive the picker without a terminal UI and print the resulting page or pick"
	)]
	pub(crate) headless: bool,
	#[arg(
		short = 's',
		long,
		value_name = "TEXT",
		requires = "headless",
		help = "Search term applied in headless mode (default: empty)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		requires = "headless",
		help = "Category applied in headless mode (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		requires = "headless",
		help = "Page shown in headless mode (default: 1)"
	)]
	pub(crate) page: Option<usize>,
	#[arg(
		long,
		value_name = "KEY",
		requires = "headless",
		help = "Select the visible icon with this key in headless mode"
	)]
	pub(crate) pick: Option<String>,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// Headless navigation requested on the command line.
	pub(crate) fn headless_plan(&self) -> Option<HeadlessPlan> {
		self.headless.then(|| HeadlessPlan {
			search: self.search.clone().unwrap_or_default(),
			category: self.category.clone(),
			page: self.page,
			pick: self.pick.clone(),
		})
	}
}

/// Steps a headless run applies to a freshly loaded session, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HeadlessPlan {
	pub(crate) search: String,
	pub(crate) category: Option<String>,
	pub(crate) page: Option<usize>,
	pub(crate) pick: Option<String>,
}
