mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use iconpick::logging::{self, LogTarget};
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	logging::initialize(&LogTarget::for_run(resolved.headless.is_none())?)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(resolved)
}

/// Run the picker and print its result in the chosen format.
fn run_picker(settings: ResolvedConfig) -> Result<()> {
	let format = settings.output;
	let result = PickerWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&result),
		OutputFormat::Json => print_json(&result)?,
	}

	Ok(())
}
