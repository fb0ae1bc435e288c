mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::ViewerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for descriptor in folio::theme::descriptors() {
			if descriptor.aliases.is_empty() {
				println!("{}", descriptor.name);
			} else {
				println!("{} (aliases: {})", descriptor.name, descriptor.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_viewer(cli.output, resolved)
}

/// Run the viewer and print the outcome in the chosen format.
fn run_viewer(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = ViewerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
