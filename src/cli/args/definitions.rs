use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `folio` binary.
#[derive(Parser, Debug)]
#[command(
	name = "folio",
	version,
	long_version = long_version(),
	about = "Browse a portfolio in the terminal with an expanding card carousel",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FOLIO_CONFIG",
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
		short = 'f',
		long,
		value_name = "FILE",
		help = "Portfolio TOML file to display (default: bundled demo)"
	)]
	pub(crate) portfolio: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "THEME",
		help = "Start with a theme by name, ignoring the saved preference (default: saved or dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "PX",
		help = "Spacing between cards in pixels (default: 16)"
	)]
	pub(crate) gap: Option<u16>,
	#[arg(
		long,
		value_name = "PX",
		help = "Height of the card row in pixels (default: 450)"
	)]
	pub(crate) height: Option<u16>,
	#[arg(
		long = "transition-duration",
		value_name = "SECONDS",
		allow_negative_numbers = true,
		help = "Duration of the expand transition in seconds (default: 0.4)"
	)]
	pub(crate) transition_duration: Option<f64>,
	#[arg(
		long = "cell-width",
		value_name = "PX",
		help = "Pixel width assumed for one terminal column (default: 8)"
	)]
	pub(crate) cell_width: Option<u16>,
	#[arg(
		long = "cell-height",
		value_name = "PX",
		help = "Pixel height assumed for one terminal row (default: 16)"
	)]
	pub(crate) cell_height: Option<u16>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
