use std::path::PathBuf;

use folio::ui::CellMetrics;
use folio::{CarouselConfig, ThemeMode};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Portfolio file to display; the bundled demo is used when unset.
	pub portfolio: Option<PathBuf>,
	pub carousel: CarouselConfig,
	/// Theme requested explicitly, overriding the saved preference.
	pub theme: Option<ThemeMode>,
	pub metrics: CellMetrics,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
