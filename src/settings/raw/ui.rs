use folio::ThemeMode;
use folio::ui::CellMetrics;
use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, validation};
use crate::cli::CliArgs;

/// Presentation values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) cell_width: Option<u16>,
	pub(super) cell_height: Option<u16>,
	pub(super) log_level: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<ThemeMode>,
	pub(super) metrics: CellMetrics,
	pub(super) log_level: LevelFilter,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = &cli.theme {
			self.theme = Some(theme.clone());
		}
		if let Some(width) = cli.cell_width {
			self.cell_width = Some(width);
		}
		if let Some(height) = cli.cell_height {
			self.cell_height = Some(height);
		}
		if let Some(level) = &cli.log_level {
			self.log_level = Some(level.clone());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let theme = self
			.theme
			.as_deref()
			.map(|name| validation::theme_mode(name, sources.source_for("ui.theme")))
			.transpose()?;

		let width = validation::cell_dimension(
			"ui.cell_width",
			self.cell_width.unwrap_or(CellMetrics::DEFAULT_WIDTH),
			sources.source_for("ui.cell_width"),
		)?;
		let height = validation::cell_dimension(
			"ui.cell_height",
			self.cell_height.unwrap_or(CellMetrics::DEFAULT_HEIGHT),
			sources.source_for("ui.cell_height"),
		)?;

		let log_level = match self.log_level.as_deref() {
			Some(level) => validation::log_level(level, sources.source_for("ui.log_level"))?,
			None => LevelFilter::Info,
		};

		Ok(UiResolution {
			theme,
			metrics: CellMetrics::new(width, height),
			log_level,
		})
	}
}
