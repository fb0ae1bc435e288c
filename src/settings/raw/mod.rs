use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod carousel;
mod ui;

use carousel::CarouselSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	portfolio: PortfolioSection,
	carousel: CarouselSection,
	ui: UiSection,
}

/// Where the portfolio content is read from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PortfolioSection {
	path: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = &cli.portfolio {
			self.portfolio.path = Some(path.clone());
		}
		self.carousel.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.sources(cli);

		let carousel = self.carousel.resolve(&sources).map_err(Error::new)?;
		let ui = self.ui.resolve(&sources).map_err(Error::new)?;

		Ok(ResolvedConfig {
			portfolio: self.portfolio.path,
			carousel,
			theme: ui.theme,
			metrics: ui.metrics,
			log_level: ui.log_level,
		})
	}

	fn sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		let tracked = [
			(
				cli.gap.is_some(),
				self.carousel.gap.is_some(),
				"FOLIO__CAROUSEL__GAP",
				"--gap",
				"carousel.gap",
			),
			(
				cli.height.is_some(),
				self.carousel.height.is_some(),
				"FOLIO__CAROUSEL__HEIGHT",
				"--height",
				"carousel.height",
			),
			(
				cli.transition_duration.is_some(),
				self.carousel.transition_duration.is_some(),
				"FOLIO__CAROUSEL__TRANSITION_DURATION",
				"--transition-duration",
				"carousel.transition_duration",
			),
			(
				cli.cell_width.is_some(),
				self.ui.cell_width.is_some(),
				"FOLIO__UI__CELL_WIDTH",
				"--cell-width",
				"ui.cell_width",
			),
			(
				cli.cell_height.is_some(),
				self.ui.cell_height.is_some(),
				"FOLIO__UI__CELL_HEIGHT",
				"--cell-height",
				"ui.cell_height",
			),
			(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FOLIO__UI__THEME",
				"--theme",
				"ui.theme",
			),
			(
				cli.log_level.is_some(),
				self.ui.log_level.is_some(),
				"FOLIO__UI__LOG_LEVEL",
				"--log-level",
				"ui.log_level",
			),
		];

		for (cli_present, value_present, env_var, cli_flag, key) in tracked {
			if let Some(source) = detect_source(cli_present, value_present, env_var, cli_flag, key) {
				sources.record(key, source);
			}
		}

		sources
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
