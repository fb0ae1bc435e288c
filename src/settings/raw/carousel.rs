use folio::{BreakpointRule, CarouselConfig};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, validation};
use crate::cli::CliArgs;

/// Carousel sizing values prior to validation. Lengths are pixels and the
/// transition is in seconds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CarouselSection {
	pub(super) gap: Option<u16>,
	pub(super) height: Option<u16>,
	pub(super) transition_duration: Option<f64>,
	pub(super) breakpoints: Option<Vec<BreakpointRule>>,
}

impl CarouselSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(gap) = cli.gap {
			self.gap = Some(gap);
		}
		if let Some(height) = cli.height {
			self.height = Some(height);
		}
		if let Some(seconds) = cli.transition_duration {
			self.transition_duration = Some(seconds);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<CarouselConfig, ConfigError> {
		let mut config = CarouselConfig::default();

		if let Some(gap) = self.gap {
			config = config.with_gap(gap);
		}
		if let Some(height) = self.height {
			config = config.with_height(validation::row_height(
				height,
				sources.source_for("carousel.height"),
			)?);
		}
		if let Some(seconds) = self.transition_duration {
			config = config.with_transition_duration(validation::transition_duration(
				seconds,
				sources.source_for("carousel.transition_duration"),
			)?);
		}
		if let Some(rules) = self.breakpoints {
			config = config.with_breakpoints(validation::breakpoints(
				rules,
				sources.source_for("carousel.breakpoints"),
			)?);
		}

		Ok(config)
	}
}
