//! Checks that turn raw setting values into their typed form.

use std::time::Duration;

use folio::theme;
use folio::{BreakpointRule, Breakpoints, ThemeMode, logging};
use log::LevelFilter;

use super::{ConfigError, SettingSource};

pub(crate) fn row_height(height: u16, origin: SettingSource) -> Result<u16, ConfigError> {
	if height == 0 {
		return Err(ConfigError::invalid(
			"carousel.height",
			height.to_string(),
			origin,
			"must be greater than zero",
		));
	}
	Ok(height)
}

pub(crate) fn transition_duration(
	seconds: f64,
	origin: SettingSource,
) -> Result<Duration, ConfigError> {
	if !seconds.is_finite() || seconds < 0.0 {
		return Err(ConfigError::invalid(
			"carousel.transition_duration",
			seconds.to_string(),
			origin,
			"must be a finite number of seconds, zero or more",
		));
	}
	Duration::try_from_secs_f64(seconds).map_err(|err| {
		ConfigError::invalid(
			"carousel.transition_duration",
			seconds.to_string(),
			origin,
			err.to_string(),
		)
	})
}

pub(crate) fn breakpoints(
	rules: Vec<BreakpointRule>,
	origin: SettingSource,
) -> Result<Breakpoints, ConfigError> {
	for rule in &rules {
		for weight in [rule.active_width, rule.inactive_width] {
			if !weight.is_finite() || weight <= 0.0 {
				return Err(ConfigError::invalid(
					"carousel.breakpoints",
					weight.to_string(),
					origin,
					"card widths must be positive",
				));
			}
		}
	}
	Ok(Breakpoints::new(rules))
}

pub(crate) fn cell_dimension(
	key: &'static str,
	pixels: u16,
	origin: SettingSource,
) -> Result<u16, ConfigError> {
	if pixels == 0 {
		return Err(ConfigError::invalid(
			key,
			pixels.to_string(),
			origin,
			"must be at least 1",
		));
	}
	Ok(pixels)
}

pub(crate) fn theme_mode(name: &str, origin: SettingSource) -> Result<ThemeMode, ConfigError> {
	theme::by_name(name).map(|theme| theme.mode).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			origin,
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		)
	})
}

pub(crate) fn log_level(name: &str, origin: SettingSource) -> Result<LevelFilter, ConfigError> {
	logging::parse_level(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.log_level",
			name,
			origin,
			"expected off, error, warn, info, debug or trace",
		)
	})
}

#[cfg(test)]
mod tests {
	use folio::FontSize;

	use super::*;

	#[test]
	fn zero_height_reports_the_cli_flag() {
		let err = row_height(0, SettingSource::CliFlag("--height")).unwrap_err();
		assert_eq!(err.key, "carousel.height");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn negative_transition_is_rejected() {
		let origin = SettingSource::Environment("FOLIO__CAROUSEL__TRANSITION_DURATION");
		let err = transition_duration(-0.5, origin).unwrap_err();
		assert!(err.to_string().contains("environment variable"));
		assert!(transition_duration(f64::NAN, SettingSource::ConfigKey("x")).is_err());
	}

	#[test]
	fn transition_seconds_become_a_duration() {
		let duration = transition_duration(0.25, SettingSource::ConfigKey("x")).expect("valid");
		assert_eq!(duration, Duration::from_millis(250));
		let instant = transition_duration(0.0, SettingSource::ConfigKey("x")).expect("valid");
		assert!(instant.is_zero());
	}

	#[test]
	fn non_positive_breakpoint_weights_are_rejected() {
		let rule = BreakpointRule {
			max_width: 640,
			active_width: 4.0,
			inactive_width: 0.0,
			title_active: FontSize::px(20),
			title_inactive: FontSize::px(14),
		};
		let err = breakpoints(vec![rule], SettingSource::ConfigKey("carousel.breakpoints"))
			.unwrap_err();
		assert_eq!(err.key, "carousel.breakpoints");
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn zero_cell_width_is_rejected() {
		let err = cell_dimension("ui.cell_width", 0, SettingSource::CliFlag("--cell-width"))
			.unwrap_err();
		assert_eq!(err.key, "ui.cell_width");
	}

	#[test]
	fn theme_names_and_aliases_resolve() {
		let origin = SettingSource::ConfigKey("ui.theme");
		assert_eq!(theme_mode("Light", origin.clone()).expect("light"), ThemeMode::Light);
		assert_eq!(theme_mode("night", origin.clone()).expect("alias"), ThemeMode::Dark);
		let err = theme_mode("sepia", origin).unwrap_err();
		assert!(err.to_string().contains("dark"));
	}

	#[test]
	fn log_levels_are_parsed() {
		let origin = SettingSource::ConfigKey("ui.log_level");
		assert_eq!(log_level("debug", origin.clone()).expect("debug"), LevelFilter::Debug);
		assert!(log_level("chatty", origin).is_err());
	}
}
