use std::time::Instant;

use anyhow::{Context, Result};
use ratatui::crossterm::terminal;

use folio_carousel::CarouselConfig;

use super::{App, CellMetrics};
use crate::outcome::ViewerOutcome;
use crate::portfolio::Portfolio;
use crate::theme::{ThemeContext, ThemeMode};

/// A small builder for configuring the viewer before it takes over the
/// terminal.
pub struct FolioUi {
	portfolio: Portfolio,
	config: CarouselConfig,
	metrics: CellMetrics,
	theme: Option<ThemeContext>,
}

impl FolioUi {
	pub fn new(portfolio: Portfolio) -> Self {
		Self {
			portfolio,
			config: CarouselConfig::default(),
			metrics: CellMetrics::default(),
			theme: None,
		}
	}

	pub fn with_carousel_config(mut self, config: CarouselConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_cell_metrics(mut self, metrics: CellMetrics) -> Self {
		self.metrics = metrics;
		self
	}

	pub fn with_theme_context(mut self, theme: ThemeContext) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Create the [`App`] for a terminal `columns` wide.
	pub fn build(self, columns: u16, now: Instant) -> App {
		let theme = self
			.theme
			.unwrap_or_else(|| ThemeContext::ephemeral(ThemeMode::default()));
		App::new(
			self.portfolio,
			self.config,
			theme,
			self.metrics,
			columns,
			now,
		)
	}

	/// Run the viewer with the configured options. The carousel mounts at
	/// the current terminal width.
	pub fn run(self) -> Result<ViewerOutcome> {
		let (columns, _) = terminal::size().context("failed to read terminal size")?;
		let mut app = self.build(columns, Instant::now());
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use folio_carousel::{BreakpointRule, Breakpoints};

	use super::*;
	use crate::ui::app::tests::portfolio;

	fn tablet_config() -> CarouselConfig {
		CarouselConfig::default()
			.with_breakpoints(Breakpoints::new(vec![BreakpointRule::new(640, 5.0, 1.0, 18, 12)]))
	}

	#[test]
	fn builder_applies_theme_and_config() {
		let config = CarouselConfig::default().with_gap(32);
		let app = FolioUi::new(portfolio(&["A", "B"]))
			.with_carousel_config(config)
			.with_theme_context(ThemeContext::ephemeral(ThemeMode::Light))
			.build(100, Instant::now());
		assert_eq!(app.theme_mode(), ThemeMode::Light);
		assert_eq!(app.carousel().config().gap, 32);
		assert_eq!(app.carousel().len(), 2);
	}

	#[test]
	fn theme_defaults_to_dark() {
		let app = FolioUi::new(portfolio(&["A"])).build(100, Instant::now());
		assert_eq!(app.theme_mode(), ThemeMode::Dark);
	}

	#[test]
	fn mount_resolves_the_rule_for_the_terminal_width() {
		let now = Instant::now();
		let wide = FolioUi::new(portfolio(&["A", "B", "C"]))
			.with_carousel_config(tablet_config())
			.build(200, now);
		assert_eq!(wide.carousel().resolved_breakpoint(), &BreakpointRule::DEFAULT);

		let narrow = FolioUi::new(portfolio(&["A", "B", "C"]))
			.with_carousel_config(tablet_config())
			.build(60, now);
		assert_eq!(narrow.carousel().resolved_breakpoint().max_width, 640);
	}

	#[test]
	fn resizing_to_the_mount_width_does_not_animate() {
		let now = Instant::now();
		let mut app = FolioUi::new(portfolio(&["A", "B", "C"]))
			.with_carousel_config(tablet_config())
			.build(200, now);
		app.resize(200, now);

		let later = now + app.carousel().config().transition_duration / 4;
		assert!(!app.tween.is_running(later));
		assert_eq!(app.tween.sample(later), vec![400.0, 100.0, 100.0]);
	}
}
