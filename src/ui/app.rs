use std::time::{Duration, Instant};

use folio_carousel::{CarouselConfig, ExpandingCards, WeightTween};

use super::CellMetrics;
use super::actions::{CarouselAction, HitRegions};
use crate::outcome::ViewerOutcome;
use super::panel::Panel;
use crate::portfolio::{About, ContactLink, Portfolio, Profile, SkillCategory};
use crate::theme::{ThemeContext, ThemeMode};
use crate::typewriter::{Timing, Typewriter};

/// Redraw interval while the width transition runs.
pub(super) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Longest wait for input between redraws; bounds cursor blink and log pane
/// latency.
const MAX_IDLE: Duration = Duration::from_millis(100);

/// Everything the viewer screen needs between frames.
pub struct App {
	pub(super) profile: Profile,
	pub(super) about: About,
	pub(super) skills: Vec<SkillCategory>,
	pub(super) contacts: Vec<ContactLink>,
	pub(super) panel: Panel,
	pub(super) carousel: ExpandingCards,
	pub(super) tween: WeightTween,
	pub(super) theme: ThemeContext,
	pub(super) typewriter: Typewriter,
	pub(super) metrics: CellMetrics,
	pub(super) show_logs: bool,
	pub(super) regions: HitRegions,
	columns: u16,
}

impl App {
	/// Build the viewer for a terminal `columns` wide and start the
	/// typewriter.
	pub fn new(
		portfolio: Portfolio,
		config: CarouselConfig,
		theme: ThemeContext,
		metrics: CellMetrics,
		columns: u16,
		now: Instant,
	) -> Self {
		let Portfolio {
			profile,
			projects,
			about,
			skills,
			contacts,
		} = portfolio;

		let carousel = ExpandingCards::mount(projects, config, metrics.viewport_width(columns))
			.with_listener(|change| {
				log::debug!("active card {} -> {}", change.previous, change.current);
			});
		let tween = WeightTween::settled(carousel.plan().weights(), now);

		let timing = Timing::new(
			profile.typing_speed,
			profile.deleting_speed,
			Duration::from_millis(profile.pause_ms),
		);
		let mut typewriter = Typewriter::new(profile.roles.clone(), timing);
		typewriter.start(now);

		log::info!(
			"mounted {} cards at {} px, rule max width {}",
			carousel.len(),
			metrics.viewport_width(columns),
			carousel.resolved_breakpoint().max_width
		);

		Self {
			profile,
			about,
			skills,
			contacts,
			panel: Panel::default(),
			carousel,
			tween,
			theme,
			typewriter,
			metrics,
			show_logs: false,
			regions: HitRegions::default(),
			columns,
		}
	}

	#[must_use]
	pub fn carousel(&self) -> &ExpandingCards {
		&self.carousel
	}

	#[must_use]
	pub fn theme_mode(&self) -> ThemeMode {
		self.theme.mode()
	}

	#[must_use]
	pub fn panel(&self) -> Panel {
		self.panel
	}

	/// Switch the visible panel. The carousel keeps its state while hidden.
	pub fn select_panel(&mut self, panel: Panel) {
		if self.panel != panel {
			log::debug!("showing {} panel", panel.title());
			self.panel = panel;
		}
	}

	#[must_use]
	pub fn show_logs(&self) -> bool {
		self.show_logs
	}

	#[must_use]
	pub fn columns(&self) -> u16 {
		self.columns
	}

	/// Apply a navigation action and start the width transition.
	pub fn apply(&mut self, action: CarouselAction, now: Instant) {
		match action {
			CarouselAction::Previous => self.carousel.previous(),
			CarouselAction::Next => self.carousel.next(),
			CarouselAction::Activate(index) => {
				if let Err(err) = self.carousel.activate(index) {
					log::debug!("ignoring activation: {err}");
					return;
				}
			}
		}
		self.retarget(now);
	}

	/// React to a terminal resize. Only the breakpoint is recomputed.
	pub fn resize(&mut self, columns: u16, now: Instant) {
		self.columns = columns;
		let width = self.metrics.viewport_width(columns);
		if self.carousel.resize(width) {
			log::debug!(
				"viewport {width} px now uses rule max width {}",
				self.carousel.resolved_breakpoint().max_width
			);
			self.retarget(now);
		}
	}

	pub fn toggle_theme(&mut self) -> ThemeMode {
		let mode = self.theme.toggle();
		log::info!("switched to {mode} theme");
		mode
	}

	pub fn toggle_logs(&mut self) {
		self.show_logs = !self.show_logs;
	}

	/// Advance time-driven state. Returns `true` when something moved.
	pub fn tick(&mut self, now: Instant) -> bool {
		let typed = self.typewriter.tick(now);
		typed || self.tween.is_running(now)
	}

	/// How long the event loop may wait for input before the next redraw.
	#[must_use]
	pub fn idle_timeout(&self, now: Instant) -> Duration {
		if self.tween.is_running(now) {
			return FRAME_INTERVAL;
		}
		self.typewriter
			.next_deadline()
			.map_or(MAX_IDLE, |deadline| deadline.saturating_duration_since(now))
			.clamp(FRAME_INTERVAL, MAX_IDLE)
	}

	/// Stop timers before the screen goes away.
	pub fn unmount(&mut self) {
		self.typewriter.stop();
	}

	#[must_use]
	pub fn outcome(&self, accepted: bool) -> ViewerOutcome {
		let index = self.carousel.active_index();
		match self.carousel.active_card() {
			Some(card) if accepted => ViewerOutcome::accepted(index, card.clone()),
			Some(_) => ViewerOutcome::cancelled(Some(index)),
			None => ViewerOutcome::cancelled(None),
		}
	}

	fn retarget(&mut self, now: Instant) {
		let targets = self.carousel.plan().weights();
		let duration = self.carousel.config().transition_duration;
		self.tween.retarget(targets, now, duration);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use folio_carousel::{BreakpointRule, Breakpoints, Card};

	use super::*;

	pub(crate) fn portfolio(titles: &[&str]) -> Portfolio {
		Portfolio {
			profile: Profile {
				name: "Test".into(),
				roles: vec!["Tester".into()],
				..Profile::default()
			},
			projects: titles
				.iter()
				.map(|title| Card::new(*title, format!("About {title}")))
				.collect(),
			..Portfolio::default()
		}
	}

	pub(crate) fn app(titles: &[&str], columns: u16, now: Instant) -> App {
		App::new(
			portfolio(titles),
			CarouselConfig::default(),
			ThemeContext::ephemeral(ThemeMode::Dark),
			CellMetrics::default(),
			columns,
			now,
		)
	}

	#[test]
	fn navigation_starts_a_transition() {
		let now = Instant::now();
		let mut app = app(&["A", "B", "C"], 120, now);
		assert!(!app.tween.is_running(now));

		app.apply(CarouselAction::Next, now);
		assert_eq!(app.carousel().active_index(), 1);
		assert!(app.tween.is_running(now + Duration::from_millis(100)));
		assert_eq!(app.tween.target(), &[100.0, 400.0, 100.0]);
	}

	#[test]
	fn idle_timeout_follows_animation_and_typing() {
		let now = Instant::now();
		let mut app = app(&["A", "B"], 120, now);
		let idle = app.idle_timeout(now);
		assert!(idle >= FRAME_INTERVAL && idle <= MAX_IDLE);

		app.apply(CarouselAction::Next, now);
		assert_eq!(app.idle_timeout(now), FRAME_INTERVAL);

		app.unmount();
		let settled = now + app.carousel().config().transition_duration;
		assert_eq!(app.idle_timeout(settled), MAX_IDLE);
	}

	#[test]
	fn out_of_range_activation_is_ignored() {
		let now = Instant::now();
		let mut app = app(&["A", "B"], 120, now);
		app.apply(CarouselAction::Activate(7), now);
		assert_eq!(app.carousel().active_index(), 0);
		assert!(!app.tween.is_running(now));
	}

	#[test]
	fn resize_switches_breakpoints_without_moving_the_index() {
		let now = Instant::now();
		let config = CarouselConfig::default().with_breakpoints(Breakpoints::new(vec![
			BreakpointRule::new(640, 5.0, 1.0, 18, 12),
		]));
		let mut app = App::new(
			portfolio(&["A", "B", "C"]),
			config,
			ThemeContext::ephemeral(ThemeMode::Dark),
			CellMetrics::default(),
			200,
			now,
		);
		app.apply(CarouselAction::Activate(2), now);
		assert_eq!(app.carousel().resolved_breakpoint(), &BreakpointRule::DEFAULT);

		app.resize(60, now);
		assert_eq!(app.columns(), 60);
		assert_eq!(app.carousel().resolved_breakpoint().max_width, 640);
		assert_eq!(app.carousel().active_index(), 2);
		assert_eq!(app.tween.target(), &[1.0, 1.0, 5.0]);
	}

	#[test]
	fn outcome_reflects_acceptance() {
		let now = Instant::now();
		let mut app = app(&["A", "B"], 120, now);
		app.apply(CarouselAction::Next, now);

		let accepted = app.outcome(true);
		assert!(accepted.accepted);
		assert_eq!(accepted.active_index, Some(1));
		assert_eq!(accepted.selection.map(|card| card.title), Some("B".into()));

		let cancelled = app.outcome(false);
		assert!(!cancelled.accepted);
		assert_eq!(cancelled.active_index, Some(1));
		assert!(cancelled.selection.is_none());

		let empty = self::app(&[], 120, now).outcome(true);
		assert_eq!(empty, ViewerOutcome::cancelled(None));
	}

	#[test]
	fn theme_toggle_flips_the_mode() {
		let now = Instant::now();
		let mut app = app(&["A"], 80, now);
		assert_eq!(app.toggle_theme(), ThemeMode::Light);
		assert_eq!(app.theme_mode(), ThemeMode::Light);
	}
}
