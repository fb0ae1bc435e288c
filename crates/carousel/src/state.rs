//! Active-card state machine.
//!
//! [`ExpandingCards`] is one mounted carousel: it owns its
//! [`CarouselState`] exclusively and reads the shared card list without
//! ever mutating it. Every operation is a synchronous index assignment, so
//! rapid repeated input simply applies one complete transition after another.

use std::fmt;
use std::sync::Arc;

use crate::breakpoint::BreakpointRule;
use crate::card::Card;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::plan::{CarouselPlan, plan};

/// The mutable part of a mounted carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
	active_index: usize,
	resolved: BreakpointRule,
}

impl CarouselState {
	fn mounted(resolved: BreakpointRule) -> Self {
		Self {
			active_index: 0,
			resolved,
		}
	}

	#[must_use]
	pub fn active_index(&self) -> usize {
		self.active_index
	}

	#[must_use]
	pub fn resolved_breakpoint(&self) -> &BreakpointRule {
		&self.resolved
	}
}

/// Notification sent to the host after the active card changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
	pub previous: usize,
	pub current: usize,
}

type ChangeListener = Box<dyn FnMut(ActiveChange)>;

/// An expanding card carousel bound to a fixed card list.
pub struct ExpandingCards {
	cards: Arc<[Card]>,
	config: CarouselConfig,
	state: CarouselState,
	listener: Option<ChangeListener>,
}

impl ExpandingCards {
	/// Mount a carousel, resolving the breakpoint for the current viewport.
	pub fn mount(
		cards: impl Into<Arc<[Card]>>,
		config: CarouselConfig,
		viewport_width: u32,
	) -> Self {
		let resolved = config.breakpoints.resolve(viewport_width);
		Self {
			cards: cards.into(),
			config,
			state: CarouselState::mounted(resolved),
			listener: None,
		}
	}

	/// Register a listener invoked whenever the active index actually changes.
	pub fn on_change<F>(&mut self, listener: F)
	where
		F: FnMut(ActiveChange) + 'static,
	{
		self.listener = Some(Box::new(listener));
	}

	#[must_use]
	pub fn with_listener<F>(mut self, listener: F) -> Self
	where
		F: FnMut(ActiveChange) + 'static,
	{
		self.on_change(listener);
		self
	}

	#[must_use]
	pub fn cards(&self) -> &[Card] {
		&self.cards
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.cards.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	#[must_use]
	pub fn config(&self) -> &CarouselConfig {
		&self.config
	}

	#[must_use]
	pub fn state(&self) -> &CarouselState {
		&self.state
	}

	#[must_use]
	pub fn active_index(&self) -> usize {
		self.state.active_index
	}

	#[must_use]
	pub fn active_card(&self) -> Option<&Card> {
		self.cards.get(self.state.active_index)
	}

	#[must_use]
	pub fn resolved_breakpoint(&self) -> &BreakpointRule {
		&self.state.resolved
	}

	/// Make `index` the active card.
	///
	/// Out-of-range indices are rejected and leave the state untouched.
	pub fn activate(&mut self, index: usize) -> Result<(), CarouselError> {
		let len = self.cards.len();
		if index >= len {
			return Err(CarouselError::IndexOutOfRange { index, len });
		}
		self.set_active(index);
		Ok(())
	}

	/// Step forward, wrapping from the last card to the first.
	pub fn next(&mut self) {
		let len = self.cards.len();
		if len == 0 {
			return;
		}
		self.set_active((self.state.active_index + 1) % len);
	}

	/// Step backward, wrapping from the first card to the last.
	pub fn previous(&mut self) {
		let len = self.cards.len();
		if len == 0 {
			return;
		}
		self.set_active((self.state.active_index + len - 1) % len);
	}

	/// Re-run breakpoint resolution for a new viewport width.
	///
	/// Returns `true` when a different rule now applies. The active index is
	/// never touched.
	pub fn resize(&mut self, viewport_width: u32) -> bool {
		let resolved = self.config.breakpoints.resolve(viewport_width);
		let changed = resolved != self.state.resolved;
		self.state.resolved = resolved;
		changed
	}

	/// Derive the render plan for the current state.
	#[must_use]
	pub fn plan(&self) -> CarouselPlan<'_> {
		plan(&self.cards, self.state.active_index, &self.state.resolved)
	}

	fn set_active(&mut self, index: usize) {
		let previous = self.state.active_index;
		self.state.active_index = index;
		if previous != index
			&& let Some(listener) = self.listener.as_mut()
		{
			listener(ActiveChange {
				previous,
				current: index,
			});
		}
	}
}

impl fmt::Debug for ExpandingCards {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExpandingCards")
			.field("cards", &self.cards.len())
			.field("config", &self.config)
			.field("state", &self.state)
			.field("listener", &self.listener.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::breakpoint::{BreakpointRule, Breakpoints};

	fn cards(titles: &[&str]) -> Vec<Card> {
		titles.iter().map(|title| Card::new(*title, "")).collect()
	}

	fn mounted(titles: &[&str]) -> ExpandingCards {
		ExpandingCards::mount(cards(titles), CarouselConfig::default(), 1280)
	}

	#[test]
	fn mount_starts_at_first_card() {
		let carousel = mounted(&["A", "B", "C"]);
		assert_eq!(carousel.active_index(), 0);
		assert_eq!(carousel.active_card().map(|c| c.title.as_str()), Some("A"));
		assert_eq!(*carousel.resolved_breakpoint(), BreakpointRule::DEFAULT);
	}

	#[test]
	fn stepping_wraps_in_both_directions() {
		let mut carousel = mounted(&["A", "B", "C"]);
		carousel.next();
		assert_eq!(carousel.active_index(), 1);
		carousel.next();
		carousel.next();
		assert_eq!(carousel.active_index(), 0);
		carousel.previous();
		assert_eq!(carousel.active_index(), 2);
	}

	#[test]
	fn activate_rejects_out_of_range_indices() {
		let mut carousel = mounted(&["A", "B"]);
		carousel.activate(1).unwrap();
		let err = carousel.activate(2).unwrap_err();
		assert_eq!(err, CarouselError::IndexOutOfRange { index: 2, len: 2 });
		assert_eq!(carousel.active_index(), 1);
	}

	#[test]
	fn empty_carousel_accepts_every_operation() {
		let mut carousel = mounted(&[]);
		carousel.next();
		carousel.previous();
		assert!(carousel.activate(0).is_err());
		carousel.resize(300);
		assert_eq!(carousel.active_index(), 0);
		assert!(carousel.active_card().is_none());
	}

	#[test]
	fn listener_only_fires_on_real_changes() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut carousel =
			mounted(&["A", "B", "C"]).with_listener(move |change| sink.borrow_mut().push(change));

		carousel.activate(0).unwrap();
		carousel.next();
		carousel.activate(1).unwrap();
		carousel.previous();

		assert_eq!(
			*seen.borrow(),
			vec![
				ActiveChange {
					previous: 0,
					current: 1
				},
				ActiveChange {
					previous: 1,
					current: 0
				},
			]
		);
	}

	#[test]
	fn resize_switches_rules_without_moving_selection() {
		let config = CarouselConfig::default().with_breakpoints(Breakpoints::new(vec![
			BreakpointRule::new(640, 5.0, 1.0, 18, 12),
			BreakpointRule::new(1024, 4.0, 1.0, 24, 16),
		]));
		let mut carousel = ExpandingCards::mount(cards(&["A", "B", "C"]), config, 1200);
		carousel.activate(2).unwrap();

		assert!(carousel.resize(800));
		assert_eq!(carousel.resolved_breakpoint().max_width, 1024);
		assert!(!carousel.resize(900));
		assert!(carousel.resize(500));
		assert_eq!(carousel.resolved_breakpoint().max_width, 640);
		assert_eq!(carousel.active_index(), 2);
	}
}
