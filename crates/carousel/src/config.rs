use std::time::Duration;

use crate::breakpoint::Breakpoints;

/// Construction parameters for an [`ExpandingCards`](crate::ExpandingCards)
/// instance. Lengths are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
	/// Spacing between neighbouring cards.
	pub gap: u16,
	/// Fixed height of the card row.
	pub height: u16,
	pub breakpoints: Breakpoints,
	/// Duration of the width/brightness transition after the active card
	/// changes.
	pub transition_duration: Duration,
}

impl CarouselConfig {
	pub const DEFAULT_GAP: u16 = 16;
	pub const DEFAULT_HEIGHT: u16 = 450;
	pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(400);

	pub fn with_gap(mut self, gap: u16) -> Self {
		self.gap = gap;
		self
	}

	pub fn with_height(mut self, height: u16) -> Self {
		self.height = height;
		self
	}

	pub fn with_breakpoints(mut self, breakpoints: impl Into<Breakpoints>) -> Self {
		self.breakpoints = breakpoints.into();
		self
	}

	pub fn with_transition_duration(mut self, duration: Duration) -> Self {
		self.transition_duration = duration;
		self
	}
}

impl Default for CarouselConfig {
	fn default() -> Self {
		Self {
			gap: Self::DEFAULT_GAP,
			height: Self::DEFAULT_HEIGHT,
			breakpoints: Breakpoints::default(),
			transition_duration: Self::DEFAULT_TRANSITION,
		}
	}
}
