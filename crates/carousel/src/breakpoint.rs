//! Responsive sizing profiles keyed by viewport width.
//!
//! A [`BreakpointRule`] applies to every viewport at most `max_width` pixels
//! wide. Rules are matched in ascending `max_width` order and the first one
//! that fits wins; when none fits, [`BreakpointRule::DEFAULT`] applies.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Title font size in pixels.
///
/// Deserializes from either a bare number (`18`) or a CSS-like string
/// (`"18px"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "FontSizeRepr", into = "String")]
pub struct FontSize(pub u16);

impl FontSize {
	#[must_use]
	pub const fn px(value: u16) -> Self {
		Self(value)
	}

	#[must_use]
	pub const fn pixels(self) -> u16 {
		self.0
	}
}

impl fmt::Display for FontSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}px", self.0)
	}
}

impl FromStr for FontSize {
	type Err = ParseIntError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
		digits.parse().map(Self)
	}
}

impl From<FontSize> for String {
	fn from(size: FontSize) -> Self {
		size.to_string()
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontSizeRepr {
	Pixels(u16),
	Text(String),
}

impl TryFrom<FontSizeRepr> for FontSize {
	type Error = String;

	fn try_from(repr: FontSizeRepr) -> Result<Self, Self::Error> {
		match repr {
			FontSizeRepr::Pixels(value) => Ok(Self(value)),
			FontSizeRepr::Text(text) => text
				.parse()
				.map_err(|err| format!("invalid font size '{text}': {err}")),
		}
	}
}

/// Sizing profile applied while the viewport is at most `max_width` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointRule {
	/// Inclusive upper bound of the viewport width in pixels.
	#[serde(default = "unbounded")]
	pub max_width: u32,
	/// Relative flex weight of the active card.
	pub active_width: f32,
	/// Relative flex weight of every inactive card.
	pub inactive_width: f32,
	pub title_active: FontSize,
	pub title_inactive: FontSize,
}

fn unbounded() -> u32 {
	u32::MAX
}

impl BreakpointRule {
	/// Profile used when no configured rule matches the viewport.
	pub const DEFAULT: Self = Self {
		max_width: u32::MAX,
		active_width: 400.0,
		inactive_width: 100.0,
		title_active: FontSize(28),
		title_inactive: FontSize(18),
	};

	#[must_use]
	pub const fn new(
		max_width: u32,
		active_width: f32,
		inactive_width: f32,
		title_active: u16,
		title_inactive: u16,
	) -> Self {
		Self {
			max_width,
			active_width,
			inactive_width,
			title_active: FontSize(title_active),
			title_inactive: FontSize(title_inactive),
		}
	}

	/// Whether this rule covers a viewport of the given width.
	#[must_use]
	pub fn covers(&self, width: u32) -> bool {
		self.max_width >= width
	}

	#[must_use]
	pub fn is_unbounded(&self) -> bool {
		self.max_width == u32::MAX
	}
}

impl Default for BreakpointRule {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// A set of rules kept sorted ascending by `max_width`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakpoints {
	rules: Vec<BreakpointRule>,
}

impl Breakpoints {
	#[must_use]
	pub fn new(mut rules: Vec<BreakpointRule>) -> Self {
		rules.sort_by_key(|rule| rule.max_width);
		Self { rules }
	}

	#[must_use]
	pub fn rules(&self) -> &[BreakpointRule] {
		&self.rules
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Select the first rule covering `width`, or the built-in default.
	#[must_use]
	pub fn resolve(&self, width: u32) -> BreakpointRule {
		self.rules
			.iter()
			.find(|rule| rule.covers(width))
			.copied()
			.unwrap_or(BreakpointRule::DEFAULT)
	}
}

impl From<Vec<BreakpointRule>> for Breakpoints {
	fn from(rules: Vec<BreakpointRule>) -> Self {
		Self::new(rules)
	}
}

impl FromIterator<BreakpointRule> for Breakpoints {
	fn from_iter<I: IntoIterator<Item = BreakpointRule>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

/// Resolve a rule from an unordered slice without building a [`Breakpoints`].
#[must_use]
pub fn resolve_breakpoint(rules: &[BreakpointRule], width: u32) -> BreakpointRule {
	Breakpoints::new(rules.to_vec()).resolve(width)
}
