//! Pure render derivation for the carousel.
//!
//! Nothing here is stored: a [`CarouselPlan`] is recomputed from the cards,
//! the active index and the resolved breakpoint every time it is needed.

use crate::breakpoint::{BreakpointRule, FontSize};
use crate::card::Card;

/// Brightness applied to every inactive card.
pub const INACTIVE_BRIGHTNESS: f32 = 0.6;

/// Secondary content, only present on the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetails<'a> {
	pub description: &'a str,
	pub tags: &'a [String],
	pub link: Option<&'a str>,
}

/// How a single card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView<'a> {
	pub index: usize,
	pub card: &'a Card,
	pub is_active: bool,
	/// Relative flex weight of this card within the row.
	pub weight: f32,
	pub title_size: FontSize,
	/// 1.0 for the active card, [`INACTIVE_BRIGHTNESS`] otherwise.
	pub brightness: f32,
	pub details: Option<CardDetails<'a>>,
}

/// One navigation dot below the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
	pub index: usize,
	pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselPlan<'a> {
	pub cards: Vec<CardView<'a>>,
	pub indicators: Vec<IndicatorView>,
}

impl<'a> CarouselPlan<'a> {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	#[must_use]
	pub fn weights(&self) -> Vec<f32> {
		self.cards.iter().map(|view| view.weight).collect()
	}

	#[must_use]
	pub fn active(&self) -> Option<&CardView<'a>> {
		self.cards.iter().find(|view| view.is_active)
	}
}

/// Build the plan for `cards` with `active_index` expanded under `rule`.
#[must_use]
pub fn plan<'a>(cards: &'a [Card], active_index: usize, rule: &BreakpointRule) -> CarouselPlan<'a> {
	let views = cards
		.iter()
		.enumerate()
		.map(|(index, card)| {
			let is_active = index == active_index;
			let details = is_active.then(|| CardDetails {
				description: card.description.as_str(),
				tags: card.tags.as_slice(),
				link: card.link.as_deref(),
			});
			CardView {
				index,
				card,
				is_active,
				weight: if is_active {
					rule.active_width
				} else {
					rule.inactive_width
				},
				title_size: if is_active {
					rule.title_active
				} else {
					rule.title_inactive
				},
				brightness: if is_active { 1.0 } else { INACTIVE_BRIGHTNESS },
				details,
			}
		})
		.collect();

	let indicators = (0..cards.len())
		.map(|index| IndicatorView {
			index,
			is_active: index == active_index,
		})
		.collect();

	CarouselPlan {
		cards: views,
		indicators,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_cards() -> Vec<Card> {
		vec![
			Card::new("BotBhai", "AI chat SaaS")
				.with_link("https://example.com/botbhai")
				.with_tags(["Next.js", "AI"]),
			Card::new("SysMonBar", "System monitor in the menu bar"),
			Card::new("Link Extractor", "Collects links from a page"),
		]
	}

	#[test]
	fn only_the_active_card_carries_details() {
		let cards = sample_cards();
		let plan = plan(&cards, 0, &BreakpointRule::DEFAULT);

		let active = plan.active().expect("one active card");
		assert_eq!(active.index, 0);
		let details = active.details.expect("details on active card");
		assert_eq!(details.tags, ["Next.js", "AI"]);
		assert_eq!(details.link, Some("https://example.com/botbhai"));
		assert!(plan.cards[1..].iter().all(|view| view.details.is_none()));
	}

	#[test]
	fn weights_and_titles_follow_the_rule() {
		let cards = sample_cards();
		let rule = BreakpointRule::new(640, 5.0, 1.0, 18, 12);
		let plan = plan(&cards, 1, &rule);

		assert_eq!(plan.weights(), vec![1.0, 5.0, 1.0]);
		assert_eq!(plan.cards[1].title_size, FontSize(18));
		assert_eq!(plan.cards[0].title_size, FontSize(12));
		assert_eq!(plan.cards[0].brightness, INACTIVE_BRIGHTNESS);
		assert_eq!(plan.cards[1].brightness, 1.0);
	}

	#[test]
	fn indicators_mirror_card_order() {
		let cards = sample_cards();
		let plan = plan(&cards, 2, &BreakpointRule::DEFAULT);
		let active: Vec<bool> = plan.indicators.iter().map(|dot| dot.is_active).collect();
		assert_eq!(active, vec![false, false, true]);
	}

	#[test]
	fn empty_input_yields_empty_plan() {
		let plan = plan(&[], 0, &BreakpointRule::DEFAULT);
		assert!(plan.is_empty());
		assert!(plan.indicators.is_empty());
		assert!(plan.active().is_none());
	}
}
