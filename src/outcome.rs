use serde::Serialize;

use folio_carousel::Card;

/// What the viewer returns when it exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerOutcome {
	/// `true` when the user confirmed the active card.
	pub accepted: bool,
	/// `None` when there were no cards.
	pub active_index: Option<usize>,
	/// The active card, only set when accepted.
	pub selection: Option<Card>,
}

impl ViewerOutcome {
	#[must_use]
	pub fn cancelled(active_index: Option<usize>) -> Self {
		Self {
			accepted: false,
			active_index,
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(active_index: usize, card: Card) -> Self {
		Self {
			accepted: true,
			active_index: Some(active_index),
			selection: Some(card),
		}
	}

	/// Text printed for a plain-output selection: the link if the card has
	/// one, otherwise its title.
	#[must_use]
	pub fn display_text(&self) -> Option<&str> {
		let card = self.selection.as_ref()?;
		Some(card.link.as_deref().unwrap_or(&card.title))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_text_prefers_the_link() {
		let linked = ViewerOutcome::accepted(0, Card::new("A", "").with_link("https://a.example"));
		assert_eq!(linked.display_text(), Some("https://a.example"));

		let plain = ViewerOutcome::accepted(1, Card::new("B", ""));
		assert_eq!(plain.display_text(), Some("B"));

		assert_eq!(ViewerOutcome::cancelled(Some(2)).display_text(), None);
	}

	#[test]
	fn serializes_for_json_output() {
		let outcome = ViewerOutcome::accepted(1, Card::new("B", "desc"));
		let value = serde_json::to_value(&outcome).unwrap();
		assert_eq!(value["accepted"], true);
		assert_eq!(value["active_index"], 1);
		assert_eq!(value["selection"]["title"], "B");
	}
}
