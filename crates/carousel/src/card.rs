use serde::{Deserialize, Serialize};

/// A single entry of the gallery.
///
/// Cards are supplied once by the host and never mutated by the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
	pub title: String,
	#[serde(default)]
	pub description: String,
	/// Image reference (URI or path). Kept for hosts that can display it.
	#[serde(default)]
	pub image: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}

impl Card {
	/// Create a card with only a title and description.
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			image: String::new(),
			link: None,
			tags: Vec::new(),
		}
	}

	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = image.into();
		self
	}

	pub fn with_link(mut self, link: impl Into<String>) -> Self {
		self.link = Some(link.into());
		self
	}

	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags.extend(tags.into_iter().map(Into::into));
		self
	}
}
