//! Portfolio content: profile, projects, about text, skills and contact
//! links.
//!
//! Content lives in a TOML file separate from the application settings. A
//! sample portfolio is bundled so the viewer can run without one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use folio_carousel::Card;

use crate::typewriter::TypingSpeed;

const DEMO_PORTFOLIO: &str = include_str!("demo.toml");
const DEMO_ORIGIN: &str = "<bundled demo>";

#[derive(Debug, Error)]
pub enum PortfolioError {
	#[error("failed to read portfolio {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse portfolio {origin}")]
	Parse {
		origin: String,
		#[source]
		source: toml::de::Error,
	},
}

/// Everything displayed by the viewer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Portfolio {
	pub profile: Profile,
	pub projects: Vec<Card>,
	pub about: About,
	pub skills: Vec<SkillCategory>,
	pub contacts: Vec<ContactLink>,
}

/// Header content and typewriter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	pub headline: String,
	/// Phrases cycled by the typewriter.
	pub roles: Vec<String>,
	pub typing_speed: TypingSpeed,
	pub deleting_speed: TypingSpeed,
	pub pause_ms: u64,
	/// Colour token at the start of the role gradient.
	pub gradient_from: String,
	/// Colour token at the end of the role gradient and for the cursor.
	pub gradient_to: String,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: String::new(),
			headline: String::new(),
			roles: Vec::new(),
			typing_speed: TypingSpeed::Medium,
			deleting_speed: TypingSpeed::Medium,
			pause_ms: 1500,
			gradient_from: "primary-300".to_string(),
			gradient_to: "accent-400".to_string(),
		}
	}
}

/// Free-form introduction shown on the About panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct About {
	pub title: String,
	pub paragraphs: Vec<String>,
	pub highlights: Vec<Highlight>,
}

impl About {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.title.is_empty() && self.paragraphs.is_empty() && self.highlights.is_empty()
	}
}

/// A short boxed fact such as what is currently being built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Highlight {
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub link: Option<String>,
	/// Colour token for the box border and title.
	#[serde(default = "default_accent")]
	pub accent: String,
}

fn default_accent() -> String {
	"primary-400".to_string()
}

/// A titled group of skills on the Skills panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
	pub title: String,
	#[serde(default)]
	pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Proficiency in percent; values above 100 are capped.
	#[serde(default)]
	pub level: Option<u8>,
}

impl Skill {
	/// Proficiency as a fraction in `0.0..=1.0`.
	#[must_use]
	pub fn ratio(&self) -> Option<f64> {
		self.level.map(|level| f64::from(level.min(100)) / 100.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
}

impl ContactLink {
	/// Address shown to the user, without a `mailto:` prefix.
	#[must_use]
	pub fn display_target(&self) -> &str {
		self.href.strip_prefix("mailto:").unwrap_or(&self.href)
	}
}

impl Portfolio {
	/// The bundled sample portfolio.
	pub fn demo() -> Result<Self, PortfolioError> {
		Self::from_toml_str(DEMO_PORTFOLIO, DEMO_ORIGIN)
	}

	/// Load a portfolio from a TOML file.
	pub fn load(path: &Path) -> Result<Self, PortfolioError> {
		let text = fs::read_to_string(path).map_err(|source| PortfolioError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text, &path.display().to_string())
	}

	pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, PortfolioError> {
		toml::from_str(text).map_err(|source| PortfolioError::Parse {
			origin: origin.to_string(),
			source,
		})
	}

	/// Load `path` when given, otherwise fall back to the bundled demo.
	pub fn load_or_demo(path: Option<&Path>) -> Result<Self, PortfolioError> {
		match path {
			Some(path) => Self::load(path),
			None => Self::demo(),
		}
	}
}
