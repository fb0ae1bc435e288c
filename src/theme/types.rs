use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeMode {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			other => Err(format!("unknown theme mode '{other}'")),
		}
	}
}

/// Colour palette for one scheme.
///
/// The `primary`, `secondary` and `accent` families follow a 300/400/500
/// lightness scale; token lookups in [`Theme::token`] use the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub mode: ThemeMode,
	pub background: Color,
	pub surface: Color,
	pub text: Color,
	pub muted: Color,
	pub border: Color,
	pub primary_300: Color,
	pub primary_400: Color,
	pub primary_500: Color,
	pub secondary_400: Color,
	pub secondary_500: Color,
	pub accent_400: Color,
	pub accent_500: Color,
}

impl Theme {
	#[must_use]
	pub fn base_style(&self) -> Style {
		Style::new().fg(self.text).bg(self.background)
	}

	#[must_use]
	pub fn card_style(&self) -> Style {
		Style::new().fg(self.text).bg(self.surface)
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.border)
	}

	#[must_use]
	pub fn active_border_style(&self) -> Style {
		Style::new().fg(self.primary_400)
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		Style::new().fg(self.text).add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		Style::new().fg(self.muted)
	}

	#[must_use]
	pub fn tag_style(&self) -> Style {
		Style::new().fg(self.secondary_400)
	}

	#[must_use]
	pub fn link_style(&self) -> Style {
		Style::new()
			.fg(self.accent_400)
			.add_modifier(Modifier::UNDERLINED)
	}

	#[must_use]
	pub fn chevron_style(&self) -> Style {
		Style::new().fg(self.text).add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn indicator_style(&self, active: bool) -> Style {
		if active {
			Style::new().fg(self.primary_400)
		} else {
			Style::new().fg(self.border)
		}
	}

	#[must_use]
	pub fn tab_style(&self, selected: bool) -> Style {
		if selected {
			Style::new()
				.fg(self.background)
				.bg(self.primary_400)
				.add_modifier(Modifier::BOLD)
		} else {
			Style::new().fg(self.muted)
		}
	}

	/// Look up a palette entry by its token name, e.g. `primary-300`.
	#[must_use]
	pub fn token(&self, name: &str) -> Option<Color> {
		let color = match name {
			"primary-300" => self.primary_300,
			"primary-400" | "primary" => self.primary_400,
			"primary-500" => self.primary_500,
			"secondary-400" | "secondary" => self.secondary_400,
			"secondary-500" => self.secondary_500,
			"accent-400" | "accent" => self.accent_400,
			"accent-500" => self.accent_500,
			"text-primary" | "text" => self.text,
			"text-secondary" | "muted" => self.muted,
			"bg-primary" | "background" => self.background,
			"bg-secondary" | "surface" => self.surface,
			"border-color" | "border" => self.border,
			_ => return None,
		};
		Some(color)
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `normalized` names this theme or one of its aliases.
	pub fn matches(&self, normalized: &str) -> bool {
		self.name.eq_ignore_ascii_case(normalized)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(normalized))
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl From<&ThemeDefinition> for ThemeDescriptor {
	fn from(definition: &ThemeDefinition) -> Self {
		Self {
			name: definition.name,
			aliases: definition.aliases,
			theme: definition.theme,
		}
	}
}
