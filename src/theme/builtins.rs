use ratatui::style::Color;

use super::types::{Theme, ThemeDefinition, ThemeMode};

pub const DARK: Theme = Theme {
	mode: ThemeMode::Dark,
	background: Color::Rgb(10, 10, 15),
	surface: Color::Rgb(15, 15, 26),
	text: Color::Rgb(248, 250, 252),
	muted: Color::Rgb(148, 163, 184),
	border: Color::Rgb(51, 65, 85),
	primary_300: Color::Rgb(102, 173, 255),
	primary_400: Color::Rgb(51, 146, 255),
	primary_500: Color::Rgb(12, 123, 255),
	secondary_400: Color::Rgb(167, 139, 250),
	secondary_500: Color::Rgb(139, 92, 246),
	accent_400: Color::Rgb(34, 211, 238),
	accent_500: Color::Rgb(6, 182, 212),
};

pub const LIGHT: Theme = Theme {
	mode: ThemeMode::Light,
	background: Color::Rgb(255, 255, 255),
	surface: Color::Rgb(248, 250, 252),
	text: Color::Rgb(15, 23, 42),
	muted: Color::Rgb(71, 85, 105),
	border: Color::Rgb(203, 213, 225),
	primary_300: Color::Rgb(51, 146, 255),
	primary_400: Color::Rgb(12, 123, 255),
	primary_500: Color::Rgb(0, 102, 230),
	secondary_400: Color::Rgb(139, 92, 246),
	secondary_500: Color::Rgb(124, 58, 237),
	accent_400: Color::Rgb(6, 182, 212),
	accent_500: Color::Rgb(8, 145, 178),
};

pub const DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("dark", DARK).with_aliases(&["night"]),
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
];

#[must_use]
pub const fn for_mode(mode: ThemeMode) -> Theme {
	match mode {
		ThemeMode::Dark => DARK,
		ThemeMode::Light => LIGHT,
	}
}
