//! Colour tokens as written in portfolio content.
//!
//! A token is either a literal colour (`#rrggbb`, `#rgb`, `rgb(r, g, b)`), one
//! of a handful of fixed named colours, or a reference to a palette entry of
//! the active theme. Unknown names are kept as theme references and fall back
//! to the accent colour when the theme has no such entry.

use ratatui::style::{Color, Modifier, Style};

use super::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
	Literal(Color),
	Theme(String),
}

impl ColorToken {
	/// Concrete colour under `theme`.
	#[must_use]
	pub fn color(&self, theme: &Theme) -> Color {
		match self {
			Self::Literal(color) => *color,
			Self::Theme(name) => theme.token(name).unwrap_or(theme.accent_400),
		}
	}
}

const NAMED: &[(&str, Color)] = &[
	("red-500", Color::Rgb(0xef, 0x44, 0x44)),
	("yellow-500", Color::Rgb(0xea, 0xb3, 0x08)),
	("teal-500", Color::Rgb(0x14, 0xb8, 0xa6)),
	("teal-600", Color::Rgb(0x0d, 0x94, 0x88)),
	("cyan-400", Color::Rgb(0x22, 0xd3, 0xee)),
	("purple-400", Color::Rgb(0xa7, 0x8b, 0xfa)),
	("blue-400", Color::Rgb(0x60, 0xa5, 0xfa)),
	("blue-500", Color::Rgb(0x3b, 0x82, 0xf6)),
];

/// Interpret a colour token.
#[must_use]
pub fn resolve_token(token: &str) -> ColorToken {
	let token = token.trim();
	if (token.starts_with('#') || token.starts_with("rgb"))
		&& let Some(color) = parse_literal(token)
	{
		return ColorToken::Literal(color);
	}
	if let Some((_, color)) = NAMED.iter().find(|(name, _)| *name == token) {
		return ColorToken::Literal(*color);
	}
	ColorToken::Theme(token.to_string())
}

fn parse_literal(token: &str) -> Option<Color> {
	if let Some(hex) = token.strip_prefix('#') {
		return parse_hex(hex);
	}
	let inner = token
		.strip_prefix("rgba(")
		.or_else(|| token.strip_prefix("rgb("))?
		.strip_suffix(')')?;
	let mut parts = inner.split(',').map(str::trim);
	let r = parts.next()?.parse().ok()?;
	let g = parts.next()?.parse().ok()?;
	let b = parts.next()?.parse().ok()?;
	Some(Color::Rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<Color> {
	if !hex.is_ascii() {
		return None;
	}
	let channel = |s: &str| u8::from_str_radix(s, 16).ok();
	match hex.len() {
		6 => Some(Color::Rgb(
			channel(&hex[0..2])?,
			channel(&hex[2..4])?,
			channel(&hex[4..6])?,
		)),
		3 => {
			let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
			Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
		}
		_ => None,
	}
}

/// Linear blend between two colours. Non-RGB colours snap at the midpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
	let t = t.clamp(0.0, 1.0);
	match (from, to) {
		(Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
			let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
			Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
		}
		_ if t < 0.5 => from,
		_ => to,
	}
}

/// Scale the foreground and background of `style` by `brightness`.
///
/// RGB colours are darkened directly; anything else gets the `DIM` modifier.
#[must_use]
pub fn dim(style: Style, brightness: f32) -> Style {
	if brightness >= 1.0 {
		return style;
	}
	let mut needs_modifier = false;
	let mut scale = |color: Option<Color>| match color {
		Some(Color::Rgb(r, g, b)) => {
			let f = |v: u8| (f32::from(v) * brightness.max(0.0)).round() as u8;
			Some(Color::Rgb(f(r), f(g), f(b)))
		}
		Some(other) => {
			needs_modifier = true;
			Some(other)
		}
		None => None,
	};
	let mut dimmed = style;
	dimmed.fg = scale(style.fg);
	dimmed.bg = scale(style.bg);
	if needs_modifier || style.fg.is_none() {
		dimmed = dimmed.add_modifier(Modifier::DIM);
	}
	dimmed
}
