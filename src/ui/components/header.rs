use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::portfolio::Profile;
use crate::theme::{Theme, ThemeMode, blend, resolve_token};

const CURSOR: &str = "▌";

/// Argument bundle for rendering the profile header.
pub struct HeaderContext<'a> {
	pub profile: &'a Profile,
	/// Current typewriter text.
	pub typed: &'a str,
	pub cursor_visible: bool,
	pub mode: ThemeMode,
	pub theme: &'a Theme,
}

pub fn render_header(frame: &mut Frame, area: Rect, ctx: HeaderContext<'_>) {
	let HeaderContext {
		profile,
		typed,
		cursor_visible,
		mode,
		theme,
	} = ctx;
	if area.is_empty() {
		return;
	}

	let toggle = theme_toggle_label(mode);
	let toggle_width = u16::try_from(toggle.width()).unwrap_or(u16::MAX);
	let [rows, toggle_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(toggle_width)]).areas(area);

	let from = resolve_token(&profile.gradient_from).color(theme);
	let to = resolve_token(&profile.gradient_to).color(theme);
	let mut role = gradient_spans(typed, from, to);
	role.push(Span::styled(
		if cursor_visible { CURSOR } else { " " },
		Style::new().fg(to),
	));

	let lines = vec![
		Line::from(Span::styled(
			profile.name.as_str(),
			Style::new()
				.fg(theme.primary_400)
				.add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(profile.headline.as_str(), theme.muted_style())),
		Line::from(role),
	];
	frame.render_widget(Paragraph::new(lines), rows);
	frame.render_widget(
		Paragraph::new(Span::styled(toggle, theme.muted_style())),
		toggle_area,
	);
}

fn theme_toggle_label(mode: ThemeMode) -> String {
	let icon = match mode {
		ThemeMode::Dark => "☾",
		ThemeMode::Light => "☀",
	};
	format!("{icon} {mode} [t]")
}

/// Colour each character of `text` along a gradient from `from` to `to`.
pub fn gradient_spans(text: &str, from: Color, to: Color) -> Vec<Span<'static>> {
	let count = text.chars().count();
	text.chars()
		.enumerate()
		.map(|(i, ch)| {
			let t = if count > 1 {
				i as f32 / (count - 1) as f32
			} else {
				0.0
			};
			Span::styled(ch.to_string(), Style::new().fg(blend(from, to, t)))
		})
		.collect()
}
