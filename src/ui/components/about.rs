use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::portfolio::{About, Highlight};
use crate::theme::{Theme, resolve_token};

/// Rows taken by the highlight boxes: borders plus three lines of text.
const HIGHLIGHT_HEIGHT: u16 = 5;

/// Introduction text centred above a row of highlight boxes.
pub fn render_about(frame: &mut Frame, area: Rect, about: &About, theme: &Theme) {
	if area.is_empty() {
		return;
	}
	if about.is_empty() {
		let empty = Paragraph::new("Nothing written here yet")
			.alignment(Alignment::Center)
			.style(theme.muted_style());
		frame.render_widget(empty, area);
		return;
	}

	let highlight_height = if about.highlights.is_empty() {
		0
	} else {
		HIGHLIGHT_HEIGHT
	};
	let [text_area, highlights_area] = Layout::vertical([
		Constraint::Min(1),
		Constraint::Length(highlight_height),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(intro_lines(about, theme))
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		text_area,
	);

	if about.highlights.is_empty() {
		return;
	}
	let count = u32::try_from(about.highlights.len()).unwrap_or(u32::MAX);
	let boxes = Layout::horizontal(vec![Constraint::Ratio(1, count); about.highlights.len()])
		.spacing(1)
		.split(highlights_area);
	for (highlight, rect) in about.highlights.iter().zip(boxes.iter()) {
		render_highlight(frame, *rect, highlight, theme);
	}
}

fn intro_lines<'a>(about: &'a About, theme: &Theme) -> Vec<Line<'a>> {
	let mut lines = Vec::with_capacity(about.paragraphs.len() * 2 + 2);
	if !about.title.is_empty() {
		lines.push(Line::styled(
			about.title.as_str(),
			theme.title_style().fg(theme.primary_400),
		));
		lines.push(Line::default());
	}
	for (i, paragraph) in about.paragraphs.iter().enumerate() {
		if i > 0 {
			lines.push(Line::default());
		}
		lines.push(Line::styled(paragraph.as_str(), Style::new().fg(theme.text)));
	}
	lines
}

fn render_highlight(frame: &mut Frame, area: Rect, highlight: &Highlight, theme: &Theme) {
	let accent = resolve_token(&highlight.accent).color(theme);
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(Style::new().fg(accent))
		.title(Span::styled(
			format!(" {} ", highlight.title),
			Style::new().fg(accent).add_modifier(Modifier::BOLD),
		))
		.style(theme.card_style());

	let mut lines = vec![Line::raw(highlight.description.as_str())];
	if let Some(link) = &highlight.link {
		lines.push(Line::from(vec![
			Span::styled("↗ ", theme.muted_style()),
			Span::styled(link.as_str(), theme.link_style()),
		]));
	}
	frame.render_widget(
		Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
		area,
	);
}
