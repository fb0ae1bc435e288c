use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::portfolio::ContactLink;
use crate::theme::Theme;

const KEY_HINTS: &str = "←/→ browse · 1-9 jump · ⇥ panels · ⏎ open · t theme · L logs · q quit";
const SEPARATOR: &str = " · ";

/// Contact links on the left, key hints on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, contacts: &[ContactLink], theme: &Theme) {
	if area.is_empty() {
		return;
	}
	let hints_width = u16::try_from(KEY_HINTS.width()).unwrap_or(u16::MAX);
	let [contacts_area, hints_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

	frame.render_widget(
		Paragraph::new(contact_line(contacts, theme)),
		contacts_area,
	);
	frame.render_widget(
		Paragraph::new(Span::styled(KEY_HINTS, theme.muted_style())),
		hints_area,
	);
}

fn contact_line<'a>(contacts: &'a [ContactLink], theme: &Theme) -> Line<'a> {
	let mut spans = Vec::with_capacity(contacts.len() * 4);
	for (i, contact) in contacts.iter().enumerate() {
		if i > 0 {
			spans.push(Span::styled(SEPARATOR, theme.muted_style()));
		}
		spans.push(Span::styled(contact.label.as_str(), theme.title_style()));
		spans.push(Span::raw(" "));
		spans.push(Span::styled(contact.display_target(), theme.link_style()));
	}
	Line::from(spans)
}
