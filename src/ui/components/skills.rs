use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, LineGauge, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::portfolio::{Skill, SkillCategory};
use crate::theme::Theme;

/// Narrowest column a category box is given before the grid drops a column.
const MIN_COLUMN_WIDTH: u16 = 28;
const MAX_COLUMNS: usize = 4;

/// Skill categories laid out in a responsive grid of boxes with level bars.
pub fn render_skills(frame: &mut Frame, area: Rect, categories: &[SkillCategory], theme: &Theme) {
	if area.is_empty() {
		return;
	}
	if categories.is_empty() {
		let empty = Paragraph::new("No skills listed")
			.alignment(Alignment::Center)
			.style(theme.muted_style());
		frame.render_widget(empty, area);
		return;
	}

	let columns = grid_columns(area.width, categories.len());
	let rows = categories.len().div_ceil(columns);
	let row_constraint = Constraint::Ratio(1, u32::try_from(rows).unwrap_or(u32::MAX));
	let column_constraint = Constraint::Ratio(1, u32::try_from(columns).unwrap_or(u32::MAX));
	let row_areas = Layout::vertical(vec![row_constraint; rows]).split(area);

	for (chunk, row_area) in categories.chunks(columns).zip(row_areas.iter()) {
		let cells = Layout::horizontal(vec![column_constraint; columns])
			.spacing(1)
			.split(*row_area);
		for (category, cell) in chunk.iter().zip(cells.iter()) {
			render_category(frame, *cell, category, theme);
		}
	}
}

/// One, two or four columns depending on the room available, never more
/// than there are categories.
fn grid_columns(width: u16, categories: usize) -> usize {
	let fit = [MAX_COLUMNS, 2, 1]
		.into_iter()
		.find(|&columns| usize::from(width) >= columns * usize::from(MIN_COLUMN_WIDTH))
		.unwrap_or(1);
	fit.min(categories).max(1)
}

fn render_category(frame: &mut Frame, area: Rect, category: &SkillCategory, theme: &Theme) {
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style())
		.title(Span::styled(
			format!(" {} ", category.title),
			theme.title_style(),
		))
		.style(theme.card_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.is_empty() {
		return;
	}

	let name_width = category
		.skills
		.iter()
		.map(|skill| skill.name.width())
		.max()
		.map_or(0, |width| u16::try_from(width + 1).unwrap_or(u16::MAX))
		.min(inner.width / 2);

	for (skill, row) in category.skills.iter().zip(inner.rows()) {
		let [name_area, bar_area] =
			Layout::horizontal([Constraint::Length(name_width), Constraint::Min(0)]).areas(row);
		frame.render_widget(
			Paragraph::new(skill.name.as_str()).style(Style::new().fg(theme.text)),
			name_area,
		);
		if let Some(gauge) = level_gauge(skill, theme) {
			frame.render_widget(gauge, bar_area);
		}
	}
}

fn level_gauge<'a>(skill: &Skill, theme: &Theme) -> Option<LineGauge<'a>> {
	let ratio = skill.ratio()?;
	let percent = skill.level.map_or(0, |level| level.min(100));
	Some(
		LineGauge::default()
			.ratio(ratio)
			.label(Span::styled(format!("{percent:>3}%"), theme.muted_style()))
			.line_set(symbols::line::THICK)
			.filled_style(Style::new().fg(theme.primary_400))
			.unfilled_style(Style::new().fg(theme.border)),
	)
}
