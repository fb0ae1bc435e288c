use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::panel::Panel;

const PADDING: &str = " ";

/// Draw the panel tabs and return where each one landed.
pub fn render_tabs(
	frame: &mut Frame,
	area: Rect,
	selected: Panel,
	theme: &Theme,
) -> Vec<(Panel, Rect)> {
	if area.is_empty() {
		return Vec::new();
	}

	let titles = Panel::ALL
		.iter()
		.map(|panel| Line::styled(panel.title(), theme.tab_style(*panel == selected)));
	let tabs = Tabs::new(titles)
		.select(selected.index())
		.divider("")
		.padding(PADDING, PADDING)
		.highlight_style(theme.tab_style(true));
	frame.render_widget(tabs, area);

	tab_regions(area)
}

/// Mirror the `Tabs` layout: left padding, title, right padding, no divider.
fn tab_regions(area: Rect) -> Vec<(Panel, Rect)> {
	let mut regions = Vec::with_capacity(Panel::ALL.len());
	let mut x = area.x;
	for panel in Panel::ALL {
		if x >= area.right() {
			break;
		}
		let full = panel.title().width() + 2 * PADDING.width();
		let width = u16::try_from(full)
			.unwrap_or(u16::MAX)
			.min(area.right() - x);
		regions.push((
			panel,
			Rect {
				x,
				y: area.y,
				width,
				height: 1,
			},
		));
		x = x.saturating_add(width);
	}
	regions
}
