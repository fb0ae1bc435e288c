use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use folio_carousel::{CardDetails, CardView, CarouselPlan, FlexItem, distribute};

use crate::theme::{Theme, dim};
use crate::ui::CellMetrics;

/// Horizontal room reserved on each side of the row for the chevrons.
const CHEVRON_PADDING_PX: u32 = 40;
/// Inactive cards never shrink below this width while space allows.
const INACTIVE_MIN_PX: u32 = 60;
/// Titles at or above this size are drawn bold.
const EMPHASIS_TITLE_PX: u16 = 24;
const ELLIPSIS: char = '…';

/// Argument bundle for rendering the card row.
pub struct CarouselContext<'a> {
	pub plan: &'a CarouselPlan<'a>,
	/// Weights currently on screen. They trail the plan while a transition
	/// runs and are ignored when their length does not match.
	pub weights: &'a [f32],
	pub gap_px: u16,
	pub height_px: u16,
	pub metrics: CellMetrics,
	pub theme: &'a Theme,
}

/// Where the row's clickable elements ended up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselRegions {
	pub cards: Vec<(usize, Rect)>,
	pub previous: Option<Rect>,
	pub next: Option<Rect>,
}

pub fn render_carousel(frame: &mut Frame, area: Rect, ctx: CarouselContext<'_>) -> CarouselRegions {
	let CarouselContext {
		plan,
		weights,
		gap_px,
		height_px,
		metrics,
		theme,
	} = ctx;

	if area.is_empty() {
		return CarouselRegions::default();
	}
	if plan.is_empty() {
		let empty = Paragraph::new("No projects to show")
			.alignment(Alignment::Center)
			.style(theme.muted_style());
		frame.render_widget(empty, centered_row(area, 1));
		return CarouselRegions::default();
	}

	let rows = metrics.rows(u32::from(height_px)).max(1);
	let row = centered_row(area, rows);

	let padding = metrics.columns(CHEVRON_PADDING_PX).min(row.width / 4);
	let mut regions = CarouselRegions::default();
	if padding > 0 {
		let previous = Rect { width: padding, ..row };
		let next = Rect {
			x: row.right() - padding,
			width: padding,
			..row
		};
		render_chevron(frame, previous, "‹", theme);
		render_chevron(frame, next, "›", theme);
		regions.previous = Some(previous);
		regions.next = Some(next);
	}

	let track = Rect {
		x: row.x + padding,
		width: row.width.saturating_sub(padding * 2),
		..row
	};
	let widths = card_widths(plan, weights, track.width, gap_px, metrics);

	let mut x = track.x;
	for (view, width) in plan.cards.iter().zip(widths.cards) {
		let rect = Rect { x, width, ..track };
		render_card(frame, rect, view, theme);
		regions.cards.push((view.index, rect));
		x = x.saturating_add(width).saturating_add(widths.gap);
	}

	regions
}

struct RowWidths {
	cards: Vec<u16>,
	/// Zero when the gaps alone would fill the track.
	gap: u16,
}

fn card_widths(
	plan: &CarouselPlan<'_>,
	weights: &[f32],
	track_width: u16,
	gap_px: u16,
	metrics: CellMetrics,
) -> RowWidths {
	let count = plan.cards.len();
	let mut gap = metrics.columns(u32::from(gap_px));
	let gaps = u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX);
	if gap.saturating_mul(gaps) >= track_width {
		gap = 0;
	}
	let available = track_width - gap * gaps;

	let min = metrics.columns(INACTIVE_MIN_PX);
	let items: Vec<FlexItem> = plan
		.cards
		.iter()
		.enumerate()
		.map(|(i, view)| {
			let weight = if weights.len() == count {
				weights[i]
			} else {
				view.weight
			};
			FlexItem::new(weight, if view.is_active { 0 } else { min })
		})
		.collect();

	RowWidths {
		cards: distribute(available, &items),
		gap,
	}
}

fn centered_row(area: Rect, rows: u16) -> Rect {
	let height = rows.min(area.height);
	Rect {
		y: area.y + (area.height - height) / 2,
		height,
		..area
	}
}

fn render_chevron(frame: &mut Frame, area: Rect, glyph: &str, theme: &Theme) {
	let target = centered_row(area, 1);
	let chevron = Paragraph::new(glyph)
		.alignment(Alignment::Center)
		.style(theme.chevron_style());
	frame.render_widget(chevron, target);
}

fn render_card(frame: &mut Frame, area: Rect, view: &CardView<'_>, theme: &Theme) {
	if area.is_empty() {
		return;
	}
	let shade = |style: Style| dim(style, view.brightness);
	let border = if view.is_active {
		theme.active_border_style()
	} else {
		theme.border_style()
	};
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(shade(border))
		.style(shade(theme.card_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let title_style = shade(title_style(view, theme));
	match view.details {
		Some(details) => render_details(frame, inner, view, details, title_style, theme),
		None => render_vertical_title(frame.buffer_mut(), inner, &view.card.title, title_style),
	}
}

fn title_style(view: &CardView<'_>, theme: &Theme) -> Style {
	let style = Style::new().fg(theme.text);
	if view.title_size.pixels() >= EMPHASIS_TITLE_PX {
		style.add_modifier(Modifier::BOLD)
	} else {
		style
	}
}

fn render_details(
	frame: &mut Frame,
	area: Rect,
	view: &CardView<'_>,
	details: CardDetails<'_>,
	title_style: Style,
	theme: &Theme,
) {
	let mut lines = vec![Line::from(Span::styled(view.card.title.as_str(), title_style))];

	if !details.description.is_empty() {
		lines.push(Line::default());
		lines.push(Line::from(Span::styled(
			details.description,
			Style::new().fg(theme.text),
		)));
	}

	if !details.tags.is_empty() {
		lines.push(Line::default());
		let mut spans = Vec::with_capacity(details.tags.len() * 2);
		for (i, tag) in details.tags.iter().enumerate() {
			if i > 0 {
				spans.push(Span::raw(" "));
			}
			spans.push(Span::styled(format!("#{tag}"), theme.tag_style()));
		}
		lines.push(Line::from(spans));
	}

	if let Some(link) = details.link {
		lines.push(Line::default());
		lines.push(Line::from(vec![
			Span::styled("↗ ", theme.muted_style()),
			Span::styled(link, theme.link_style()),
		]));
	}

	if !view.card.image.is_empty() {
		lines.push(Line::from(Span::styled(
			format!("▧ {}", view.card.image),
			theme.muted_style(),
		)));
	}

	let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

/// Draw `title` one character per row in the middle column of `area`,
/// reading from the bottom up. Titles taller than the area end in an
/// ellipsis.
pub fn render_vertical_title(buf: &mut Buffer, area: Rect, title: &str, style: Style) {
	if area.is_empty() {
		return;
	}
	let capacity = usize::from(area.height);
	let mut glyphs: Vec<char> = title.chars().filter(|ch| !ch.is_control()).collect();
	if glyphs.len() > capacity {
		glyphs.truncate(capacity - 1);
		glyphs.push(ELLIPSIS);
	}

	let x = area.x + area.width / 2;
	for (offset, glyph) in (0u16..).zip(glyphs) {
		let y = area.bottom() - 1 - offset;
		if let Some(cell) = buf.cell_mut((x, y)) {
			cell.set_char(glyph).set_style(style);
		}
	}
}
