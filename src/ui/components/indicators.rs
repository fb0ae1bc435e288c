use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use folio_carousel::IndicatorView;

use crate::theme::Theme;
use crate::ui::CellMetrics;

const ACTIVE_PX: u32 = 28;
const INACTIVE_PX: u32 = 10;
const SPACING_PX: u32 = 10;
const GLYPH: &str = "━";

/// Draw the navigation dots centred in `area` and return their positions.
pub fn render_indicators(
	frame: &mut Frame,
	area: Rect,
	indicators: &[IndicatorView],
	metrics: CellMetrics,
	theme: &Theme,
) -> Vec<(usize, Rect)> {
	if area.is_empty() || indicators.is_empty() {
		return Vec::new();
	}

	let regions = layout(area, indicators, metrics);
	for (&(index, rect), indicator) in regions.iter().zip(indicators) {
		debug_assert_eq!(index, indicator.index);
		let dot = Paragraph::new(GLYPH.repeat(usize::from(rect.width)))
			.style(theme.indicator_style(indicator.is_active));
		frame.render_widget(dot, rect);
	}
	regions
}

fn layout(area: Rect, indicators: &[IndicatorView], metrics: CellMetrics) -> Vec<(usize, Rect)> {
	let width_of = |indicator: &IndicatorView| {
		let px = if indicator.is_active {
			ACTIVE_PX
		} else {
			INACTIVE_PX
		};
		metrics.columns(px).max(1)
	};
	let widths: u32 = indicators
		.iter()
		.map(|indicator| u32::from(width_of(indicator)))
		.sum();
	let gaps = u32::try_from(indicators.len())
		.unwrap_or(u32::MAX)
		.saturating_sub(1);
	// Spacing goes before any indicator does.
	let mut spacing = u32::from(metrics.columns(SPACING_PX));
	if widths + spacing * gaps > u32::from(area.width) {
		spacing = 0;
	}
	let total = widths + spacing * gaps;

	let offset = u32::from(area.width).saturating_sub(total) / 2;
	let mut x = u32::from(area.x) + offset;
	let right = u32::from(area.right());

	let mut regions = Vec::with_capacity(indicators.len());
	for indicator in indicators {
		let width = u32::from(width_of(indicator));
		if x + width > right {
			break;
		}
		let rect = Rect {
			x: x as u16,
			y: area.y,
			width: width as u16,
			height: 1,
		};
		regions.push((indicator.index, rect));
		x += width + spacing;
	}
	regions
}

#[cfg(test)]
mod tests {
	use super::*;

	fn indicators(count: usize, active: usize) -> Vec<IndicatorView> {
		(0..count)
			.map(|index| IndicatorView {
				index,
				is_active: index == active,
			})
			.collect()
	}

	#[test]
	fn active_indicator_is_elongated_and_row_is_centred() {
		let regions = layout(
			Rect::new(0, 0, 20, 1),
			&indicators(3, 1),
			CellMetrics::default(),
		);
		let widths: Vec<u16> = regions.iter().map(|(_, rect)| rect.width).collect();
		assert_eq!(widths, vec![1, 4, 1]);
		// 1 + 1 + 4 + 1 + 1 = 8 columns, centred in 20.
		assert_eq!(regions[0].1.x, 6);
		assert_eq!(regions[1].1.x, 8);
		assert_eq!(regions[2].1.x, 13);
	}

	#[test]
	fn spacing_collapses_before_indicators_are_dropped() {
		let regions = layout(
			Rect::new(0, 0, 7, 1),
			&indicators(3, 1),
			CellMetrics::default(),
		);
		let xs: Vec<u16> = regions.iter().map(|(_, rect)| rect.x).collect();
		assert_eq!(regions.len(), 3);
		assert_eq!(xs, vec![0, 1, 5]);
	}

	#[test]
	fn indicators_that_still_do_not_fit_are_dropped() {
		let regions = layout(
			Rect::new(0, 0, 5, 1),
			&indicators(4, 0),
			CellMetrics::default(),
		);
		let shown: Vec<usize> = regions.iter().map(|(index, _)| *index).collect();
		assert_eq!(shown, vec![0, 1]);
	}
}
