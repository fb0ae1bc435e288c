//! Conversion between configured pixel sizes and terminal cells.

/// Nominal pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
	pub width: u16,
	pub height: u16,
}

impl CellMetrics {
	pub const DEFAULT_WIDTH: u16 = 8;
	pub const DEFAULT_HEIGHT: u16 = 16;

	/// Zero sizes are bumped to one pixel.
	#[must_use]
	pub fn new(width: u16, height: u16) -> Self {
		Self {
			width: width.max(1),
			height: height.max(1),
		}
	}

	/// Viewport width in pixels for a terminal `columns` wide.
	#[must_use]
	pub fn viewport_width(&self, columns: u16) -> u32 {
		u32::from(columns) * u32::from(self.width)
	}

	/// Nearest whole number of columns for `px`.
	#[must_use]
	pub fn columns(&self, px: u32) -> u16 {
		round_div(px, u32::from(self.width))
	}

	/// Nearest whole number of rows for `px`.
	#[must_use]
	pub fn rows(&self, px: u32) -> u16 {
		round_div(px, u32::from(self.height))
	}
}

impl Default for CellMetrics {
	fn default() -> Self {
		Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
	}
}

fn round_div(value: u32, unit: u32) -> u16 {
	let cells = value.saturating_add(unit / 2) / unit;
	u16::try_from(cells).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pixel_sizes_round_to_the_nearest_cell() {
		let metrics = CellMetrics::default();
		assert_eq!(metrics.columns(16), 2);
		assert_eq!(metrics.columns(40), 5);
		assert_eq!(metrics.columns(28), 4);
		assert_eq!(metrics.columns(10), 1);
		assert_eq!(metrics.columns(3), 0);
		assert_eq!(metrics.rows(450), 28);
	}

	#[test]
	fn viewport_width_scales_columns() {
		let metrics = CellMetrics::new(10, 20);
		assert_eq!(metrics.viewport_width(80), 800);
		assert_eq!(metrics.viewport_width(0), 0);
	}

	#[test]
	fn zero_metrics_are_clamped() {
		assert_eq!(CellMetrics::new(0, 0), CellMetrics::new(1, 1));
	}
}
