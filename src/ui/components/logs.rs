use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::theme::Theme;

/// Scrolling view of the captured log records.
pub fn render_logs(frame: &mut Frame, area: Rect, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.is_empty() {
		return;
	}

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style())
		.title(" Log ");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.style(theme.base_style())
		.style_error(Style::new().fg(Color::Red))
		.style_warn(Style::new().fg(Color::Yellow))
		.style_info(Style::new().fg(theme.text))
		.style_debug(theme.muted_style())
		.style_trace(theme.muted_style());
	frame.render_widget(widget, area);
}
