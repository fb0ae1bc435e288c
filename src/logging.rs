//! Log capture for the terminal UI.
//!
//! Records go through the `log` facade into `tui-logger`'s buffer so they
//! never write over the alternate screen. The logger's own mover thread feeds
//! the log pane; nothing has to be drained per frame.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger. Later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
			eprintln!("folio: failed to install logger: {err}");
		}
	});
	tui_logger::set_default_level(level);
}

/// Parse a user-supplied level name such as `debug` or `WARN`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}
