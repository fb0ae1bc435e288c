//! Interactive terminal UI for `folio`.
//!
//! The [`builder`] module exposes the public-facing [`FolioUi`] builder. The
//! remaining submodules hold the screen state, input handling, the panel
//! tabs, the frame layout and the event loop, plus the widgets that draw
//! each region.

mod actions;
mod app;
mod builder;
pub mod components;
mod panel;
mod render;
mod runtime;
mod viewport;

pub use actions::{CarouselAction, HitRegions};
pub use app::App;
pub use builder::FolioUi;
pub use panel::Panel;
pub use viewport::CellMetrics;
