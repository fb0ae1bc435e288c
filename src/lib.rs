//! Core crate exports for building and running the `folio` portfolio viewer.
//!
//! The carousel model lives in the `folio-carousel` workspace crate and is
//! re-exported here next to the portfolio loader, theming and the terminal UI
//! so that embedders can assemble a viewer without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod logging;
mod outcome;
pub mod portfolio;
pub mod theme;
pub mod typewriter;
pub mod ui;

pub use folio_carousel::{
	BreakpointRule, Breakpoints, Card, CarouselConfig, CarouselError, CarouselPlan, ExpandingCards,
	FontSize,
};
pub use outcome::ViewerOutcome;
pub use portfolio::{Portfolio, PortfolioError};
pub use theme::{Theme, ThemeContext, ThemeMode};
pub use ui::FolioUi;
