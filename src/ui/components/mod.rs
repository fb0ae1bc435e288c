//! Widgets composing the viewer screen.

/// Introduction text and highlight boxes.
pub mod about;
/// Card row with chevrons.
pub mod carousel;
pub mod footer;
/// Profile name, headline and typewriter role.
pub mod header;
/// Navigation dots below the row.
pub mod indicators;
pub mod logs;
pub mod skills;
/// Panel selector row.
pub mod tabs;

pub use about::render_about;
pub use carousel::{CarouselContext, CarouselRegions, render_carousel};
pub use footer::render_footer;
pub use header::{HeaderContext, render_header};
pub use indicators::render_indicators;
pub use logs::render_logs;
pub use skills::render_skills;
pub use tabs::render_tabs;
