//! Expanding card carousel used by the `folio` portfolio viewer.
//!
//! The crate owns the interaction model only: the card records, the
//! responsive breakpoint rules, the active-card state machine and the pure
//! render plan derived from them. Drawing the plan is left to the host.

pub mod breakpoint;
pub mod card;
pub mod config;
pub mod error;
pub mod flex;
pub mod plan;
pub mod state;
pub mod transition;

pub use breakpoint::{BreakpointRule, Breakpoints, FontSize, resolve_breakpoint};
pub use card::Card;
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use flex::{FlexItem, distribute};
pub use plan::{CardDetails, CardView, CarouselPlan, INACTIVE_BRIGHTNESS, IndicatorView, plan};
pub use state::{ActiveChange, CarouselState, ExpandingCards};
pub use transition::WeightTween;
