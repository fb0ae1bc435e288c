//! Configuration loading and resolution.
//!
//! Values are layered from config files, `FOLIO__*` environment variables and
//! command line flags, then validated. [`load`] is the entry point and
//! returns the [`ResolvedConfig`] the viewer runs with.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
