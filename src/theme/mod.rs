//! Colour schemes for the terminal UI.
//!
//! Two palettes ship with the viewer. [`ThemeContext`] owns the active mode
//! and persists it; components only ever receive a [`Theme`] by value.

mod builtins;
mod preference;
mod registry;
mod tokens;
mod types;

pub use builtins::{DARK, LIGHT, for_mode};
pub use preference::{PreferenceError, PreferenceStore, ThemeContext};
pub use registry::{by_name, descriptors, names};
pub use tokens::{ColorToken, blend, dim, resolve_token};
pub use types::{Theme, ThemeDefinition, ThemeDescriptor, ThemeMode};

impl Default for Theme {
	fn default() -> Self {
		DARK
	}
}
