use super::builtins::DEFINITIONS;
use super::types::{Theme, ThemeDescriptor};

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Find a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&normalized))
		.map(|definition| definition.theme)
}

/// Canonical names of every theme, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	DEFINITIONS.iter().map(|definition| definition.name).collect()
}

#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	DEFINITIONS.iter().map(ThemeDescriptor::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::theme::ThemeMode;

	#[test]
	fn names_and_aliases_resolve() {
		assert_eq!(by_name("dark").map(|t| t.mode), Some(ThemeMode::Dark));
		assert_eq!(by_name("  Night ").map(|t| t.mode), Some(ThemeMode::Dark));
		assert_eq!(by_name("DAY").map(|t| t.mode), Some(ThemeMode::Light));
		assert!(by_name("solarized").is_none());
	}

	#[test]
	fn names_list_canonical_entries_only() {
		assert_eq!(names(), vec!["dark", "light"]);
		let descriptors = descriptors();
		assert_eq!(descriptors[1].aliases, &["day"]);
	}
}
