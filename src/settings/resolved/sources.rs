use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Records which layer supplied each tracked key.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	entries: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, source: SettingSource) {
		self.entries.retain(|(existing, _)| *existing != key);
		self.entries.push((key, source));
	}

	/// Origin of `key`, assuming a config file when nothing was recorded.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.entries
			.iter()
			.find(|(existing, _)| *existing == key)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unrecorded_keys_fall_back_to_the_config_key() {
		let sources = ConfigSources::default();
		assert_eq!(
			sources.source_for("carousel.gap"),
			SettingSource::ConfigKey("carousel.gap")
		);
	}

	#[test]
	fn later_records_replace_earlier_ones() {
		let mut sources = ConfigSources::default();
		sources.record("ui.theme", SettingSource::ConfigKey("ui.theme"));
		sources.record("ui.theme", SettingSource::CliFlag("--theme"));
		assert_eq!(sources.source_for("ui.theme"), SettingSource::CliFlag("--theme"));
	}
}
