use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use folio::app_dirs;

use crate::cli::CliArgs;

/// Build a [`Config`] instance from the default locations, `--config` files
/// and the environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("folio")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".folio.toml"));
		files.push(current_dir.join("folio.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".folio.toml")));
		assert!(files.iter().any(|path| path.ends_with("folio.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("extra.toml");
		fs::write(&path, "[carousel]\ngap = 24\n").expect("write config");

		let cli = CliArgs::parse_from(["folio", "--no-config", "--config", &path.to_string_lossy()]);
		let config = build_config(&cli).expect("build");
		assert_eq!(config.get_int("carousel.gap").expect("gap"), 24);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");

		let cli = CliArgs::parse_from(["folio", "--no-config", "--config", &path.to_string_lossy()]);
		assert!(build_config(&cli).is_err());
	}
}
