//! Light/dark preference owned by the UI and persisted between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use super::{Theme, ThemeMode, builtins};
use crate::app_dirs;

const PREFERENCE_FILE: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
	#[error("failed to access theme preference {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("theme preference {path} contains '{value}', expected 'light' or 'dark'")]
	Invalid { path: PathBuf, value: String },
}

/// File holding the last chosen mode.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Store under the application's data directory.
	pub fn in_data_dir() -> Result<Self> {
		Ok(Self::new(app_dirs::get_data_dir()?.join(PREFERENCE_FILE)))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// The saved mode, or `None` when nothing has been saved yet.
	pub fn load(&self) -> Result<Option<ThemeMode>, PreferenceError> {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(source) => {
				return Err(PreferenceError::Io {
					path: self.path.clone(),
					source,
				});
			}
		};
		text.parse::<ThemeMode>()
			.map(Some)
			.map_err(|_| PreferenceError::Invalid {
				path: self.path.clone(),
				value: text.trim().to_string(),
			})
	}

	pub fn save(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
		let io_error = |source| PreferenceError::Io {
			path: self.path.clone(),
			source,
		};
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(io_error)?;
		}
		fs::write(&self.path, format!("{mode}\n")).map_err(io_error)
	}
}

/// Current theme mode plus where to persist changes.
///
/// Precedence on startup: an explicitly configured theme, then the saved
/// preference, then dark.
#[derive(Debug, Clone)]
pub struct ThemeContext {
	mode: ThemeMode,
	store: Option<PreferenceStore>,
}

impl ThemeContext {
	pub fn resolve(explicit: Option<ThemeMode>, store: Option<PreferenceStore>) -> Self {
		let saved = store.as_ref().and_then(|store| match store.load() {
			Ok(mode) => mode,
			Err(error) => {
				log::warn!("ignoring theme preference: {error}");
				None
			}
		});
		let mode = explicit.or(saved).unwrap_or_default();
		log::debug!("theme mode {mode} (explicit: {explicit:?}, saved: {saved:?})");
		Self { mode, store }
	}

	/// A context that never touches the filesystem.
	#[must_use]
	pub fn ephemeral(mode: ThemeMode) -> Self {
		Self { mode, store: None }
	}

	#[must_use]
	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		builtins::for_mode(self.mode)
	}

	/// Switch to `mode` and persist it. Persistence failures are logged only.
	pub fn set(&mut self, mode: ThemeMode) {
		self.mode = mode;
		if let Some(store) = &self.store
			&& let Err(error) = store.save(mode)
		{
			log::warn!("failed to save theme preference: {error}");
		}
	}

	pub fn toggle(&mut self) -> ThemeMode {
		self.set(self.mode.toggled());
		self.mode
	}
}
