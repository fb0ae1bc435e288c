use anyhow::{Context, Result};
use folio::theme::PreferenceStore;
use folio::{FolioUi, Portfolio, ThemeContext, ViewerOutcome, logging};

use crate::settings::ResolvedConfig;

/// Coordinates loading the portfolio and running the viewer.
pub(crate) struct ViewerWorkflow {
	ui: FolioUi,
}

impl ViewerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			portfolio,
			carousel,
			theme,
			metrics,
			log_level,
		} = config;

		logging::initialize(log_level);

		let content = Portfolio::load_or_demo(portfolio.as_deref())
			.context("failed to load portfolio content")?;
		log::info!(
			"loaded {} projects for {}",
			content.projects.len(),
			content.profile.name
		);

		let store = match PreferenceStore::in_data_dir() {
			Ok(store) => Some(store),
			Err(err) => {
				log::warn!("theme preference will not be saved: {err:#}");
				None
			}
		};

		let ui = FolioUi::new(content)
			.with_carousel_config(carousel)
			.with_cell_metrics(metrics)
			.with_theme_context(ThemeContext::resolve(theme, store));

		Ok(Self { ui })
	}

	pub(crate) fn run(self) -> Result<ViewerOutcome> {
		self.ui.run()
	}
}
