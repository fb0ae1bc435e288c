use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::Block;

use super::App;
use super::actions::HitRegions;
use super::components::{
	CarouselContext, HeaderContext, render_about, render_carousel, render_footer, render_header,
	render_indicators, render_logs, render_skills, render_tabs,
};
use super::panel::Panel;

const HEADER_HEIGHT: u16 = 3;
const MIN_LOG_HEIGHT: u16 = 5;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame, now: Instant) {
		let theme = self.theme.theme();
		let area = frame.area();
		frame.render_widget(Block::new().style(theme.base_style()), area);

		let log_height = if self.show_logs {
			(area.height / 3).max(MIN_LOG_HEIGHT).min(area.height)
		} else {
			0
		};
		let [header, tabs, body, dots, footer, logs] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(log_height),
		])
		.areas(area.inner(Margin::new(1, 0)));

		render_header(
			frame,
			header,
			HeaderContext {
				profile: &self.profile,
				typed: self.typewriter.text(),
				cursor_visible: self.typewriter.cursor_visible(now),
				mode: self.theme.mode(),
				theme: &theme,
			},
		);

		let tabs = render_tabs(frame, tabs, self.panel, &theme);
		let mut regions = match self.panel {
			Panel::Projects => self.draw_projects(frame, body, dots, now),
			Panel::About => {
				render_about(frame, body, &self.about, &theme);
				HitRegions::default()
			}
			Panel::Skills => {
				render_skills(frame, body, &self.skills, &theme);
				HitRegions::default()
			}
		};
		regions.tabs = tabs;
		self.regions = regions;

		render_footer(frame, footer, &self.contacts, &theme);
		if self.show_logs {
			render_logs(frame, logs, &theme);
		}
	}

	fn draw_projects(&self, frame: &mut Frame, body: Rect, dots: Rect, now: Instant) -> HitRegions {
		let theme = self.theme.theme();
		let weights = self.tween.sample(now);
		let plan = self.carousel.plan();
		let config = self.carousel.config();
		let row = render_carousel(
			frame,
			body,
			CarouselContext {
				plan: &plan,
				weights: &weights,
				gap_px: config.gap,
				height_px: config.height,
				metrics: self.metrics,
				theme: &theme,
			},
		);
		let indicators = render_indicators(frame, dots, &plan.indicators, self.metrics, &theme);

		HitRegions {
			tabs: Vec::new(),
			cards: row.cards,
			indicators,
			previous: row.previous,
			next: row.next,
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::ui::actions::CarouselAction;
	use crate::ui::app::tests::app;

	fn screen(terminal: &Terminal<TestBackend>) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.height)
			.map(|y| {
				(0..buffer.area.width)
					.map(|x| buffer[(x, y)].symbol().to_string())
					.collect::<String>()
			})
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn frame_records_regions_for_every_card_and_indicator() {
		let now = Instant::now();
		let mut app = app(&["A", "B", "C"], 100, now);
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame, now)).unwrap();

		assert_eq!(app.regions.cards.len(), 3);
		assert_eq!(app.regions.indicators.len(), 3);
		assert!(app.regions.previous.is_some());

		let text = screen(&terminal);
		assert!(text.contains("Test"));
		assert!(text.contains("About A"));
		assert!(!text.contains("About B"));
	}

	#[test]
	fn clicking_a_recorded_card_expands_it() {
		let now = Instant::now();
		let mut app = app(&["A", "B", "C"], 100, now);
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame, now)).unwrap();

		let (index, rect) = app.regions.cards[2];
		let action = app.regions.hit_test(rect.x + 1, rect.y + 1);
		assert_eq!(action, Some(CarouselAction::Activate(index)));
		app.apply(CarouselAction::Activate(index), now);

		let later = now + app.carousel().config().transition_duration;
		terminal.draw(|frame| app.draw(frame, later)).unwrap();
		assert!(screen(&terminal).contains("About C"));
	}

	#[test]
	fn log_pane_is_drawn_only_when_enabled() {
		let now = Instant::now();
		let mut app = app(&["A"], 80, now);
		let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame, now)).unwrap();
		assert!(!screen(&terminal).contains(" Log "));

		app.toggle_logs();
		terminal.draw(|frame| app.draw(frame, now)).unwrap();
		assert!(screen(&terminal).contains(" Log "));
	}

	#[test]
	fn other_panels_replace_the_carousel() {
		let now = Instant::now();
		let mut app = app(&["A", "B", "C"], 100, now);
		app.about.title = "A Bit About Me".into();
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

		app.select_panel(Panel::About);
		terminal.draw(|frame| app.draw(frame, now)).unwrap();
		let text = screen(&terminal);
		assert!(text.contains("A Bit About Me"));
		assert!(!text.contains("About A"));
		assert!(app.regions.cards.is_empty());
		assert!(app.regions.indicators.is_empty());
		assert_eq!(app.regions.tabs.len(), 3);

		app.select_panel(Panel::Skills);
		terminal.draw(|frame| app.draw(frame, now)).unwrap();
		assert!(screen(&terminal).contains("No skills listed"));
	}

	#[test]
	fn tab_row_is_recorded_for_clicks() {
		let now = Instant::now();
		let mut app = app(&["A"], 100, now);
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame, now)).unwrap();

		let (panel, rect) = app.regions.tabs[2];
		assert_eq!(panel, Panel::Skills);
		assert_eq!(app.regions.panel_at(rect.x, rect.y), Some(Panel::Skills));
		assert!(screen(&terminal).contains(" Projects "));
	}
}
