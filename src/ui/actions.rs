use std::time::Instant;

use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::App;
use super::panel::Panel;
use crate::outcome::ViewerOutcome;

/// A state transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
	Previous,
	Next,
	Activate(usize),
}

/// Clickable areas recorded by the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
	pub tabs: Vec<(Panel, Rect)>,
	pub cards: Vec<(usize, Rect)>,
	pub indicators: Vec<(usize, Rect)>,
	pub previous: Option<Rect>,
	pub next: Option<Rect>,
}

impl HitRegions {
	/// The panel tab under `column`, `row`, if any.
	#[must_use]
	pub fn panel_at(&self, column: u16, row: u16) -> Option<Panel> {
		let position = Position::new(column, row);
		self.tabs
			.iter()
			.find(|(_, rect)| rect.contains(position))
			.map(|&(panel, _)| panel)
	}

	/// Map a click at `column`, `row` to an action.
	#[must_use]
	pub fn hit_test(&self, column: u16, row: u16) -> Option<CarouselAction> {
		let position = Position::new(column, row);
		let inside = |rect: &Rect| rect.contains(position);

		if self.previous.as_ref().is_some_and(inside) {
			return Some(CarouselAction::Previous);
		}
		if self.next.as_ref().is_some_and(inside) {
			return Some(CarouselAction::Next);
		}
		self.indicators
			.iter()
			.chain(&self.cards)
			.find(|(_, rect)| inside(rect))
			.map(|&(index, _)| CarouselAction::Activate(index))
	}
}

impl App {
	/// Handle a batch of terminal events strictly in delivery order. Events
	/// after one that ends the session are dropped.
	pub(crate) fn handle_events(
		&mut self,
		events: impl IntoIterator<Item = Event>,
		now: Instant,
	) -> Option<ViewerOutcome> {
		for event in events {
			let outcome = match event {
				Event::Resize(columns, _) => {
					self.resize(columns, now);
					None
				}
				Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
				Event::Mouse(mouse) => {
					self.handle_mouse(mouse, now);
					None
				}
				_ => None,
			};
			if outcome.is_some() {
				return outcome;
			}
		}
		None
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<ViewerOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome(false)),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome(false));
			}
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Tab => {
				self.select_panel(self.panel.next());
				return None;
			}
			KeyCode::BackTab => {
				self.select_panel(self.panel.previous());
				return None;
			}
			KeyCode::Char('t') => {
				self.toggle_theme();
				return None;
			}
			KeyCode::Char('L') => {
				self.toggle_logs();
				return None;
			}
			_ => {}
		}

		if self.panel != Panel::Projects {
			return None;
		}
		let action = match key.code {
			KeyCode::Left | KeyCode::Char('h') => CarouselAction::Previous,
			KeyCode::Right | KeyCode::Char('l') => CarouselAction::Next,
			KeyCode::Home => CarouselAction::Activate(0),
			KeyCode::End => match self.carousel.len() {
				0 => return None,
				len => CarouselAction::Activate(len - 1),
			},
			KeyCode::Char(digit @ '1'..='9') => {
				let position = digit as usize - '1' as usize;
				CarouselAction::Activate(position)
			}
			_ => return None,
		};
		self.apply(action, now);
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
			&& let Some(panel) = self.regions.panel_at(mouse.column, mouse.row)
		{
			self.select_panel(panel);
			return;
		}
		if self.panel != Panel::Projects {
			return;
		}

		let action = match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				self.regions.hit_test(mouse.column, mouse.row)
			}
			MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(CarouselAction::Next),
			MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
				Some(CarouselAction::Previous)
			}
			_ => None,
		};
		if let Some(action) = action {
			self.apply(action, now);
		}
	}
}
