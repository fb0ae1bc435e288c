use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use super::App;
use crate::outcome::ViewerOutcome;

const INPUT_POLL: Duration = Duration::from_millis(50);

impl App {
	/// Take over the terminal and process events until the user exits.
	pub fn run(&mut self) -> Result<ViewerOutcome> {
		let mut terminal = ratatui::init();
		let result = execute!(io::stdout(), EnableMouseCapture)
			.context("failed to enable mouse capture")
			.and_then(|()| {
				terminal.clear()?;
				let size = terminal.size()?;
				self.resize(size.width, Instant::now());
				self.event_loop(&mut terminal)
			});

		if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
			log::warn!("failed to release mouse capture: {err}");
		}
		ratatui::restore();
		self.unmount();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<ViewerOutcome> {
		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<ViewerOutcome> = loop {
			let now = Instant::now();
			self.tick(now);
			if let Err(err) = terminal.draw(|frame| self.draw(frame, now)) {
				break Err(err.into());
			}

			let mut batch = Vec::new();
			match event_rx.recv_timeout(self.idle_timeout(now)) {
				Ok(event) => batch.push(event),
				Err(mpsc::RecvTimeoutError::Timeout) => continue,
				Err(mpsc::RecvTimeoutError::Disconnected) => {
					break Err(anyhow!("input event channel disconnected"));
				}
			}
			batch.extend(event_rx.try_iter());

			if let Some(outcome) = self.handle_events(batch, Instant::now()) {
				break Ok(outcome);
			}
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
