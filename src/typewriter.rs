//! Typewriter effect for the profile roles.
//!
//! [`Frames`] is the lazy sequence of display states: it types a phrase one
//! character at a time, holds it, deletes it and moves on to the next phrase,
//! forever. [`Typewriter`] plays that sequence against wall-clock instants and
//! has an explicit start/stop lifecycle tied to the UI.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;

const CURSOR_BLINK: Duration = Duration::from_millis(500);
/// Upper bound on frames consumed by one tick before resynchronising.
const MAX_CATCH_UP: usize = 1024;

/// Per-character delay presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingSpeed {
	Slow,
	#[default]
	Medium,
	Fast,
}

impl TypingSpeed {
	#[must_use]
	pub const fn interval(self) -> Duration {
		match self {
			Self::Slow => Duration::from_millis(100),
			Self::Medium => Duration::from_millis(70),
			Self::Fast => Duration::from_millis(35),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
	pub typing: Duration,
	pub deleting: Duration,
	/// Extra hold once a phrase is complete.
	pub pause: Duration,
}

impl Timing {
	#[must_use]
	pub fn new(typing: TypingSpeed, deleting: TypingSpeed, pause: Duration) -> Self {
		Self {
			typing: typing.interval(),
			deleting: deleting.interval(),
			pause,
		}
	}
}

impl Default for Timing {
	fn default() -> Self {
		Self::new(
			TypingSpeed::Medium,
			TypingSpeed::Medium,
			Duration::from_millis(1500),
		)
	}
}

/// A display state and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	pub text: String,
	pub hold: Duration,
}

/// Endless sequence of typewriter frames. Empty when there are no phrases.
#[derive(Debug, Clone)]
pub struct Frames {
	words: Arc<[String]>,
	timing: Timing,
	word: usize,
	shown: usize,
	deleting: bool,
}

impl Frames {
	pub fn new(words: Arc<[String]>, timing: Timing) -> Self {
		Self {
			words,
			timing,
			word: 0,
			shown: 0,
			deleting: false,
		}
	}
}

impl Iterator for Frames {
	type Item = Frame;

	fn next(&mut self) -> Option<Frame> {
		let word = self.words.get(self.word)?;
		let length = word.chars().count();
		let text: String = word.chars().take(self.shown).collect();

		let hold = if !self.deleting {
			if self.shown < length {
				self.shown += 1;
				self.timing.typing
			} else {
				self.deleting = true;
				self.timing.typing + self.timing.pause
			}
		} else if self.shown > 0 {
			self.shown -= 1;
			self.timing.deleting
		} else {
			self.deleting = false;
			self.word = (self.word + 1) % self.words.len();
			self.timing.deleting
		};

		Some(Frame { text, hold })
	}
}

/// Plays [`Frames`] against the clock.
#[derive(Debug, Clone)]
pub struct Typewriter {
	words: Arc<[String]>,
	timing: Timing,
	frames: Option<Frames>,
	text: String,
	deadline: Option<Instant>,
	started_at: Option<Instant>,
}

impl Typewriter {
	pub fn new(words: Vec<String>, timing: Timing) -> Self {
		Self {
			words: words.into(),
			timing,
			frames: None,
			text: String::new(),
			deadline: None,
			started_at: None,
		}
	}

	/// Begin (or restart) from the first phrase.
	pub fn start(&mut self, now: Instant) {
		let mut frames = Frames::new(Arc::clone(&self.words), self.timing);
		self.started_at = Some(now);
		match frames.next() {
			Some(frame) => {
				self.text = frame.text;
				self.deadline = Some(now + frame.hold);
				self.frames = Some(frames);
			}
			None => {
				self.text.clear();
				self.deadline = None;
				self.frames = None;
			}
		}
	}

	pub fn stop(&mut self) {
		self.frames = None;
		self.deadline = None;
		self.started_at = None;
		self.text.clear();
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.frames.is_some()
	}

	/// Advance past every frame whose hold has elapsed. Returns `true` when the
	/// displayed text changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let Some(frames) = self.frames.as_mut() else {
			return false;
		};
		let Some(mut deadline) = self.deadline else {
			return false;
		};

		let mut changed = false;
		let mut consumed = 0;
		while deadline <= now {
			let Some(frame) = frames.next() else {
				break;
			};
			changed |= frame.text != self.text;
			self.text = frame.text;
			deadline += frame.hold;
			consumed += 1;
			if consumed >= MAX_CATCH_UP {
				deadline = now + frame.hold;
				break;
			}
		}
		self.deadline = Some(deadline);
		changed
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// When the next frame is due, for sizing the event loop's poll timeout.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Blinking cursor phase.
	#[must_use]
	pub fn cursor_visible(&self, now: Instant) -> bool {
		let Some(started) = self.started_at else {
			return false;
		};
		let elapsed = now.saturating_duration_since(started).as_millis();
		(elapsed / CURSOR_BLINK.as_millis()) % 2 == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fast_timing() -> Timing {
		Timing {
			typing: Duration::from_millis(10),
			deleting: Duration::from_millis(5),
			pause: Duration::from_millis(100),
		}
	}

	fn words(list: &[&str]) -> Arc<[String]> {
		list.iter().map(|w| w.to_string()).collect::<Vec<_>>().into()
	}

	#[test]
	fn frames_type_hold_delete_and_advance() {
		let frames: Vec<Frame> = Frames::new(words(&["ab", "c"]), fast_timing())
			.take(10)
			.collect();
		let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
		assert_eq!(
			texts,
			vec!["", "a", "ab", "ab", "a", "", "", "c", "c", ""]
		);
		assert_eq!(frames[2].hold, Duration::from_millis(110));
		assert_eq!(frames[3].hold, Duration::from_millis(5));
		assert_eq!(frames[6].hold, Duration::from_millis(10));
	}

	#[test]
	fn frames_wrap_back_to_the_first_phrase() {
		let texts: Vec<String> = Frames::new(words(&["x"]), fast_timing())
			.take(9)
			.map(|f| f.text)
			.collect();
		assert_eq!(texts, vec!["", "x", "x", "", "", "x", "x", "", ""]);
	}

	#[test]
	fn no_phrases_means_no_frames() {
		assert!(Frames::new(words(&[]), fast_timing()).next().is_none());

		let mut typewriter = Typewriter::new(Vec::new(), fast_timing());
		typewriter.start(Instant::now());
		assert!(!typewriter.is_running());
		assert_eq!(typewriter.text(), "");
	}

	#[test]
	fn frames_count_characters_not_bytes() {
		let texts: Vec<String> = Frames::new(words(&["né"]), fast_timing())
			.take(3)
			.map(|f| f.text)
			.collect();
		assert_eq!(texts, vec!["", "n", "né"]);
	}

	#[test]
	fn tick_follows_the_clock() {
		let start = Instant::now();
		let mut typewriter = Typewriter::new(vec!["hey".into()], fast_timing());
		typewriter.start(start);
		assert_eq!(typewriter.text(), "");

		assert!(!typewriter.tick(start + Duration::from_millis(5)));
		assert!(typewriter.tick(start + Duration::from_millis(10)));
		assert_eq!(typewriter.text(), "h");
		typewriter.tick(start + Duration::from_millis(30));
		assert_eq!(typewriter.text(), "hey");
		typewriter.tick(start + Duration::from_millis(100));
		assert_eq!(typewriter.text(), "hey");
	}

	#[test]
	fn stop_and_restart_begin_again() {
		let start = Instant::now();
		let mut typewriter = Typewriter::new(vec!["hey".into()], fast_timing());
		typewriter.start(start);
		typewriter.tick(start + Duration::from_millis(25));
		assert_eq!(typewriter.text(), "he");

		typewriter.stop();
		assert!(!typewriter.is_running());
		assert!(!typewriter.tick(start + Duration::from_millis(50)));

		let restart = start + Duration::from_millis(60);
		typewriter.start(restart);
		assert_eq!(typewriter.text(), "");
		typewriter.tick(restart + Duration::from_millis(10));
		assert_eq!(typewriter.text(), "h");
	}

	#[test]
	fn cursor_blinks_every_half_second() {
		let start = Instant::now();
		let mut typewriter = Typewriter::new(vec!["a".into()], Timing::default());
		assert!(!typewriter.cursor_visible(start));
		typewriter.start(start);
		assert!(typewriter.cursor_visible(start));
		assert!(!typewriter.cursor_visible(start + Duration::from_millis(600)));
		assert!(typewriter.cursor_visible(start + Duration::from_millis(1100)));
	}

	#[test]
	fn speed_presets_match_their_intervals() {
		assert_eq!(TypingSpeed::Slow.interval(), Duration::from_millis(100));
		assert_eq!(TypingSpeed::Medium.interval(), Duration::from_millis(70));
		assert_eq!(TypingSpeed::Fast.interval(), Duration::from_millis(35));
	}
}
