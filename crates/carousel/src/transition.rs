//! Time-based tween of the per-card flex weights.
//!
//! The tween is a derived visual effect: the active index is always the
//! source of truth, and retargeting mid-flight restarts from whatever is on
//! screen at that instant.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct WeightTween {
	from: Vec<f32>,
	to: Vec<f32>,
	started_at: Instant,
	duration: Duration,
}

impl WeightTween {
	/// A tween already at rest on `weights`.
	#[must_use]
	pub fn settled(weights: Vec<f32>, now: Instant) -> Self {
		Self {
			from: weights.clone(),
			to: weights,
			started_at: now,
			duration: Duration::ZERO,
		}
	}

	/// Start moving towards `targets` from the weights displayed at `now`.
	pub fn retarget(&mut self, targets: Vec<f32>, now: Instant, duration: Duration) {
		if targets == self.to && !self.is_running(now) {
			return;
		}
		let current = self.sample(now);
		self.from = if current.len() == targets.len() {
			current
		} else {
			targets.clone()
		};
		self.to = targets;
		self.started_at = now;
		self.duration = duration;
	}

	/// Weights to display at `now`.
	#[must_use]
	pub fn sample(&self, now: Instant) -> Vec<f32> {
		let t = self.progress(now);
		if t >= 1.0 {
			return self.to.clone();
		}
		let eased = ease_out(t);
		self.from
			.iter()
			.zip(&self.to)
			.map(|(from, to)| from + (to - from) * eased)
			.collect()
	}

	#[must_use]
	pub fn is_running(&self, now: Instant) -> bool {
		self.progress(now) < 1.0
	}

	#[must_use]
	pub fn target(&self) -> &[f32] {
		&self.to
	}

	fn progress(&self, now: Instant) -> f32 {
		if self.duration.is_zero() {
			return 1.0;
		}
		let elapsed = now.saturating_duration_since(self.started_at);
		(elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
	}
}

/// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
	1.0 - (1.0 - t) * (1.0 - t)
}
