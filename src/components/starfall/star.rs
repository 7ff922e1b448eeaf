//! Shooting stars: spawning at the viewport edge, motion and trail bookkeeping.

use std::collections::VecDeque;

use fastrand::Rng;

use super::theme::{Color, StarPalette};

/// Star sizes are drawn from `SIZE_MIN..SIZE_MIN + SIZE_SPREAD`.
const SIZE_MIN: f64 = 5.0;
const SIZE_SPREAD: f64 = 3.0;
/// Horizontal speed dominates so stars read as streaking sideways.
const SPEED_MIN: f64 = 1.0;
const SPEED_SPREAD: f64 = 1.2;
const DRIFT_MIN: f64 = 0.1;
const DRIFT_SPREAD: f64 = 0.4;
/// Stars enter within the upper part of the viewport.
const SPAWN_BAND: f64 = 0.7;

/// A shooting star and the positions it recently passed through.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
	/// Most recent position first.
	pub trail: VecDeque<(f64, f64)>,
}

impl Star {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64, color: Color) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			size,
			color,
			trail: VecDeque::new(),
		}
	}

	/// Create a star just off the left or right edge, heading across the viewport.
	pub fn spawn(rng: &mut Rng, palette: &StarPalette, width: f64, height: f64) -> Self {
		let size = rng.f64() * SIZE_SPREAD + SIZE_MIN;
		let direction = if rng.bool() { 1.0 } else { -1.0 };
		let x = if direction > 0.0 { -size } else { width + size };
		let y = rng.f64() * height * SPAWN_BAND;
		let color = palette.pick(rng);
		let speed = rng.f64() * SPEED_SPREAD + SPEED_MIN;
		let drift = rng.f64() * DRIFT_SPREAD + DRIFT_MIN;

		Self::new(x, y, direction * speed, drift, size, color)
	}

	/// Move one frame and remember the new position, keeping at most `max_trail` points.
	pub fn advance(&mut self, max_trail: usize) {
		self.x += self.vx;
		self.y += self.vy;
		self.trail.push_front((self.x, self.y));
		while self.trail.len() > max_trail {
			self.trail.pop_back();
		}
	}

	/// Past the left, right or bottom edge by more than the star's own size.
	/// The top edge never culls.
	pub fn is_offscreen(&self, width: f64, height: f64) -> bool {
		self.x < -self.size || self.x > width + self.size || self.y > height + self.size
	}

	/// Whether a click at `(x, y)` lands within the enlarged hit circle.
	pub fn is_hit(&self, x: f64, y: f64, radius_factor: f64) -> bool {
		let (dx, dy) = (self.x - x, self.y - y);
		let radius = self.size * radius_factor;
		dx * dx + dy * dy < radius * radius
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn star_at(x: f64, y: f64, size: f64) -> Star {
		Star::new(x, y, 0.0, 0.0, size, Color::rgb(255, 255, 255))
	}

	#[test]
	fn spawned_stars_enter_from_a_side_edge() {
		let mut rng = Rng::with_seed(11);
		let palette = StarPalette::starlight();
		for _ in 0..200 {
			let s = Star::spawn(&mut rng, &palette, 800.0, 600.0);
			assert!((SIZE_MIN..SIZE_MIN + SIZE_SPREAD).contains(&s.size));
			assert!((0.0..420.0).contains(&s.y));
			assert!((0.1..0.5).contains(&s.vy));
			assert!((1.0..2.2).contains(&s.vx.abs()));
			if s.vx > 0.0 {
				assert_eq!(s.x, -s.size);
			} else {
				assert_eq!(s.x, 800.0 + s.size);
			}
			assert!(s.trail.is_empty());
		}
	}

	#[test]
	fn trail_is_newest_first_and_bounded() {
		let mut s = Star::new(0.0, 0.0, 1.0, 0.5, 6.0, Color::rgb(255, 255, 255));
		for _ in 0..40 {
			s.advance(15);
			assert!(s.trail.len() <= 15);
		}
		assert_eq!(s.trail.len(), 15);
		assert_eq!(s.trail[0], (40.0, 20.0));
		assert_eq!(s.trail[14], (26.0, 13.0));
	}

	#[test]
	fn offscreen_ignores_top_edge() {
		assert!(star_at(-6.1, 10.0, 6.0).is_offscreen(800.0, 600.0));
		assert!(star_at(806.1, 10.0, 6.0).is_offscreen(800.0, 600.0));
		assert!(star_at(100.0, 606.1, 6.0).is_offscreen(800.0, 600.0));
		assert!(!star_at(100.0, -500.0, 6.0).is_offscreen(800.0, 600.0));
		assert!(!star_at(-6.0, 10.0, 6.0).is_offscreen(800.0, 600.0));
	}

	#[test]
	fn hit_radius_is_strict() {
		let s = star_at(100.0, 100.0, 5.0);
		assert!(s.is_hit(100.0, 100.0, 10.0));
		assert!(s.is_hit(149.9, 100.0, 10.0));
		assert!(!s.is_hit(150.0, 100.0, 10.0));
		assert!(!s.is_hit(151.0, 100.0, 10.0));
	}
}
