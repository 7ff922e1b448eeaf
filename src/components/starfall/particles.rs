//! Firework sparks released when a star is collected.

use std::f64::consts::TAU;

use fastrand::Rng;

use super::theme::{Color, StarPalette};

const SPEED_MIN: f64 = 2.0;
const SPEED_SPREAD: f64 = 3.0;
/// Lifespan in frames, drawn from `LIFE_MIN..LIFE_MIN + LIFE_SPREAD`.
const LIFE_MIN: f64 = 30.0;
const LIFE_SPREAD: f64 = 30.0;

/// A single spark.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub alpha: f64,
	pub life: f64,
	pub color: Color,
}

impl Particle {
	/// Advance one frame. The fade step divides by the remaining life, so sparks
	/// fade faster as they age.
	pub fn update(&mut self, gravity: f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.vy += gravity;
		self.life -= 1.0;
		self.alpha -= 1.0 / self.life;
	}

	pub fn is_spent(&self) -> bool {
		self.alpha <= 0.0 || self.life <= 0.0
	}

	/// Opacity to draw with.
	pub fn visible_alpha(&self) -> f64 {
		self.alpha.clamp(0.0, 1.0)
	}
}

/// Sparks from one collected star.
#[derive(Clone, Debug, Default)]
pub struct FireworkBurst {
	pub particles: Vec<Particle>,
}

impl FireworkBurst {
	/// Scatter `count` sparks in random directions from `(x, y)`.
	pub fn new(rng: &mut Rng, palette: &StarPalette, x: f64, y: f64, count: usize) -> Self {
		let particles = (0..count)
			.map(|_| {
				let angle = rng.f64() * TAU;
				let speed = rng.f64() * SPEED_SPREAD + SPEED_MIN;
				Particle {
					x,
					y,
					vx: angle.cos() * speed,
					vy: angle.sin() * speed,
					alpha: 1.0,
					life: rng.f64() * LIFE_SPREAD + LIFE_MIN,
					color: palette.pick(rng),
				}
			})
			.collect();

		Self { particles }
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
