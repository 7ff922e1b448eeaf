//! Starfall simulation state.
//!
//! Owns the live stars and firework bursts and exposes one handler per host
//! event: spawn timer, pointer click, viewport resize and animation frame.
//! All mutation happens inside those handlers, which the host never runs
//! concurrently.

use fastrand::Rng;
use log::debug;

use super::particles::FireworkBurst;
use super::render;
use super::star::Star;
use super::surface::{CounterDisplay, DrawingSurface, Viewport};
use super::theme::StarPalette;
use super::types::SkyConfig;

/// Stars, bursts and the collected-star tally for one canvas.
pub struct SkyState {
	pub stars: Vec<Star>,
	pub fireworks: Vec<FireworkBurst>,
	pub width: f64,
	pub height: f64,
	pub collected: u32,
	pub palette: StarPalette,
	max_stars: usize,
	trail_length: usize,
	burst_particles: usize,
	hit_radius_factor: f64,
	gravity: f64,
	rng: Rng,
	counter: Option<Box<dyn CounterDisplay>>,
}

impl SkyState {
	pub fn new(config: &SkyConfig, width: f64, height: f64, rng: Rng) -> Self {
		Self {
			stars: Vec::new(),
			fireworks: Vec::new(),
			width,
			height,
			collected: 0,
			palette: StarPalette::from_hex_list(&config.palette),
			max_stars: config.max_stars,
			trail_length: config.trail_length,
			burst_particles: config.burst_particles,
			hit_radius_factor: config.hit_radius_factor,
			gravity: config.gravity,
			rng,
			counter: None,
		}
	}

	/// Attach the display that mirrors the collected count.
	pub fn with_counter(mut self, counter: Box<dyn CounterDisplay>) -> Self {
		self.counter = Some(counter);
		self
	}

	/// Spawn timer handler. Adds one star unless the population cap is reached.
	pub fn spawn_star(&mut self) {
		if self.stars.len() >= self.max_stars {
			return;
		}
		let star = Star::spawn(&mut self.rng, &self.palette, self.width, self.height);
		self.stars.push(star);
	}

	/// Click handler. Collects at most one star, newest first, and launches a
	/// firework where the click landed. Returns whether a star was collected.
	pub fn handle_click(&mut self, x: f64, y: f64) -> bool {
		let factor = self.hit_radius_factor;
		let Some(idx) = self.stars.iter().rposition(|s| s.is_hit(x, y, factor)) else {
			return false;
		};

		self.stars.remove(idx);
		self.collected += 1;
		if let Some(counter) = self.counter.as_mut() {
			counter.show_count(self.collected);
		}
		debug!("portfolio-sky: star collected ({} total)", self.collected);

		let burst = FireworkBurst::new(&mut self.rng, &self.palette, x, y, self.burst_particles);
		self.fireworks.push(burst);
		true
	}

	/// Resize handler. Existing stars and sparks keep their positions; only
	/// later spawns and edge checks see the new size.
	pub fn resize<V: Viewport + ?Sized>(&mut self, viewport: &V) {
		if let Some((width, height)) = viewport.dimensions() {
			debug!("portfolio-sky: resized to {}x{}", width, height);
			self.width = width;
			self.height = height;
		}
	}

	/// Frame handler. Advances and draws every star, then every spark,
	/// dropping whatever left the viewport or burned out.
	pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear_rect(0.0, 0.0, self.width, self.height);

		let (width, height, trail_length) = (self.width, self.height, self.trail_length);
		for i in (0..self.stars.len()).rev() {
			let star = &mut self.stars[i];
			star.advance(trail_length);
			render::draw_trail(surface, star);
			render::draw_star_head(surface, star);
			if star.is_offscreen(width, height) {
				self.stars.remove(i);
			}
		}

		let gravity = self.gravity;
		for fi in (0..self.fireworks.len()).rev() {
			let burst = &mut self.fireworks[fi];
			for pi in (0..burst.particles.len()).rev() {
				let particle = &mut burst.particles[pi];
				particle.update(gravity);
				render::draw_spark(surface, particle);
				if particle.is_spent() {
					burst.particles.remove(pi);
				}
			}
			if burst.is_empty() {
				self.fireworks.remove(fi);
			}
		}
	}
}
