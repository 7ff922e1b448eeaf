//! Tuneable settings for the starfall effect.

use serde::Deserialize;

/// Runtime configuration, read from `<script id="sky-config">` when present.
///
/// Every field is optional in the JSON; missing fields keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
	/// Population cap. Spawning is skipped while this many stars are alive.
	pub max_stars: usize,
	/// Milliseconds between spawn attempts.
	pub spawn_interval_ms: u32,
	/// Maximum number of remembered positions per star.
	pub trail_length: usize,
	/// Sparks per firework burst.
	pub burst_particles: usize,
	/// Click detection radius as a multiple of star size.
	pub hit_radius_factor: f64,
	/// Downward acceleration applied to sparks each frame.
	pub gravity: f64,
	/// `#rrggbb` colours for stars and sparks.
	pub palette: Vec<String>,
}

impl SkyConfig {
	/// Spawn interval as a `setInterval` timeout, saturating instead of wrapping.
	pub fn spawn_timeout(&self) -> i32 {
		i32::try_from(self.spawn_interval_ms).unwrap_or(i32::MAX)
	}
}

impl Default for SkyConfig {
	fn default() -> Self {
		Self {
			max_stars: 20,
			spawn_interval_ms: 700,
			trail_length: 15,
			burst_particles: 30,
			hit_radius_factor: 10.0,
			gravity: 0.05,
			palette: ["#ffffff", "#ffe58a", "#a8d4ff", "#ffb3e6"]
				.into_iter()
				.map(String::from)
				.collect(),
		}
	}
}
