//! Star colours and the palette they are drawn from.

use fastrand::Rng;
use log::warn;

/// RGB colour with an alpha channel for CSS output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse a `#rrggbb` string into its channels.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
		Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("rgb({}, {}, {})", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Fixed set of colours shared by stars and firework sparks.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPalette {
	pub colors: Vec<Color>,
}

impl StarPalette {
	/// Pale hues and pure white/yellow that read as starlight on a dark page.
	pub fn starlight() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 255, 255), // White
				Color::rgb(255, 229, 138), // Soft yellow
				Color::rgb(168, 212, 255), // Pale blue
				Color::rgb(255, 179, 230), // Pale pink
			],
		}
	}

	/// Build a palette from hex strings, skipping entries that don't parse.
	/// Falls back to [`StarPalette::starlight`] when nothing usable remains.
	pub fn from_hex_list(entries: &[String]) -> Self {
		let colors: Vec<Color> = entries
			.iter()
			.filter_map(|hex| {
				let parsed = Color::from_hex(hex);
				if parsed.is_none() {
					warn!("portfolio-sky: ignoring palette entry {:?}", hex);
				}
				parsed
			})
			.collect();

		if colors.is_empty() {
			Self::starlight()
		} else {
			Self { colors }
		}
	}

	pub fn pick(&self, rng: &mut Rng) -> Color {
		self.colors[rng.usize(..self.colors.len())]
	}
}

impl Default for StarPalette {
	fn default() -> Self {
		Self::starlight()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_channels() {
		assert_eq!(Color::from_hex("#ffe58a"), Some(Color::rgb(255, 229, 138)));
		assert_eq!(Color::from_hex("ffe58a"), None);
		assert_eq!(Color::from_hex("#ffe5"), None);
		assert_eq!(Color::from_hex("#zzzzzz"), None);
		assert_eq!(Color::from_hex("#+f+f+f"), None);
	}

	#[test]
	fn css_strings() {
		let c = Color::rgb(168, 212, 255);
		assert_eq!(c.to_css(), "rgb(168, 212, 255)");
		assert_eq!(c.with_alpha(0.6).to_css(), "rgba(168, 212, 255, 0.6)");
		assert_eq!(c.to_css_rgb(), "#a8d4ff");
	}

	#[test]
	fn bad_palette_falls_back_to_starlight() {
		let palette = StarPalette::from_hex_list(&["nope".to_string()]);
		assert_eq!(palette, StarPalette::starlight());

		let palette = StarPalette::from_hex_list(&["#+1+2+3".to_string()]);
		assert_eq!(palette, StarPalette::starlight());

		let palette = StarPalette::from_hex_list(&["#000000".into(), "bad".into()]);
		assert_eq!(palette.colors, vec![Color::rgb(0, 0, 0)]);
	}

	#[test]
	fn pick_stays_in_palette() {
		let palette = StarPalette::starlight();
		let mut rng = Rng::with_seed(3);
		for _ in 0..100 {
			assert!(palette.colors.contains(&palette.pick(&mut rng)));
		}
	}
}
