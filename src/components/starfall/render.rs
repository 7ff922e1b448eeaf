//! Drawing for stars and sparks.
//!
//! Every helper that turns on a glow or changes global alpha resets it before
//! returning, so the next draw call starts from the default canvas state.

use std::f64::consts::PI;

use super::particles::Particle;
use super::star::Star;
use super::surface::DrawingSurface;

const SPIKES: usize = 5;
const OUTER_RADIUS: f64 = 1.2;
const INNER_RADIUS: f64 = 0.6;
const TRAIL_GLOW: f64 = 1.5;
const TRAIL_MAX_ALPHA: f64 = 0.8;
const SPARK_SIZE: f64 = 3.0;

/// Vertices of a five-pointed star centred on `(x, y)`, alternating outer and
/// inner points, starting straight up.
pub fn star_outline(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
	let (outer, inner) = (size * OUTER_RADIUS, size * INNER_RADIUS);
	let step = PI / SPIKES as f64;
	let mut rot = PI / 2.0 * 3.0;
	let mut points = Vec::with_capacity(SPIKES * 2);

	for _ in 0..SPIKES {
		points.push((x + rot.cos() * outer, y + rot.sin() * outer));
		rot += step;
		points.push((x + rot.cos() * inner, y + rot.sin() * inner));
		rot += step;
	}

	points
}

/// Stroke the trail as tapered segments, thin and faint at the tail, full size
/// near the head.
pub fn draw_trail<S: DrawingSurface + ?Sized>(surface: &mut S, star: &Star) {
	let len = star.trail.len();
	if len < 2 {
		return;
	}

	surface.set_line_cap("round");
	surface.set_shadow_blur(star.size * TRAIL_GLOW);
	surface.set_shadow_color(&star.color.with_alpha(0.6).to_css());

	for j in (1..len).rev() {
		let (x0, y0) = star.trail[j];
		let (x1, y1) = star.trail[j - 1];
		let t = (len - j) as f64 / len as f64;

		surface.set_stroke_color(&star.color.with_alpha(t * TRAIL_MAX_ALPHA).to_css());
		surface.set_line_width(star.size * t);
		surface.begin_path();
		surface.move_to(x0, y0);
		surface.line_to(x1, y1);
		surface.stroke();
	}

	surface.set_shadow_blur(0.0);
}

/// Fill the star head with a glow as wide as its outer radius.
pub fn draw_star_head<S: DrawingSurface + ?Sized>(surface: &mut S, star: &Star) {
	let outer = star.size * OUTER_RADIUS;
	let top = (star.x, star.y - outer);

	surface.begin_path();
	surface.move_to(top.0, top.1);
	for (px, py) in star_outline(star.x, star.y, star.size) {
		surface.line_to(px, py);
	}
	surface.line_to(top.0, top.1);
	surface.close_path();

	surface.set_shadow_blur(outer);
	surface.set_shadow_color(&star.color.with_alpha(0.8).to_css());
	surface.set_fill_color(&star.color.to_css());
	surface.fill();
	surface.set_shadow_blur(0.0);
}

pub fn draw_spark<S: DrawingSurface + ?Sized>(surface: &mut S, particle: &Particle) {
	surface.set_fill_color(&particle.color.to_css_rgb());
	surface.set_global_alpha(particle.visible_alpha());
	surface.fill_rect(particle.x, particle.y, SPARK_SIZE, SPARK_SIZE);
	surface.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::{Op, RecordingSurface};
	use super::super::theme::Color;
	use super::*;

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	#[test]
	fn outline_alternates_radii() {
		let points = star_outline(10.0, 20.0, 5.0);
		assert_eq!(points.len(), 10);
		assert!(close(points[0], (10.0, 14.0)));
		for (i, (px, py)) in points.iter().enumerate() {
			let r = (px - 10.0).hypot(py - 20.0);
			let expected = if i % 2 == 0 { 6.0 } else { 3.0 };
			assert!((r - expected).abs() < 1e-9);
		}
	}

	#[test]
	fn trail_tapers_toward_the_tail() {
		let mut star = Star::new(0.0, 0.0, 1.0, 0.0, 8.0, Color::rgb(255, 229, 138));
		for _ in 0..4 {
			star.advance(15);
		}
		let mut surface = RecordingSurface::default();
		draw_trail(&mut surface, &star);

		let widths: Vec<f64> = surface
			.ops
			.iter()
			.filter_map(|op| match op {
				Op::LineWidth(w) => Some(*w),
				_ => None,
			})
			.collect();
		assert_eq!(widths, vec![2.0, 4.0, 6.0]);
		assert_eq!(surface.count(|op| *op == Op::Stroke), 3);
		assert_eq!(surface.ops.last(), Some(&Op::ShadowBlur(0.0)));
		assert!(surface.ops.contains(&Op::StrokeColor("rgba(255, 229, 138, 0.2)".into())));
	}

	#[test]
	fn short_trail_draws_nothing() {
		let mut star = Star::new(0.0, 0.0, 1.0, 0.0, 8.0, Color::rgb(255, 255, 255));
		star.advance(15);
		let mut surface = RecordingSurface::default();
		draw_trail(&mut surface, &star);
		assert!(surface.ops.is_empty());
	}

	#[test]
	fn star_head_resets_glow() {
		let star = Star::new(50.0, 50.0, 0.0, 0.0, 5.0, Color::rgb(168, 212, 255));
		let mut surface = RecordingSurface::default();
		draw_star_head(&mut surface, &star);

		assert_eq!(surface.count(|op| matches!(op, Op::LineTo(..))), 11);
		assert!(surface.ops.contains(&Op::ShadowBlur(6.0)));
		assert!(surface.ops.contains(&Op::FillColor("rgb(168, 212, 255)".into())));
		assert_eq!(surface.ops.last(), Some(&Op::ShadowBlur(0.0)));
	}

	#[test]
	fn spark_alpha_restored() {
		let p = Particle {
			x: 3.0,
			y: 4.0,
			vx: 0.0,
			vy: 0.0,
			alpha: -0.3,
			life: 2.0,
			color: Color::rgb(255, 179, 230),
		};
		let mut surface = RecordingSurface::default();
		draw_spark(&mut surface, &p);
		assert_eq!(
			surface.ops,
			vec![
				Op::FillColor("#ffb3e6".into()),
				Op::GlobalAlpha(0.0),
				Op::FillRect(3.0, 4.0, 3.0, 3.0),
				Op::GlobalAlpha(1.0),
			]
		);
	}
}
