//! Host collaborators the engine talks to: the 2D drawing surface, the
//! viewport size source and the collected-star counter.

use web_sys::{CanvasRenderingContext2d, Window};

/// The subset of a 2D canvas the engine draws with.
pub trait DrawingSurface {
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn close_path(&mut self);
	fn fill(&mut self);
	fn stroke(&mut self);
	fn set_fill_color(&mut self, css: &str);
	fn set_stroke_color(&mut self, css: &str);
	fn set_line_width(&mut self, width: f64);
	fn set_line_cap(&mut self, cap: &str);
	fn set_shadow_blur(&mut self, blur: f64);
	fn set_shadow_color(&mut self, css: &str);
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	fn set_global_alpha(&mut self, alpha: f64);
}

impl DrawingSurface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn set_fill_color(&mut self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_stroke_color(&mut self, css: &str) {
		self.set_stroke_style_str(css);
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_line_cap(&mut self, cap: &str) {
		CanvasRenderingContext2d::set_line_cap(self, cap);
	}

	fn set_shadow_blur(&mut self, blur: f64) {
		CanvasRenderingContext2d::set_shadow_blur(self, blur);
	}

	fn set_shadow_color(&mut self, css: &str) {
		CanvasRenderingContext2d::set_shadow_color(self, css);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}
}

/// Source of the current viewport size in CSS pixels.
pub trait Viewport {
	fn dimensions(&self) -> Option<(f64, f64)>;
}

impl Viewport for Window {
	fn dimensions(&self) -> Option<(f64, f64)> {
		Some((
			self.inner_width().ok()?.as_f64()?,
			self.inner_height().ok()?.as_f64()?,
		))
	}
}

impl Viewport for (f64, f64) {
	fn dimensions(&self) -> Option<(f64, f64)> {
		Some(*self)
	}
}

/// Receives the running count of collected stars.
pub trait CounterDisplay {
	fn show_count(&mut self, count: u32);
}

/// Records every call so tests can assert on what was drawn.
#[cfg(test)]
pub(crate) mod recording {
	use super::DrawingSurface;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		ClearRect(f64, f64, f64, f64),
		BeginPath,
		MoveTo(f64, f64),
		LineTo(f64, f64),
		ClosePath,
		Fill,
		Stroke,
		FillColor(String),
		StrokeColor(String),
		LineWidth(f64),
		LineCap(String),
		ShadowBlur(f64),
		ShadowColor(String),
		FillRect(f64, f64, f64, f64),
		GlobalAlpha(f64),
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
			self.ops.iter().filter(|op| pred(op)).count()
		}
	}

	impl DrawingSurface for RecordingSurface {
		fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
			self.ops.push(Op::ClearRect(x, y, w, h));
		}
		fn begin_path(&mut self) {
			self.ops.push(Op::BeginPath);
		}
		fn move_to(&mut self, x: f64, y: f64) {
			self.ops.push(Op::MoveTo(x, y));
		}
		fn line_to(&mut self, x: f64, y: f64) {
			self.ops.push(Op::LineTo(x, y));
		}
		fn close_path(&mut self) {
			self.ops.push(Op::ClosePath);
		}
		fn fill(&mut self) {
			self.ops.push(Op::Fill);
		}
		fn stroke(&mut self) {
			self.ops.push(Op::Stroke);
		}
		fn set_fill_color(&mut self, css: &str) {
			self.ops.push(Op::FillColor(css.to_string()));
		}
		fn set_stroke_color(&mut self, css: &str) {
			self.ops.push(Op::StrokeColor(css.to_string()));
		}
		fn set_line_width(&mut self, width: f64) {
			self.ops.push(Op::LineWidth(width));
		}
		fn set_line_cap(&mut self, cap: &str) {
			self.ops.push(Op::LineCap(cap.to_string()));
		}
		fn set_shadow_blur(&mut self, blur: f64) {
			self.ops.push(Op::ShadowBlur(blur));
		}
		fn set_shadow_color(&mut self, css: &str) {
			self.ops.push(Op::ShadowColor(css.to_string()));
		}
		fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
			self.ops.push(Op::FillRect(x, y, w, h));
		}
		fn set_global_alpha(&mut self, alpha: f64) {
			self.ops.push(Op::GlobalAlpha(alpha));
		}
	}
}
