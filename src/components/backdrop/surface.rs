//! Canvas surface sizing and the resize significance filter.
//!
//! Layout runs in logical (CSS) pixels; the backing buffer is scaled by a
//! capped device-pixel-ratio and a context transform maps drawing
//! coordinates back to logical space. Observed parent resizes pass through
//! a noise filter first: mobile browser chrome showing and hiding reports
//! height-only deltas under 24px, and those must not move entities.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Upper bound on the device-pixel-ratio scale applied to backing buffers.
const MAX_DEVICE_SCALE: f64 = 2.0;

/// Width deltas below this are insignificant.
const NOISE_WIDTH_PX: f64 = 1.0;
/// Height deltas below this are insignificant (mobile UI chrome jitter).
const NOISE_HEIGHT_PX: f64 = 24.0;

/// Clamp a reported `devicePixelRatio` to a usable backing-buffer scale.
pub fn device_scale(dpr: f64) -> f64 {
	if dpr.is_finite() && dpr > 0.0 {
		dpr.min(MAX_DEVICE_SCALE)
	} else {
		1.0
	}
}

/// Logical surface size in CSS pixels. Both dimensions stay >= 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	/// Logical width.
	pub width: f64,
	/// Logical height.
	pub height: f64,
}

impl Surface {
	/// Build from raw measurements, clamping to the 1x1 minimum.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.floor().max(1.0),
			height: height.floor().max(1.0),
		}
	}

	/// Build from an observer content-rect. Dimensions are rounded before
	/// any comparison against the current size, like the resize handler.
	pub fn observed(width: f64, height: f64) -> Self {
		Self::new(width.round(), height.round())
	}

	/// Area in logical pixels.
	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	/// Backing buffer dimensions at the given device scale.
	pub fn backing(&self, scale: f64) -> (u32, u32) {
		(
			(self.width * scale).floor() as u32,
			(self.height * scale).floor() as u32,
		)
	}

	/// Whether a newly observed size is resize noise to be ignored.
	/// Thresholds are exact product tuning values.
	pub fn is_noise(&self, new: Surface) -> bool {
		let dw = (new.width - self.width).abs();
		let dh = (new.height - self.height).abs();
		dw < NOISE_WIDTH_PX && dh < NOISE_HEIGHT_PX
	}

	/// Per-axis ratios for proportional entity repositioning. `None` when
	/// the current size cannot produce finite ratios.
	pub fn rescale_ratios(&self, new: Surface) -> Option<(f64, f64)> {
		if self.width <= 0.0 || self.height <= 0.0 {
			return None;
		}
		let sx = new.width / self.width;
		let sy = new.height / self.height;
		(sx.is_finite() && sy.is_finite()).then_some((sx, sy))
	}
}

/// Acquire the 2D context and size the canvas for `surface`. `None` when
/// the context is unavailable; callers skip the animation entirely.
pub fn bind(canvas: &HtmlCanvasElement, surface: Surface, scale: f64) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()?
		.dyn_into::<CanvasRenderingContext2d>()
		.ok()?;
	apply(canvas, &ctx, surface, scale);
	Some(ctx)
}

/// Re-apply backing size, CSS box, and logical-pixel transform.
pub fn apply(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, surface: Surface, scale: f64) {
	let (bw, bh) = surface.backing(scale);
	canvas.set_width(bw);
	canvas.set_height(bh);

	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", surface.width));
	let _ = style.set_property("height", &format!("{}px", surface.height));

	// Resetting width/height cleared the context state, including any
	// previous transform.
	let _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
	use super::{Surface, device_scale};

	#[test]
	fn device_scale_caps_at_two() {
		assert_eq!(device_scale(3.0), 2.0);
		assert_eq!(device_scale(1.5), 1.5);
		assert_eq!(device_scale(1.0), 1.0);
	}

	#[test]
	fn device_scale_falls_back_on_junk() {
		assert_eq!(device_scale(0.0), 1.0);
		assert_eq!(device_scale(-2.0), 1.0);
		assert_eq!(device_scale(f64::NAN), 1.0);
		assert_eq!(device_scale(f64::INFINITY), 1.0);
	}

	#[test]
	fn surface_never_collapses_below_one() {
		let s = Surface::new(0.0, -5.0);
		assert_eq!(s.width, 1.0);
		assert_eq!(s.height, 1.0);
	}

	#[test]
	fn observed_rounds_before_flooring() {
		let s = Surface::observed(799.6, 299.4);
		assert_eq!(s.width, 800.0);
		assert_eq!(s.height, 299.0);
	}

	#[test]
	fn backing_floors_scaled_dimensions() {
		let s = Surface::new(801.0, 300.0);
		assert_eq!(s.backing(1.5), (1201, 450));
		assert_eq!(s.backing(2.0), (1602, 600));
	}

	#[test]
	fn noise_filter_matches_thresholds() {
		let current = Surface::new(800.0, 600.0);
		// Height-only jitter below 24px is noise.
		assert!(current.is_noise(Surface::new(800.0, 623.0)));
		// A width change of a full pixel is significant.
		assert!(!current.is_noise(Surface::new(801.0, 600.0)));
		// A height change of 24px or more is significant.
		assert!(!current.is_noise(Surface::new(800.0, 624.0)));
		// Both deltas under threshold stay noise.
		assert!(current.is_noise(Surface::new(800.0, 600.0)));
	}

	#[test]
	fn rescale_ratios_are_exact() {
		let current = Surface::new(800.0, 300.0);
		let (sx, sy) = current.rescale_ratios(Surface::new(1600.0, 300.0)).unwrap();
		assert_eq!(sx, 2.0);
		assert_eq!(sy, 1.0);
	}
}
