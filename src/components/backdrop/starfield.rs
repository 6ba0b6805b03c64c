//! Twinkling starfield: fixed positions, time-driven brightness.

use super::rng::Rng;
use super::style::StarStyle;
use super::surface::Surface;

/// Brightness swing around each star's base level.
const TWINKLE_AMPLITUDE: f64 = 0.35;
/// Base oscillation rate in radians per millisecond.
const TWINKLE_RATE: f64 = 0.0012;

/// One star. Position only changes on rescale; brightness oscillates.
#[derive(Clone, Debug)]
pub struct Star {
	/// Horizontal position in logical px.
	pub x: f64,
	/// Vertical position in logical px.
	pub y: f64,
	/// Radius in logical px.
	pub radius: f64,
	base: f64,
	speed: f64,
	phase: f64,
}

impl Star {
	/// Brightness at frame timestamp `t_ms`, clamped to `[0, 1]`.
	pub fn twinkle(&self, t_ms: f64) -> f64 {
		(self.base + TWINKLE_AMPLITUDE * (self.phase + t_ms * TWINKLE_RATE * self.speed).sin())
			.clamp(0.0, 1.0)
	}
}

/// The star set plus the surface it lives in.
pub struct Starfield {
	/// Stars in generation order.
	pub stars: Vec<Star>,
	surface: Surface,
}

impl Starfield {
	/// Generate the star set for a freshly measured surface. Called once
	/// per mount, like the network generator.
	pub fn generate(style: &StarStyle, surface: Surface, rng: &mut Rng) -> Self {
		let count = style.density.count(surface);
		let mut stars = Vec::with_capacity(count);
		for _ in 0..count {
			stars.push(Star {
				x: rng.range(0.0, surface.width),
				y: rng.range(0.0, surface.height),
				radius: rng.range(style.radius_min, style.radius_max),
				base: rng.range(style.base_min, style.base_max),
				speed: rng.range(style.speed_min, style.speed_max),
				phase: rng.range(0.0, std::f64::consts::TAU),
			});
		}
		Self { stars, surface }
	}

	/// Surface the stars currently live in.
	pub fn surface(&self) -> Surface {
		self.surface
	}

	/// Reposition stars proportionally for a new surface size.
	pub fn rescale(&mut self, new: Surface) {
		if let Some((sx, sy)) = self.surface.rescale_ratios(new) {
			for s in &mut self.stars {
				s.x *= sx;
				s.y *= sy;
			}
		}
		self.surface = new;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generation_respects_style_ranges() {
		let style = StarStyle::dusk();
		let surface = Surface::new(800.0, 400.0);
		let mut rng = Rng::new(13);
		let field = Starfield::generate(&style, surface, &mut rng);

		assert_eq!(field.stars.len(), style.density.count(surface));
		for s in &field.stars {
			assert!((0.0..surface.width).contains(&s.x));
			assert!((0.0..surface.height).contains(&s.y));
			assert!((style.radius_min..style.radius_max).contains(&s.radius));
			assert!((style.base_min..style.base_max).contains(&s.base));
			assert!((style.speed_min..style.speed_max).contains(&s.speed));
		}
	}

	#[test]
	fn twinkle_stays_normalized_and_oscillates() {
		let style = StarStyle::dusk();
		let mut rng = Rng::new(21);
		let field = Starfield::generate(&style, Surface::new(640.0, 480.0), &mut rng);
		let star = &field.stars[0];

		let mut min = f64::MAX;
		let mut max = f64::MIN;
		for i in 0..2000 {
			let a = star.twinkle(f64::from(i) * 16.0);
			assert!((0.0..=1.0).contains(&a));
			min = min.min(a);
			max = max.max(a);
		}
		// A full sweep passes through both sides of the base level.
		assert!(max - min > TWINKLE_AMPLITUDE);
	}

	#[test]
	fn rescale_keeps_count_and_scales_positions() {
		let style = StarStyle::dusk();
		let mut rng = Rng::new(34);
		let mut field = Starfield::generate(&style, Surface::new(800.0, 400.0), &mut rng);
		let before: Vec<(f64, f64)> = field.stars.iter().map(|s| (s.x, s.y)).collect();

		field.rescale(Surface::new(400.0, 800.0));
		assert_eq!(field.stars.len(), before.len());
		for (s, (x0, y0)) in field.stars.iter().zip(&before) {
			assert_eq!(s.x, x0 * 0.5);
			assert_eq!(s.y, y0 * 2.0);
		}
	}
}
