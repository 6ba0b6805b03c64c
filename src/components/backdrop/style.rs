//! Visual and motion parameters for the backdrop variants.

use super::surface::Surface;

/// RGBA color rendered as a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red component (0-255).
	pub r: u8,
	/// Green component (0-255).
	pub g: u8,
	/// Blue component (0-255).
	pub b: u8,
	/// Alpha component (0.0-1.0).
	pub a: f64,
}

impl Rgba {
	/// Create a color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS `rgba()` string for canvas fill/stroke styles.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// How entity count derives from surface area.
#[derive(Clone, Copy, Debug)]
pub struct Density {
	/// Entities per logical pixel of area.
	pub per_px: f64,
	/// Lower bound on the count.
	pub min: usize,
	/// Upper bound on the count.
	pub max: usize,
}

impl Density {
	/// Entity count for a surface: `floor(area * per_px)` clamped.
	pub fn count(&self, surface: Surface) -> usize {
		((surface.area() * self.per_px).floor() as usize).clamp(self.min, self.max)
	}
}

/// What happens to an entity crossing a surface edge.
#[derive(Clone, Copy, Debug)]
pub enum Boundary {
	/// Negate the velocity component that carried the entity out.
	Reflect,
	/// Teleport to the opposite edge once past `margin` outside.
	Wrap {
		/// Overshoot allowed before wrapping, in logical px.
		margin: f64,
	},
}

/// How the maximum link distance derives from surface size.
#[derive(Clone, Copy, Debug)]
pub enum LinkRange {
	/// `min(cap, width / divisor)`.
	WidthFraction {
		/// Width divisor.
		divisor: f64,
		/// Upper bound in logical px.
		cap: f64,
	},
	/// `clamp(hypot(width, height) / divisor, floor, cap)`.
	Diagonal {
		/// Diagonal divisor.
		divisor: f64,
		/// Lower bound in logical px.
		floor: f64,
		/// Upper bound in logical px.
		cap: f64,
	},
}

impl LinkRange {
	/// Maximum distance at which two entities are linked.
	pub fn max_distance(&self, surface: Surface) -> f64 {
		match *self {
			LinkRange::WidthFraction { divisor, cap } => (surface.width / divisor).min(cap),
			LinkRange::Diagonal { divisor, floor, cap } => {
				(surface.width.hypot(surface.height) / divisor).clamp(floor, cap)
			}
		}
	}
}

/// One stroke pass over every close entity pair.
#[derive(Clone, Copy, Debug)]
pub struct LinePass {
	/// Stroke width in logical px.
	pub width: f64,
	/// Stroke color.
	pub color: Rgba,
	/// Peak `globalAlpha`; per-pair alpha falls off linearly with distance.
	pub alpha: f64,
}

/// A filled circle drawn at each entity position.
#[derive(Clone, Copy, Debug)]
pub struct Dot {
	/// Radius in logical px.
	pub radius: f64,
	/// Fill color.
	pub color: Rgba,
}

/// Full parameter set for a network-line backdrop.
#[derive(Clone, Debug)]
pub struct NetworkStyle {
	/// Entity count policy.
	pub density: Density,
	/// Edge behavior.
	pub boundary: Boundary,
	/// Velocity components are drawn uniformly from `±max_speed`.
	pub max_speed: f64,
	/// Link distance policy.
	pub link: LinkRange,
	/// Wide faint pass then thin bright pass, in draw order.
	pub passes: [LinePass; 2],
	/// Outer halo drawn under each entity.
	pub halo: Dot,
	/// Bright core drawn over the halo.
	pub core: Dot,
}

impl NetworkStyle {
	/// Sparse white mesh with reflecting edges, for the hero.
	pub fn wireframe() -> Self {
		Self {
			density: Density { per_px: 1.0 / 20_000.0, min: 40, max: 110 },
			boundary: Boundary::Reflect,
			max_speed: 0.35,
			link: LinkRange::WidthFraction { divisor: 5.0, cap: 200.0 },
			passes: [
				LinePass { width: 1.6, color: Rgba::rgba(255, 255, 255, 0.10), alpha: 0.5 },
				LinePass { width: 0.7, color: Rgba::rgba(255, 255, 255, 0.22), alpha: 1.0 },
			],
			halo: Dot { radius: 3.2, color: Rgba::rgba(255, 255, 255, 0.10) },
			core: Dot { radius: 2.0, color: Rgba::rgba(255, 255, 255, 0.45) },
		}
	}

	/// Dense blue-tinted glow mesh with wrapping edges, for the closing
	/// call to action.
	pub fn nebula() -> Self {
		Self {
			density: Density { per_px: 1.0 / 20_000.0, min: 40, max: 110 },
			boundary: Boundary::Wrap { margin: 12.0 },
			max_speed: 0.18,
			link: LinkRange::Diagonal { divisor: 9.0, floor: 140.0, cap: 240.0 },
			passes: [
				LinePass { width: 1.6, color: Rgba::rgba(160, 180, 255, 0.05), alpha: 0.6 },
				LinePass { width: 0.7, color: Rgba::rgba(220, 235, 255, 0.11), alpha: 0.9 },
			],
			halo: Dot { radius: 3.6, color: Rgba::rgba(255, 255, 255, 0.12) },
			core: Dot { radius: 1.6, color: Rgba::rgba(255, 255, 255, 0.45) },
		}
	}
}

/// Parameter set for a twinkling starfield backdrop.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Star count policy.
	pub density: Density,
	/// Smallest star radius.
	pub radius_min: f64,
	/// Largest star radius.
	pub radius_max: f64,
	/// Dimmest base brightness.
	pub base_min: f64,
	/// Brightest base brightness.
	pub base_max: f64,
	/// Slowest twinkle rate multiplier.
	pub speed_min: f64,
	/// Fastest twinkle rate multiplier.
	pub speed_max: f64,
}

impl StarStyle {
	/// Soft white stars over a dark section.
	pub fn dusk() -> Self {
		Self {
			density: Density { per_px: 0.00028, min: 60, max: 180 },
			radius_min: 0.4,
			radius_max: 1.6,
			base_min: 0.25,
			base_max: 0.6,
			speed_min: 0.8,
			speed_max: 1.6,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_keeps_components() {
		let c = Rgba::rgba(160, 180, 255, 0.05);
		assert_eq!(c.to_css(), "rgba(160, 180, 255, 0.05)");
	}

	#[test]
	fn density_clamps_small_surfaces_up() {
		let density = NetworkStyle::wireframe().density;
		// floor(800 * 300 / 20000) = 12, clamped to the minimum.
		assert_eq!(density.count(Surface::new(800.0, 300.0)), 40);
		assert_eq!(density.count(Surface::new(1.0, 1.0)), 40);
	}

	#[test]
	fn density_clamps_large_surfaces_down() {
		let density = NetworkStyle::nebula().density;
		// floor(2560 * 1440 / 20000) = 184, clamped to the maximum.
		assert_eq!(density.count(Surface::new(2560.0, 1440.0)), 110);
	}

	#[test]
	fn density_passes_mid_range_through() {
		let density = NetworkStyle::nebula().density;
		// floor(1366 * 768 / 20000) = 52, inside the clamp.
		assert_eq!(density.count(Surface::new(1366.0, 768.0)), 52);
	}

	#[test]
	fn star_density_obeys_both_bounds() {
		let density = StarStyle::dusk().density;
		assert_eq!(density.count(Surface::new(1.0, 1.0)), 60);
		// floor(1920 * 1080 * 0.00028) = 580, clamped to the maximum.
		assert_eq!(density.count(Surface::new(1920.0, 1080.0)), 180);
		// floor(800 * 400 * 0.00028) = 89, inside the clamp.
		assert_eq!(density.count(Surface::new(800.0, 400.0)), 89);
	}

	#[test]
	fn width_fraction_link_range() {
		let link = LinkRange::WidthFraction { divisor: 5.0, cap: 200.0 };
		assert_eq!(link.max_distance(Surface::new(800.0, 600.0)), 160.0);
		assert_eq!(link.max_distance(Surface::new(2000.0, 600.0)), 200.0);
	}

	#[test]
	fn diagonal_link_range_clamps() {
		let link = LinkRange::Diagonal { divisor: 9.0, floor: 140.0, cap: 240.0 };
		// hypot(800, 300) / 9 = 94.9, pulled up to the floor.
		assert_eq!(link.max_distance(Surface::new(800.0, 300.0)), 140.0);
		// hypot(4000, 3000) / 9 = 555.5, capped.
		assert_eq!(link.max_distance(Surface::new(4000.0, 3000.0)), 240.0);
	}
}
