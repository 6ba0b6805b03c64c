//! Network particle set: generation, per-frame motion, boundary handling.

use super::rng::Rng;
use super::style::{Boundary, NetworkStyle};
use super::surface::Surface;

/// A single drifting point.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in logical px.
	pub x: f64,
	/// Vertical position in logical px.
	pub y: f64,
	/// Per-frame horizontal displacement.
	pub vx: f64,
	/// Per-frame vertical displacement.
	pub vy: f64,
}

/// The entity set plus the surface it moves within.
///
/// Generated exactly once per mount. Resizes reposition the existing
/// entities proportionally; the set itself is never regenerated.
pub struct Field {
	/// Entities in generation order.
	pub particles: Vec<Particle>,
	surface: Surface,
	boundary: Boundary,
}

impl Field {
	/// Generate the entity set for a freshly measured surface.
	pub fn generate(style: &NetworkStyle, surface: Surface, rng: &mut Rng) -> Self {
		let count = style.density.count(surface);
		let mut particles = Vec::with_capacity(count);
		for _ in 0..count {
			particles.push(Particle {
				x: rng.range(0.0, surface.width),
				y: rng.range(0.0, surface.height),
				vx: rng.range(-style.max_speed, style.max_speed),
				vy: rng.range(-style.max_speed, style.max_speed),
			});
		}
		Self {
			particles,
			surface,
			boundary: style.boundary,
		}
	}

	/// Surface the entities currently live in.
	pub fn surface(&self) -> Surface {
		self.surface
	}

	/// Move every entity one frame and apply the boundary rule.
	pub fn advance(&mut self) {
		let Surface { width, height } = self.surface;
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			match self.boundary {
				Boundary::Reflect => {
					if p.x < 0.0 || p.x > width {
						p.vx = -p.vx;
					}
					if p.y < 0.0 || p.y > height {
						p.vy = -p.vy;
					}
				}
				Boundary::Wrap { margin } => {
					if p.x < -margin {
						p.x = width + margin;
					} else if p.x > width + margin {
						p.x = -margin;
					}
					if p.y < -margin {
						p.y = height + margin;
					} else if p.y > height + margin {
						p.y = -margin;
					}
				}
			}
		}
	}

	/// Reposition entities proportionally for a new surface size.
	pub fn rescale(&mut self, new: Surface) {
		if let Some((sx, sy)) = self.surface.rescale_ratios(new) {
			for p in &mut self.particles {
				p.x *= sx;
				p.y *= sy;
			}
		}
		self.surface = new;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::style::Density;

	fn test_style(boundary: Boundary) -> NetworkStyle {
		let mut style = NetworkStyle::nebula();
		style.boundary = boundary;
		style
	}

	#[test]
	fn generation_stays_inside_surface_and_speed() {
		let style = NetworkStyle::wireframe();
		let surface = Surface::new(1366.0, 768.0);
		let mut rng = Rng::new(42);
		let field = Field::generate(&style, surface, &mut rng);

		assert_eq!(field.particles.len(), style.density.count(surface));
		for p in &field.particles {
			assert!((0.0..surface.width).contains(&p.x));
			assert!((0.0..surface.height).contains(&p.y));
			assert!(p.vx.abs() <= style.max_speed);
			assert!(p.vy.abs() <= style.max_speed);
		}
	}

	#[test]
	fn same_seed_reproduces_the_layout() {
		let style = NetworkStyle::nebula();
		let surface = Surface::new(1366.0, 768.0);
		let a = Field::generate(&style, surface, &mut Rng::new(400));
		let b = Field::generate(&style, surface, &mut Rng::new(400));

		assert_eq!(a.particles.len(), b.particles.len());
		for (pa, pb) in a.particles.iter().zip(&b.particles) {
			assert_eq!((pa.x, pa.y, pa.vx, pa.vy), (pb.x, pb.y, pb.vx, pb.vy));
		}
	}

	#[test]
	fn count_holds_for_degenerate_surfaces() {
		let style = NetworkStyle::nebula();
		let mut rng = Rng::new(1);
		for (w, h) in [(1.0, 1.0), (1.0, 4000.0), (4000.0, 1.0), (9000.0, 9000.0)] {
			let field = Field::generate(&style, Surface::new(w, h), &mut rng);
			assert!((style.density.min..=style.density.max).contains(&field.particles.len()));
		}
	}

	#[test]
	fn reflect_negates_outgoing_velocity() {
		let mut field = Field::generate(&test_style(Boundary::Reflect), Surface::new(100.0, 100.0), &mut Rng::new(5));
		field.particles.clear();
		field.particles.push(Particle { x: 99.9, y: 50.0, vx: 0.3, vy: 0.0 });

		field.advance();
		let p = &field.particles[0];
		assert!(p.x > 100.0);
		assert_eq!(p.vx, -0.3);

		// The reflected velocity carries it back inside on later frames.
		field.advance();
		assert!(field.particles[0].x < 100.0);
	}

	#[test]
	fn wrap_teleports_past_the_margin() {
		let mut field = Field::generate(&test_style(Boundary::Wrap { margin: 12.0 }), Surface::new(100.0, 100.0), &mut Rng::new(5));
		field.particles.clear();
		field.particles.push(Particle { x: 111.85, y: 50.0, vx: 0.1, vy: 0.0 });

		// Still within the margin: drifts without wrapping.
		field.advance();
		assert!((field.particles[0].x - 111.95).abs() < 1e-9);

		// Past the margin: reappears at the opposite edge.
		field.advance();
		assert_eq!(field.particles[0].x, -12.0);
	}

	#[test]
	fn rescale_multiplies_positions_by_exact_ratios() {
		let style = NetworkStyle::wireframe();
		let mut rng = Rng::new(7);
		let mut field = Field::generate(&style, Surface::new(800.0, 300.0), &mut rng);
		let before: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();

		// Width doubles, height unchanged.
		field.rescale(Surface::new(1600.0, 300.0));
		for (p, (x0, y0)) in field.particles.iter().zip(&before) {
			assert_eq!(p.x, x0 * 2.0);
			assert_eq!(p.y, *y0);
		}
		assert_eq!(field.surface(), Surface::new(1600.0, 300.0));
	}

	#[test]
	fn sequential_rescales_compose() {
		let style = NetworkStyle::nebula();
		let mut rng = Rng::new(11);
		let mut field = Field::generate(&style, Surface::new(800.0, 400.0), &mut rng);
		let before: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();

		field.rescale(Surface::new(400.0, 200.0));
		field.rescale(Surface::new(800.0, 400.0));
		for (p, (x0, y0)) in field.particles.iter().zip(&before) {
			assert!((p.x - x0).abs() < 1e-9);
			assert!((p.y - y0).abs() < 1e-9);
		}
		assert_eq!(field.particles.len(), before.len());
	}

	#[test]
	fn density_scenario_from_hero_mount() {
		let density = Density { per_px: 1.0 / 20_000.0, min: 40, max: 110 };
		assert_eq!(density.count(Surface::new(800.0, 300.0)), 40);
	}
}
