//! Per-frame canvas drawing for the backdrop variants.
//!
//! Network frame order: clear, wide faint link pass, thin bright link
//! pass, advance entities, halo dots, core dots. Starfield frame order:
//! clear, additive twinkle pass, restore default compositing.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::Field;
use super::starfield::Starfield;
use super::style::{Dot, LinePass, NetworkStyle};

/// Draw one network frame and advance the field.
pub fn draw_network(ctx: &CanvasRenderingContext2d, field: &mut Field, style: &NetworkStyle) {
	let surface = field.surface();
	ctx.clear_rect(0.0, 0.0, surface.width, surface.height);

	let max_d = style.link.max_distance(surface);
	for pass in &style.passes {
		stroke_links(ctx, field, pass, max_d);
	}
	ctx.set_global_alpha(1.0);

	field.advance();

	for p in &field.particles {
		fill_dot(ctx, p.x, p.y, style.halo);
		fill_dot(ctx, p.x, p.y, style.core);
	}
}

/// Stroke every pair closer than `max_d`, alpha fading with distance.
fn stroke_links(ctx: &CanvasRenderingContext2d, field: &Field, pass: &LinePass, max_d: f64) {
	ctx.set_line_width(pass.width);
	ctx.set_stroke_style_str(&pass.color.to_css());

	let particles = &field.particles;
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let a = &particles[i];
			let b = &particles[j];
			let d = (a.x - b.x).hypot(a.y - b.y);
			if d < max_d {
				ctx.set_global_alpha(pass.alpha * (1.0 - d / max_d));
				ctx.begin_path();
				ctx.move_to(a.x, a.y);
				ctx.line_to(b.x, b.y);
				ctx.stroke();
			}
		}
	}
}

fn fill_dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, dot: Dot) {
	ctx.set_fill_style_str(&dot.color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(x, y, dot.radius, 0.0, PI * 2.0);
	ctx.fill();
}

/// Draw one starfield frame at the given frame timestamp.
pub fn draw_starfield(ctx: &CanvasRenderingContext2d, field: &Starfield, t_ms: f64) {
	let surface = field.surface();
	ctx.clear_rect(0.0, 0.0, surface.width, surface.height);

	let _ = ctx.set_global_composite_operation("lighter");
	for s in &field.stars {
		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", s.twinkle(t_ms)));
		ctx.begin_path();
		let _ = ctx.arc(s.x, s.y, s.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
	let _ = ctx.set_global_composite_operation("source-over");
}
