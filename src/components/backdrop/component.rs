//! Leptos components hosting the backdrop canvases.
//!
//! Each component owns its canvas element, one frame loop, and one resize
//! watch, dropped together when the component leaves the tree. A missing
//! parent or 2D context leaves an inert canvas behind; nothing is drawn
//! and nothing is scheduled.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::components::handles::{FrameLoop, ResizeWatch};

use super::field::Field;
use super::render;
use super::rng::Rng;
use super::starfield::Starfield;
use super::style::{NetworkStyle, StarStyle};
use super::surface::{self, Surface};

/// Fallback size for canvases whose parent cannot be measured at mount.
const FALLBACK: Surface = Surface {
	width: 800.0,
	height: 400.0,
};

/// Handles owned by a mounted backdrop, dropped as one unit.
struct Backdrop {
	_frames: FrameLoop,
	_resize: Option<ResizeWatch>,
}

/// Measure the parent's content box, substituting fallback axes for
/// zero-sized or missing parents.
fn parent_size(canvas: &HtmlCanvasElement) -> Surface {
	let parent = canvas.parent_element();
	let width = parent
		.as_ref()
		.map(|p| p.client_width())
		.filter(|w| *w > 0)
		.map_or(FALLBACK.width, f64::from);
	let height = parent
		.as_ref()
		.map(|p| p.client_height())
		.filter(|h| *h > 0)
		.map_or(FALLBACK.height, f64::from);
	Surface::new(width, height)
}

fn current_device_scale() -> f64 {
	surface::device_scale(web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()))
}

/// Canvas backdrop drawing a drifting linked-particle mesh.
///
/// Mount inside a positioned, sized container. The canvas tracks the
/// parent's content box: real resizes rebind the surface and reposition
/// entities proportionally, sub-threshold jitter is ignored.
#[component]
pub fn NetworkCanvas(
	/// Visual and motion parameters, usually one of the presets.
	#[prop(default = NetworkStyle::nebula())] style: NetworkStyle,
	/// Extra classes merged onto the canvas element.
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let backdrop: StoredValue<Option<Backdrop>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if backdrop.with_value(|slot| slot.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let scale = current_device_scale();
		let size = parent_size(&canvas);
		let Some(ctx) = surface::bind(&canvas, size, scale) else {
			return;
		};

		let mut rng = Rng::from_clock();
		let field = Rc::new(RefCell::new(Field::generate(&style, size, &mut rng)));

		let resize = canvas.parent_element().and_then(|parent| {
			let field = field.clone();
			let canvas = canvas.clone();
			let ctx = ctx.clone();
			ResizeWatch::observe(&parent, move |w, h| {
				let observed = Surface::observed(w, h);
				let mut field = field.borrow_mut();
				if field.surface().is_noise(observed) {
					return;
				}
				surface::apply(&canvas, &ctx, observed, scale);
				field.rescale(observed);
			})
		});

		let style = style.clone();
		let frames = FrameLoop::start(move |_t| {
			render::draw_network(&ctx, &mut field.borrow_mut(), &style);
		});

		backdrop.set_value(Some(Backdrop {
			_frames: frames,
			_resize: resize,
		}));
	});

	on_cleanup(move || {
		backdrop.set_value(None);
	});

	view! {
		<canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas>
	}
}

/// Canvas backdrop drawing a twinkling starfield.
#[component]
pub fn StarfieldCanvas(
	/// Star generation parameters.
	#[prop(default = StarStyle::dusk())] style: StarStyle,
	/// Extra classes merged onto the canvas element.
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let backdrop: StoredValue<Option<Backdrop>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if backdrop.with_value(|slot| slot.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let scale = current_device_scale();
		let size = parent_size(&canvas);
		let Some(ctx) = surface::bind(&canvas, size, scale) else {
			return;
		};

		let mut rng = Rng::from_clock();
		let field = Rc::new(RefCell::new(Starfield::generate(&style, size, &mut rng)));

		let resize = canvas.parent_element().and_then(|parent| {
			let field = field.clone();
			let canvas = canvas.clone();
			let ctx = ctx.clone();
			ResizeWatch::observe(&parent, move |w, h| {
				let observed = Surface::observed(w, h);
				let mut field = field.borrow_mut();
				if field.surface().is_noise(observed) {
					return;
				}
				surface::apply(&canvas, &ctx, observed, scale);
				field.rescale(observed);
			})
		});

		let frames = FrameLoop::start(move |t| {
			render::draw_starfield(&ctx, &field.borrow(), t);
		});

		backdrop.set_value(Some(Backdrop {
			_frames: frames,
			_resize: resize,
		}));
	});

	on_cleanup(move || {
		backdrop.set_value(None);
	});

	view! {
		<canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas>
	}
}
