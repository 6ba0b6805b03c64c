//! Owned handles for scheduled work and DOM observers.
//!
//! Every animation frame callback, timer, and observer in this crate is
//! held by one of these handles, acquired on mount and dropped via
//! `on_cleanup`. Dropping cancels the underlying schedule, and callbacks
//! check a shared cancelled flag before touching state, so a callback
//! already queued at teardown becomes a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverInit, ResizeObserver};

/// Self-rescheduling animation-frame loop.
///
/// The callback receives the frame timestamp in milliseconds and requests
/// the next frame itself. Dropping cancels the pending request and flags
/// the closure so an in-flight frame bails out.
pub struct FrameLoop {
	cancelled: Rc<Cell<bool>>,
	frame_id: Rc<Cell<i32>>,
	// The closure reschedules itself, so it lives in a shared slot it can
	// reach through a weak reference.
	_tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
	/// Start a loop invoking `step` once per animation frame.
	pub fn start(mut step: impl FnMut(f64) + 'static) -> Self {
		let cancelled = Rc::new(Cell::new(false));
		let frame_id = Rc::new(Cell::new(0));
		let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

		let flag = cancelled.clone();
		let pending = frame_id.clone();
		let slot = Rc::downgrade(&tick);
		*tick.borrow_mut() = Some(Closure::new(move |t: f64| {
			if flag.get() {
				return;
			}
			step(t);
			if let Some(slot) = slot.upgrade() {
				if let Some(ref cb) = *slot.borrow() {
					pending.set(request_frame(cb));
				}
			}
		}));

		if let Some(ref cb) = *tick.borrow() {
			frame_id.set(request_frame(cb));
		}

		Self {
			cancelled,
			frame_id,
			_tick: tick,
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancelled.set(true);
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(self.frame_id.get());
		}
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> i32 {
	web_sys::window()
		.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
		.unwrap_or(0)
}

/// One-shot timer. Dropping clears the timeout.
pub struct Timeout {
	id: i32,
	cancelled: Rc<Cell<bool>>,
	_callback: Closure<dyn FnMut()>,
}

impl Timeout {
	/// Schedule `action` after `delay_ms`.
	pub fn after(delay_ms: i32, action: impl FnOnce() + 'static) -> Self {
		let cancelled = Rc::new(Cell::new(false));
		let flag = cancelled.clone();
		let mut action = Some(action);
		let callback = Closure::new(move || {
			if flag.get() {
				return;
			}
			if let Some(action) = action.take() {
				action();
			}
		});
		let id = web_sys::window()
			.and_then(|w| {
				w.set_timeout_with_callback_and_timeout_and_arguments_0(
					callback.as_ref().unchecked_ref(),
					delay_ms,
				)
				.ok()
			})
			.unwrap_or(0);
		Self {
			id,
			cancelled,
			_callback: callback,
		}
	}
}

impl Drop for Timeout {
	fn drop(&mut self) {
		self.cancelled.set(true);
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(self.id);
		}
	}
}

/// Repeating timer. Dropping clears the interval.
pub struct Interval {
	id: i32,
	cancelled: Rc<Cell<bool>>,
	_callback: Closure<dyn FnMut()>,
}

impl Interval {
	/// Run `action` every `period_ms`.
	pub fn every(period_ms: i32, mut action: impl FnMut() + 'static) -> Self {
		let cancelled = Rc::new(Cell::new(false));
		let flag = cancelled.clone();
		let callback = Closure::new(move || {
			if flag.get() {
				return;
			}
			action();
		});
		let id = web_sys::window()
			.and_then(|w| {
				w.set_interval_with_callback_and_timeout_and_arguments_0(
					callback.as_ref().unchecked_ref(),
					period_ms,
				)
				.ok()
			})
			.unwrap_or(0);
		Self {
			id,
			cancelled,
			_callback: callback,
		}
	}
}

impl Drop for Interval {
	fn drop(&mut self) {
		self.cancelled.set(true);
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.id);
		}
	}
}

/// Content-box resize observer. Dropping disconnects.
pub struct ResizeWatch {
	observer: ResizeObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
	/// Observe `target`, invoking `on_size` with content-rect dimensions.
	/// `None` when the observer cannot be constructed.
	pub fn observe(target: &Element, mut on_size: impl FnMut(f64, f64) + 'static) -> Option<Self> {
		let callback = Closure::new(move |entries: js_sys::Array| {
			let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() else {
				return;
			};
			let rect = entry.content_rect();
			on_size(rect.width(), rect.height());
		});
		let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
		observer.observe(target);
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ResizeWatch {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// One-shot viewport-intersection observer: fires `on_visible` the first
/// time the target crosses the threshold, then disconnects itself.
/// Dropping disconnects early.
pub struct IntersectWatch {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectWatch {
	/// Observe `target` with the given visibility `threshold`. `None` when
	/// the observer cannot be constructed.
	pub fn once(target: &Element, threshold: f64, on_visible: impl FnOnce() + 'static) -> Option<Self> {
		let mut on_visible = Some(on_visible);
		let callback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
			let visible = entries.iter().any(|entry| {
				entry
					.dyn_into::<web_sys::IntersectionObserverEntry>()
					.map(|e| e.is_intersecting())
					.unwrap_or(false)
			});
			if visible {
				if let Some(on_visible) = on_visible.take() {
					on_visible();
				}
				observer.disconnect();
			}
		});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
		observer.observe(target);
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for IntersectWatch {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
