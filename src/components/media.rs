//! Image helpers.

use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Hide an image that failed to load, so broken logos and avatars vanish
/// instead of rendering placeholder glyphs.
pub fn hide_on_error(ev: &web_sys::Event) {
	if let Some(img) = ev.target().and_then(|t| t.dyn_into::<HtmlImageElement>().ok()) {
		let _ = img.style().set_property("display", "none");
	}
}
