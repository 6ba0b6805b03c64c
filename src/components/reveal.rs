//! One-shot reveal-on-scroll wrapper.

use leptos::prelude::*;

use super::handles::IntersectWatch;

/// Viewport fraction that must be visible before the reveal fires.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Fades and slides its children in the first time they scroll into view.
///
/// The observer is one-shot: it disconnects after firing, and a revealed
/// element never hides again. Without observer support the content shows
/// immediately, unanimated.
#[component]
pub fn Reveal(
	/// Transition delay in milliseconds, for staggering siblings.
	#[prop(default = 0)] delay_ms: u32,
	/// Initial downward offset in pixels.
	#[prop(default = 12.0)] offset_y: f64,
	/// Extra classes for the wrapper element.
	#[prop(into, default = String::new())] class: String,
	/// Content to reveal.
	children: Children,
) -> impl IntoView {
	let wrapper_ref = NodeRef::<leptos::html::Div>::new();
	let shown = RwSignal::new(false);

	let watch: StoredValue<Option<IntersectWatch>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(wrapper) = wrapper_ref.get() else {
			return;
		};
		if watch.with_value(|slot| slot.is_some()) || shown.get_untracked() {
			return;
		}
		let wrapper: web_sys::HtmlDivElement = wrapper.into();
		let started = IntersectWatch::once(&wrapper, REVEAL_THRESHOLD, move || {
			shown.set(true);
		});
		if started.is_none() {
			shown.set(true);
		}
		watch.set_value(started);
	});

	on_cleanup(move || {
		watch.set_value(None);
	});

	view! {
		<div
			node_ref=wrapper_ref
			class=format!("reveal {class}")
			class=("is-shown", move || shown.get())
			style=("--reveal-y", format!("{offset_y}px"))
			style=("transition-delay", format!("{delay_ms}ms"))
		>
			{children()}
		</div>
	}
}
