//! Shared decorative SVG overlays.

use leptos::prelude::*;

/// Faint square-grid overlay. `pattern_id` must be unique on the page.
#[component]
pub fn GridOverlay(
	/// Unique SVG pattern id.
	#[prop(into)] pattern_id: String,
	/// Grid line width.
	#[prop(default = 0.6)] stroke_width: f64,
	/// Extra classes (z-index, opacity) for the svg element.
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let fill = format!("url(#{pattern_id})");
	view! {
		<svg class=format!("pointer-events-none absolute inset-0 h-full w-full {class}") aria-hidden="true">
			<defs>
				<pattern id=pattern_id width="32" height="32" patternUnits="userSpaceOnUse">
					<path d="M 32 0 L 0 0 0 32" fill="none" stroke="white" stroke-width=stroke_width></path>
				</pattern>
			</defs>
			<rect width="100%" height="100%" fill=fill></rect>
		</svg>
	}
}

/// Dotted-texture overlay used inside framed panels.
#[component]
pub fn DotsOverlay(
	/// Unique SVG pattern id.
	#[prop(into)] pattern_id: String,
) -> impl IntoView {
	let fill = format!("url(#{pattern_id})");
	view! {
		<svg class="pointer-events-none absolute inset-0 h-full w-full opacity-[0.08]" aria-hidden="true">
			<defs>
				<pattern id=pattern_id width="22" height="22" patternUnits="userSpaceOnUse">
					<circle cx="1.4" cy="1.4" r="1.4" fill="white"></circle>
				</pattern>
			</defs>
			<rect width="100%" height="100%" fill=fill></rect>
		</svg>
	}
}
