//! Animation-critical styles inlined into the document.
//!
//! Layout and spacing utilities in the markup belong to the site's
//! external stylesheet; the rules here are the ones the animated
//! components depend on to function.

use leptos::prelude::*;

/// Inline style sheet for the animated components.
#[component]
pub fn SiteStyles() -> impl IntoView {
	view! {
		<style>
			{r#"
.reveal {
	opacity: 0;
	transform: translateY(var(--reveal-y, 12px));
	transition: opacity 0.7s ease-out, transform 0.7s ease-out;
	will-change: opacity, transform;
}
.reveal.is-shown {
	opacity: 1;
	transform: none;
}

.tw-holder {
	position: relative;
	display: inline-block;
	white-space: nowrap;
	color: #a78bfa;
}
.tw-caret {
	display: inline-block;
	width: 2px;
	height: 1em;
	margin-left: 2px;
	transform: translateY(2px);
	background: #a78bfa;
	animation: caret-blink 1.1s steps(2, start) infinite;
}
@keyframes caret-blink {
	to { visibility: hidden; }
}

.tab-button {
	background-color: rgba(255, 255, 255, 0.05);
}
.tab-progress {
	transform: scaleX(0);
	will-change: transform;
}

.grid-leaving,
.grid-leaving .use-case-card {
	opacity: 0;
	transform: translateY(8px);
}

.roll-track {
	will-change: transform;
}

.impact-card {
	animation: impact-float 6s ease-in-out infinite;
}
.impact-bar {
	height: 48%;
	animation-name: impact-cycle;
	animation-timing-function: ease-in-out;
	animation-iteration-count: infinite;
	animation-direction: alternate;
}
@keyframes impact-float {
	0%, 100% { transform: translateY(0); }
	50% { transform: translateY(-4px); }
}
@keyframes impact-cycle {
	0% { height: 48%; }
	25% { height: 92%; }
	50% { height: 58%; }
	75% { height: 84%; }
	100% { height: 52%; }
}

.live-dot {
	animation: live-pulse 2s ease-in-out infinite;
}
@keyframes live-pulse {
	50% { opacity: 0.35; }
}
"#}
		</style>
	}
}
