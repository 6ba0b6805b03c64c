//! Hero section: typewriter headline, impact card, network mesh backdrop.

use leptos::prelude::*;

use super::backdrop::{NetworkCanvas, NetworkStyle};
use super::decor::GridOverlay;
use super::typewriter::TypewriterText;

/// Opening section with the cycling headline and primary calls to action.
#[component]
pub fn Hero(
	/// Words the headline cycles through.
	words: Vec<String>,
	/// Anchor for the primary call to action.
	contact: String,
) -> impl IntoView {
	view! {
		<section id="home" class="relative overflow-hidden bg-gradient-to-b from-[#0b0f14] to-[#111827] text-white">
			<div
				class="pointer-events-none absolute -top-40 right-[-10rem] h-[36rem] w-[36rem] rounded-full bg-violet-700/25 blur-3xl"
				aria-hidden="true"
			></div>
			<GridOverlay pattern_id="grid-hero" stroke_width=0.8 class="z-0 opacity-[0.07]" />
			<NetworkCanvas
				style=NetworkStyle::wireframe()
				class="pointer-events-none absolute inset-0 z-10 opacity-80"
			/>

			<div class="relative z-20 mx-auto max-w-7xl px-6 py-28 md:py-40">
				<div class="grid items-start gap-12 md:grid-cols-2">
					<div class="max-w-3xl">
						<h1 class="text-4xl font-extrabold leading-tight tracking-tight sm:text-6xl">
							"Your operations, made " <TypewriterText words=words />
						</h1>
						<p class="mt-6 text-lg text-gray-300 sm:text-xl">
							"We build AI and automation flows that save hours, cut errors, and keep every tool in your stack in sync."
						</p>
						<div class="mt-10 flex flex-col gap-4 sm:flex-row">
							<a
								href=contact
								class="inline-flex items-center justify-center rounded-xl bg-violet-600 px-6 py-3 text-base font-semibold ring-1 ring-white/10 transition hover:bg-violet-500"
							>
								"Book a call"
							</a>
							<a
								href="#demo"
								class="inline-flex items-center justify-center rounded-xl bg-white/10 px-6 py-3 text-base font-semibold ring-1 ring-white/20 transition hover:bg-white/15"
							>
								"See how it works"
							</a>
						</div>
						<div class="mt-6 text-sm text-gray-400">
							"Free diagnostic · Make and n8n integrations · Ongoing support"
						</div>
					</div>

					<div class="flex w-full flex-col items-center self-center">
						<ImpactCard />
					</div>
				</div>
			</div>
		</section>
	}
}

/// Animated metrics card shown beside the headline. Bars pulse on CSS
/// keyframes with per-bar durations so they drift out of phase.
#[component]
fn ImpactCard() -> impl IntoView {
	let bars = [
		("Dashboards", 4.4_f64),
		("Summaries", 5.0),
		("Handoffs", 5.6),
		("Replies", 6.2),
	];
	view! {
		<div class="impact-card w-full max-w-[32rem] rounded-2xl border border-white/10 bg-white/5 p-5 shadow-[0_20px_60px_rgba(0,0,0,0.35)] backdrop-blur">
			<div class="mb-4 flex items-center justify-between">
				<div class="text-xs text-white/70">"Hours returned, by flow"</div>
				<div class="flex gap-2">
					<span class="rounded-md bg-white/10 px-2 py-1 text-xs text-white/90">"Live"</span>
					<span class="rounded-md bg-white/10 px-2 py-1 text-xs text-white/70">"Last quarter"</span>
				</div>
			</div>
			<div class="mt-2 grid h-52 grid-cols-4 items-end gap-6">
				{bars
					.into_iter()
					.map(|(_, duration)| view! {
						<div class="flex h-full w-full items-end justify-center">
							<div
								class="impact-bar w-12 rounded-t-md bg-gradient-to-t from-[#7238e3] to-[#ff7ad9]"
								style=("animation-duration", format!("{duration}s"))
							></div>
						</div>
					})
					.collect_view()}
			</div>
			<div class="mt-3 grid grid-cols-4 text-center text-[11px] text-white/60">
				{bars.into_iter().map(|(label, _)| view! { <span>{label}</span> }).collect_view()}
			</div>
		</div>
	}
}
