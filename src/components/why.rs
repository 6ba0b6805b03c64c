//! Value-proposition section: embed panel, glow cards, starfield backdrop.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::content::Benefit;

use super::backdrop::{StarStyle, StarfieldCanvas};
use super::decor::GridOverlay;

/// "Why automate" section with the walkthrough embed and benefit cards.
#[component]
pub fn Why(
	/// Benefit cards, rendered in order.
	benefits: Vec<Benefit>,
	/// Walkthrough video URL for the embed panel.
	embed_url: String,
) -> impl IntoView {
	view! {
		<section id="demo" class="relative overflow-hidden bg-[#080c13] text-white">
			<div
				class="pointer-events-none absolute inset-0 z-0"
				style="background-image: radial-gradient(560px 360px at 50% 40%, rgba(114,56,227,0.5) 0%, rgba(114,56,227,0.24) 46%, transparent 68%), radial-gradient(900px 520px at 85% 15%, rgba(191,76,65,0.18) 0%, transparent 60%)"
				aria-hidden="true"
			></div>
			<StarfieldCanvas
				style=StarStyle::dusk()
				class="pointer-events-none absolute inset-0 z-[5] opacity-50"
			/>
			<GridOverlay pattern_id="grid-why" stroke_width=0.5 class="z-10 opacity-[0.08]" />

			<div class="relative z-20 mx-auto max-w-7xl px-6 py-20 md:py-28">
				<div class="relative overflow-hidden rounded-[28px] bg-black/60 px-6 py-12 ring-1 ring-white/15 shadow-[0_20px_60px_rgba(0,0,0,0.35)] backdrop-blur-xl md:px-10">
					<header class="max-w-3xl">
						<p class="text-sm text-gray-400">"Why it matters"</p>
						<h2 class="mt-2 text-3xl font-extrabold tracking-tight sm:text-4xl">
							"Manual operations don't scale. Automated ones do."
						</h2>
						<p class="mt-4 text-gray-300">
							"Cut repetitive work, answer customers faster, and grow without adding friction."
						</p>
					</header>

					<div class="mt-10 grid gap-10 md:grid-cols-2 md:items-start">
						<div class="aspect-video overflow-hidden rounded-2xl ring-1 ring-white/10 shadow-2xl">
							<iframe
								src=embed_url
								title="Product walkthrough"
								class="h-full w-full"
								attr:loading="lazy"
								allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
								allowfullscreen=true
								referrerpolicy="strict-origin-when-cross-origin"
							></iframe>
						</div>

						<div class="grid gap-4 sm:grid-cols-2">
							{benefits.into_iter().map(|b| view! { <GlowCard benefit=b /> }).collect_view()}
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Card with a pointer-tracking radial highlight.
#[component]
fn GlowCard(benefit: Benefit) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Article>::new();
	let spot = RwSignal::new(None::<(f64, f64)>);

	let on_move = move |ev: MouseEvent| {
		let Some(card) = card_ref.get_untracked() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		spot.set(Some((
			f64::from(ev.client_x()) - rect.left(),
			f64::from(ev.client_y()) - rect.top(),
		)));
	};

	view! {
		<article
			node_ref=card_ref
			class="relative overflow-hidden rounded-2xl bg-black/60 p-5 ring-1 ring-white/10 backdrop-blur-sm transition-colors duration-300 hover:bg-black/70 hover:ring-white/25"
			on:mousemove=on_move
			on:mouseleave=move |_| spot.set(None)
		>
			<span
				class="pointer-events-none absolute inset-0"
				style:background=move || match spot.get() {
					Some((x, y)) => format!(
						"radial-gradient(220px 220px at {x}px {y}px, rgba(255,255,255,0.16), transparent 60%)"
					),
					None => "transparent".to_string(),
				}
				aria-hidden="true"
			></span>
			<div class="relative z-10 flex items-start gap-3">
				<span
					class="mt-1 inline-flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-white/15 ring-1 ring-white/30"
					aria-hidden="true"
				>
					<svg viewBox="0 0 24 24" class="h-4 w-4 text-white" fill="currentColor">
						<path d="M10 17l-4-4 1.4-1.4 2.6 2.6 6.6-6.6L18 9l-8 8z"></path>
					</svg>
				</span>
				<div>
					<h3 class="text-base font-semibold">{benefit.title}</h3>
					<p class="mt-1 text-sm text-gray-300">{benefit.detail}</p>
				</div>
			</div>
		</article>
	}
}
