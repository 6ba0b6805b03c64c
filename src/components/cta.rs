//! Closing call to action over a particle mesh.

use leptos::prelude::*;

use super::backdrop::{NetworkCanvas, NetworkStyle};
use super::decor::GridOverlay;

/// Full-width closing banner with the nebula mesh backdrop.
#[component]
pub fn Cta(
	/// Anchor for the contact button.
	contact: String,
) -> impl IntoView {
	view! {
		<section id="cta" class="relative overflow-hidden bg-[#0b0f14] text-white">
			<div
				class="pointer-events-none absolute inset-0 z-0"
				style="background-image: radial-gradient(560px 360px at 50% 50%, rgba(114,56,227,0.5) 0%, rgba(114,56,227,0.2) 50%, transparent 70%)"
				aria-hidden="true"
			></div>
			<GridOverlay pattern_id="grid-cta" stroke_width=0.6 class="z-10 opacity-[0.06]" />
			<NetworkCanvas
				style=NetworkStyle::nebula()
				class="pointer-events-none absolute inset-0 z-10 opacity-80"
			/>

			<div class="relative z-20 mx-auto max-w-6xl px-6 py-24 md:py-32">
				<div class="relative rounded-[28px] bg-[conic-gradient(from_180deg_at_50%_50%,rgba(255,255,255,0.22),rgba(255,255,255,0.04),rgba(255,255,255,0.22))] p-[1px]">
					<div class="relative overflow-hidden rounded-[27px] bg-black/70 px-6 py-16 text-center ring-1 ring-white/15 shadow-[0_24px_90px_rgba(0,0,0,0.55)] backdrop-blur-xl md:px-12">
						<div
							class="pointer-events-none absolute inset-0 rounded-[27px] opacity-[0.14]"
							style="background: linear-gradient(180deg, rgba(255,255,255,0.45), rgba(255,255,255,0.12), rgba(255,255,255,0.04), rgba(255,255,255,0.12), rgba(255,255,255,0.45))"
							aria-hidden="true"
						></div>
						<div
							class="pointer-events-none absolute inset-0 rounded-[27px]"
							style="box-shadow: inset 0 0 140px rgba(0,0,0,0.48), inset 0 0 60px rgba(0,0,0,0.3)"
							aria-hidden="true"
						></div>
						<h2 class="text-3xl font-extrabold tracking-tight sm:text-5xl">
							"Your team has better things to do than manual work."
						</h2>
						<p class="mt-4 text-base text-gray-300">
							"Tell us where the hours go. We'll show you how to get them back."
						</p>
						<div class="mt-10">
							<a
								href=contact
								class="inline-flex items-center justify-center rounded-xl bg-violet-600 px-6 py-3 text-base font-semibold ring-1 ring-white/10 transition hover:bg-violet-500"
							>
								"Book a meeting"
							</a>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}
