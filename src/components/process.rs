//! Engagement process steps.

use leptos::prelude::*;

use crate::content::ProcessStep;

use super::reveal::Reveal;

/// Four-step "how we work" section with staggered reveals.
#[component]
pub fn Process(
	/// Steps rendered left to right.
	steps: Vec<ProcessStep>,
	/// Anchor for the closing call to action.
	contact: String,
) -> impl IntoView {
	view! {
		<section id="process" class="relative overflow-hidden bg-[#0b0f14] text-white">
			<div class="relative mx-auto max-w-7xl px-6 py-24">
				<header class="max-w-3xl">
					<p class="text-sm text-gray-400">"How we work"</p>
					<h2 class="mt-2 text-3xl font-extrabold tracking-tight sm:text-4xl">
						"From diagnostic to running automation"
					</h2>
					<p class="mt-4 text-gray-300">
						"A short, structured path: find the highest-leverage flows, ship them, keep them improving."
					</p>
				</header>

				<div class="relative mt-12 grid gap-6 md:grid-cols-4">
					<div
						class="pointer-events-none absolute left-0 right-0 top-10 hidden h-px bg-gradient-to-r from-transparent via-white/20 to-transparent md:block"
						aria-hidden="true"
					></div>
					{steps
						.into_iter()
						.enumerate()
						.map(|(i, step)| view! {
							<Reveal delay_ms=i as u32 * 90>
								<article class="relative h-full rounded-2xl bg-white/5 p-6 ring-1 ring-white/10 backdrop-blur-sm">
									<span class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-[#7238e3]/20 text-sm font-bold text-[#bfa3ff] ring-1 ring-[#7238e3]/30">
										{format!("{:02}", step.number)}
									</span>
									<h3 class="mt-4 text-lg font-semibold">{step.title}</h3>
									<p class="mt-2 text-sm text-gray-300">{step.detail}</p>
								</article>
							</Reveal>
						})
						.collect_view()}
				</div>

				<div class="mt-12 flex justify-center">
					<a
						href=contact
						class="inline-flex items-center justify-center rounded-xl bg-white/10 px-6 py-3 text-sm font-semibold ring-1 ring-white/20 transition hover:bg-white/15"
					>
						"Start with a free diagnostic"
					</a>
				</div>
			</div>
		</section>
	}
}
