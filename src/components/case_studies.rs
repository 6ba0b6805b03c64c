//! Customer case studies with reveal-on-scroll cards.

use leptos::prelude::*;

use crate::content::CaseStudy;

use super::decor::DotsOverlay;
use super::media::hide_on_error;
use super::reveal::Reveal;

/// Case-study rows: story copy on the left, KPI card on the right.
#[component]
pub fn CaseStudies(
	/// Stories rendered top to bottom.
	cases: Vec<CaseStudy>,
) -> impl IntoView {
	view! {
		<section id="case-studies" class="relative overflow-hidden bg-gradient-to-b from-[#0b0f14] to-[#111827] text-white">
			<div
				class="pointer-events-none absolute inset-0 opacity-[0.05]"
				style="background-image: repeating-linear-gradient(0deg, rgba(255,255,255,0.5) 0 1px, transparent 1px 8px)"
				aria-hidden="true"
			></div>
			<div
				class="pointer-events-none absolute left-1/2 top-0 hidden h-full w-px -translate-x-1/2 bg-gradient-to-b from-transparent via-white/15 to-transparent md:block"
				aria-hidden="true"
			></div>

			<div class="relative mx-auto max-w-7xl space-y-20 px-6 py-24">
				<header class="max-w-3xl">
					<p class="text-sm text-gray-400">"Case studies"</p>
					<h2 class="mt-2 text-3xl font-extrabold tracking-tight sm:text-4xl">
						"Shipped systems, measured results"
					</h2>
				</header>
				{cases.into_iter().map(|case| view! { <CaseRow case=case /> }).collect_view()}
			</div>
		</section>
	}
}

#[component]
fn CaseRow(case: CaseStudy) -> impl IntoView {
	let CaseStudy { id, story, avatar, person, role, kpis } = case;
	view! {
		<div class="grid items-center gap-10 md:grid-cols-2">
			<Reveal>
				<div class="max-w-xl">
					<h3 class="text-2xl font-extrabold sm:text-3xl">"What we built and why it worked"</h3>
					<p class="mt-4 text-gray-300">{story}</p>
				</div>
			</Reveal>

			<Reveal delay_ms=80 offset_y=18.0 class="relative">
				<div
					class="absolute -left-5 top-8 hidden h-7 w-7 -translate-x-1/2 items-center justify-center rounded-full bg-[#0e1218] ring-1 ring-white/15 md:flex"
					aria-hidden="true"
				>
					<span class="block h-2 w-2 rounded-full bg-[#7238e3]"></span>
				</div>
				<article class="group relative rounded-[28px] bg-gradient-to-br from-white/15 via-white/5 to-transparent p-[1px]">
					<div class="relative overflow-hidden rounded-[28px] bg-[#0e1218]/80 p-6 ring-1 ring-white/10 backdrop-blur">
						<DotsOverlay pattern_id=format!("dots-{id}") />
						<div class="relative flex items-center gap-4">
							<div class="h-11 w-11 overflow-hidden rounded-full ring-2 ring-white/10">
								<img
									src=avatar
									alt=person.clone()
									class="h-full w-full object-cover"
									loading="lazy"
									on:error=move |ev| hide_on_error(&ev)
								/>
							</div>
							<div>
								<div class="text-sm font-semibold">{person}</div>
								<div class="text-xs text-gray-400">{role}</div>
							</div>
							<span class="ml-auto inline-flex items-center gap-2 rounded-full bg-emerald-500/10 px-3 py-1 text-xs text-emerald-300 ring-1 ring-emerald-400/20">
								<span class="live-dot h-2 w-2 rounded-full bg-emerald-400" aria-hidden="true"></span>
								"In production"
							</span>
						</div>
						<ul class="relative mt-5 space-y-2">
							{kpis
								.into_iter()
								.map(|kpi| view! {
									<li class="flex items-center justify-between rounded-xl bg-white/5 px-4 py-3 ring-1 ring-white/10 transition group-hover:-translate-y-px">
										<span class="text-sm">{kpi.label}</span>
										<span class="rounded-full bg-emerald-500/10 px-2.5 py-1 text-xs text-emerald-300 ring-1 ring-emerald-400/20">
											{kpi.value}
										</span>
									</li>
								})
								.collect_view()}
						</ul>
					</div>
				</article>
			</Reveal>
		</div>
	}
}
