//! Use-case showcase with auto-advancing filter tabs.
//!
//! One tab is active at a time. A frame loop drives the progress bar, a
//! timeout advances round-robin when the bar fills, and picking a tab by
//! hand cancels both, plays the grid leave transition, and restarts the
//! cycle on the new tab. At most one advance timer exists at any moment.

use leptos::prelude::*;

use crate::content::{Category, UseCase};

use super::handles::{FrameLoop, Timeout};

/// How long each tab stays active before auto-advancing.
const TAB_MS: f64 = 5000.0;
/// Grid fade-out duration when leaving a tab.
const LEAVE_MS: i32 = 180;

/// Timers backing the tab cycle, dropped as one unit on unmount.
#[derive(Default)]
struct TabTimers {
	progress: Option<FrameLoop>,
	advance: Option<Timeout>,
	swap: Option<Timeout>,
}

/// Arm the progress sampler and the auto-advance timer for the active tab.
fn start_cycle(
	timers: StoredValue<TabTimers, LocalStorage>,
	active: RwSignal<Category>,
	leaving: RwSignal<bool>,
	progress: RwSignal<f64>,
) {
	progress.set(0.0);

	let mut started = None;
	let sampler = FrameLoop::start(move |t| {
		let t0 = *started.get_or_insert(t);
		progress.set(((t - t0) / TAB_MS).min(1.0));
	});

	let advance = Timeout::after(TAB_MS as i32, move || {
		let next = active.get_untracked().next();
		switch_to(timers, next, active, leaving, progress);
	});

	timers.update_value(|slots| {
		slots.progress = Some(sampler);
		slots.advance = Some(advance);
	});
}

/// Cancel the running cycle, play the leave transition, then activate
/// `next` and restart.
fn switch_to(
	timers: StoredValue<TabTimers, LocalStorage>,
	next: Category,
	active: RwSignal<Category>,
	leaving: RwSignal<bool>,
	progress: RwSignal<f64>,
) {
	timers.update_value(|slots| {
		slots.progress = None;
		slots.advance = None;
	});
	leaving.set(true);

	let swap = Timeout::after(LEAVE_MS, move || {
		active.set(next);
		leaving.set(false);
		start_cycle(timers, active, leaving, progress);
	});
	timers.update_value(|slots| slots.swap = Some(swap));
}

/// Filterable use-case grid with tab progress bars.
#[component]
pub fn UseCases(
	/// Cards shown in the grid, across all categories.
	items: Vec<UseCase>,
	/// Anchor for the featured card's call to action.
	contact: String,
) -> impl IntoView {
	let active = RwSignal::new(Category::Ai);
	let leaving = RwSignal::new(false);
	let progress = RwSignal::new(0.0_f64);

	let timers: StoredValue<TabTimers, LocalStorage> = StoredValue::new_local(TabTimers::default());

	start_cycle(timers, active, leaving, progress);

	// Manual selection is ignored mid-transition and for the active tab.
	let select = move |next: Category| {
		if next == active.get_untracked() || leaving.get_untracked() {
			return;
		}
		switch_to(timers, next, active, leaving, progress);
	};

	on_cleanup(move || {
		timers.set_value(TabTimers::default());
	});

	view! {
		<section id="use-cases" class="relative overflow-hidden bg-gradient-to-b from-[#0f141b] to-[#0b0f14] text-white">
			<div
				class="pointer-events-none absolute inset-0"
				style="background-image: radial-gradient(1200px 600px at 10% 90%, rgba(114,56,227,0.12), transparent 60%)"
				aria-hidden="true"
			></div>

			<div class="relative mx-auto max-w-7xl px-6 py-24">
				<header class="max-w-3xl">
					<p class="text-sm text-gray-400">"Use cases"</p>
					<h2 class="mt-2 text-3xl font-extrabold tracking-tight sm:text-4xl">
						"How we apply " <span class="text-[#a78bfa]">"AI"</span> ", "
						<span class="text-[#a78bfa]">"automation"</span> " and "
						<span class="text-[#a78bfa]">"data"</span> " to your business"
					</h2>
					<p class="mt-4 text-gray-300">
						"Real flows and models that save hours every week and cut error rates."
					</p>
				</header>

				<div class="mt-8 flex flex-wrap gap-2" role="tablist" aria-label="Use case categories">
					{Category::ORDER
						.into_iter()
						.map(|tab| {
							let select = select.clone();
							view! {
								<button
									type="button"
									role="tab"
									class="tab-button relative overflow-hidden rounded-full px-4 py-2 text-sm font-medium ring-1 transition"
									class=("ring-[#7238e3]/40", move || active.get() == tab)
									class=("text-white", move || active.get() == tab)
									class=("ring-white/10", move || active.get() != tab)
									class=("text-gray-300", move || active.get() != tab)
									aria-selected=move || (active.get() == tab).to_string()
									on:click=move |_| select(tab)
								>
									<span
										class="tab-progress absolute inset-0 origin-left bg-[#7238e3]/35"
										style:transform=move || {
											if active.get() == tab {
												format!("scaleX({})", progress.get())
											} else {
												"scaleX(0)".to_string()
											}
										}
										aria-hidden="true"
									></span>
									<span class="relative z-10">{tab.label()}</span>
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="mt-10 grid gap-6 md:grid-cols-3">
					<div class="md:col-span-1">
						<div class="relative h-full rounded-3xl p-[1px] bg-gradient-to-br from-[#6c2bd9]/60 via-[#7238e3]/25 to-transparent">
							<div class="flex h-full flex-col rounded-3xl bg-black/30 px-6 py-8 ring-1 ring-white/10 backdrop-blur-sm">
								<h3 class="text-xl font-semibold">"Focused teams, faster operations"</h3>
								<p class="mt-3 text-sm text-gray-300">
									"Hand the repetitive work to machines and spend the hours where they compound."
								</p>
								<ul class="mt-5 space-y-2 text-sm text-gray-300">
									<li>"• Coordination between teams"</li>
									<li>"• Routine tasks executed automatically"</li>
									<li>"• Fresh data at every step"</li>
								</ul>
								<a
									href=contact
									class="mt-auto inline-flex items-center justify-center rounded-xl bg-white/10 px-5 py-2.5 text-sm font-semibold ring-1 ring-white/20 transition hover:bg-white/15"
								>
									"Explore an implementation"
								</a>
							</div>
						</div>
					</div>

					<div class="md:col-span-2">
						<div
							class="grid gap-6 sm:grid-cols-2 transition duration-150"
							class=("grid-leaving", move || leaving.get())
						>
							{move || {
								items
									.iter()
									.filter(|c| c.category == active.get())
									.cloned()
									.enumerate()
									.map(|(i, c)| {
										let UseCase { title, detail, category } = c;
										view! {
											<article
												class="use-case-card rounded-2xl bg-white/5 p-5 ring-1 ring-white/10 backdrop-blur-sm transition duration-300 hover:-translate-y-1 hover:bg-white/10"
												style=("transition-delay", format!("{}ms", i * 40))
											>
												<div class="flex items-start gap-3">
													<span
														class="mt-1 inline-flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-[#7238e3]/20 ring-1 ring-[#7238e3]/30"
														aria-hidden="true"
													>
														<svg viewBox="0 0 24 24" class="h-4 w-4 text-[#a78bfa]" fill="currentColor">
															<path d="M13 2L4.5 12.5h5L9 22l8.5-10.5h-5L13 2z"></path>
														</svg>
													</span>
													<div>
														<h3 class="text-base font-semibold">{title}</h3>
														<p class="mt-1 text-sm text-gray-300">{detail}</p>
														<div class="mt-3">
															<span class="inline-flex rounded-full bg-white/5 px-2.5 py-1 text-xs text-gray-300 ring-1 ring-white/10">
																{category.label()}
															</span>
														</div>
													</div>
												</div>
											</article>
										}
									})
									.collect_view()
							}}
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}
