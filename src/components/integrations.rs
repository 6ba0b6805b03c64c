//! Integrations band with the rolling logo carousel.
//!
//! Every few seconds each slot's three-cell track rises one cell to show
//! the back logo, falls back after a stagger sweep, then snaps its
//! transition off one frame later. Front/back assignments never change,
//! so a full rise-and-fall cycle restores exactly the resting state.

use leptos::prelude::*;

use crate::content::IconPair;

use super::decor::DotsOverlay;
use super::handles::{Interval, Timeout};
use super::media::hide_on_error;

/// Gap between roll cycles.
const CYCLE_MS: i32 = 5000;
/// Transform transition length for one slot.
const ROLL_MS: u64 = 600;
/// Extra transition delay per slot index.
const STAGGER_MS: u64 = 120;
/// One frame, to let the snapped-off transition apply first.
const SNAP_MS: i32 = 16;

/// Track position within a roll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RollPhase {
	/// Resting on the front logo, transitions disabled.
	Idle,
	/// Track raised one cell, back logo showing.
	Rising,
	/// Track returned to the front logo, transitions still active.
	Falling,
}

impl RollPhase {
	/// Vertical track offset as a fraction of track height.
	fn offset_fraction(self) -> f64 {
		match self {
			RollPhase::Rising => -1.0 / 3.0,
			RollPhase::Idle | RollPhase::Falling => 0.0,
		}
	}
}

/// Time for one leg (rise or fall) to finish across `n` staggered slots.
fn leg_duration_ms(n: usize) -> u64 {
	ROLL_MS + STAGGER_MS * (n.saturating_sub(1) as u64)
}

/// Transition delay for slot `index`.
fn stagger_delay_ms(index: usize) -> u64 {
	STAGGER_MS * index as u64
}

/// Timers backing the carousel, dropped as one unit on unmount.
#[derive(Default)]
struct RollTimers {
	cycle: Option<Interval>,
	leg: Option<Timeout>,
}

/// One roll: rise across all slots, fall back, then drop transitions.
fn run_cycle(timers: StoredValue<RollTimers, LocalStorage>, slots: usize, phase: RwSignal<RollPhase>, rolling: RwSignal<bool>) {
	let leg = leg_duration_ms(slots) as i32;
	rolling.set(true);
	phase.set(RollPhase::Rising);

	let fall = Timeout::after(leg, move || {
		phase.set(RollPhase::Falling);
		let settle = Timeout::after(leg, move || {
			rolling.set(false);
			let snap = Timeout::after(SNAP_MS, move || {
				phase.set(RollPhase::Idle);
			});
			timers.update_value(|timers| timers.leg = Some(snap));
		});
		timers.update_value(|timers| timers.leg = Some(settle));
	});
	timers.update_value(|timers| timers.leg = Some(fall));
}

/// Integrations section: rolling logo pairs over a dotted panel.
#[component]
pub fn Integrations(
	/// Front/back logo pairs, one per carousel slot.
	pairs: Vec<IconPair>,
	/// Advertised tool count, rendered as "500+".
	tool_count: u32,
	/// Anchor for the closing call to action.
	contact: String,
) -> impl IntoView {
	let phase = RwSignal::new(RollPhase::Idle);
	let rolling = RwSignal::new(false);

	let slot_count = pairs.len();
	let timers: StoredValue<RollTimers, LocalStorage> = StoredValue::new_local(RollTimers::default());

	let cycle = Interval::every(CYCLE_MS, move || {
		run_cycle(timers, slot_count, phase, rolling);
	});
	timers.update_value(|timers| timers.cycle = Some(cycle));

	on_cleanup(move || {
		timers.set_value(RollTimers::default());
	});

	view! {
		<section id="integrations" class="relative overflow-hidden bg-[#0b0f14] text-white">
			<div class="relative mx-auto max-w-7xl px-6 py-24">
				<header class="max-w-3xl">
					<p class="text-sm text-gray-400">"Integrations"</p>
					<h2 class="mt-2 text-3xl font-extrabold tracking-tight sm:text-4xl">
						"Connects with " <span class="text-[#a78bfa]">{format!("{tool_count}+")}</span>
						" tools you already use"
					</h2>
					<p class="mt-4 text-gray-300">
						"Your flows keep running across the stack: messaging, CRM, spreadsheets, calendars, storage."
					</p>
				</header>

				<div class="relative mt-10 overflow-hidden rounded-3xl bg-white/5 p-8 ring-1 ring-white/10">
					<DotsOverlay pattern_id="dots-integrations" />
					<div class="relative flex flex-wrap items-center justify-center gap-5 md:justify-between">
						{pairs
							.into_iter()
							.enumerate()
							.map(|(index, pair)| view! {
								<RollingIcon pair=pair index=index phase=phase rolling=rolling />
							})
							.collect_view()}
					</div>
				</div>

				<div class="mt-10 grid gap-6 sm:grid-cols-3">
					<div class="rounded-2xl bg-white/5 p-5 ring-1 ring-white/10">
						<h3 class="text-sm font-semibold">"No rip-and-replace"</h3>
						<p class="mt-1 text-sm text-gray-300">"We automate on top of the tools your team already works in."</p>
					</div>
					<div class="rounded-2xl bg-white/5 p-5 ring-1 ring-white/10">
						<h3 class="text-sm font-semibold">"Two-way sync"</h3>
						<p class="mt-1 text-sm text-gray-300">"Data moves in both directions, deduplicated and current."</p>
					</div>
					<div class="rounded-2xl bg-white/5 p-5 ring-1 ring-white/10">
						<h3 class="text-sm font-semibold">"Audited runs"</h3>
						<p class="mt-1 text-sm text-gray-300">"Every flow leaves a log trail with retries on failure."</p>
					</div>
				</div>

				<div class="mt-10 flex justify-center">
					<a
						href=contact
						class="inline-flex items-center justify-center rounded-xl bg-white/10 px-6 py-3 text-sm font-semibold ring-1 ring-white/20 transition hover:bg-white/15"
					>
						"Ask about your stack"
					</a>
				</div>
			</div>
		</section>
	}
}

/// One carousel slot: a three-cell vertical track (front, back, front
/// again so the fall lands on the same logo it started from).
#[component]
fn RollingIcon(
	pair: IconPair,
	/// Slot index, drives the stagger delay.
	index: usize,
	#[prop(into)] phase: Signal<RollPhase>,
	#[prop(into)] rolling: Signal<bool>,
) -> impl IntoView {
	let delay = stagger_delay_ms(index);
	let transition = move || {
		if rolling.get() {
			format!("transform {ROLL_MS}ms cubic-bezier(0.22, 1, 0.36, 1) {delay}ms")
		} else {
			"none".to_string()
		}
	};
	let transform = move || format!("translateY({}%)", phase.get().offset_fraction() * 100.0);

	view! {
		<div class="relative h-14 w-14 shrink-0 overflow-hidden rounded-xl bg-white/10 ring-1 ring-white/10">
			<div class="roll-track absolute left-0 top-0 h-[300%] w-full" style:transform=transform style:transition=transition>
				<IconCell icon=pair.front.clone() />
				<IconCell icon=pair.back />
				<IconCell icon=pair.front />
			</div>
		</div>
	}
}

#[component]
fn IconCell(icon: crate::content::Integration) -> impl IntoView {
	view! {
		<div class="grid h-1/3 w-full place-items-center">
			<img
				src=icon.logo
				alt=icon.name
				class="h-7 w-7 object-contain"
				loading="lazy"
				on:error=move |ev| hide_on_error(&ev)
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn visible_logo(phase: RollPhase) -> &'static str {
		if phase.offset_fraction() < 0.0 { "back" } else { "front" }
	}

	#[test]
	fn full_cycle_restores_slot_assignment() {
		let cycle = [RollPhase::Idle, RollPhase::Rising, RollPhase::Falling, RollPhase::Idle];
		let shown: Vec<_> = cycle.into_iter().map(visible_logo).collect();
		assert_eq!(shown, ["front", "back", "front", "front"]);
	}

	#[test]
	fn rising_offsets_exactly_one_cell() {
		assert_eq!(RollPhase::Rising.offset_fraction(), -1.0 / 3.0);
		assert_eq!(RollPhase::Falling.offset_fraction(), 0.0);
		assert_eq!(RollPhase::Idle.offset_fraction(), 0.0);
	}

	#[test]
	fn leg_duration_covers_the_stagger_sweep() {
		assert_eq!(leg_duration_ms(8), 600 + 120 * 7);
		assert_eq!(leg_duration_ms(1), 600);
		assert_eq!(leg_duration_ms(0), 600);
	}

	#[test]
	fn stagger_grows_linearly_by_slot() {
		assert_eq!(stagger_delay_ms(0), 0);
		assert_eq!(stagger_delay_ms(3), 360);
	}
}
