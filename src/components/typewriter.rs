//! Looping typewriter headline effect.
//!
//! A pure state machine walks typing -> holding -> deleting across a word
//! list; the component replays it on a single re-armed timeout. The holder
//! span is pinned to the widest word so the headline never reflows while
//! letters come and go.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use super::handles::Timeout;

/// Delay before the next character appears while typing.
const TYPE_MS: u64 = 150;
/// Delay between character removals while deleting.
const DELETE_MS: u64 = 60;
/// Dwell on the fully typed word before deleting begins.
const HOLD_MS: u64 = 1500;

/// Caret allowance added to the measured word width.
const CARET_PAD_PX: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Holding,
	Deleting,
}

/// Word-cycling state machine. Each [`Typewriter::step`] applies one
/// transition and reports the delay until the next.
#[derive(Clone, Debug)]
pub struct Typewriter {
	words: Vec<String>,
	word: usize,
	visible: usize,
	phase: Phase,
}

impl Typewriter {
	/// Build over a word list. An empty list becomes a single empty word
	/// so the machine stays total.
	pub fn new(words: Vec<String>) -> Self {
		let words = if words.is_empty() { vec![String::new()] } else { words };
		Self {
			words,
			word: 0,
			visible: 0,
			phase: Phase::Typing,
		}
	}

	/// Currently visible prefix of the active word, in characters.
	pub fn text(&self) -> String {
		self.words[self.word].chars().take(self.visible).collect()
	}

	/// Index of the active word.
	pub fn word_index(&self) -> usize {
		self.word
	}

	fn active_len(&self) -> usize {
		self.words[self.word].chars().count()
	}

	/// Apply one transition; returns milliseconds until the next step.
	pub fn step(&mut self) -> u64 {
		match self.phase {
			Phase::Typing => {
				let len = self.active_len();
				if self.visible < len {
					self.visible += 1;
				}
				if self.visible >= len {
					self.phase = Phase::Holding;
					HOLD_MS
				} else {
					TYPE_MS
				}
			}
			Phase::Holding => {
				self.phase = Phase::Deleting;
				DELETE_MS
			}
			Phase::Deleting => {
				if self.visible > 0 {
					self.visible -= 1;
				}
				if self.visible == 0 {
					self.word = (self.word + 1) % self.words.len();
					self.phase = Phase::Typing;
					TYPE_MS
				} else {
					DELETE_MS
				}
			}
		}
	}
}

/// Re-arm the single driving timer for the next machine step.
fn arm(slot: StoredValue<Option<Timeout>, LocalStorage>, machine: Rc<RefCell<Typewriter>>, text: RwSignal<String>, delay_ms: u64) {
	let action = move || {
		let next_delay = {
			let mut machine = machine.borrow_mut();
			let delay = machine.step();
			text.set(machine.text());
			delay
		};
		arm(slot, machine, text, next_delay);
	};
	slot.set_value(Some(Timeout::after(delay_ms as i32, action)));
}

/// Widest rendered word in px, measured with the holder's computed font on
/// a detached canvas.
fn max_word_width(holder: &web_sys::HtmlSpanElement, words: &[String]) -> Option<f64> {
	let window = web_sys::window()?;
	let font = window
		.get_computed_style(holder)
		.ok()??
		.get_property_value("font")
		.ok()?;

	let canvas: HtmlCanvasElement = window
		.document()?
		.create_element("canvas")
		.ok()?
		.dyn_into()
		.ok()?;
	let ctx: web_sys::CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()?
		.dyn_into()
		.ok()?;
	if !font.is_empty() {
		ctx.set_font(&font);
	}

	words
		.iter()
		.filter_map(|w| ctx.measure_text(w).ok())
		.map(|m| m.width())
		.fold(None, |widest: Option<f64>, w| Some(widest.map_or(w, |m| m.max(w))))
}

/// Animated headline span cycling through `words`.
#[component]
pub fn TypewriterText(
	/// Words cycled through, in order.
	words: Vec<String>,
) -> impl IntoView {
	let holder_ref = NodeRef::<leptos::html::Span>::new();
	let text = RwSignal::new(String::new());
	let width = RwSignal::new(None::<f64>);

	let machine = Rc::new(RefCell::new(Typewriter::new(words.clone())));
	let timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(holder) = holder_ref.get() else {
			return;
		};
		if width.get_untracked().is_some() {
			return;
		}
		let holder: web_sys::HtmlSpanElement = holder.into();
		if let Some(max) = max_word_width(&holder, &words) {
			width.set(Some(max.ceil() + CARET_PAD_PX));
		}
	});

	arm(timer, machine, text, TYPE_MS);

	on_cleanup(move || {
		timer.set_value(None);
	});

	view! {
		<span
			node_ref=holder_ref
			class="tw-holder"
			style:width=move || width.get().map(|w| format!("{w}px")).unwrap_or_default()
			aria-live="polite"
		>
			{move || text.get()}
			<span class="tw-caret" aria-hidden="true"></span>
		</span>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delay_schedule_follows_phases() {
		let mut tw = Typewriter::new(vec!["ab".to_string()]);
		assert_eq!(tw.step(), TYPE_MS);
		assert_eq!(tw.text(), "a");
		assert_eq!(tw.step(), HOLD_MS);
		assert_eq!(tw.text(), "ab");
		// Hold elapsed; the first removal waits a delete interval.
		assert_eq!(tw.step(), DELETE_MS);
		assert_eq!(tw.text(), "ab");
		assert_eq!(tw.step(), DELETE_MS);
		assert_eq!(tw.text(), "a");
		// Last removal wraps a single-word list back onto itself.
		assert_eq!(tw.step(), TYPE_MS);
		assert_eq!(tw.text(), "");
		assert_eq!(tw.word_index(), 0);
	}

	#[test]
	fn full_cycles_return_to_the_first_word() {
		let words = vec!["One.".to_string(), "Two!".to_string(), "Three".to_string()];
		let n = words.len();
		let mut tw = Typewriter::new(words);

		let mut completed = 0;
		let mut steps = 0;
		while completed < 2 * n {
			let before = tw.word_index();
			tw.step();
			if tw.word_index() != before {
				completed += 1;
			}
			steps += 1;
			assert!(steps < 10_000, "machine failed to cycle");
		}
		assert_eq!(tw.text(), "");
		assert_eq!(tw.word_index(), 0);
	}

	#[test]
	fn multibyte_words_step_by_characters() {
		let mut tw = Typewriter::new(vec!["más".to_string()]);
		tw.step();
		tw.step();
		assert_eq!(tw.text(), "má");
		tw.step();
		assert_eq!(tw.text(), "más");
	}

	#[test]
	fn empty_word_list_stays_total() {
		let mut tw = Typewriter::new(Vec::new());
		for _ in 0..32 {
			tw.step();
			assert_eq!(tw.text(), "");
		}
	}
}
