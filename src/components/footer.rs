//! Site footer, also the contact anchor target.

use leptos::prelude::*;

/// Footer with brand block, section nav, and contact details.
#[component]
pub fn Footer() -> impl IntoView {
	let links = [
		("#home", "Home"),
		("#demo", "Why automate"),
		("#use-cases", "Use cases"),
		("#integrations", "Integrations"),
		("#case-studies", "Case studies"),
		("#process", "Process"),
	];
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer id="contact" class="relative border-t border-white/10 bg-[#0b0f14] text-white">
			<div class="mx-auto max-w-7xl px-6 py-14">
				<div class="grid gap-10 md:grid-cols-3">
					<div>
						<div class="text-lg font-extrabold tracking-tight">"Relay Automation"</div>
						<p class="mt-3 max-w-sm text-sm text-gray-400">
							"AI and automation consulting for teams that want their hours back."
						</p>
					</div>
					<nav class="grid grid-cols-2 content-start gap-2 text-sm text-gray-300" aria-label="Site">
						{links
							.into_iter()
							.map(|(href, label)| view! { <a href=href class="hover:text-white">{label}</a> })
							.collect_view()}
					</nav>
					<div class="text-sm text-gray-300">
						<div class="font-semibold text-white">"Start a conversation"</div>
						<a class="mt-2 block text-[#bfa3ff] hover:underline" href="mailto:hello@relayautomation.dev">
							"hello@relayautomation.dev"
						</a>
						<p class="mt-3 text-xs text-gray-500">"Usually replies within one business day."</p>
					</div>
				</div>
				<div class="mt-10 flex flex-col items-start justify-between gap-3 border-t border-white/10 pt-6 text-xs text-gray-500 sm:flex-row">
					<span>{format!("© {year} Relay Automation. All rights reserved.")}</span>
					<span>"Built with Rust and WebAssembly."</span>
				</div>
			</div>
		</footer>
	}
}
