//! relay-site: client-side marketing site for Relay Automation.
//!
//! This crate renders the whole page in the browser as WASM: section
//! components with canvas ambient backdrops (particle meshes, a twinkling
//! starfield), timed UI state machines (typewriter headline, rolling
//! integrations carousel, auto-advancing use-case tabs), and one-shot
//! scroll reveals.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

// Dev-dependency of the wasm test target only.
#[cfg(test)]
use wasm_bindgen_test as _;

use components::{CaseStudies, Cta, Footer, Hero, Integrations, Process, SiteStyles, UseCases, Why};
use content::SiteContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("relay-site: logging initialized");
}

/// Load content overrides from a script element with id="site-content".
/// Expected format: a JSON object mirroring [`SiteContent`]; missing
/// fields keep their built-in defaults.
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteContent>(&json_text) {
		Ok(content) => {
			info!(
				"relay-site: loaded content ({} use cases, {} integrations)",
				content.use_cases.len(),
				content.icon_pairs.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("relay-site: failed to parse site content: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads content configuration from the DOM and renders the section stack.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteContent {
		typewriter_words,
		benefits,
		use_cases,
		icon_pairs,
		case_studies,
		process_steps,
		embed_url,
		tool_count,
		contact_anchor,
	} = load_site_content().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Relay Automation | AI & Automation Consulting" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="AI and automation consulting: flows that save hours, cut errors, and keep your tools in sync."
		/>

		<SiteStyles />
		<main>
			<Hero words=typewriter_words contact=contact_anchor.clone() />
			<Why benefits=benefits embed_url=embed_url />
			<UseCases items=use_cases contact=contact_anchor.clone() />
			<Integrations pairs=icon_pairs tool_count=tool_count contact=contact_anchor.clone() />
			<CaseStudies cases=case_studies />
			<Process steps=process_steps contact=contact_anchor.clone() />
			<Cta contact=contact_anchor />
			<Footer />
		</main>
	}
}
