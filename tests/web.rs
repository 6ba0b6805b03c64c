//! Browser smoke test: mount the app and check the rendered skeleton.

#![allow(unused_crate_dependencies)]
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use relay_site::App;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_every_section_anchor() {
	mount_to_body(|| view! { <App /> });

	let document = web_sys::window().unwrap().document().unwrap();
	for id in [
		"home",
		"demo",
		"use-cases",
		"integrations",
		"case-studies",
		"process",
		"cta",
		"contact",
	] {
		assert!(
			document.get_element_by_id(id).is_some(),
			"missing section #{id}"
		);
	}

	// The hero and CTA carry a mesh canvas, the demo panel a starfield.
	for id in ["home", "demo", "cta"] {
		let section = document.get_element_by_id(id).unwrap();
		assert!(
			section.query_selector("canvas").unwrap().is_some(),
			"section #{id} lost its backdrop canvas"
		);
	}
}
