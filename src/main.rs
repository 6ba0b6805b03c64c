//! Browser entrypoint: set up logging, then mount the page.

// The bin pulls in the lib's dependency set wholesale.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use relay_site::{App, init_logging};

fn main() {
	init_logging();

	mount_to_body(|| {
		view! { <App /> }
	})
}
