//! Trunk entry point: mounts the portfolio `App` into the page body.

use leptos::prelude::*;
use sky_portfolio::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
