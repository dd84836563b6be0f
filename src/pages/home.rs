use leptos::ev;
use leptos::prelude::*;
use log::debug;

use crate::components::details_panel::DetailsPanel;
use crate::components::projects::ProjectsSection;
use crate::components::site::{BioPanel, SiteHeader};
use crate::components::sky_network::SkyNetwork;
use crate::data::network::network_data;

const OVERLAY_HASHES: &[&str] = &["projects", "projects-publications"];

fn overlay_requested() -> bool {
	window()
		.location()
		.hash()
		.map(|h| OVERLAY_HASHES.contains(&h.trim_start_matches('#')))
		.unwrap_or(false)
}

fn set_hash(hash: &str) {
	let _ = window().location().set_hash(hash);
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(network_data);
	let active_tag = RwSignal::new(None::<String>);
	let overlay = RwSignal::new(overlay_requested());

	let hash_handle = window_event_listener(ev::hashchange, move |_| {
		let open = overlay_requested();
		debug!("hash changed, overlay open: {open}");
		overlay.set(open);
	});
	let key_handle = window_event_listener(ev::keydown, move |ev| {
		if overlay.get_untracked() && ev.key() == "Escape" {
			set_hash("");
		}
	});
	on_cleanup(move || {
		hash_handle.remove();
		key_handle.remove();
	});

	// lock page scroll behind the overlay
	Effect::new(move |_| {
		let value = if overlay.get() { "hidden" } else { "" };
		if let Some(body) = document().body() {
			let _ = body.style().set_property("overflow", value);
		}
	});

	let on_select = Callback::new(move |tag: Option<String>| active_tag.set(tag));
	let open_projects = Callback::new(|_: ()| set_hash("projects"));

	view! {
		<div class="page">
			<SiteHeader />
			<main id="home" class="home-grid">
				<div class="home-bio">
					<BioPanel />
				</div>
				<div class="home-sky">
					<SkyNetwork data=graph_data active_tag=active_tag on_select=on_select />
				</div>
				<div class="home-details">
					<DetailsPanel active_tag=active_tag on_open_projects=open_projects />
				</div>
			</main>

			<Show when=move || overlay.get()>
				<div
					class="overlay"
					role="dialog"
					aria-modal="true"
				>
					<div class="overlay-backdrop" on:mousedown=|_| set_hash("")></div>
					<div class="overlay-frame">
						<div class="overlay-head">
							<h2>"Projects"</h2>
							<button type="button" class="pill-button" on:click=|_| set_hash("")>
								"Close"
							</button>
						</div>
						<div class="overlay-body">
							<ProjectsSection embedded=true default_tag=active_tag />
						</div>
					</div>
				</div>
			</Show>
		</div>
	}
}
