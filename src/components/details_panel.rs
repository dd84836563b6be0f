use leptos::prelude::*;

use crate::data::keywords::keyword;

/// Perspective text for the keyword focused in the sky.
#[component]
pub fn DetailsPanel(
	#[prop(into)] active_tag: Signal<Option<String>>,
	#[prop(into)] on_open_projects: Callback<()>,
) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let meta = Memo::new(move |_| active_tag.with(|t| t.as_deref().and_then(keyword)));

	// a new keyword starts collapsed
	Effect::new(move |_| {
		active_tag.track();
		expanded.set(false);
	});

	view! {
		<div class="details-panel">
			{move || match meta.get() {
				None => {
					view! { <div class="details-empty">"Select a keyword to see my perspective."</div> }
						.into_any()
				}
				Some(kw) => {
					let text = if kw.perspective.is_empty() { kw.description } else { kw.perspective };
					view! {
						<div class="details-body">
							<h3 class="details-title">{kw.label}</h3>
							<p class="details-text" class:clamped=move || !expanded.get()>
								{text}
							</p>
							<div class="details-actions">
								<button
									type="button"
									class="link-button"
									on:click=move |_| expanded.update(|v| *v = !*v)
								>
									{move || if expanded.get() { "Show less" } else { "Read more" }}
								</button>
								<a
									href="#projects"
									class="link-button"
									on:click=move |ev| {
										ev.prevent_default();
										on_open_projects.run(());
									}
								>
									"View projects & publications →"
								</a>
							</div>
						</div>
					}
						.into_any()
				}
			}}
		</div>
	}
}
