use std::collections::HashSet;

use leptos::prelude::*;
use log::debug;

use super::chips::{ChipKey, filter_universe, item_chips};
use super::selection::Selection;
use super::storage::{BrowserSession, clear_selection, load_selection, save_selection};
use crate::data::items::{Item, ItemAction, all_items, current_year, sort_items};

#[component]
fn Chip(
	chip: ChipKey,
	#[prop(into)] active: Signal<bool>,
	on_toggle: Callback<ChipKey>,
) -> impl IntoView {
	let label = chip.label();
	let title = label.clone();
	let tone = chip.tone();
	view! {
		<button
			type="button"
			class=move || {
				if active.get() { "chip chip-active".to_string() } else { format!("chip {tone}") }
			}
			title=title
			on:click=move |ev| {
				ev.stop_propagation();
				on_toggle.run(chip.clone());
			}
		>
			<span class="chip-label">{label}</span>
		</button>
	}
}

#[component]
fn ItemActions(actions: Vec<ItemAction>) -> impl IntoView {
	let links = actions
		.into_iter()
		.filter_map(|action| {
			let (href, tooltip, aria) = match action {
				ItemAction::Doi(href) => (href, "DOI", "Open DOI"),
				ItemAction::Pdf(href) => (href, "PDF", "Open PDF"),
				ItemAction::Website(href) => (href, "Website", "Open website"),
				ItemAction::Logo { .. } => return None,
			};
			Some(view! {
				<a
					class="item-action"
					href=href
					target="_blank"
					rel="noreferrer"
					title=tooltip
					aria-label=aria
					on:click=|ev| ev.stop_propagation()
				>
					{tooltip}
				</a>
			})
		})
		.collect_view();
	view! { <div class="item-actions">{links}</div> }
}

#[component]
fn ItemCard(
	item: Item,
	selected: RwSignal<Selection>,
	expanded: RwSignal<HashSet<&'static str>>,
	on_toggle: Callback<ChipKey>,
) -> impl IntoView {
	let id = item.id;
	let achievements = item.achievements();
	let is_expanded = move || expanded.with(|e| e.contains(id));
	let toggle_achievements = move |ev: leptos::ev::MouseEvent| {
		ev.stop_propagation();
		expanded.update(|e| {
			if !e.remove(id) {
				e.insert(id);
			}
		});
	};

	let chips = item_chips(&item)
		.into_iter()
		.map(|key| {
			let lookup = key.clone();
			let active = Signal::derive(move || selected.with(|s| s.contains(&lookup)));
			view! { <Chip chip=key active=active on_toggle=on_toggle /> }
		})
		.collect_view();

	view! {
		<li class="item-card">
			<div class="item-body">
				{item.meta_line().map(|meta| view! { <div class="item-meta">{meta}</div> })}
				<h4 class="item-title">
					{match item.external_href() {
						Some(href) => {
							view! {
								<a href=href target="_blank" rel="noreferrer">
									{item.title}
								</a>
							}
								.into_any()
						}
						None => item.title.into_any(),
					}}
				</h4>
				{item.citation().map(|c| view! { <div class="item-citation">{c}</div> })}
				{item.summary.filter(|s| !s.is_empty()).map(|s| view! { <p class="item-summary">{s}</p> })}
				{(!achievements.is_empty())
					.then(|| {
						view! {
							<div class="item-achievements">
								<button
									type="button"
									class="link-button"
									aria-expanded=move || is_expanded().to_string()
									aria-controls=format!("ach-{id}")
									on:click=toggle_achievements
								>
									{move || if is_expanded() { "Hide achievements" } else { "Show achievements" }}
								</button>
								<Show when=is_expanded>
									<ul id=format!("ach-{id}") class="achievement-list">
										{achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
									</ul>
								</Show>
							</div>
						}
					})}
				<div class="item-chips">{chips}</div>
			</div>
			<ItemActions actions=item.link_actions() />
		</li>
	}
}

/// Filterable list of projects and publications.
#[component]
pub fn ProjectsSection(
	/// Keyword chosen in the sky; replaces any tag chips while set.
	#[prop(into)]
	default_tag: Signal<Option<String>>,
	#[prop(optional)] embedded: bool,
) -> impl IntoView {
	let selected = RwSignal::new(load_selection(&BrowserSession));
	let expanded = RwSignal::new(HashSet::<&'static str>::new());

	let items = StoredValue::new({
		let mut items = all_items();
		sort_items(&mut items, current_year());
		items
	});
	let universe = filter_universe(&all_items());

	Effect::new(move |_| {
		let tag = default_tag.get();
		debug!("projects default tag -> {tag:?}");
		selected.update(|s| s.sync_default_tag(tag.as_deref()));
	});

	Effect::new(move |_| selected.with(|s| save_selection(&BrowserSession, s)));

	let filtered = Memo::new(move |_| selected.with(|s| items.with_value(|all| s.filter(all))));

	let on_toggle = Callback::new(move |key: ChipKey| {
		debug!("toggle chip {key}");
		selected.update(|s| s.toggle(key));
	});

	let clear = move |_: leptos::ev::MouseEvent| {
		clear_selection(&BrowserSession);
		selected.update(Selection::clear);
	};

	let count = move || format!("{} items", filtered.with(Vec::len));

	let sidebar_chips = universe
		.into_iter()
		.map(|key| {
			let lookup = key.clone();
			let active = Signal::derive(move || selected.with(|s| s.contains(&lookup)));
			view! { <Chip chip=key active=active on_toggle=on_toggle /> }
		})
		.collect_view();

	view! {
		<section
			class="projects"
			class:projects-embedded=embedded
			id=(!embedded).then_some("projects-publications")
		>
			<aside class="projects-filters">
				<div class="filters-head">
					<h3>"Filters"</h3>
					<Show when=move || selected.with(|s| !s.is_empty())>
						<button type="button" class="link-button" on:click=clear>
							"Clear"
						</button>
					</Show>
				</div>
				<div class="filters-count">{count}</div>
				<div class="chip-row">{sidebar_chips}</div>
			</aside>

			<ul class="item-list">
				<For
					each=move || filtered.get()
					key=|item| item.id
					children=move |item| {
						view! {
							<ItemCard
								item=item
								selected=selected
								expanded=expanded
								on_toggle=on_toggle
							/>
						}
					}
				/>
			</ul>
		</section>
	}
}
