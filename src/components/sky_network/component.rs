use leptos::ev;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, PointerEvent};

use super::geometry::{Point, Rect, Size, Viewport};
use super::render::{self, LineSegment};
use super::state::{SelectionChange, SkyConfig, SkyState};
use super::types::NetworkData;
use crate::data::keywords::keyword;

/// Runs `f` once layout and pending transitions have had two frames to settle.
fn after_next_paint(f: impl FnOnce() + 'static) {
	request_animation_frame(move || request_animation_frame(f));
}

fn layout_size(el: &HtmlElement) -> Size {
	Size::new(el.offset_width() as f64, el.offset_height() as f64)
}

fn viewport_of(el: &HtmlElement) -> Viewport {
	Viewport::new(Rect::from_dom(&el.get_bounding_client_rect()), layout_size(el))
}

/// The dot inside a star if it has one, else the star itself.
fn anchor_rect(sky: &Element, idx: usize) -> Option<Rect> {
	let star = sky
		.query_selector(&format!("[data-index='{idx}']"))
		.ok()
		.flatten()?;
	let anchor = star
		.query_selector("span[aria-hidden='true']")
		.ok()
		.flatten()
		.unwrap_or(star);
	Some(Rect::from_dom(&anchor.get_bounding_client_rect()))
}

fn event_element(ev: &web_sys::Event) -> Option<HtmlElement> {
	ev.current_target()?.dyn_into::<HtmlElement>().ok()
}

#[component]
pub fn SkyNetwork(
	#[prop(into)] data: Signal<NetworkData>,
	/// Selected keyword as seen by the page; `None` from outside drops focus.
	#[prop(into)]
	active_tag: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<Option<String>>,
	#[prop(optional)] config: Option<SkyConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let sky_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(SkyState::default());
	let lines = RwSignal::new(Vec::<LineSegment>::new());
	let canvas_size = RwSignal::new(Size::default());

	let nodes = Memo::new(move |_| state.with(|s| s.nodes.clone()));
	let focused = Memo::new(move |_| state.with(|s| s.active()));

	let redraw = move || {
		let Some(sky) = sky_ref.get_untracked() else {
			return;
		};
		let viewport = viewport_of(&sky);
		let segments =
			state.with_untracked(|s| render::build_lines(s, viewport, |i| anchor_rect(&sky, i)));
		canvas_size.set(layout_size(&sky));
		lines.set(segments);
	};

	Effect::new(move |_| {
		let Some(sky) = sky_ref.get() else {
			return;
		};
		let data = data.get();
		let bounds = layout_size(&sky);
		let mut rng = js_sys::Math::random;
		state.set(SkyState::new(&data, bounds, config, &mut rng));
		info!(
			"sky mounted with {} nodes in {}x{}",
			data.nodes.len(),
			bounds.width,
			bounds.height
		);
		request_animation_frame(redraw);
	});

	// Parent cleared the keyword (e.g. the details panel was dismissed).
	Effect::new(move |_| {
		if active_tag.get().is_none() && state.with_untracked(|s| s.active().is_some()) {
			state.update(|s| s.release_focus());
			after_next_paint(redraw);
		}
	});

	let notify = move |change: SelectionChange| match change {
		SelectionChange::Activated(id) => {
			debug!("sky focus -> {id}");
			on_select.run(Some(id));
		}
		SelectionChange::Cleared => {
			debug!("sky focus cleared");
			on_select.run(None);
		}
		SelectionChange::Unchanged => {}
	};

	let on_star_click = move |idx: usize, ev: MouseEvent| {
		ev.stop_propagation();
		if state.try_update(|s| s.take_click_suppression(idx)) == Some(true) {
			return;
		}
		let (Some(sky), Some(star)) = (sky_ref.get_untracked(), event_element(&ev)) else {
			return;
		};
		let (container, node_size) = (layout_size(&sky), layout_size(&star));
		let selectable = nodes.with_untracked(|n| n.get(idx).is_some_and(|n| keyword(&n.id).is_some()));
		let change = state.try_update(|s| {
			if selectable {
				s.click_node(idx, container, node_size)
			} else {
				s.deactivate();
				SelectionChange::Cleared
			}
		});
		if let Some(change) = change {
			notify(change);
		}
		after_next_paint(redraw);
	};

	let on_sky_click = move |_: MouseEvent| {
		if let Some(change) = state.try_update(|s| s.click_background()) {
			notify(change);
		}
		after_next_paint(redraw);
	};

	let on_star_pointerdown = move |idx: usize, ev: PointerEvent| {
		ev.prevent_default();
		ev.stop_propagation();
		let Some(star) = event_element(&ev) else {
			return;
		};
		let rect = star.get_bounding_client_rect();
		let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		let grab = Point::new(pointer.x - rect.left(), pointer.y - rect.top());
		let size = layout_size(&star);
		state.update(|s| s.begin_drag(idx, pointer, grab, size));
		let _ = star.set_pointer_capture(ev.pointer_id());
	};

	let move_handle = window_event_listener(ev::pointermove, move |ev: PointerEvent| {
		if !state.with_untracked(|s| s.drag.active) {
			return;
		}
		let Some(sky) = sky_ref.get_untracked() else {
			return;
		};
		let viewport = viewport_of(&sky);
		let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		if state.try_update(|s| s.drag_to(pointer, viewport)) == Some(true) {
			request_animation_frame(redraw);
		}
	});

	let up_handle = window_event_listener(ev::pointerup, move |_: PointerEvent| {
		if let Some(Some(idx)) = state.try_update(|s| s.end_drag()) {
			let home = state.with_untracked(|s| s.home(idx));
			debug!("star {idx} dropped at ({}, {})", home.x, home.y);
			// the release click, if any, is dispatched before the next frame
			request_animation_frame(move || state.update(|s| s.expire_click_suppression()));
		}
	});

	let resize_handle = window_event_listener(ev::resize, move |_| redraw());

	on_cleanup(move || {
		move_handle.remove();
		up_handle.remove();
		resize_handle.remove();
	});

	let stars = move || {
		nodes
			.get()
			.into_iter()
			.enumerate()
			.map(|(idx, node)| {
				let left = move || format!("{}px", state.with(|s| s.position(idx).x));
				let top = move || format!("{}px", state.with(|s| s.position(idx).y));
				view! {
					<button
						type="button"
						class="star star-float"
						class:active=move || focused.get() == Some(idx)
						data-index=idx.to_string()
						data-id=node.id.clone()
						style:left=left
						style:top=top
						style:animation-delay=format!("{}s", idx as f64 * 0.3)
						on:pointerdown=move |ev| on_star_pointerdown(idx, ev)
						on:click=move |ev| on_star_click(idx, ev)
					>
						<span class="star-dot" aria-hidden="true"></span>
						<span class="star-label">{node.label}</span>
					</button>
				}
			})
			.collect_view()
	};

	let edge_lines = move || {
		lines
			.get()
			.into_iter()
			.map(|l| {
				view! {
					<line
						x1=l.x1.to_string()
						y1=l.y1.to_string()
						x2=l.x2.to_string()
						y2=l.y2.to_string()
						stroke="rgba(255,255,255,0.45)"
						stroke-linecap="round"
						style:stroke-width=format!("{}px", l.width)
					/>
				}
			})
			.collect_view()
	};

	view! {
		<section class="sky-section">
			<div
				node_ref=sky_ref
				class="sky"
				class:focus-mode=move || focused.get().is_some()
				style:transform=move || state.with(|s| s.transform.css())
				on:click=on_sky_click
			>
				<svg
					class="sky-lines"
					width=move || canvas_size.get().width.to_string()
					height=move || canvas_size.get().height.to_string()
					viewBox=move || {
						let size = canvas_size.get();
						format!("0 0 {} {}", size.width, size.height)
					}
				>
					{edge_lines}
				</svg>
				{stars}
			</div>
		</section>
	}
}
