use std::collections::HashMap;

use super::geometry::{self, Point, Size, ViewTransform, Viewport};
use super::types::{NetworkData, NetworkNode};

/// Tunables for the sky diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyConfig {
	/// Margin kept free on every side when placing nodes.
	pub padding: f64,
	pub min_stroke: f64,
	pub max_stroke: f64,
	/// Fraction of the node-to-centre vector the camera travels on focus.
	pub focus_factor: f64,
	pub focus_scale: f64,
	/// Manhattan pointer travel, in pixels, after which a press counts as a drag.
	pub drag_threshold: f64,
}

impl Default for SkyConfig {
	fn default() -> Self {
		Self {
			padding: 40.0,
			min_stroke: 0.3,
			max_stroke: 0.9,
			focus_factor: 0.25,
			focus_scale: 1.15,
			drag_threshold: 3.0,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub down: Point,
	/// Pointer offset from the node's top-left corner at press time, in client px.
	pub grab: Point,
	pub node_size: Size,
	pub moved: bool,
	/// Node whose next click must be swallowed because it ended a real drag.
	suppress_click: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
	Activated(String),
	Cleared,
	Unchanged,
}

/// Everything the sky diagram owns between mount and unmount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkyState {
	pub nodes: Vec<NetworkNode>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub config: SkyConfig,
	edges: Vec<(usize, usize)>,
	degrees: Vec<u32>,
	home: Vec<Point>,
	positions: Vec<Point>,
	active: Option<usize>,
}

impl SkyState {
	pub fn new(
		data: &NetworkData,
		bounds: Size,
		config: SkyConfig,
		rng: &mut impl FnMut() -> f64,
	) -> Self {
		let mut id_to_idx = HashMap::new();
		let mut home = Vec::with_capacity(data.nodes.len());

		for (i, node) in data.nodes.iter().enumerate() {
			home.push(geometry::random_home(bounds, config.padding, rng));
			id_to_idx.insert(node.id.as_str(), i);
		}

		let mut degrees = vec![0; data.nodes.len()];
		let mut edges = Vec::new();
		for edge in &data.edges {
			if let (Some(&from), Some(&to)) =
				(id_to_idx.get(edge.from.as_str()), id_to_idx.get(edge.to.as_str()))
			{
				if from == to {
					continue;
				}
				edges.push((from, to));
				degrees[from] += 1;
				degrees[to] += 1;
			}
		}

		Self {
			nodes: data.nodes.clone(),
			positions: home.clone(),
			home,
			edges,
			degrees,
			config,
			transform: ViewTransform::IDENTITY,
			drag: DragState::default(),
			active: None,
		}
	}

	pub fn resolved_edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	pub fn degree(&self, idx: usize) -> u32 {
		self.degrees.get(idx).copied().unwrap_or(0)
	}

	/// Largest node degree, never below one.
	pub fn max_degree(&self) -> u32 {
		self.degrees.iter().copied().max().unwrap_or(0).max(1)
	}

	pub fn edge_width(&self, (from, to): (usize, usize)) -> f64 {
		let avg = (self.degree(from) + self.degree(to)) as f64 / 2.0;
		geometry::stroke_width(
			avg,
			self.max_degree() as f64,
			self.config.min_stroke,
			self.config.max_stroke,
		)
	}

	pub fn position(&self, idx: usize) -> Point {
		self.positions.get(idx).copied().unwrap_or_default()
	}

	pub fn home(&self, idx: usize) -> Point {
		self.home.get(idx).copied().unwrap_or_default()
	}

	pub fn active(&self) -> Option<usize> {
		self.active
	}

	pub fn reset_positions(&mut self) {
		self.positions.clone_from(&self.home);
	}

	/// Drops focus without moving any node back home.
	pub fn release_focus(&mut self) {
		self.active = None;
		self.transform = ViewTransform::IDENTITY;
	}

	pub fn deactivate(&mut self) {
		self.release_focus();
		self.reset_positions();
	}

	/// Toggles `idx` as the focused node. `container` is the sky's layout
	/// size and `node_size` the clicked control's size.
	pub fn click_node(&mut self, idx: usize, container: Size, node_size: Size) -> SelectionChange {
		if idx >= self.nodes.len() {
			return SelectionChange::Unchanged;
		}
		if self.active == Some(idx) {
			self.deactivate();
			return SelectionChange::Cleared;
		}

		self.deactivate();
		self.active = Some(idx);
		let pos = self.position(idx);
		let center = Point::new(pos.x + node_size.width / 2.0, pos.y + node_size.height / 2.0);
		self.transform = geometry::focus_transform(
			center,
			container.center(),
			self.config.focus_factor,
			self.config.focus_scale,
		);
		SelectionChange::Activated(self.nodes[idx].id.clone())
	}

	pub fn click_background(&mut self) -> SelectionChange {
		let was_active = self.active.is_some();
		self.deactivate();
		if was_active {
			SelectionChange::Cleared
		} else {
			SelectionChange::Unchanged
		}
	}

	pub fn begin_drag(&mut self, idx: usize, pointer: Point, grab: Point, node_size: Size) {
		if idx >= self.nodes.len() {
			return;
		}
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			down: pointer,
			grab,
			node_size,
			moved: false,
			suppress_click: None,
		};
	}

	/// Moves the dragged node under `pointer` (client px). Returns whether a
	/// node was moved.
	pub fn drag_to(&mut self, pointer: Point, viewport: Viewport) -> bool {
		let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) else {
			return false;
		};

		let (dx, dy) = (pointer.x - self.drag.down.x, pointer.y - self.drag.down.y);
		if dx.abs() + dy.abs() > self.config.drag_threshold {
			self.drag.moved = true;
		}

		let local = viewport.to_local(pointer);
		let target = Point::new(
			local.x - viewport.to_local_len(self.drag.grab.x),
			local.y - viewport.to_local_len(self.drag.grab.y),
		);
		self.positions[idx] =
			geometry::clamp_to_bounds(target, self.drag.node_size, viewport.layout_size());
		true
	}

	/// Finishes a drag. The drop point becomes the node's new home.
	pub fn end_drag(&mut self) -> Option<usize> {
		let idx = self.drag.node_idx.filter(|_| self.drag.active)?;
		self.home[idx] = self.positions[idx];
		let moved = self.drag.moved;
		self.drag = DragState {
			suppress_click: moved.then_some(idx),
			..DragState::default()
		};
		Some(idx)
	}

	/// Drops a pending suppression the release click never consumed.
	pub fn expire_click_suppression(&mut self) {
		self.drag.suppress_click = None;
	}

	/// True exactly once for the click that follows a drag past the threshold.
	pub fn take_click_suppression(&mut self, idx: usize) -> bool {
		if self.drag.suppress_click == Some(idx) {
			self.drag.suppress_click = None;
			true
		} else {
			false
		}
	}
}
