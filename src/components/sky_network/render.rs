use super::geometry::{Rect, Viewport};
use super::state::SkyState;

/// One edge as drawn in the sky's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub width: f64,
}

/// Connects the centres of two anchor rects, both in client px.
pub fn anchor_segment(from: Rect, to: Rect, viewport: Viewport, width: f64) -> LineSegment {
	let (a, b) = (
		viewport.to_local(from.center()),
		viewport.to_local(to.center()),
	);
	LineSegment {
		x1: a.x,
		y1: a.y,
		x2: b.x,
		y2: b.y,
		width,
	}
}

/// Builds every edge line. `anchor_of` reports a node's anchor rect on
/// screen, or `None` when it is not mounted; such edges are skipped.
pub fn build_lines(
	state: &SkyState,
	viewport: Viewport,
	mut anchor_of: impl FnMut(usize) -> Option<Rect>,
) -> Vec<LineSegment> {
	state
		.resolved_edges()
		.iter()
		.filter_map(|&(from, to)| {
			let (a, b) = (anchor_of(from)?, anchor_of(to)?);
			Some(anchor_segment(a, b, viewport, state.edge_width((from, to))))
		})
		.collect()
}
