//! Coordinate math for the sky: placement, clamping, stroke weights and the
//! focus camera. Nothing here touches the DOM.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

/// Axis-aligned rectangle in client (screen) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	pub fn from_dom(rect: &web_sys::DomRect) -> Self {
		Self::new(rect.left(), rect.top(), rect.width(), rect.height())
	}

	pub fn center(&self) -> Point {
		Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}
}

/// Camera applied to the whole sky container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	pub const IDENTITY: ViewTransform = ViewTransform {
		x: 0.0,
		y: 0.0,
		k: 1.0,
	};

	pub fn is_identity(&self) -> bool {
		*self == Self::IDENTITY
	}

	pub fn css(&self) -> String {
		if self.is_identity() {
			"none".into()
		} else {
			format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
		}
	}
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

/// Where the (possibly transformed) container currently sits on screen.
///
/// `scale` is the rendered size divided by the layout size, so client
/// coordinates map back to the container's own left/top space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub client: Rect,
	pub scale: f64,
}

impl Viewport {
	pub fn new(client: Rect, layout: Size) -> Self {
		let scale = if layout.width > 0.0 {
			client.width / layout.width
		} else {
			1.0
		};
		Self { client, scale }
	}

	pub fn to_local(&self, p: Point) -> Point {
		Point::new(
			(p.x - self.client.left) / self.scale,
			(p.y - self.client.top) / self.scale,
		)
	}

	pub fn to_local_len(&self, d: f64) -> f64 {
		d / self.scale
	}

	pub fn layout_size(&self) -> Size {
		Size::new(
			self.client.width / self.scale,
			self.client.height / self.scale,
		)
	}
}

/// Uniform random point inside `bounds` shrunk by `padding` on every side.
/// `rng` yields values in `[0, 1)`.
pub fn random_home(bounds: Size, padding: f64, rng: &mut impl FnMut() -> f64) -> Point {
	let span_x = (bounds.width - padding * 2.0).max(0.0);
	let span_y = (bounds.height - padding * 2.0).max(0.0);
	Point::new(rng() * span_x + padding, rng() * span_y + padding)
}

/// Keeps a `size`d box with top-left `pos` fully inside `bounds`.
pub fn clamp_to_bounds(pos: Point, size: Size, bounds: Size) -> Point {
	let max_left = bounds.width - size.width;
	let max_top = bounds.height - size.height;
	Point::new(pos.x.min(max_left).max(0.0), pos.y.min(max_top).max(0.0))
}

/// Linear interpolation of the stroke width on `avg_degree / max_degree`.
pub fn stroke_width(avg_degree: f64, max_degree: f64, min_width: f64, max_width: f64) -> f64 {
	if max_degree <= 0.0 {
		return min_width;
	}
	min_width + (avg_degree / max_degree) * (max_width - min_width)
}

/// Pulls the container a `factor` of the way from the node toward its centre
/// and zooms by `scale`.
pub fn focus_transform(
	node_center: Point,
	container_center: Point,
	factor: f64,
	scale: f64,
) -> ViewTransform {
	ViewTransform {
		x: (container_center.x - node_center.x) * factor,
		y: (container_center.y - node_center.y) * factor,
		k: scale,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stroke_width_hits_both_ends() {
		assert_eq!(stroke_width(0.0, 4.0, 0.3, 0.9), 0.3);
		assert!((stroke_width(4.0, 4.0, 0.3, 0.9) - 0.9).abs() < 1e-12);
	}

	#[test]
	fn stroke_width_is_monotone_in_degree() {
		let mut last = f64::MIN;
		for step in 0..=40 {
			let w = stroke_width(step as f64 * 0.1, 4.0, 0.3, 0.9);
			assert!(w >= last);
			last = w;
		}
	}

	#[test]
	fn stroke_width_without_degree_is_minimum() {
		assert_eq!(stroke_width(0.0, 0.0, 0.3, 0.9), 0.3);
	}

	#[test]
	fn random_home_stays_inside_padding() {
		let bounds = Size::new(500.0, 360.0);
		for r in [0.0, 0.25, 0.5, 0.999_999] {
			let p = random_home(bounds, 40.0, &mut || r);
			assert!(p.x >= 40.0 && p.x <= 460.0, "{p:?}");
			assert!(p.y >= 40.0 && p.y <= 320.0, "{p:?}");
		}
	}

	#[test]
	fn random_home_in_tiny_container_sits_on_padding() {
		let p = random_home(Size::new(50.0, 50.0), 40.0, &mut || 0.7);
		assert_eq!(p, Point::new(40.0, 40.0));
	}

	#[test]
	fn clamp_keeps_box_inside() {
		let bounds = Size::new(300.0, 200.0);
		let size = Size::new(44.0, 44.0);
		assert_eq!(
			clamp_to_bounds(Point::new(-10.0, 500.0), size, bounds),
			Point::new(0.0, 156.0)
		);
		assert_eq!(
			clamp_to_bounds(Point::new(100.0, 20.0), size, bounds),
			Point::new(100.0, 20.0)
		);
	}

	#[test]
	fn focus_moves_a_quarter_toward_centre() {
		let t = focus_transform(Point::new(100.0, 100.0), Point::new(300.0, 200.0), 0.25, 1.15);
		assert_eq!(t, ViewTransform { x: 50.0, y: 25.0, k: 1.15 });
		assert_eq!(t.css(), "translate(50px, 25px) scale(1.15)");
		assert_eq!(ViewTransform::IDENTITY.css(), "none");
	}

	#[test]
	fn viewport_undoes_scale() {
		let vp = Viewport::new(Rect::new(10.0, 20.0, 230.0, 115.0), Size::new(200.0, 100.0));
		assert!((vp.scale - 1.15).abs() < 1e-12);
		let local = vp.to_local(Point::new(10.0 + 115.0, 20.0 + 57.5));
		assert!((local.x - 100.0).abs() < 1e-9);
		assert!((local.y - 50.0).abs() < 1e-9);
	}
}
