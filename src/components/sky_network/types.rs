#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkNode {
	pub id: String,
	pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkEdge {
	pub from: String,
	pub to: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkData {
	pub nodes: Vec<NetworkNode>,
	pub edges: Vec<NetworkEdge>,
}
