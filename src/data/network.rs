use crate::components::sky_network::{NetworkData, NetworkEdge, NetworkNode};

const NODES: &[(&str, &str)] = &[
	("governance", "Governance"),
	("data-ai", "Data & AI"),
	("transition", "Sustainable transition"),
	("impact-measurement", "Impact measurement"),
];

const EDGES: &[(&str, &str)] = &[
	// governance triangle
	("governance", "transition"),
	("governance", "impact-measurement"),
	("governance", "data-ai"),
	// data & ai axis; "innovation" has no node and is dropped at layout time
	("data-ai", "innovation"),
	("data-ai", "impact-measurement"),
	("data-ai", "transition"),
	("transition", "impact-measurement"),
];

/// Keyword constellation shown on the home page.
pub fn network_data() -> NetworkData {
	NetworkData {
		nodes: NODES
			.iter()
			.map(|&(id, label)| NetworkNode {
				id: id.into(),
				label: label.into(),
			})
			.collect(),
		edges: EDGES
			.iter()
			.map(|&(from, to)| NetworkEdge {
				from: from.into(),
				to: to.into(),
			})
			.collect(),
	}
}
