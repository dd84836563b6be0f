/// A keyword in the site taxonomy. `tag` doubles as the network node id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword {
	pub tag: &'static str,
	pub label: &'static str,
	pub description: &'static str,
	pub perspective: &'static str,
}

pub const KEYWORDS: &[Keyword] = &[
	Keyword {
		tag: "governance",
		label: "Data Modelling",
		description: "Designing clear entities, relationships, and metric logic that make data decision-ready.",
		perspective: "I approach governance as a process of knowledge production and recognition: how decisions are shaped, whose voices are heard, and which everyday practices are rendered visible or invisible. Rather than treating participation as a formal or top-down mechanism, I understand governance as relational and situated, emerging through ongoing interactions between communities, institutions, and data.",
	},
	Keyword {
		tag: "data-ai",
		label: "AI / ML",
		description: "Building LLM/ML-driven classification and enrichment workflows for large-scale analytics systems.",
		perspective: "I work with data and digital methods not as neutral technical tools, but as situated systems that shape how social and environmental realities are defined, measured, and acted upon. My approach focuses on identifying data gaps, designing transparent analytical frameworks, and using automation to make socio-environmental information more accessible, accountable, and usable for decision-making.",
	},
	Keyword {
		tag: "transition",
		label: "Data Engineering",
		description: "Building robust ingestion and transformation pipelines across cloud and warehouse systems.",
		perspective: "I understand sustainable transition as an uneven and contested process that unfolds through everyday practices rather than abstract targets alone. My work focuses on how marginalised communities, particularly through practices such as food sharing, navigate, reshape, and reimagine sustainability from below, contributing to agroecological transitions and climate resilience beyond formal policy frameworks.",
	},
	Keyword {
		tag: "impact-measurement",
		label: "BI & Reporting",
		description: "Delivering traceable reporting layers and KPI views that support operational and strategic decisions.",
		perspective: "For me, impact measurement is not simply about quantifying outcomes, but about translating broad sustainability goals into meaningful, context-sensitive indicators that reflect lived realities. I develop frameworks and metrics that support accountability and learning, enabling organisations to act with greater clarity while remaining attentive to social inclusion, justice, and local conditions.",
	},
	Keyword {
		tag: "python",
		label: "DevOps & Quality",
		description: "Applying CI/CD, testing, and automation practices to keep data systems reliable and maintainable.",
		perspective: "",
	},
];

pub fn keyword(tag: &str) -> Option<&'static Keyword> {
	KEYWORDS.iter().find(|k| k.tag == tag)
}

/// Display label for a tag, falling back to the raw tag.
pub fn tag_label(tag: &str) -> &str {
	keyword(tag).map(|k| k.label).unwrap_or(tag)
}
