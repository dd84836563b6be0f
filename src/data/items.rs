use std::cmp::Ordering;

use chrono::{Datelike, Local};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
	Project,
	Publication,
}

impl Kind {
	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Project => "Project",
			Kind::Publication => "Publication",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"Project" => Some(Kind::Project),
			"Publication" => Some(Kind::Publication),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
	Year(i32),
	Range { from: i32, to: i32 },
	Ongoing { from: i32 },
}

impl Period {
	pub fn label(&self) -> String {
		match *self {
			Period::Year(y) => y.to_string(),
			Period::Range { from, to } => format!("{from}–{to}"),
			Period::Ongoing { from } => format!("{from}–"),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkSet {
	pub website: Option<&'static str>,
	pub doi: Option<&'static str>,
	pub pdf: Option<&'static str>,
	pub github: Option<&'static str>,
	pub logo: Option<&'static str>,
}

impl LinkSet {
	pub const NONE: LinkSet = LinkSet {
		website: None,
		doi: None,
		pdf: None,
		github: None,
		logo: None,
	};
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
	pub achievements: &'static [&'static str],
	pub funder: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublicationDetail {
	pub authors: &'static [&'static str],
	pub publisher: Option<&'static str>,
	pub volume: Option<&'static str>,
	pub issue: Option<&'static str>,
	pub pages: Option<&'static str>,
	pub month: Option<&'static str>,
	pub version: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemDetail {
	Project(ProjectDetail),
	Publication(PublicationDetail),
}

/// A project or publication record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
	pub id: &'static str,
	pub title: &'static str,
	pub tags: &'static [&'static str],
	pub badges: &'static [&'static str],
	pub summary: Option<&'static str>,
	pub period: Option<Period>,
	pub links: LinkSet,
	pub detail: ItemDetail,
}

/// External affordance rendered on the right edge of an item card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemAction {
	Doi(String),
	Pdf(String),
	Website(String),
	Logo { src: String, alt: String },
}

fn non_blank(s: Option<&str>) -> Option<&str> {
	s.map(str::trim).filter(|s| !s.is_empty())
}

pub fn to_doi_href(raw: Option<&str>) -> Option<String> {
	let s = non_blank(raw)?;
	let lower = s.to_ascii_lowercase();
	if lower.starts_with("http://") || lower.starts_with("https://") {
		Some(s.to_string())
	} else {
		Some(format!("https://doi.org/{s}"))
	}
}

impl Item {
	pub fn kind(&self) -> Kind {
		match self.detail {
			ItemDetail::Project(_) => Kind::Project,
			ItemDetail::Publication(_) => Kind::Publication,
		}
	}

	pub fn achievements(&self) -> &'static [&'static str] {
		match self.detail {
			ItemDetail::Project(p) => p.achievements,
			ItemDetail::Publication(_) => &[],
		}
	}

	/// Year used for ordering publications; ongoing periods count as `now_year`.
	pub fn sort_year(&self, now_year: i32) -> i32 {
		match self.period {
			None => -1,
			Some(Period::Year(y)) => y,
			Some(Period::Range { to, .. }) => to,
			Some(Period::Ongoing { .. }) => now_year,
		}
	}

	pub fn meta_line(&self) -> Option<String> {
		let year = self.period.map(|p| p.label());
		let source = match self.detail {
			ItemDetail::Project(p) => non_blank(p.funder),
			ItemDetail::Publication(p) => non_blank(p.publisher),
		};
		match (year, source) {
			(Some(y), Some(s)) => Some(format!("{y} · {s}")),
			(Some(y), None) => Some(y),
			(None, Some(s)) => Some(s.to_string()),
			(None, None) => None,
		}
	}

	/// First usable outbound link: website, DOI, PDF, then GitHub.
	pub fn external_href(&self) -> Option<String> {
		let links = &self.links;
		non_blank(links.website)
			.map(str::to_string)
			.or_else(|| to_doi_href(links.doi))
			.or_else(|| non_blank(links.pdf).map(str::to_string))
			.or_else(|| non_blank(links.github).map(str::to_string))
	}

	/// Authors and bibliographic detail for publications, e.g.
	/// `H. Cho · 58(14), 2863–2879`.
	pub fn citation(&self) -> Option<String> {
		let ItemDetail::Publication(p) = self.detail else {
			return None;
		};
		let mut parts = Vec::new();
		if !p.authors.is_empty() {
			parts.push(p.authors.join(", "));
		}
		let issue = match (non_blank(p.volume), non_blank(p.issue)) {
			(Some(v), Some(i)) => Some(format!("{v}({i})")),
			(Some(v), None) => Some(v.to_string()),
			(None, Some(i)) => Some(format!("({i})")),
			(None, None) => None,
		};
		let location = match (issue, non_blank(p.pages)) {
			(Some(i), Some(pg)) => Some(format!("{i}, {pg}")),
			(Some(i), None) => Some(i),
			(None, Some(pg)) => Some(pg.to_string()),
			(None, None) => None,
		};
		parts.extend(location);
		parts.extend(non_blank(p.month).map(str::to_string));
		parts.extend(non_blank(p.version).map(|v| format!("v{v}")));
		(!parts.is_empty()).then(|| parts.join(" · "))
	}

	pub fn actions(&self) -> Vec<ItemAction> {
		let mut out = Vec::new();
		match self.detail {
			ItemDetail::Project(_) => {
				if let Some(logo) = non_blank(self.links.logo) {
					out.push(ItemAction::Logo {
						src: logo.to_string(),
						alt: format!("{} logo", self.title),
					});
				}
				if let Some(site) = non_blank(self.links.website) {
					out.push(ItemAction::Website(site.to_string()));
				}
			}
			ItemDetail::Publication(_) => {
				if let Some(doi) = to_doi_href(self.links.doi) {
					out.push(ItemAction::Doi(doi));
				}
				if let Some(pdf) = non_blank(self.links.pdf) {
					out.push(ItemAction::Pdf(pdf.to_string()));
				}
			}
		}
		out
	}

	/// Actions shown as external links; logos are not among them.
	pub fn link_actions(&self) -> Vec<ItemAction> {
		let mut out = self.actions();
		out.retain(|a| !matches!(a, ItemAction::Logo { .. }));
		out
	}
}

/// Projects first; publications newest first. Ties compare equal.
pub fn compare_items(a: &Item, b: &Item, now_year: i32) -> Ordering {
	match (a.kind(), b.kind()) {
		(Kind::Project, Kind::Publication) => Ordering::Less,
		(Kind::Publication, Kind::Project) => Ordering::Greater,
		(Kind::Publication, Kind::Publication) => {
			b.sort_year(now_year).cmp(&a.sort_year(now_year))
		}
		(Kind::Project, Kind::Project) => Ordering::Equal,
	}
}

pub fn sort_items(items: &mut [Item], now_year: i32) {
	// sort_by is stable, so equal years keep declaration order
	items.sort_by(|a, b| compare_items(a, b, now_year));
}

/// Local calendar year; ongoing periods sort as ending this year.
pub fn current_year() -> i32 {
	Local::now().year()
}

const fn project(
	id: &'static str,
	title: &'static str,
	tags: &'static [&'static str],
	period: Period,
	funder: Option<&'static str>,
	summary: &'static str,
	achievements: &'static [&'static str],
	website: Option<&'static str>,
) -> Item {
	Item {
		id,
		title,
		tags,
		badges: &[],
		summary: Some(summary),
		period: Some(period),
		links: LinkSet {
			website,
			..LinkSet::NONE
		},
		detail: ItemDetail::Project(ProjectDetail {
			achievements,
			funder,
		}),
	}
}

pub const PROJECTS: &[Item] = &[
	project(
		"proj-cultivate",
		"CULTIVATE — Analytics Platform for 105 European Cities",
		&["data-ai", "transition", "governance"],
		Period::Range { from: 2023, to: 2026 },
		Some("EU Horizon 2020"),
		"Led the design of a data platform combining LLM-based classification with structured pipelines to automate ingestion and categorisation across 105 cities.",
		&[
			"Built medallion architecture on Snowflake with dbt, improving classification accuracy from 32% to 74.5%.",
			"Processed 200,000+ records through automated LLM-assisted categorisation and validation workflows.",
			"Stack: Snowflake, dbt, Azure (Data Factory, SQL), Python, LLM/OpenAI API, GitHub Actions.",
			"Published: ACM WSDM 2026 · ACM CIKM 2024.",
		],
		Some("https://cultivate-project.eu/"),
	),
	project(
		"proj-divaircity",
		"DivAirCity — IoT Analytics for Urban Environmental Monitoring",
		&["impact-measurement", "transition", "governance"],
		Period::Range { from: 2021, to: 2024 },
		Some("EU Horizon 2020"),
		"Designed analytics architectures for real-time environmental sensor data across multiple European cities.",
		&[
			"Built automated ETL pipelines with Kafka for IoT data streaming under GDPR governance constraints.",
			"Integrated environmental, demographic, and perception data into decision-ready models for city teams.",
			"Stack: Kafka, Python, SQL, Power BI, Azure.",
		],
		Some("https://divaircity.eu/"),
	),
	project(
		"proj-shareweave",
		"SHAREWEAVE: Mapping governance and social impact in food sharing networks",
		&["governance", "impact-measurement", "data-ai", "transition"],
		Period::Year(2026),
		Some("Research Ireland"),
		"Principal Investigator for a funded project with FoodCloud, developing an integrated data pipeline that links mapping, impact analysis, and ESG-aligned reporting to capture governance and network-based social impact of food-sharing initiatives.",
		&[
			"Secured €12,000 competitive funding as PI under the Research Ireland New Foundations scheme.",
			"Designed a relational mapping and impact framework combining qualitative and spatial data.",
			"Coordinating a co-learning workshop with civic partners to translate findings into policy-relevant insights.",
		],
		None,
	),
	project(
		"proj-uk2070",
		"UK 2070: Civil society, inequality and place-based disadvantage",
		&["governance"],
		Period::Range { from: 2019, to: 2022 },
		Some("Lincoln Institute of Land Policy / UK 2070 Commission"),
		"Contributed to a programme of policy-facing research on place-based disadvantage, civil society, and food security, producing evidence used in national and local decision-making.",
		&[
			"Place Profiles — Produced analytical profiles used in the UK 2070 Commission report and the English Devolution White Paper.",
			"Food Security & Civil Society — Delivered commissioned research for a London borough, including focus groups with food banks and local groups and a policy report.",
			"Civil Society Perspectives on Inequality — Facilitated focus groups across multiple UK locations and delivered working papers to the UK 2070 Commission.",
		],
		None,
	),
	project(
		"proj-phd",
		"PhD research – Planning & participation",
		&["governance"],
		Period::Range { from: 2014, to: 2019 },
		None,
		"Doctoral research on recognition, planning practices and community participation in a diverse Seoul neighbourhood.",
		&[
			"Developed a recognition-focused framework for analysing participation and governance.",
			"Generated empirical findings that underpin later work on inclusion, democracy and data justice.",
			"Published multiple peer-reviewed papers on diversity, governance and planning practice.",
		],
		None,
	),
];

pub const PUBLICATIONS: &[Item] = &[
	Item {
		id: "pub-geoforum-2025",
		title: "Evolving foodscapes: Tracing trajectories of urban food sharing initiatives for just urban food transitions",
		tags: &["transition"],
		badges: &["Journal article"],
		summary: Some(
			"Traces how food sharing initiatives evolve over time and what these trajectories imply for just urban food transitions.",
		),
		period: Some(Period::Year(2025)),
		links: LinkSet {
			doi: Some("10.1016/j.geoforum.2025.104318"),
			..LinkSet::NONE
		},
		detail: ItemDetail::Publication(PublicationDetail {
			authors: &["A. R. Davies", "H. Cho", "M. Vedoa", "R. Martinez Varderi", "A. M. Gatejel"],
			publisher: Some("Geoforum"),
			volume: None,
			issue: None,
			pages: None,
			month: None,
			version: None,
		}),
	},
	Item {
		id: "pub-cikm-2024",
		title: "LLM-based Automated Web Retrieval and Text Classification of Food Sharing Initiatives",
		tags: &["data-ai"],
		badges: &["Conference paper"],
		summary: Some(
			"Introduces an LLM-driven pipeline for retrieving and classifying food sharing initiatives from web data.",
		),
		period: Some(Period::Year(2024)),
		links: LinkSet {
			doi: Some("10.1145/3627673.3680090"),
			..LinkSet::NONE
		},
		detail: ItemDetail::Publication(PublicationDetail {
			authors: &["H. Wu", "H. Cho", "A. R. Davies", "G. J. F. Jones"],
			publisher: Some("ACM CIKM"),
			volume: None,
			issue: None,
			pages: Some("4983–4990"),
			month: Some("October"),
			version: None,
		}),
	},
	Item {
		id: "pub-urban-studies-2021",
		title: "The politics of recognition and planning practices in diverse neighbourhoods: Korean Chinese in Garibong-dong, Seoul",
		tags: &["governance"],
		badges: &["Journal article"],
		summary: Some(
			"Develops a recognition perspective on planning practices and minority experiences in a diverse neighbourhood in Seoul.",
		),
		period: Some(Period::Year(2021)),
		links: LinkSet {
			doi: Some("10.1177/0042098020970450"),
			..LinkSet::NONE
		},
		detail: ItemDetail::Publication(PublicationDetail {
			authors: &["H. Cho"],
			publisher: Some("Urban Studies"),
			volume: Some("58"),
			issue: Some("14"),
			pages: Some("2863–2879"),
			month: None,
			version: None,
		}),
	},
	Item {
		id: "pub-kpi-divaircity",
		title: "Key performance indicators and monitoring metrics for DivAirCity specifications",
		tags: &["impact-measurement"],
		badges: &["Report"],
		summary: None,
		period: Some(Period::Year(2022)),
		links: LinkSet::NONE,
		detail: ItemDetail::Publication(PublicationDetail {
			authors: &["H. Cho"],
			publisher: Some("DivAirCity consortium"),
			volume: None,
			issue: None,
			pages: None,
			month: None,
			version: Some("1.0"),
		}),
	},
];

/// Projects followed by publications, in declaration order.
pub fn all_items() -> Vec<Item> {
	PROJECTS.iter().chain(PUBLICATIONS).copied().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn publication(id: &'static str, period: Option<Period>) -> Item {
		Item {
			id,
			title: id,
			tags: &[],
			badges: &[],
			summary: None,
			period,
			links: LinkSet::NONE,
			detail: ItemDetail::Publication(PublicationDetail::default()),
		}
	}

	#[test]
	fn period_labels() {
		assert_eq!(Period::Year(2021).label(), "2021");
		assert_eq!(Period::Range { from: 2021, to: 2024 }.label(), "2021–2024");
		assert_eq!(Period::Ongoing { from: 2023 }.label(), "2023–");
	}

	#[test]
	fn publications_sort_newest_first_and_keep_ties_stable() {
		let mut items = vec![
			publication("a-2021", Some(Period::Year(2021))),
			publication("b-2025", Some(Period::Year(2025))),
			publication("c-2025", Some(Period::Range { from: 2020, to: 2025 })),
			publication("d-ongoing", Some(Period::Ongoing { from: 2019 })),
		];
		sort_items(&mut items, 2026);
		let ids: Vec<_> = items.iter().map(|i| i.id).collect();
		assert_eq!(ids, ["d-ongoing", "b-2025", "c-2025", "a-2021"]);
	}

	#[test]
	fn ongoing_in_current_year_ties_with_same_year() {
		let mut items = vec![
			publication("first-2025", Some(Period::Year(2025))),
			publication("ongoing", Some(Period::Ongoing { from: 2019 })),
			publication("second-2025", Some(Period::Year(2025))),
			publication("old", Some(Period::Year(2021))),
		];
		sort_items(&mut items, 2025);
		let ids: Vec<_> = items.iter().map(|i| i.id).collect();
		assert_eq!(ids, ["first-2025", "ongoing", "second-2025", "old"]);
	}

	#[test]
	fn projects_come_before_publications_in_declared_order() {
		let mut items: Vec<Item> = PUBLICATIONS.iter().chain(PROJECTS).copied().collect();
		sort_items(&mut items, 2026);
		let split = items.iter().position(|i| i.kind() == Kind::Publication).unwrap();
		assert!(items[..split].iter().all(|i| i.kind() == Kind::Project));
		let project_ids: Vec<_> = items[..split].iter().map(|i| i.id).collect();
		let declared: Vec<_> = PROJECTS.iter().map(|i| i.id).collect();
		assert_eq!(project_ids, declared);
	}

	#[test]
	fn missing_period_sorts_last() {
		let mut items = vec![
			publication("none", None),
			publication("y", Some(Period::Year(1999))),
		];
		sort_items(&mut items, 2026);
		assert_eq!(items[0].id, "y");
	}

	#[test]
	fn doi_hrefs() {
		assert_eq!(to_doi_href(Some("  ")), None);
		assert_eq!(to_doi_href(None), None);
		assert_eq!(
			to_doi_href(Some("10.1/x")).as_deref(),
			Some("https://doi.org/10.1/x")
		);
		assert_eq!(
			to_doi_href(Some("HTTPS://doi.org/10.1/x")).as_deref(),
			Some("HTTPS://doi.org/10.1/x")
		);
	}

	#[test]
	fn meta_line_combines_period_and_source() {
		assert_eq!(
			PROJECTS[0].meta_line().as_deref(),
			Some("2023–2026 · EU Horizon 2020")
		);
		assert_eq!(publication("p", None).meta_line(), None);
		assert_eq!(
			publication("p", Some(Period::Year(2020))).meta_line().as_deref(),
			Some("2020")
		);
	}

	#[test]
	fn citation_lists_authors_and_location() {
		assert_eq!(
			PUBLICATIONS[2].citation().as_deref(),
			Some("H. Cho · 58(14), 2863–2879")
		);
		assert_eq!(
			PUBLICATIONS[3].citation().as_deref(),
			Some("H. Cho · v1.0")
		);
		assert_eq!(PROJECTS[0].citation(), None);
		assert_eq!(publication("bare", None).citation(), None);
	}

	#[test]
	fn external_href_prefers_website_then_doi() {
		assert_eq!(
			PROJECTS[0].external_href().as_deref(),
			Some("https://cultivate-project.eu/")
		);
		assert_eq!(
			PUBLICATIONS[1].external_href().as_deref(),
			Some("https://doi.org/10.1145/3627673.3680090")
		);
		assert_eq!(PROJECTS[3].external_href(), None);
	}

	#[test]
	fn actions_follow_kind() {
		assert_eq!(
			PROJECTS[0].actions(),
			[ItemAction::Website("https://cultivate-project.eu/".into())]
		);
		assert_eq!(
			PUBLICATIONS[0].actions(),
			[ItemAction::Doi(
				"https://doi.org/10.1016/j.geoforum.2025.104318".into()
			)]
		);
		assert!(PROJECTS[2].actions().is_empty());
	}

	#[test]
	fn logos_are_not_link_actions() {
		let branded = Item {
			links: LinkSet {
				logo: Some("/logos/cultivate.svg"),
				..PROJECTS[0].links
			},
			..PROJECTS[0]
		};
		assert_eq!(
			branded.actions()[0],
			ItemAction::Logo {
				src: "/logos/cultivate.svg".into(),
				alt: format!("{} logo", PROJECTS[0].title),
			}
		);
		assert_eq!(
			branded.link_actions(),
			[ItemAction::Website("https://cultivate-project.eu/".into())]
		);
	}

	#[test]
	fn current_year_is_the_local_calendar_year() {
		let year = current_year();
		assert_eq!(year, Local::now().year());
		assert!(year >= 2024);
	}
}
