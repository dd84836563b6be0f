use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::data::items::{Item, Kind};
use crate::data::keywords::tag_label;

/// A filter token. Stored as `kind:<Kind>`, `tag:<tag>` or `badge:<label>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChipKey {
	Kind(Kind),
	Tag(String),
	Badge(String),
}

impl ChipKey {
	pub fn tag(tag: impl Into<String>) -> Self {
		ChipKey::Tag(tag.into())
	}

	/// Display tier: kinds, then tags, then badges.
	pub fn rank(&self) -> u8 {
		match self {
			ChipKey::Kind(_) => 0,
			ChipKey::Tag(_) => 1,
			ChipKey::Badge(_) => 2,
		}
	}

	pub fn is_filter(&self) -> bool {
		!matches!(self, ChipKey::Badge(_))
	}

	pub fn is_tag(&self) -> bool {
		matches!(self, ChipKey::Tag(_))
	}

	pub fn label(&self) -> String {
		match self {
			ChipKey::Kind(k) => k.as_str().into(),
			ChipKey::Tag(t) => tag_label(t).into(),
			ChipKey::Badge(b) => b.clone(),
		}
	}

	pub fn tone(&self) -> &'static str {
		match self {
			ChipKey::Kind(_) => "chip-kind",
			ChipKey::Tag(_) => "chip-tag",
			ChipKey::Badge(_) => "chip-badge",
		}
	}
}

impl fmt::Display for ChipKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChipKey::Kind(k) => write!(f, "kind:{}", k.as_str()),
			ChipKey::Tag(t) => write!(f, "tag:{t}"),
			ChipKey::Badge(b) => write!(f, "badge:{b}"),
		}
	}
}

impl FromStr for ChipKey {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let Some((category, value)) = s.split_once(':') else {
			bail!("chip key {s:?} has no category");
		};
		match category {
			"kind" => Kind::parse(value)
				.map(ChipKey::Kind)
				.ok_or_else(|| anyhow!("unknown kind {value:?}")),
			"tag" if !value.is_empty() => Ok(ChipKey::Tag(value.into())),
			"badge" if !value.trim().is_empty() => Ok(ChipKey::Badge(value.trim().into())),
			_ => bail!("unsupported chip key {s:?}"),
		}
	}
}

impl From<ChipKey> for String {
	fn from(key: ChipKey) -> Self {
		key.to_string()
	}
}

impl TryFrom<String> for ChipKey {
	type Error = anyhow::Error;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		s.parse()
	}
}

/// Every chip an item answers to: its kind, each tag, each non-blank badge.
pub fn item_chips(item: &Item) -> Vec<ChipKey> {
	let mut chips = vec![ChipKey::Kind(item.kind())];
	chips.extend(item.tags.iter().map(|t| ChipKey::tag(*t)));
	chips.extend(
		item.badges
			.iter()
			.map(|b| b.trim())
			.filter(|b| !b.is_empty())
			.map(|b| ChipKey::Badge(b.into())),
	);
	chips
}

pub fn sort_chips(mut chips: Vec<ChipKey>) -> Vec<ChipKey> {
	chips.sort_by_cached_key(|c| (c.rank(), c.label().to_lowercase(), c.label()));
	chips
}

/// Kind and tag chips across all items, sorted for the filter sidebar.
pub fn filter_universe(items: &[Item]) -> Vec<ChipKey> {
	let unique: BTreeSet<ChipKey> = items
		.iter()
		.flat_map(item_chips)
		.filter(ChipKey::is_filter)
		.collect();
	sort_chips(unique.into_iter().collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::items::{ItemDetail, LinkSet, ProjectDetail};

	fn item(tags: &'static [&'static str], badges: &'static [&'static str]) -> Item {
		Item {
			id: "x",
			title: "x",
			tags,
			badges,
			summary: None,
			period: None,
			links: LinkSet::NONE,
			detail: ItemDetail::Project(ProjectDetail {
				achievements: &[],
				funder: None,
			}),
		}
	}

	#[test]
	fn string_form_round_trips() {
		for raw in ["kind:Project", "kind:Publication", "tag:data-ai", "badge:Under review"] {
			let key: ChipKey = raw.parse().unwrap();
			assert_eq!(key.to_string(), raw);
		}
	}

	#[test]
	fn tag_values_may_contain_colons() {
		assert_eq!("tag:a:b".parse::<ChipKey>().unwrap(), ChipKey::tag("a:b"));
	}

	#[test]
	fn bad_keys_are_rejected() {
		for raw in ["", "governance", "kind:Poster", "colour:red", "tag:", "badge:  "] {
			assert!(raw.parse::<ChipKey>().is_err(), "{raw}");
		}
	}

	#[test]
	fn item_chips_skip_blank_badges() {
		let chips = item_chips(&item(&["governance"], &[" Report ", "", "  "]));
		assert_eq!(
			chips,
			[
				ChipKey::Kind(Kind::Project),
				ChipKey::tag("governance"),
				ChipKey::Badge("Report".into()),
			]
		);
	}

	#[test]
	fn chips_sort_by_rank_then_label() {
		let sorted = sort_chips(vec![
			ChipKey::Badge("Alpha".into()),
			ChipKey::tag("transition"),
			ChipKey::tag("data-ai"),
			ChipKey::Kind(Kind::Publication),
			ChipKey::Kind(Kind::Project),
		]);
		let labels: Vec<_> = sorted.iter().map(ChipKey::label).collect();
		assert_eq!(labels, ["Project", "Publication", "AI / ML", "Data Engineering", "Alpha"]);
	}

	#[test]
	fn universe_has_no_badges_or_duplicates() {
		let items = [
			item(&["governance", "data-ai"], &["Report"]),
			item(&["governance"], &[]),
		];
		let universe = filter_universe(&items);
		assert_eq!(
			universe,
			[
				ChipKey::Kind(Kind::Project),
				ChipKey::tag("data-ai"),
				ChipKey::tag("governance"),
			]
		);
	}

	#[test]
	fn serde_uses_string_form() {
		let json = serde_json::to_string(&[ChipKey::tag("governance")]).unwrap();
		assert_eq!(json, r#"["tag:governance"]"#);
		let back: Vec<ChipKey> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, [ChipKey::tag("governance")]);
	}
}
