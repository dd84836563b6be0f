use std::collections::BTreeSet;

use super::chips::{ChipKey, item_chips};
use crate::data::items::Item;

/// Active filter chips. Items match when they carry any of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	keys: BTreeSet<ChipKey>,
}

impl Selection {
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn contains(&self, key: &ChipKey) -> bool {
		self.keys.contains(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = &ChipKey> {
		self.keys.iter()
	}

	pub fn toggle(&mut self, key: ChipKey) {
		if !self.keys.remove(&key) {
			self.keys.insert(key);
		}
	}

	pub fn clear(&mut self) {
		self.keys.clear();
	}

	/// Follows the keyword picked elsewhere on the page: any tag chips are
	/// swapped for `tag`, other chips stay. `None` empties the selection.
	pub fn sync_default_tag(&mut self, tag: Option<&str>) {
		let Some(tag) = tag else {
			self.clear();
			return;
		};
		self.keys.retain(|k| !k.is_tag());
		self.keys.insert(ChipKey::tag(tag));
	}

	pub fn matches(&self, item: &Item) -> bool {
		self.is_empty() || item_chips(item).iter().any(|c| self.keys.contains(c))
	}

	pub fn filter(&self, items: &[Item]) -> Vec<Item> {
		items.iter().filter(|it| self.matches(it)).copied().collect()
	}
}

impl FromIterator<ChipKey> for Selection {
	fn from_iter<I: IntoIterator<Item = ChipKey>>(iter: I) -> Self {
		Self {
			keys: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::items::{Kind, PROJECTS, PUBLICATIONS, all_items};

	#[test]
	fn toggle_twice_is_a_no_op() {
		let mut sel: Selection = [ChipKey::Kind(Kind::Project)].into_iter().collect();
		let before = sel.clone();
		sel.toggle(ChipKey::tag("governance"));
		assert!(sel.contains(&ChipKey::tag("governance")));
		sel.toggle(ChipKey::tag("governance"));
		assert_eq!(sel, before);
	}

	#[test]
	fn empty_selection_shows_everything() {
		let items = all_items();
		assert_eq!(Selection::default().filter(&items), items);
	}

	#[test]
	fn chips_combine_as_union() {
		let items = all_items();
		let sel: Selection = [ChipKey::tag("data-ai"), ChipKey::Kind(Kind::Project)]
			.into_iter()
			.collect();
		let shown = sel.filter(&items);

		let expected: Vec<Item> = items
			.iter()
			.filter(|it| it.kind() == Kind::Project || it.tags.contains(&"data-ai"))
			.copied()
			.collect();
		assert_eq!(shown, expected);
		// union, not intersection: every project shows even without data-ai
		assert!(shown.len() >= PROJECTS.len());
		assert!(shown.iter().any(|it| it.kind() == Kind::Project && !it.tags.contains(&"data-ai")));
		assert!(shown.iter().any(|it| it.kind() == Kind::Publication));
	}

	#[test]
	fn badges_filter_too() {
		let sel: Selection = [ChipKey::Badge("Report".into())].into_iter().collect();
		let shown = sel.filter(PUBLICATIONS);
		assert_eq!(shown.len(), 1);
		assert_eq!(shown[0].id, "pub-kpi-divaircity");
	}

	#[test]
	fn default_tag_replaces_tags_only() {
		let mut sel: Selection = [
			ChipKey::tag("data-ai"),
			ChipKey::tag("transition"),
			ChipKey::Kind(Kind::Publication),
		]
		.into_iter()
		.collect();
		sel.sync_default_tag(Some("governance"));
		let expected: Selection = [ChipKey::tag("governance"), ChipKey::Kind(Kind::Publication)]
			.into_iter()
			.collect();
		assert_eq!(sel, expected);
	}

	#[test]
	fn clearing_default_tag_clears_everything() {
		let mut sel: Selection = [ChipKey::Kind(Kind::Project)].into_iter().collect();
		sel.sync_default_tag(Some("governance"));
		sel.sync_default_tag(None);
		assert!(sel.is_empty());
	}
}
