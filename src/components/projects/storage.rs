//! Session persistence for the active filter chips.
//!
//! The stored value is a JSON array of chip strings under [`STORAGE_KEY`].
//! Reads fall back to an empty selection and writes are best effort: the
//! filter is a convenience, so storage trouble is logged and dropped.

use anyhow::{Context, Result, anyhow};
use log::warn;
use serde_json::Value;
use wasm_bindgen::JsValue;

use super::chips::ChipKey;
use super::selection::Selection;

pub const STORAGE_KEY: &str = "pp_selected_chips_v1";

pub trait KeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>>;
	fn set(&self, key: &str, value: &str) -> Result<()>;
	fn remove(&self, key: &str) -> Result<()>;
}

/// `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

fn js_err(e: JsValue) -> anyhow::Error {
	anyhow!("{e:?}")
}

impl BrowserSession {
	fn storage(&self) -> Result<web_sys::Storage> {
		web_sys::window()
			.context("no window")?
			.session_storage()
			.map_err(js_err)?
			.context("session storage unavailable")
	}
}

impl KeyValueStore for BrowserSession {
	fn get(&self, key: &str) -> Result<Option<String>> {
		self.storage()?.get_item(key).map_err(js_err)
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.storage()?.set_item(key, value).map_err(js_err)
	}

	fn remove(&self, key: &str) -> Result<()> {
		self.storage()?.remove_item(key).map_err(js_err)
	}
}

/// Parses a stored array. Entries that are not chip strings are skipped;
/// anything other than an array gives an empty selection.
pub fn decode_selection(raw: &str) -> Selection {
	match serde_json::from_str::<Value>(raw) {
		Ok(Value::Array(entries)) => entries
			.iter()
			.filter_map(Value::as_str)
			.filter_map(|s| s.parse::<ChipKey>().ok())
			.collect(),
		_ => Selection::default(),
	}
}

pub fn encode_selection(selection: &Selection) -> Result<String> {
	let keys: Vec<&ChipKey> = selection.iter().collect();
	Ok(serde_json::to_string(&keys)?)
}

pub fn load_selection(store: &impl KeyValueStore) -> Selection {
	match store.get(STORAGE_KEY) {
		Ok(Some(raw)) => decode_selection(&raw),
		Ok(None) => Selection::default(),
		Err(e) => {
			warn!("reading stored filters failed: {e:#}");
			Selection::default()
		}
	}
}

/// Writes `selection`, or removes the key when nothing is selected.
pub fn save_selection(store: &impl KeyValueStore, selection: &Selection) {
	if selection.is_empty() {
		clear_selection(store);
		return;
	}
	let result = encode_selection(selection).and_then(|json| store.set(STORAGE_KEY, &json));
	if let Err(e) = result {
		warn!("storing filters failed: {e:#}");
	}
}

pub fn clear_selection(store: &impl KeyValueStore) {
	if let Err(e) = store.remove(STORAGE_KEY) {
		warn!("clearing stored filters failed: {e:#}");
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use anyhow::bail;

	use super::*;
	use crate::data::items::Kind;

	#[derive(Default)]
	struct MemoryStore {
		entries: RefCell<HashMap<String, String>>,
		broken: bool,
	}

	impl MemoryStore {
		fn broken() -> Self {
			Self {
				broken: true,
				..Self::default()
			}
		}

		fn raw(&self) -> Option<String> {
			self.entries.borrow().get(STORAGE_KEY).cloned()
		}

		fn put(&self, value: &str) {
			self.entries
				.borrow_mut()
				.insert(STORAGE_KEY.into(), value.into());
		}
	}

	impl KeyValueStore for MemoryStore {
		fn get(&self, key: &str) -> Result<Option<String>> {
			if self.broken {
				bail!("storage disabled");
			}
			Ok(self.entries.borrow().get(key).cloned())
		}

		fn set(&self, key: &str, value: &str) -> Result<()> {
			if self.broken {
				bail!("quota exceeded");
			}
			self.entries.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}

		fn remove(&self, key: &str) -> Result<()> {
			if self.broken {
				bail!("storage disabled");
			}
			self.entries.borrow_mut().remove(key);
			Ok(())
		}
	}

	fn sample() -> Selection {
		[ChipKey::tag("data-ai"), ChipKey::Kind(Kind::Publication)]
			.into_iter()
			.collect()
	}

	#[test]
	fn selection_survives_a_round_trip() {
		let store = MemoryStore::default();
		save_selection(&store, &sample());
		assert_eq!(load_selection(&store), sample());
	}

	#[test]
	fn stored_form_is_a_string_array() {
		let store = MemoryStore::default();
		save_selection(&store, &sample());
		let raw = store.raw().unwrap();
		let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
		assert_eq!(parsed, ["kind:Publication", "tag:data-ai"]);
	}

	#[test]
	fn empty_selection_removes_the_key() {
		let store = MemoryStore::default();
		save_selection(&store, &sample());
		save_selection(&store, &Selection::default());
		assert_eq!(store.raw(), None);
	}

	#[test]
	fn corrupt_content_reads_as_empty() {
		let store = MemoryStore::default();
		for raw in [r#"{"tag:data-ai": true}"#, "not json", "42", "null", ""] {
			store.put(raw);
			assert!(load_selection(&store).is_empty(), "{raw}");
		}
	}

	#[test]
	fn junk_entries_are_skipped() {
		let selection = decode_selection(r#"["tag:governance", 7, null, "whatever", "kind:Project"]"#);
		let expected: Selection = [ChipKey::tag("governance"), ChipKey::Kind(Kind::Project)]
			.into_iter()
			.collect();
		assert_eq!(selection, expected);
	}

	#[test]
	fn missing_key_reads_as_empty() {
		assert!(load_selection(&MemoryStore::default()).is_empty());
	}

	#[test]
	fn storage_failures_are_swallowed() {
		let store = MemoryStore::broken();
		save_selection(&store, &sample());
		clear_selection(&store);
		assert!(load_selection(&store).is_empty());
	}
}
