//! Definition types for custom input types.
//!
//! These mirror the JSON shape authors write by hand:
//!
//! ```json
//! {
//!   "fileName": "fruits.txt",
//!   "mappingFunctionName": "mapFruit",
//!   "values": [
//!     { "text": "apple", "prompts": [{ "categories": ["DEFAULT"], "text": "apple" }] },
//!     { "text": "golden delicious", "mapTo": "apple" }
//!   ]
//! }
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};


/// Prompt category used when a caller does not name one.
pub const DEFAULT_CATEGORY: &str = "DEFAULT";

/// A user-facing phrase for a value, scoped by category tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptEntry {
	/// Categories this prompt is offered under.
	#[serde(default)]
	pub categories: IndexSet<String>,
	/// Prompt text.
	pub text: String,
}

impl PromptEntry {
	pub fn new<I, S>(categories: I, text: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			categories: categories.into_iter().map(Into::into).collect(),
			text: text.into(),
		}
	}

	#[inline]
	pub fn has_category(&self, category: &str) -> bool {
		self.categories.contains(category)
	}
}

/// One surface form of a custom type.
///
/// An entry without `map_to` is its own canonical form. An entry with
/// `map_to` is a synonym; `map_to` is substituted as-is and is never looked
/// up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueEntry {
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub map_to: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prompts: Option<Vec<PromptEntry>>,
}

impl ValueEntry {
	/// A self-canonical value.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			map_to: None,
			prompts: None,
		}
	}

	/// A synonym of `map_to`.
	pub fn mapped(text: impl Into<String>, map_to: impl Into<String>) -> Self {
		Self {
			map_to: Some(map_to.into()),
			..Self::new(text)
		}
	}

	/// Appends a prompt, creating the prompt list on first use.
	pub fn with_prompt(mut self, prompt: PromptEntry) -> Self {
		self.prompts.get_or_insert_with(Vec::new).push(prompt);
		self
	}

	/// The text this entry canonicalizes to.
	#[inline]
	pub fn canonical(&self) -> &str {
		self.map_to.as_deref().unwrap_or(&self.text)
	}

	#[inline]
	pub fn is_canonical(&self) -> bool {
		self.map_to.is_none()
	}

	pub(crate) fn prompts(&self) -> &[PromptEntry] {
		self.prompts.as_deref().unwrap_or_default()
	}
}

/// A registered vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
	/// File name for exported values. Defaults to `<lowercase name>.txt`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_name: Option<String>,
	/// Accessor name. Defaults to `map<Name>`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mapping_function_name: Option<String>,
	/// Values in authoring order.
	pub values: Vec<ValueEntry>,
}

impl CustomType {
	pub fn new(values: impl IntoIterator<Item = ValueEntry>) -> Self {
		Self {
			file_name: None,
			mapping_function_name: None,
			values: values.into_iter().collect(),
		}
	}

	pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
		self.file_name = Some(file_name.into());
		self
	}

	pub fn with_mapping_function_name(mut self, name: impl Into<String>) -> Self {
		self.mapping_function_name = Some(name.into());
		self
	}

	/// First entry whose text equals `text`.
	pub fn find(&self, text: &str) -> Option<&ValueEntry> {
		self.values.iter().find(|entry| entry.text == text)
	}

	pub(crate) fn find_mut(&mut self, text: &str) -> Option<&mut ValueEntry> {
		self.values.iter_mut().find(|entry| entry.text == text)
	}
}
