//! The custom input type registry.
//!
//! [`TypeRegistry`] owns every registered [`CustomType`] by name, in
//! registration order, together with the accessor bindings produced at
//! registration time.
//!
//! Lookups scan a type's values in order and stop at the first entry whose
//! text matches. Duplicate texts are allowed; later duplicates are shadowed.
//!
//! # Thread Safety
//!
//! Mutations take `&mut self` and are not atomic with respect to each other.
//! Callers sharing a registry between threads should guard the whole registry
//! with one lock (e.g., `Arc<RwLock<TypeRegistry>>`).

use indexmap::{IndexMap, IndexSet};

use crate::accessor::Accessors;
use crate::error::{LookupError, RemapOutcome};
use crate::naming::{derive_accessor_name, derive_dump_file_name};
use crate::types::{CustomType, DEFAULT_CATEGORY, ValueEntry};

#[cfg(test)]
mod tests;

/// Registry of custom input types keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
	/// Definitions by type name, in first-registration order.
	types: IndexMap<String, CustomType>,
	/// Accessor name -> type name, written at registration time.
	pub(crate) bindings: IndexMap<String, String>,
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	// ==========================================================================
	// Registration
	// ==========================================================================

	/// Registers `definition` under `name` and binds its accessor.
	///
	/// Re-registering a name replaces the definition in place (the name keeps
	/// its original position) and returns the replaced definition. The
	/// accessor name is resolved from the new definition; a binding created by
	/// an earlier registration under a different accessor name is left in
	/// place. An accessor name already bound to another type is rebound.
	pub fn register(&mut self, name: impl Into<String>, definition: CustomType) -> Option<CustomType> {
		let name = name.into();
		let accessor = definition
			.mapping_function_name
			.clone()
			.unwrap_or_else(|| derive_accessor_name(&name));
		let value_count = definition.values.len();

		let replaced = self.types.insert(name.clone(), definition);
		if let Some(previous) = self.bindings.insert(accessor.clone(), name.clone())
			&& previous != name
		{
			tracing::debug!(
				domain = "vocab",
				accessor = %accessor,
				previous_type = %previous,
				type_name = %name,
				"accessor rebound to another type",
			);
		}

		tracing::debug!(
			domain = "vocab",
			type_name = %name,
			accessor = %accessor,
			values = value_count,
			replaced = replaced.is_some(),
			"registered custom type",
		);
		replaced
	}

	// ==========================================================================
	// Type queries
	// ==========================================================================

	/// Type names in registration order.
	pub fn type_names(&self) -> Vec<&str> {
		self.types.keys().map(String::as_str).collect()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	pub fn definition(&self, name: &str) -> Option<&CustomType> {
		self.types.get(name)
	}

	/// Mutable access to a stored definition.
	///
	/// Changing `mapping_function_name` here changes what
	/// [`accessor_name`](Self::accessor_name) reports but does not touch the
	/// binding made at registration.
	pub fn definition_mut(&mut self, name: &str) -> Option<&mut CustomType> {
		self.types.get_mut(name)
	}

	/// All definitions in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomType)> {
		self.types.iter().map(|(name, def)| (name.as_str(), def))
	}

	/// File name an exporter should dump `name`'s values into.
	pub fn dump_file_name(&self, name: &str) -> Option<String> {
		let def = self.types.get(name)?;
		Some(def.file_name.clone().unwrap_or_else(|| derive_dump_file_name(name)))
	}

	/// Accessor name for `name`, read from the current definition.
	pub fn accessor_name(&self, name: &str) -> Option<String> {
		let def = self.types.get(name)?;
		Some(
			def.mapping_function_name
				.clone()
				.unwrap_or_else(|| derive_accessor_name(name)),
		)
	}

	// ==========================================================================
	// Value queries
	// ==========================================================================

	/// Every value text of `name` in order, synonyms included.
	pub fn values(&self, name: &str) -> Option<Vec<&str>> {
		self.try_values(name).ok()
	}

	/// Like [`values`](Self::values), reporting an unknown type.
	pub fn try_values(&self, name: &str) -> Result<Vec<&str>, LookupError> {
		let def = self.lookup(name)?;
		Ok(def.values.iter().map(|entry| entry.text.as_str()).collect())
	}

	/// Canonical form of `value` within type `name`.
	///
	/// Returns the first matching entry's mapping, or the value itself when
	/// that entry has none. Mappings are substituted once and never chased.
	pub fn canonicalize(&self, name: &str, value: &str) -> Option<&str> {
		self.try_canonicalize(name, value).ok()
	}

	/// Like [`canonicalize`](Self::canonicalize), separating an unknown type
	/// from an unknown value.
	pub fn try_canonicalize(&self, name: &str, value: &str) -> Result<&str, LookupError> {
		let def = self.lookup(name)?;
		def.find(value)
			.map(ValueEntry::canonical)
			.ok_or_else(|| LookupError::ValueNotFound {
				type_name: name.to_owned(),
				value: value.to_owned(),
			})
	}

	/// Prompt texts tagged with `category`, deduplicated, in first-seen order.
	///
	/// Unknown types yield an empty list.
	pub fn prompts(&self, name: &str, category: &str) -> Vec<&str> {
		let Some(def) = self.types.get(name) else {
			return Vec::new();
		};

		let mut seen: IndexSet<&str> = IndexSet::new();
		for prompt in def.values.iter().flat_map(ValueEntry::prompts) {
			if prompt.has_category(category) {
				seen.insert(prompt.text.as_str());
			}
		}
		seen.into_iter().collect()
	}

	/// Prompts in the [`DEFAULT_CATEGORY`].
	pub fn default_prompts(&self, name: &str) -> Vec<&str> {
		self.prompts(name, DEFAULT_CATEGORY)
	}

	// ==========================================================================
	// Remapping
	// ==========================================================================

	/// Points `value` at `new_mapping`.
	///
	/// Remapping a value to itself removes its mapping. Unknown types and
	/// values are ignored.
	pub fn remap_value(&mut self, name: &str, value: &str, new_mapping: &str) {
		self.remap_quietly(name, value, new_mapping, false);
	}

	/// Like [`remap_value`](Self::remap_value), appending
	/// `{ text: value, map_to: new_mapping }` when `value` is missing.
	///
	/// The appended entry stores `new_mapping` even when it equals `value`;
	/// only existing entries collapse a self-mapping.
	pub fn remap_value_or_insert(&mut self, name: &str, value: &str, new_mapping: &str) {
		self.remap_quietly(name, value, new_mapping, true);
	}

	/// Strict form of [`remap_value`](Self::remap_value) and
	/// [`remap_value_or_insert`](Self::remap_value_or_insert).
	pub fn try_remap_value(
		&mut self,
		name: &str,
		value: &str,
		new_mapping: &str,
		create_if_missing: bool,
	) -> Result<RemapOutcome, LookupError> {
		let def = self
			.types
			.get_mut(name)
			.ok_or_else(|| LookupError::UnknownType(name.to_owned()))?;

		if let Some(entry) = def.find_mut(value) {
			if value == new_mapping {
				entry.map_to = None;
				return Ok(RemapOutcome::Cleared);
			}
			entry.map_to = Some(new_mapping.to_owned());
			return Ok(RemapOutcome::Remapped);
		}

		if create_if_missing {
			def.values.push(ValueEntry::mapped(value, new_mapping));
			return Ok(RemapOutcome::Inserted);
		}

		Err(LookupError::ValueNotFound {
			type_name: name.to_owned(),
			value: value.to_owned(),
		})
	}

	/// Redirects everything that canonicalizes to `old_mapping` onto
	/// `new_mapping`.
	///
	/// Synonyms of `old_mapping` are remapped (or cleared when
	/// `new_mapping` is their own text), and self-canonical entries whose text
	/// is `old_mapping` gain `new_mapping` as their mapping. Returns the
	/// number of entries changed.
	pub fn remap_mapping(&mut self, name: &str, old_mapping: &str, new_mapping: &str) -> usize {
		if old_mapping == new_mapping {
			return 0;
		}
		let Some(def) = self.types.get_mut(name) else {
			tracing::debug!(domain = "vocab", type_name = name, "remap on unknown custom type ignored");
			return 0;
		};

		let mut changed = 0;
		for entry in &mut def.values {
			if entry.map_to.as_deref() == Some(old_mapping) {
				entry.map_to = (entry.text != new_mapping).then(|| new_mapping.to_owned());
				changed += 1;
			} else if entry.text == old_mapping && entry.map_to.is_none() {
				entry.map_to = Some(new_mapping.to_owned());
				changed += 1;
			}
		}

		tracing::debug!(
			domain = "vocab",
			type_name = name,
			old_mapping,
			new_mapping,
			changed,
			"remapped mapping",
		);
		changed
	}

	// ==========================================================================
	// Accessors
	// ==========================================================================

	/// Named canonicalization accessors bound so far.
	pub fn accessors(&self) -> Accessors<'_> {
		Accessors::new(self)
	}

	/// Canonicalizes `value` through the accessor bound to `accessor_name`.
	pub fn map_by_accessor(&self, accessor_name: &str, value: &str) -> Option<&str> {
		let type_name = self.bindings.get(accessor_name)?;
		self.canonicalize(type_name, value)
	}

	fn lookup(&self, name: &str) -> Result<&CustomType, LookupError> {
		self.types
			.get(name)
			.ok_or_else(|| LookupError::UnknownType(name.to_owned()))
	}

	fn remap_quietly(&mut self, name: &str, value: &str, new_mapping: &str, create_if_missing: bool) {
		match self.try_remap_value(name, value, new_mapping, create_if_missing) {
			Ok(outcome) => {
				tracing::debug!(domain = "vocab", type_name = name, value, new_mapping, ?outcome, "remapped value");
			}
			Err(error) => {
				tracing::debug!(domain = "vocab", %error, "remap ignored");
			}
		}
	}
}
