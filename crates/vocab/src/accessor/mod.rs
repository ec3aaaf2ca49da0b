//! Named canonicalization accessors.
//!
//! Registering a type binds an accessor name (`mapFruit`, or the type's
//! explicit `mapping_function_name`) to that type. The binding table lives in
//! the registry; [`Accessors`] is a read-only view over it.
//!
//! Bindings are only ever added or rebound. Re-registering a type under a
//! different accessor name leaves the old binding callable, and every binding
//! resolves against the type's current definition.

use crate::registry::TypeRegistry;


/// Read-only view of a registry's accessor bindings.
#[derive(Clone, Copy)]
pub struct Accessors<'a> {
	registry: &'a TypeRegistry,
}

impl<'a> Accessors<'a> {
	pub(crate) fn new(registry: &'a TypeRegistry) -> Self {
		Self { registry }
	}

	/// Accessor bound to `accessor_name`.
	pub fn get(&self, accessor_name: &str) -> Option<Accessor<'a>> {
		let (name, type_name) = self.registry.bindings.get_key_value(accessor_name)?;
		Some(Accessor {
			name,
			type_name,
			registry: self.registry,
		})
	}

	pub fn contains(&self, accessor_name: &str) -> bool {
		self.registry.bindings.contains_key(accessor_name)
	}

	/// Bound accessor names in first-binding order.
	pub fn names(self) -> impl Iterator<Item = &'a str> {
		let registry = self.registry;
		registry.bindings.keys().map(String::as_str)
	}

	pub fn iter(self) -> impl Iterator<Item = Accessor<'a>> {
		let registry = self.registry;
		registry.bindings.iter().map(move |(name, type_name)| Accessor {
			name,
			type_name,
			registry,
		})
	}

	pub fn len(&self) -> usize {
		self.registry.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registry.bindings.is_empty()
	}
}

impl std::fmt::Debug for Accessors<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.registry.bindings.iter()).finish()
	}
}

/// A canonicalization function bound to one custom type.
#[derive(Clone, Copy)]
pub struct Accessor<'a> {
	name: &'a str,
	type_name: &'a str,
	registry: &'a TypeRegistry,
}

impl<'a> Accessor<'a> {
	pub fn name(&self) -> &'a str {
		self.name
	}

	pub fn type_name(&self) -> &'a str {
		self.type_name
	}

	/// Canonicalizes `value` within the bound type.
	pub fn call(&self, value: &str) -> Option<&'a str> {
		self.registry.canonicalize(self.type_name, value)
	}
}

impl std::fmt::Debug for Accessor<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Accessor")
			.field("name", &self.name)
			.field("type_name", &self.type_name)
			.finish()
	}
}
