//! Definition loading for custom input types.
//!
//! Definitions are JSON documents in the shape authors already use for
//! their interaction models. A file holds either a collection of types:
//!
//! ```json
//! {
//!   "types": {
//!     "fruit": {
//!       "values": [
//!         { "text": "apple" },
//!         { "text": "golden delicious", "mapTo": "apple" }
//!       ]
//!     },
//!     "vegetable": {
//!       "mappingFunctionName": "mapDeliciousVegetable",
//!       "fileName": "essentialvegetables.txt",
//!       "values": [{ "text": "carrot" }]
//!     }
//!   }
//! }
//! ```
//!
//! or one bare definition, named after the file stem.
//!
//! Inside a document, types and values missing `text` or holding fields of
//! the wrong JSON type are skipped and reported as [`ConfigWarning`]s, never
//! as errors.

mod error;
mod load;
mod parse;

pub use error::{ConfigError, ConfigWarning, Result};
pub use load::{LoadReport, load_dir, load_file, load_path};
pub use parse::parse_str;
use slotvocab::{CustomType, TypeRegistry};

/// Types read from one or more definition documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
	/// Type definitions in document order.
	pub types: Vec<(String, CustomType)>,
	/// Non-fatal problems encountered while parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Vocabulary {
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.types.iter().map(|(name, _)| name.as_str())
	}

	/// Appends `other` after this vocabulary.
	///
	/// A name defined twice is kept twice; registration lets the later
	/// definition replace the earlier one.
	pub fn merge(&mut self, other: Vocabulary) {
		self.types.extend(other.types);
		self.warnings.extend(other.warnings);
	}

	/// Registers every type in order.
	pub fn register_into(self, registry: &mut TypeRegistry) {
		for (name, def) in self.types {
			registry.register(name, def);
		}
	}

	pub fn into_registry(self) -> TypeRegistry {
		let mut registry = TypeRegistry::new();
		self.register_into(&mut registry);
		registry
	}
}
