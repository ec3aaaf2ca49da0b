//! Custom input type registry for voice and chat front ends.
//!
//! A custom input type is a named vocabulary (a fruit list, a set of meats)
//! whose values may be synonyms of a canonical value and may carry prompt
//! phrases tagged by category. [`TypeRegistry`] stores these definitions and
//! answers three kinds of questions:
//!
//! - which values a type has ([`TypeRegistry::values`]),
//! - what a heard value canonicalizes to ([`TypeRegistry::canonicalize`]),
//! - which prompts to read back for a category ([`TypeRegistry::prompts`]).
//!
//! # Example
//!
//! ```
//! use slotvocab::{CustomType, TypeRegistry, ValueEntry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(
//! 	"fruit",
//! 	CustomType::new([
//! 		ValueEntry::new("apple"),
//! 		ValueEntry::mapped("golden delicious", "apple"),
//! 	]),
//! );
//!
//! assert_eq!(registry.canonicalize("fruit", "golden delicious"), Some("apple"));
//! assert_eq!(registry.accessor_name("fruit").as_deref(), Some("mapFruit"));
//!
//! let map_fruit = registry.accessors().get("mapFruit").unwrap();
//! assert_eq!(map_fruit.call("apple"), Some("apple"));
//! ```
//!
//! # Absent results
//!
//! The default API never fails: queries against an unknown type or value
//! return `None` or an empty list, and mutations against them do nothing.
//! The `try_*` methods report [`LookupError`] instead, separating an unknown
//! type from a missing value.

mod accessor;
mod error;
mod naming;
mod registry;
mod types;

pub use accessor::{Accessor, Accessors};
pub use error::{LookupError, RemapOutcome};
pub use naming::{derive_accessor_name, derive_dump_file_name};
pub use registry::TypeRegistry;
pub use types::{CustomType, DEFAULT_CATEGORY, PromptEntry, ValueEntry};
