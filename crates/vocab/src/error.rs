use thiserror::Error;

/// Why a strict lookup or remap could not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// No custom type is registered under this name.
	#[error("custom type '{0}' is not registered")]
	UnknownType(String),

	/// The type exists but has no value with this text.
	#[error("value '{value}' not found in custom type '{type_name}'")]
	ValueNotFound {
		/// Name of the searched type.
		type_name: String,
		/// The text that did not match any value.
		value: String,
	},
}

/// What a successful remap did to the type's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemapOutcome {
	/// An existing value now maps to the new text.
	Remapped,
	/// An existing value was remapped to itself, so its mapping was removed.
	Cleared,
	/// The value was missing and has been appended with the new mapping.
	Inserted,
}
