//! Error and warning types for definition loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a definition file from loading.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The file is not valid JSON, or its top level is not an object.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// Error reading a definition file or directory.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A bare definition file whose stem cannot serve as a type name.
	#[error("cannot derive a type name from {0}")]
	InvalidFileName(PathBuf),
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal problem found while reading definitions.
///
/// The offending type, value or prompt is skipped and loading continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A type was declared with a `null` definition.
	MissingDefinition {
		/// The declared type name.
		type_name: String,
	},
	/// A collection entry is not a definition object.
	InvalidDefinition {
		/// The declared type name.
		type_name: String,
		/// Decoder message.
		message: String,
	},
	/// A type definition has no `values` list.
	MissingValues {
		/// The declared type name.
		type_name: String,
	},
	/// A value entry has no `text`.
	MissingText {
		/// Type containing the entry.
		type_name: String,
		/// Position of the entry in the `values` list.
		index: usize,
	},
	/// A value entry has fields of the wrong JSON type.
	InvalidValue {
		/// Type containing the entry.
		type_name: String,
		/// Position of the entry in the `values` list.
		index: usize,
		/// Decoder message.
		message: String,
	},
	/// A prompt entry has no `text`.
	MissingPromptText {
		/// Type containing the prompt.
		type_name: String,
		/// Text of the value owning the prompt.
		value: String,
		/// Position of the prompt in the value's `prompts` list.
		index: usize,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::MissingDefinition { type_name } => {
				write!(f, "type '{type_name}' has no definition and was skipped")
			}
			ConfigWarning::InvalidDefinition { type_name, message } => {
				write!(f, "type '{type_name}' is not a valid definition and was skipped: {message}")
			}
			ConfigWarning::MissingValues { type_name } => {
				write!(f, "type '{type_name}' has no 'values' list and was skipped")
			}
			ConfigWarning::MissingText { type_name, index } => {
				write!(f, "value #{index} of type '{type_name}' has no 'text' and was skipped")
			}
			ConfigWarning::InvalidValue { type_name, index, message } => {
				write!(f, "value #{index} of type '{type_name}' is invalid and was skipped: {message}")
			}
			ConfigWarning::MissingPromptText { type_name, value, index } => {
				write!(
					f,
					"prompt #{index} of value '{value}' in type '{type_name}' has no 'text' and was skipped"
				)
			}
		}
	}
}
