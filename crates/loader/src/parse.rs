//! JSON definition parsing.
//!
//! Definitions are read through lenient raw forms first. Each type in a
//! collection and each value in a type is decoded on its own, so a
//! malformed entry drops only that entry, not the whole file.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use serde_json::{Map, Value};
use slotvocab::{CustomType, PromptEntry, ValueEntry};

use crate::Vocabulary;
use crate::error::{ConfigWarning, Result};


/// Top level of a definition document.
///
/// A `types` key marks a collection; any other object is one bare
/// definition.
#[derive(Deserialize)]
struct RawDocument {
	types: Option<IndexMap<String, Value>>,
	#[serde(flatten)]
	definition: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
	file_name: Option<String>,
	mapping_function_name: Option<String>,
	values: Option<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValue {
	text: Option<String>,
	map_to: Option<String>,
	prompts: Option<Vec<RawPrompt>>,
}

#[derive(Deserialize)]
struct RawPrompt {
	categories: Option<IndexSet<String>>,
	text: Option<String>,
}

/// Parses a definition document.
///
/// Two shapes are accepted: a collection `{ "types": { "<name>": <definition>, ... } }`
/// keeping document order, or a single bare definition registered as
/// `default_name`. A collection entry that does not decode as a definition
/// is skipped with a warning. A bare definition that does not decode is an
/// error.
pub fn parse_str(input: &str, default_name: &str) -> Result<Vocabulary> {
	let document: RawDocument = serde_json::from_str(input)?;
	let mut vocabulary = Vocabulary::default();

	match document.types {
		Some(types) => {
			for (name, value) in types {
				let raw = match serde_json::from_value::<Option<RawType>>(value) {
					Ok(raw) => raw,
					Err(error) => {
						vocabulary.warnings.push(ConfigWarning::InvalidDefinition {
							type_name: name,
							message: error.to_string(),
						});
						continue;
					}
				};
				if let Some(def) = convert_type(&name, raw, &mut vocabulary.warnings) {
					vocabulary.types.push((name, def));
				}
			}
		}
		None => {
			let raw: RawType = serde_json::from_value(Value::Object(document.definition))?;
			if let Some(def) = convert_type(default_name, Some(raw), &mut vocabulary.warnings) {
				vocabulary.types.push((default_name.to_owned(), def));
			}
		}
	}

	Ok(vocabulary)
}

fn convert_type(name: &str, raw: Option<RawType>, warnings: &mut Vec<ConfigWarning>) -> Option<CustomType> {
	let Some(raw) = raw else {
		warnings.push(ConfigWarning::MissingDefinition { type_name: name.to_owned() });
		return None;
	};
	let Some(values) = raw.values else {
		warnings.push(ConfigWarning::MissingValues { type_name: name.to_owned() });
		return None;
	};

	let values: Vec<ValueEntry> = values
		.into_iter()
		.enumerate()
		.filter_map(|(index, value)| match serde_json::from_value::<Option<RawValue>>(value) {
			Ok(raw) => convert_value(name, index, raw, warnings),
			Err(error) => {
				warnings.push(ConfigWarning::InvalidValue {
					type_name: name.to_owned(),
					index,
					message: error.to_string(),
				});
				None
			}
		})
		.collect();

	Some(CustomType {
		file_name: raw.file_name,
		mapping_function_name: raw.mapping_function_name,
		values,
	})
}

fn convert_value(type_name: &str, index: usize, raw: Option<RawValue>, warnings: &mut Vec<ConfigWarning>) -> Option<ValueEntry> {
	let Some(RawValue { text: Some(text), map_to, prompts }) = raw else {
		warnings.push(ConfigWarning::MissingText {
			type_name: type_name.to_owned(),
			index,
		});
		return None;
	};

	let prompts: Option<Vec<PromptEntry>> = prompts.map(|prompts| {
		prompts
			.into_iter()
			.enumerate()
			.filter_map(|(index, prompt)| match prompt.text {
				Some(prompt_text) => Some(PromptEntry {
					categories: prompt.categories.unwrap_or_default(),
					text: prompt_text,
				}),
				None => {
					warnings.push(ConfigWarning::MissingPromptText {
						type_name: type_name.to_owned(),
						value: text.clone(),
						index,
					});
					None
				}
			})
			.collect()
	});

	Some(ValueEntry { text, map_to, prompts })
}
