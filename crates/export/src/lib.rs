//! Value dumps for custom input types.
//!
//! Authoring consoles import a custom type as a plain list of values, one per
//! line. This crate writes that list for each registered type into the file
//! named by [`TypeRegistry::dump_file_name`], synonyms included, in
//! registration order.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use slotvocab::TypeRegistry;
use thiserror::Error;


/// Errors raised while writing dump files.
#[derive(Debug, Error)]
pub enum ExportError {
	/// Error creating the output directory or writing a dump file.
	#[error("I/O error writing {path}: {error}")]
	Io {
		/// Path that failed to write.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A dump file name that would leave the output directory.
	#[error("dump file name '{file_name}' of type '{type_name}' must be a plain relative path")]
	UnsafeFileName {
		/// Type whose dump was refused.
		type_name: String,
		/// The offending file name.
		file_name: String,
	},

	/// Two types would write the same dump file.
	#[error("types '{first}' and '{second}' both dump to {path}")]
	DuplicateTarget {
		/// Shared target path.
		path: PathBuf,
		/// Type registered first.
		first: String,
		/// Type registered later.
		second: String,
	},
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Renders the values of `name`, one per line with a trailing newline.
///
/// Returns `None` when `name` is not registered.
pub fn render_values(registry: &TypeRegistry, name: &str) -> Option<String> {
	let values = registry.values(name)?;
	let mut out = String::new();
	for value in values {
		out.push_str(value);
		out.push('\n');
	}
	Some(out)
}

/// Writes the values of `name` into `dir`.
///
/// Returns the written path, or `None` when `name` is not registered. The
/// dump file name must stay inside `dir`.
pub fn dump_type(registry: &TypeRegistry, name: &str, dir: &Path) -> Result<Option<PathBuf>> {
	let Some(path) = target_path(registry, name, dir)? else {
		tracing::debug!(type_name = name, "dump skipped for unknown custom type");
		return Ok(None);
	};
	let content = render_values(registry, name).unwrap_or_default();

	create_dir(dir)?;
	std::fs::write(&path, content).map_err(|error| ExportError::Io {
		path: path.clone(),
		error,
	})?;

	tracing::info!(type_name = name, path = %path.display(), "dumped custom type values");
	Ok(Some(path))
}

/// Writes every registered type into `dir`, in registration order.
///
/// Every target is checked before anything is written, so two types sharing
/// a dump file fail the whole export.
pub fn dump_all(registry: &TypeRegistry, dir: &Path) -> Result<Vec<PathBuf>> {
	let mut owners: HashMap<PathBuf, &str> = HashMap::with_capacity(registry.len());
	for name in registry.type_names() {
		let Some(path) = target_path(registry, name, dir)? else {
			continue;
		};
		if let Some(first) = owners.insert(path.clone(), name) {
			return Err(ExportError::DuplicateTarget {
				path,
				first: first.to_owned(),
				second: name.to_owned(),
			});
		}
	}

	let mut written = Vec::with_capacity(registry.len());
	for name in registry.type_names() {
		if let Some(path) = dump_type(registry, name, dir)? {
			written.push(path);
		}
	}
	Ok(written)
}

fn target_path(registry: &TypeRegistry, name: &str, dir: &Path) -> Result<Option<PathBuf>> {
	let Some(file_name) = registry.dump_file_name(name) else {
		return Ok(None);
	};
	let relative = Path::new(&file_name);
	let plain = relative.components().next().is_some()
		&& relative.components().all(|component| matches!(component, Component::Normal(_)));
	if !plain {
		return Err(ExportError::UnsafeFileName {
			type_name: name.to_owned(),
			file_name,
		});
	}
	Ok(Some(dir.join(relative)))
}

fn create_dir(dir: &Path) -> Result<()> {
	std::fs::create_dir_all(dir).map_err(|error| ExportError::Io {
		path: dir.to_path_buf(),
		error,
	})
}
