//! Definition file loading.

use std::path::{Path, PathBuf};

use crate::Vocabulary;
use crate::error::{ConfigError, ConfigWarning, Result};
use crate::parse::parse_str;


/// Aggregate result of loading a set of definition files.
#[derive(Debug, Default)]
pub struct LoadReport {
	/// Types from every file that parsed, in file order.
	pub vocabulary: Vocabulary,
	/// Non-fatal warnings keyed by source file path.
	pub warnings: Vec<(PathBuf, ConfigWarning)>,
	/// Read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, ConfigError)>,
}

impl LoadReport {
	fn merge_file(&mut self, path: &Path, loaded: Result<Vocabulary>) {
		match loaded {
			Ok(mut vocabulary) => {
				for warning in vocabulary.warnings.drain(..) {
					tracing::warn!(path = %path.display(), %warning, "definition warning");
					self.warnings.push((path.to_path_buf(), warning));
				}
				self.vocabulary.merge(vocabulary);
			}
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "failed to load definitions");
				self.errors.push((path.to_path_buf(), error));
			}
		}
	}
}

/// Loads one definition file.
///
/// A bare definition is registered under the file stem, so `fruit.json`
/// defines the type `fruit`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vocabulary> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let default_name = path
		.file_stem()
		.and_then(|stem| stem.to_str())
		.ok_or_else(|| ConfigError::InvalidFileName(path.to_path_buf()))?;
	parse_str(&content, default_name)
}

/// Loads every `*.json` file in `dir`, in file name order.
///
/// A file that fails to read or parse is recorded in
/// [`LoadReport::errors`] and the remaining files still load. Only an
/// unreadable directory is an error.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<LoadReport> {
	let dir = dir.as_ref();
	let entries = std::fs::read_dir(dir).map_err(|error| ConfigError::Io {
		path: dir.to_path_buf(),
		error,
	})?;

	let mut paths: Vec<PathBuf> = entries
		.flatten()
		.map(|entry| entry.path())
		.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
		.collect();
	paths.sort();

	let mut report = LoadReport::default();
	for path in &paths {
		report.merge_file(path, load_file(path));
	}

	tracing::debug!(
		dir = %dir.display(),
		files = paths.len(),
		types = report.vocabulary.types.len(),
		errors = report.errors.len(),
		"loaded definition directory",
	);
	Ok(report)
}

/// Loads `path` as a directory of definitions or as a single file.
///
/// Unlike [`load_dir`], a single file that fails to parse is an error.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadReport> {
	let path = path.as_ref();
	if path.is_dir() {
		return load_dir(path);
	}

	let vocabulary = load_file(path)?;
	let mut report = LoadReport::default();
	report.merge_file(path, Ok(vocabulary));
	Ok(report)
}
