use std::io::Write;

use anyhow::{Context, anyhow, bail};
use slotvocab::TypeRegistry;

use crate::cli::{Cli, Command};


/// How a command finished, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Success,
	/// A lookup found nothing to print.
	NoMatch,
}

/// Loads the definitions named on the command line and runs the command.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Status> {
	let report = slotvocab_loader::load_path(&cli.definitions)
		.with_context(|| format!("failed to load definitions from {}", cli.definitions.display()))?;
	if let Some((path, error)) = report.errors.first() {
		if report.vocabulary.types.is_empty() {
			bail!("no definitions could be loaded; {}: {error}", path.display());
		}
		tracing::warn!(count = report.errors.len(), "some definition files were skipped");
	}

	let registry = report.vocabulary.into_registry();
	tracing::debug!(types = registry.len(), "definitions registered");
	execute(&registry, &cli.command, out)
}

/// Runs `command` against an already populated registry.
pub fn execute(registry: &TypeRegistry, command: &Command, out: &mut impl Write) -> anyhow::Result<Status> {
	match command {
		Command::Types => {
			for name in registry.type_names() {
				writeln!(out, "{name}")?;
			}
		}
		Command::Values { type_name } => {
			for value in registry.try_values(type_name)? {
				writeln!(out, "{value}")?;
			}
		}
		Command::Map { type_name, value } => match registry.try_canonicalize(type_name, value) {
			Ok(canonical) => writeln!(out, "{canonical}")?,
			Err(error) => {
				tracing::info!(%error, "no canonical value");
				return Ok(Status::NoMatch);
			}
		},
		Command::Prompts { type_name, category } => {
			for prompt in registry.prompts(type_name, category) {
				writeln!(out, "{prompt}")?;
			}
		}
		Command::Accessors => {
			for accessor in registry.accessors().iter() {
				writeln!(out, "{}\t{}", accessor.name(), accessor.type_name())?;
			}
		}
		Command::Dump { out: dir, type_name } => {
			let written = match type_name {
				Some(name) => {
					let path = slotvocab_export::dump_type(registry, name, dir)?
						.ok_or_else(|| anyhow!("custom type '{name}' is not registered"))?;
					vec![path]
				}
				None => slotvocab_export::dump_all(registry, dir)?,
			};
			for path in written {
				writeln!(out, "{}", path.display())?;
			}
		}
	}
	Ok(Status::Success)
}
