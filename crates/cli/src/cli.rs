//! CLI schema for the slotvocab binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slotvocab::DEFAULT_CATEGORY;


/// Query and export custom input type vocabularies.
#[derive(Parser, Debug)]
#[command(name = "slotvocab", version)]
pub struct Cli {
	/// Definition file, or directory of `*.json` definition files
	#[arg(short, long, value_name = "PATH", default_value = "vocab")]
	pub definitions: PathBuf,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// List registered type names in definition order
	Types,

	/// List every value of a type, synonyms included
	Values {
		/// Custom type name
		type_name: String,
	},

	/// Print the canonical form of a value (exit code 1 when nothing matches)
	Map {
		/// Custom type name
		type_name: String,
		/// Value as heard
		value: String,
	},

	/// Print the prompts of a type for one category
	Prompts {
		/// Custom type name
		type_name: String,
		/// Prompt category
		#[arg(short, long, default_value = DEFAULT_CATEGORY)]
		category: String,
	},

	/// List accessor names and the types they are bound to
	Accessors,

	/// Write each type's values to its dump file
	Dump {
		/// Output directory
		#[arg(short, long, value_name = "DIR", default_value = ".")]
		out: PathBuf,
		/// Only dump this type
		#[arg(short = 't', long = "type", value_name = "TYPE")]
		type_name: Option<String>,
	},
}
