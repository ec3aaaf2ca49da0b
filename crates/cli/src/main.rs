//! `slotvocab` binary.
//!
//! Loads custom input type definitions from a JSON file or directory and
//! answers queries against them, or dumps their values for re-import into an
//! authoring console.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use commands::Status;

fn main() -> ExitCode {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.init();

	let mut stdout = std::io::stdout().lock();
	match commands::run(&cli, &mut stdout) {
		Ok(Status::Success) => ExitCode::SUCCESS,
		Ok(Status::NoMatch) => ExitCode::from(1),
		Err(error) => {
			eprintln!("error: {error:#}");
			ExitCode::from(2)
		}
	}
}
