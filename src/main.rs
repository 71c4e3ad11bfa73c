//! `toml-to-lino` binary: convert one TOML model description to `.lino`.
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use toml_to_lino::cli::Cli;
use toml_to_lino::commands;
use toml_to_lino::error::ConvertError;
use toml_to_lino::logging;

#[allow(clippy::print_stdout)]
fn main() -> Result<ExitCode> {
    let _ = enable_ansi_support::enable_ansi_support();

    // Usage errors go to stdout with exit status 1; --help and --version
    // keep clap's own handling.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            print!("{}", err.render());
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => err.exit(),
    };
    logging::init_subscriber(args.verbose);

    match commands::convert::run(&args.input, &args.output) {
        Ok(_) => {
            println!(
                "Converted {} -> {}",
                args.input.display(),
                args.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ ConvertError::InputNotFound(_)) => {
            println!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
