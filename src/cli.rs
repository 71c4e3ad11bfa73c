//! Command-line argument definitions.
use std::path::PathBuf;

use clap::Parser;

/// Version string reported by `--version`.
///
/// Set by the build script from `TOML_TO_LINO_VERSION` or `git describe`,
/// falling back to the package version.
pub const VERSION: &str = match option_env!("TOML_TO_LINO_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Command-line arguments: one input file, one output file.
#[derive(Parser, Debug)]
#[command(
    name = "toml-to-lino",
    about = "Convert a TOML model description into Links Notation",
    version = VERSION
)]
pub struct Cli {
    /// TOML model description to read
    pub input: PathBuf,

    /// Destination .lino file (parent directories are created)
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
