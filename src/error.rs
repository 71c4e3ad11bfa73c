//! Error types for a single conversion run.
//!
//! Every failure is fatal to the invocation. The binary reports
//! [`ConvertError::InputNotFound`] itself and hands every other variant to
//! [`anyhow`] at the `main` boundary via the standard `?` operator.
//!
//! ```text
//! ConvertError
//! ├── InputNotFound  — input path does not exist (checked before reading)
//! ├── Read           — input exists but could not be read as UTF-8 text
//! ├── Decode         — input is not valid TOML
//! ├── CreateDir      — parent directories of the output could not be created
//! └── Write          — output file could not be written
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of one input → output conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("Input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read input file {}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The input file is not valid TOML.
    #[error("Failed to parse TOML in {}: {source}", path.display())]
    Decode {
        /// Path of the input file.
        path: PathBuf,
        /// Decoder diagnostic, including line and column.
        source: toml::de::Error,
    },

    /// A missing parent directory of the output path could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write output file {}: {source}", path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
