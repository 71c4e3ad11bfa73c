//! TOML → Links Notation converter for model descriptions.
//!
//! Reads a model description (name, dates, weights, capability flags,
//! modalities, limits, costs) written in TOML and renders it as an indented
//! `.lino` document.
//!
//! - **[`record`]** — decode TOML and look up optional fields
//! - **[`format`]** — limit and cost value formatting
//! - **[`emit`]** — the fixed, ordered block layout of a `.lino` document
//! - **[`commands`]** — the file-to-file `convert` operation used by the binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod emit;
pub mod error;
pub mod format;
pub mod logging;
pub mod record;

/// Convert TOML text into Links Notation text.
///
/// # Errors
///
/// Returns the decoder's diagnostic if `text` is not valid TOML.
pub fn convert_str(text: &str) -> Result<String, toml::de::Error> {
    let table = record::decode(text)?;
    Ok(emit::emit(record::Record::new(&table)).to_string())
}
