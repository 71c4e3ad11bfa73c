//! Command: convert one TOML model description into a `.lino` file.
use std::fs;
use std::path::Path;

use crate::emit::{self, Document};
use crate::error::ConvertError;
use crate::record::{self, Record};

/// Read `input`, emit its Links Notation document, and write it to `output`.
///
/// Missing parent directories of `output` are created; an existing file at
/// `output` is overwritten. Nothing is written unless decoding succeeds.
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] before any I/O if `input` does not
/// exist, and the matching [`ConvertError`] variant if reading, decoding,
/// directory creation, or writing fails.
pub fn run(input: &Path, output: &Path) -> Result<Document, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let text = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", text.len(), input.display());

    let table = record::decode(&text).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    let document = emit::emit(Record::new(&table));
    tracing::debug!("emitted {} lines", document.len());

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output, document.to_string()).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::debug!("wrote {}", output.display());

    Ok(document)
}
