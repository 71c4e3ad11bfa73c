//! Top-level operations invoked by the binary.
pub mod convert;
