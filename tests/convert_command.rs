#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `convert` command.
//!
//! These tests run [`commands::convert::run`] against fixture files in
//! isolated temporary directories, verifying that:
//! - realistic model descriptions render to the expected documents
//! - missing parent directories of the output are created
//! - existing output files are overwritten
//! - missing or malformed input leaves no output behind

mod common;

use toml_to_lino::commands;
use toml_to_lino::error::ConvertError;

// ---------------------------------------------------------------------------
// Snapshots: full documents
// ---------------------------------------------------------------------------

/// A closed-weights model exercising every block and every cost field.
#[test]
fn converts_full_model_description() {
    let ctx = common::ConversionContext::new();
    let input = ctx.with_fixture("claude-3-5-sonnet.toml");
    let output = ctx.path("claude-3-5-sonnet.lino");

    commands::convert::run(&input, &output).expect("conversion succeeds");

    insta::assert_snapshot!(ctx.read_output("claude-3-5-sonnet.lino"), @r"
model 'Claude Sonnet 3.5 v2'
  released at
    2024-10-22
  last updated at
    2024-10-22
  has knowledge cutoff at
    2024-04-30
  weights
    closed
  capabilities
    (
      tool calls
      temperature
      attachments
    )
  modalities
    input
      text image pdf
    output
      text
  limits
    context
      '200 000'
    output
      '8 192'
  costs
    input
      3.00
    output
      15.00
    cacheRead
      0.30
    cacheWrite
      3.75
");
}

/// An open-weights model with a TOML date, an empty `[modalities]` table,
/// a float limit and a cost on a rounding tie.
#[test]
fn converts_sparse_model_description() {
    let ctx = common::ConversionContext::new();
    let input = ctx.with_fixture("llama-3-1-8b.toml");
    let output = ctx.path("llama-3-1-8b.lino");

    commands::convert::run(&input, &output).expect("conversion succeeds");

    insta::assert_snapshot!(ctx.read_output("llama-3-1-8b.lino"), @r"
model 'Llama 3.1 8B Instruct'
  released at
    2024-07-23
  weights
    open
  capabilities
    (
      tool calls
      temperature
    )
  modalities
  limits
    context
      '131 072'
    output
      4096.0
  costs
    input
      0.12
");
}

/// The written file matches the string-level API byte for byte.
#[test]
fn file_output_matches_convert_str() {
    let ctx = common::ConversionContext::new();
    let input = ctx.with_fixture("claude-3-5-sonnet.toml");
    let output = ctx.path("out.lino");

    commands::convert::run(&input, &output).unwrap();

    let text = std::fs::read_to_string(&input).unwrap();
    let expected = toml_to_lino::convert_str(&text).unwrap();
    assert_eq!(ctx.read_output("out.lino"), expected);
    assert!(!expected.ends_with('\n'), "no trailing newline is added");
}

// ---------------------------------------------------------------------------
// Output paths
// ---------------------------------------------------------------------------

/// Missing intermediate directories in the output path are created.
#[test]
fn creates_missing_output_directories() {
    let ctx = common::ConversionContext::new();
    let input = ctx.write_input("model.toml", "name = \"nested\"\n");
    let output = ctx.path("providers/acme/models/nested.lino");

    commands::convert::run(&input, &output).unwrap();

    assert_eq!(
        ctx.read_output("providers/acme/models/nested.lino"),
        "model 'nested'"
    );
}

/// An existing output file is replaced, not appended to.
#[test]
fn overwrites_existing_output() {
    let ctx = common::ConversionContext::new();
    let input = ctx.write_input("model.toml", "name = \"fresh\"\n");
    let output = ctx.write_input("model.lino", "stale content\nthat is longer\n");

    commands::convert::run(&input, &output).unwrap();

    assert_eq!(ctx.read_output("model.lino"), "model 'fresh'");
}

/// Running the same conversion twice yields identical files.
#[test]
fn rerunning_is_idempotent() {
    let ctx = common::ConversionContext::new();
    let input = ctx.with_fixture("claude-3-5-sonnet.toml");
    let output = ctx.path("model.lino");

    commands::convert::run(&input, &output).unwrap();
    let first = ctx.read_output("model.lino");
    commands::convert::run(&input, &output).unwrap();

    assert_eq!(ctx.read_output("model.lino"), first);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

/// A missing input produces no output file.
#[test]
fn missing_input_produces_no_output() {
    let ctx = common::ConversionContext::new();
    let input = ctx.path("nope.toml");
    let output = ctx.path("nope.lino");

    let err = commands::convert::run(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::InputNotFound(_)));
    assert!(err.to_string().contains("does not exist"));
    assert!(!output.exists());
}

/// Malformed TOML surfaces the decoder diagnostic and writes nothing.
#[test]
fn malformed_input_is_a_decode_error() {
    let ctx = common::ConversionContext::new();
    let input = ctx.with_fixture("broken.toml");
    let output = ctx.path("broken.lino");

    let err = commands::convert::run(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::Decode { .. }), "got {err:?}");
    assert!(err.to_string().contains("broken.toml"));
    assert!(!output.exists());
}
