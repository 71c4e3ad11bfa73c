//! Decoded model descriptions and explicit optional-field access.
//!
//! Decoding is delegated to the [`toml`] crate. Every lookup on a [`Record`]
//! returns an [`Option`]: `None` means the field is absent *or* has a kind
//! the emitter cannot render, and in both cases the corresponding output
//! block is skipped.
use toml::{Table, Value};

/// Decode TOML text into a generic table.
///
/// # Errors
///
/// Returns the decoder's diagnostic if `text` is not valid TOML.
pub fn decode(text: &str) -> Result<Table, toml::de::Error> {
    toml::from_str(text)
}

/// A numeric field value, keeping the integer/float distinction of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// TOML integer.
    Integer(i64),
    /// TOML float.
    Float(f64),
}

impl Number {
    /// Widen to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(f) => f,
        }
    }
}

/// Read-only view over one decoded table (the document root or a nested table).
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
}

impl<'a> Record<'a> {
    /// Wrap a decoded table.
    #[must_use]
    pub const fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// Raw value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.table.get(key)
    }

    /// `key` rendered as verbatim text.
    ///
    /// Strings are returned unchanged, dates and scalars in their display
    /// form. Arrays and tables yield `None`.
    ///
    /// Dates are re-rendered by the decoder, not copied from the source: an
    /// unquoted `1979-05-27 07:32:00Z` comes back as `1979-05-27T07:32:00Z`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// Truthiness of `key`, or `None` when absent.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(truthy)
    }

    /// Whether `key` is present and truthy.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.flag(key).unwrap_or(false)
    }

    /// Nested table under `key`.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<Self> {
        self.get(key).and_then(Value::as_table).map(Self::new)
    }

    /// Array under `key`, each scalar element rendered as text.
    ///
    /// Non-scalar elements are dropped; order is preserved.
    #[must_use]
    pub fn words(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar_text).collect())
    }

    /// Integer or float under `key`.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<Number> {
        match self.get(key)? {
            Value::Integer(n) => Some(Number::Integer(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(n) => Some(n.to_string()),
        Value::Float(f) => Some(format!("{f:?}")),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(n) => *n != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Table(table) => !table.is_empty(),
        Value::Datetime(_) => true,
    }
}
