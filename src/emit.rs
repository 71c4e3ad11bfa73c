//! Links Notation emitter.
//!
//! A model description becomes a [`Document`]: an ordered list of indented
//! [`Line`]s. The output shape is fixed by [`BLOCKS`], evaluated top to
//! bottom. Each block reads its triggering field through [`Record`] and
//! returns `None` when that field is absent, which drops the whole block
//! without touching its neighbours.
use std::fmt;

use crate::format;
use crate::record::Record;

/// Indentation unit, repeated once per depth level.
pub const INDENT: &str = "  ";

/// One output line at a given nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Nesting depth (0 for the model header).
    pub depth: usize,
    /// Line content without indentation.
    pub text: String,
}

impl Line {
    /// Create a line at `depth`.
    #[must_use]
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        f.write_str(&self.text)
    }
}

/// An emitted Links Notation document.
///
/// Displays as its lines joined by `\n`, with no trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// All lines in emission order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines. Never true for emitted documents,
    /// which always carry the model header.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A named section of the output and the function that renders it.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    /// Block name, used in diagnostics.
    pub name: &'static str,
    render: fn(Record<'_>) -> Option<Vec<Line>>,
}

impl Block {
    /// Render this block, or `None` if its triggering field is absent.
    #[must_use]
    pub fn render(&self, record: Record<'_>) -> Option<Vec<Line>> {
        (self.render)(record)
    }
}

/// Every block of a model document, in emission order.
pub const BLOCKS: [Block; 9] = [
    Block {
        name: "header",
        render: header,
    },
    Block {
        name: "release date",
        render: release_date,
    },
    Block {
        name: "last updated",
        render: last_updated,
    },
    Block {
        name: "knowledge cutoff",
        render: knowledge,
    },
    Block {
        name: "weights",
        render: weights,
    },
    Block {
        name: "capabilities",
        render: capabilities,
    },
    Block {
        name: "modalities",
        render: modalities,
    },
    Block {
        name: "limits",
        render: limits,
    },
    Block {
        name: "costs",
        render: costs,
    },
];

/// Capability flags and their labels, in emission order.
const CAPABILITIES: [(&str, &str); 4] = [
    ("reasoning", "reasoning"),
    ("tool_call", "tool calls"),
    ("temperature", "temperature"),
    ("attachment", "attachments"),
];

const MODALITY_KINDS: [&str; 2] = ["input", "output"];

const LIMIT_KINDS: [&str; 2] = ["context", "output"];

/// Cost fields and their labels, in emission order.
const COST_KINDS: [(&str, &str); 4] = [
    ("input", "input"),
    ("output", "output"),
    ("cache_read", "cacheRead"),
    ("cache_write", "cacheWrite"),
];

/// Emit the document for one decoded model description.
#[must_use]
pub fn emit(record: Record<'_>) -> Document {
    let mut lines = Vec::new();
    for block in &BLOCKS {
        match block.render(record) {
            Some(block_lines) => lines.extend(block_lines),
            None => tracing::trace!("skipping {} block", block.name),
        }
    }
    Document { lines }
}

#[allow(clippy::unnecessary_wraps)]
fn header(record: Record<'_>) -> Option<Vec<Line>> {
    let name = record.text("name").unwrap_or_default();
    Some(vec![Line::new(0, format!("model '{name}'"))])
}

fn labelled(record: Record<'_>, key: &str, label: &str) -> Option<Vec<Line>> {
    let value = record.text(key)?;
    Some(vec![Line::new(1, label), Line::new(2, value)])
}

fn release_date(record: Record<'_>) -> Option<Vec<Line>> {
    labelled(record, "release_date", "released at")
}

fn last_updated(record: Record<'_>) -> Option<Vec<Line>> {
    labelled(record, "last_updated", "last updated at")
}

fn knowledge(record: Record<'_>) -> Option<Vec<Line>> {
    labelled(record, "knowledge", "has knowledge cutoff at")
}

fn weights(record: Record<'_>) -> Option<Vec<Line>> {
    let open = record.flag("open_weights")?;
    let status = if open { "open" } else { "closed" };
    Some(vec![Line::new(1, "weights"), Line::new(2, status)])
}

fn capabilities(record: Record<'_>) -> Option<Vec<Line>> {
    let labels: Vec<&str> = CAPABILITIES
        .iter()
        .filter(|(key, _)| record.is_set(key))
        .map(|&(_, label)| label)
        .collect();
    if labels.is_empty() {
        return None;
    }
    let mut lines = vec![Line::new(1, "capabilities"), Line::new(2, "(")];
    lines.extend(labels.into_iter().map(|label| Line::new(3, label)));
    lines.push(Line::new(2, ")"));
    Some(lines)
}

// A `modalities` table with neither `input` nor `output` still yields its
// bare header line. Kept as-is so existing .lino files regenerate unchanged.
fn modalities(record: Record<'_>) -> Option<Vec<Line>> {
    let section = record.section("modalities")?;
    let mut lines = vec![Line::new(1, "modalities")];
    for kind in MODALITY_KINDS {
        if let Some(words) = section.words(kind) {
            lines.push(Line::new(2, kind));
            lines.push(Line::new(3, words.join(" ")));
        }
    }
    Some(lines)
}

fn limits(record: Record<'_>) -> Option<Vec<Line>> {
    let section = record.section("limit")?;
    let mut lines = vec![Line::new(1, "limits")];
    for kind in LIMIT_KINDS {
        if let Some(value) = section.number(kind) {
            lines.push(Line::new(2, kind));
            lines.push(Line::new(3, format::limit(value)));
        }
    }
    Some(lines)
}

fn costs(record: Record<'_>) -> Option<Vec<Line>> {
    let section = record.section("cost")?;
    let mut lines = vec![Line::new(1, "costs")];
    for (key, label) in COST_KINDS {
        if let Some(value) = section.number(key) {
            lines.push(Line::new(2, label));
            lines.push(Line::new(3, format::cost(value)));
        }
    }
    Some(lines)
}
