//! Structured document model and text renderer

use indexmap::IndexMap;

/// In-memory tree for a collector configuration document
///
/// Built bottom-up by the synthesizer and rendered once; never mutated
/// afterwards, so no cycles can exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Ordered mapping; insertion order survives rendering
    Map(IndexMap<String, Value>),
    /// Ordered sequence
    Seq(Vec<Value>),
    /// String scalar
    Str(String),
    /// Integer scalar
    Int(i64),
    /// Float scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
}

impl Value {
    /// Render the document as indented text
    ///
    /// Mapping keys end with `:`, sequence items are prefixed with `-`,
    /// nested blocks are indented by two spaces per level. Strings are
    /// double-quoted and embedded quotes are NOT escaped; consumers of
    /// this dialect depend on the exact bytes, so the renderer must not
    /// be "fixed" to escape them.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_block(&mut out, 0);
        out
    }

    /// Inline text for scalars; `None` for composites
    fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(format!("\"{s}\"")),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(x) => Some(x.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Map(_) | Self::Seq(_) => None,
        }
    }

    fn render_block(&self, out: &mut String, indent: usize) {
        match self {
            Self::Map(entries) => {
                for (key, value) in entries {
                    push_indent(out, indent);
                    out.push_str(key);
                    out.push(':');
                    value.render_tail(out, indent);
                }
            }
            Self::Seq(items) => {
                for item in items {
                    push_indent(out, indent);
                    out.push('-');
                    item.render_tail(out, indent);
                }
            }
            scalar => {
                push_indent(out, indent);
                if let Some(text) = scalar.scalar_text() {
                    out.push_str(&text);
                }
                out.push('\n');
            }
        }
    }

    /// Finish the line started by a map key or sequence dash
    fn render_tail(&self, out: &mut String, indent: usize) {
        if let Some(text) = self.scalar_text() {
            out.push(' ');
            out.push_str(&text);
            out.push('\n');
        } else {
            out.push('\n');
            self.render_block(out, indent + 1);
        }
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

/// Shorthand for building a `Value::Map` from key/value pairs
pub fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}
