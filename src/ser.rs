//! JSON encoding and diagnostic rendering.
//!
//! [`Encoder`] turns a [`Variant`] into JSON text. Encoding is total:
//!
//! - `Symbol` becomes a JSON string of its name. A decoded object has an
//!   empty name, so it re-encodes as `""` rather than as an object.
//! - `Number` text is written verbatim, unquoted. Text that is not a JSON
//!   number (including the empty text of `make_default(Tag::Number)`) is
//!   written as the `{}` placeholder so the output stays valid JSON.
//! - `Cadena` becomes a JSON string.
//! - `List` becomes a JSON array; an empty list is `[]`.
//! - `Proc` and `Lambda` become the placeholder `{}`.
//!
//! The JSON itself is produced by `serde_json` through the `Serialize` impl on
//! [`Variant`], which handles string escaping.
//!
//! [`describe`] renders a value for humans and is not meant to be re-parsed.
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use variant_json::{Encoder, Variant};
//!
//! let mut encoder = Encoder::new();
//! encoder.encode(&Variant::List(vec![Variant::from(1), Variant::from("two")]));
//! assert_eq!(encoder.into_inner(), r#"[1,"two"]"#);
//! ```

use crate::value::Symbol;
use crate::Variant;
use log::warn;

/// The JSON encoder.
///
/// Appends encoded values to an internal buffer, so one encoder can write
/// several values back to back.
#[derive(Debug, Default)]
pub struct Encoder {
    output: String,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }

    pub fn encode(&mut self, value: &Variant) {
        match serde_json::to_string(value) {
            Ok(json) => self.output.push_str(&json),
            // Strings, sequences and validated raw numbers cannot fail.
            Err(err) => {
                warn!("variant_json::encode(), falling back to a placeholder: {}", err);
                self.output.push_str("{}");
            }
        }
    }
}

/// Renders `value` for diagnostics.
///
/// # Examples
///
/// ```rust
/// use variant_json::{describe, from_str};
///
/// let value = from_str(r#"[1, "a", [null]]"#).unwrap();
/// assert_eq!(
///     describe(&value),
///     r#"List: [Number: 1, Cadena: "a", List: [Symbol: ]]"#
/// );
/// ```
#[must_use]
pub fn describe(value: &Variant) -> String {
    let mut out = String::new();
    write_description(&mut out, value);
    out
}

fn write_description(out: &mut String, value: &Variant) {
    match value {
        Variant::Symbol(Symbol { name, entries }) => {
            out.push_str("Symbol: ");
            out.push_str(name);
            if !entries.is_empty() {
                if !name.is_empty() {
                    out.push(' ');
                }
                out.push('{');
                write_joined(out, entries);
                out.push('}');
            }
        }
        Variant::Number(text) => {
            out.push_str("Number: ");
            out.push_str(text);
        }
        Variant::Cadena(text) => {
            out.push_str("Cadena: \"");
            out.push_str(text);
            out.push('"');
        }
        Variant::List(items) => {
            out.push_str("List: [");
            write_joined(out, items);
            out.push(']');
        }
        Variant::Proc(_) => out.push_str("Proc: <function>"),
        Variant::Lambda(_) => out.push_str("Lambda: <function>"),
    }
}

fn write_joined(out: &mut String, items: &[Variant]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_description(out, item);
    }
}
