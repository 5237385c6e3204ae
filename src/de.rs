//! JSON decoding.
//!
//! Text is handed to `serde_json`, which produces a generic
//! [`serde_json::Value`] tree. [`Decoder`] then walks that tree depth-first,
//! pre-order, building a [`Variant`]:
//!
//! | JSON | Variant |
//! |------|---------|
//! | string | `Cadena` |
//! | number | `Number` (text per [`NumberFormat`]) |
//! | array | `List`, order and length preserved |
//! | object | `Symbol` with entries `[key0, value0, key1, value1, ...]` |
//! | `null`, `true`, `false` | the empty `Symbol` |
//!
//! Booleans and `null` are indistinguishable after decoding.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use variant_json::{from_str, Variant};
//!
//! let value = from_str(r#"{"a": 1, "b": 2}"#).unwrap();
//! assert_eq!(
//!     value.as_entries().unwrap(),
//!     &[
//!         Variant::from("a"),
//!         Variant::Number("1".to_string()),
//!         Variant::from("b"),
//!         Variant::Number("2".to_string()),
//!     ]
//! );
//! ```

use crate::options::NumberFormat;
use crate::value::{canonical_number, Symbol};
use crate::{DecodeOptions, Error, Result, Variant};
use log::{debug, trace};
use serde_json::{Map, Number, Value};

/// Walks a parsed JSON tree into a [`Variant`].
pub struct Decoder<'a> {
    options: &'a DecodeOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(options: &'a DecodeOptions) -> Self {
        Decoder { options }
    }

    /// Parses `json` and decodes the resulting tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `json` is not well-formed, and
    /// [`Error::DepthExceeded`] if it nests past the configured limit.
    pub fn decode_str(&self, json: &str) -> Result<Variant> {
        debug!("variant_json::decode_str(), {} bytes of input", json.len());
        self.check_text_depth(json.as_bytes())?;
        let node: Value = serde_json::from_str(json).map_err(|e| Error::from_json(&e))?;
        self.decode(&node)
    }

    /// Parses UTF-8 `bytes` and decodes the resulting tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `bytes` are not well-formed UTF-8 JSON, and
    /// [`Error::DepthExceeded`] if they nest past the configured limit.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Variant> {
        debug!("variant_json::decode_slice(), {} bytes of input", bytes.len());
        self.check_text_depth(bytes)?;
        let node: Value = serde_json::from_slice(bytes).map_err(|e| Error::from_json(&e))?;
        self.decode(&node)
    }

    /// Decodes an already parsed tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] if `node` nests past the configured limit.
    pub fn decode(&self, node: &Value) -> Result<Variant> {
        let value = self.decode_node(node, 0)?;
        debug!("variant_json::decode(), produced a {}", value.tag());
        Ok(value)
    }

    fn decode_node(&self, node: &Value, depth: usize) -> Result<Variant> {
        match node {
            Value::String(s) => Ok(Variant::Cadena(s.clone())),
            Value::Number(n) => Ok(Variant::Number(self.number_text(n))),
            Value::Array(items) => self.decode_array(items, depth + 1),
            Value::Object(members) => self.decode_object(members, depth + 1),
            Value::Null | Value::Bool(_) => {
                trace!(
                    "variant_json::decode_node(), {} falls back to the empty symbol",
                    node
                );
                Ok(Variant::empty_symbol())
            }
        }
    }

    fn decode_array(&self, items: &[Value], depth: usize) -> Result<Variant> {
        self.check_depth(depth)?;
        let mut list = Vec::with_capacity(items.len());
        for item in items {
            list.push(self.decode_node(item, depth)?);
        }
        Ok(Variant::List(list))
    }

    fn decode_object(&self, members: &Map<String, Value>, depth: usize) -> Result<Variant> {
        self.check_depth(depth)?;
        let mut symbol = Symbol {
            name: String::new(),
            entries: Vec::with_capacity(members.len() * 2),
        };
        for (key, value) in members {
            symbol.entries.push(Variant::Cadena(key.clone()));
            symbol.entries.push(self.decode_node(value, depth)?);
        }
        Ok(Variant::Symbol(symbol))
    }

    // Runs before the parser so deep text fails here instead of on the
    // parser's own recursion limit.
    fn check_text_depth(&self, bytes: &[u8]) -> Result<()> {
        match self.options.max_depth {
            Some(limit) if nesting_exceeds(bytes, limit) => {
                debug!("variant_json::decode(), text nests past {}", limit);
                Err(Error::depth_exceeded(limit))
            }
            _ => Ok(()),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(Error::depth_exceeded(limit)),
            _ => Ok(()),
        }
    }

    fn number_text(&self, n: &Number) -> String {
        match self.options.number_format {
            // Without `arbitrary_precision` every parsed number has an f64 view.
            NumberFormat::Canonical => n
                .as_f64()
                .map(canonical_number)
                .unwrap_or_else(|| n.to_string()),
            NumberFormat::Exact => n.to_string(),
        }
    }
}

/// Reports whether the brackets in `bytes` open more than `limit` levels deep.
///
/// Brackets inside string literals are skipped. Nothing else is validated, so
/// malformed text that stays within the limit is left for the parser.
fn nesting_exceeds(bytes: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}
