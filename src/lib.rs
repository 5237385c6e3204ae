//! # variant_json
//!
//! A small tagged-union value type, [`Variant`], for symbolic-expression data,
//! with conversion to and from JSON.
//!
//! ## What is a Variant?
//!
//! A [`Variant`] is one of:
//!
//! - **Symbol**: an identifier (also what JSON objects, `null` and booleans decode to)
//! - **Number**: a decimal number stored as text
//! - **Cadena**: a string literal
//! - **List**: an ordered sequence of variants
//! - **Proc** / **Lambda**: callables, opaque to JSON conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use variant_json::{from_str, to_string, Variant};
//!
//! let value = from_str(r#"["define", 1.50, [3, 1, 2]]"#).unwrap();
//! assert_eq!(
//!     value,
//!     Variant::List(vec![
//!         Variant::from("define"),
//!         Variant::Number("1.5".to_string()),
//!         Variant::List(vec![Variant::from(3), Variant::from(1), Variant::from(2)]),
//!     ])
//! );
//!
//! assert_eq!(to_string(&value), r#"["define",1.5,[3,1,2]]"#);
//! ```
//!
//! ## Known Asymmetries
//!
//! - JSON objects decode to a `Symbol` whose entries are
//!   `[key0, value0, key1, value1, ...]`. Encoding a `Symbol` writes only its
//!   name, so a decoded object re-encodes as `""`.
//! - `null`, `true` and `false` all decode to the same empty `Symbol`.
//! - Numbers pass through `f64` by default, so `1.50` comes back as `1.5` and
//!   very large integers may shift. See [`NumberFormat`] for the alternative.
//!
//! Round-tripping through [`to_string`] and [`from_str`] is exact for trees
//! built from `Cadena`, `Number` and `List`, up to number canonicalization.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Decoding depth is limited (see [`DecodeOptions::max_depth`]), so
//!   adversarial nesting yields [`Error::DepthExceeded`] instead of
//!   exhausting the stack
//! - Encoding never fails and always produces valid JSON: strings are escaped
//!   by `serde_json`, and `Number` text that is not a JSON number is written
//!   as the `{}` placeholder

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Decoder;
pub use error::{Error, Result};
pub use map::VariantMap;
pub use options::{DecodeOptions, NumberFormat, DEFAULT_MAX_DEPTH};
pub use ser::{describe, Encoder};
pub use value::{canonical_number, Env, Lambda, NativeFn, Proc, Symbol, Tag, Variant};

use std::io;

/// Decodes a JSON document into a [`Variant`] with default options.
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_str, Variant};
///
/// assert_eq!(from_str("null").unwrap(), Variant::empty_symbol());
/// assert_eq!(from_str("true").unwrap(), Variant::empty_symbol());
/// assert!(from_str("{invalid").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the input is not well-formed JSON, or
/// [`Error::DepthExceeded`] if it nests deeper than [`DEFAULT_MAX_DEPTH`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(json: &str) -> Result<Variant> {
    from_str_with_options(json, &DecodeOptions::default())
}

/// Decodes a JSON document into a [`Variant`] with custom options.
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_str_with_options, DecodeOptions, Error};
///
/// let options = DecodeOptions::new().with_max_depth(2);
/// assert!(from_str_with_options("[[1]]", &options).is_ok());
/// assert!(matches!(
///     from_str_with_options("[[[1]]]", &options),
///     Err(Error::DepthExceeded { limit: 2 })
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the input is not well-formed JSON, or
/// [`Error::DepthExceeded`] if it nests past `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(json: &str, options: &DecodeOptions) -> Result<Variant> {
    Decoder::new(options).decode_str(json)
}

/// Decodes UTF-8 JSON bytes into a [`Variant`].
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_slice, Variant};
///
/// let value = from_slice(b"[\"a\"]").unwrap();
/// assert_eq!(value, Variant::List(vec![Variant::from("a")]));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the bytes are not valid UTF-8 JSON, or
/// [`Error::DepthExceeded`] if they nest too deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Variant> {
    Decoder::new(&DecodeOptions::default()).decode_slice(bytes)
}

/// Decodes JSON read from an I/O stream into a [`Variant`].
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_reader, Variant};
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"\"hi\"")).unwrap();
/// assert_eq!(value, Variant::from("hi"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, [`Error::Parse`] if the input is
/// not well-formed JSON, or [`Error::DepthExceeded`] if it nests too deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Variant>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Decodes an already parsed [`serde_json::Value`] into a [`Variant`].
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_value, Variant};
/// use serde_json::json;
///
/// let value = from_value(&json!({"a": 1})).unwrap();
/// assert_eq!(
///     value.as_entries().unwrap(),
///     &[Variant::from("a"), Variant::Number("1".to_string())]
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] if `node` nests deeper than [`DEFAULT_MAX_DEPTH`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value(node: &serde_json::Value) -> Result<Variant> {
    from_value_with_options(node, &DecodeOptions::default())
}

/// Decodes an already parsed [`serde_json::Value`] with custom options.
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] if `node` nests past `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value_with_options(
    node: &serde_json::Value,
    options: &DecodeOptions,
) -> Result<Variant> {
    Decoder::new(options).decode(node)
}

/// Encodes a [`Variant`] as JSON text. Never fails.
///
/// # Examples
///
/// ```rust
/// use variant_json::{to_string, Tag, Variant};
///
/// assert_eq!(to_string(&Variant::List(vec![])), "[]");
/// assert_eq!(to_string(&Variant::with_text(Tag::Symbol, "x")), "\"x\"");
/// assert_eq!(to_string(&Variant::make_default(Tag::Lambda)), "{}");
/// ```
#[must_use]
pub fn to_string(value: &Variant) -> String {
    let mut encoder = Encoder::new();
    encoder.encode(value);
    log::debug!(
        "variant_json::to_string(), encoded a {} into {} bytes",
        value.tag(),
        encoder.as_str().len()
    );
    encoder.into_inner()
}

/// Encodes a [`Variant`] as JSON text into a writer.
///
/// # Examples
///
/// ```rust
/// use variant_json::{to_writer, Variant};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Variant::from(7)).unwrap();
/// assert_eq!(buffer, b"7");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Variant) -> Result<()>
where
    W: io::Write,
{
    serde_json::to_writer(writer, value).map_err(|e| Error::from_json(&e))
}
