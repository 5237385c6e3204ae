//! The [`Variant`] tagged union and its construction rules.
//!
//! A [`Variant`] models symbolic-expression data: symbols, numbers, strings,
//! lists and callable forms. Every variant is a closed enum arm, so the
//! decoder in [`crate::de`] and the encoder in [`crate::ser`] are checked for
//! exhaustiveness by the compiler.
//!
//! ## Creating Values
//!
//! ```rust
//! use variant_json::{Tag, Variant};
//!
//! let sym = Variant::with_text(Tag::Symbol, "define");
//! let num = Variant::from(42);
//! let text = Variant::from("hello");
//! let list = Variant::List(vec![sym, num, text]);
//!
//! assert!(list.is_list());
//! assert_eq!(Variant::make_default(Tag::Symbol), Variant::empty_symbol());
//! ```
//!
//! ## Callables
//!
//! [`Proc`] wraps a native function pointer; [`Lambda`] holds an opaque
//! user-defined callable. Neither is produced by JSON decoding, and both
//! encode to the placeholder `{}`.
//!
//! ```rust
//! use variant_json::{to_string, Variant};
//!
//! fn first(args: &[Variant]) -> Variant {
//!     args.first().cloned().unwrap_or_else(Variant::empty_symbol)
//! }
//!
//! let builtin = Variant::callable(first);
//! assert!(builtin.is_callable());
//! assert_eq!(to_string(&builtin), "{}");
//! ```

use crate::{Error, VariantMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Signature of a built-in procedure.
pub type NativeFn = fn(&[Variant]) -> Variant;

/// Opaque environment handle captured by a [`Lambda`].
pub type Env = Arc<dyn Any + Send + Sync>;

/// Names each arm of [`Variant`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Symbol,
    Number,
    Cadena,
    List,
    Proc,
    Lambda,
}

impl Tag {
    /// Returns the name used for this tag in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Symbol => "Symbol",
            Tag::Number => "Number",
            Tag::Cadena => "Cadena",
            Tag::List => "List",
            Tag::Proc => "Proc",
            Tag::Lambda => "Lambda",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symbolic-expression value.
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_str, Variant};
///
/// let value = from_str("[3, 1, 2]").unwrap();
/// assert_eq!(
///     value,
///     Variant::List(vec![
///         Variant::Number("3".to_string()),
///         Variant::Number("1".to_string()),
///         Variant::Number("2".to_string()),
///     ])
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    /// An identifier. Decoded JSON objects, `null` and booleans also land here.
    Symbol(Symbol),
    /// A decimal number kept in textual form.
    Number(String),
    /// A string literal.
    Cadena(String),
    List(Vec<Variant>),
    Proc(Proc),
    Lambda(Lambda),
}

/// Payload of [`Variant::Symbol`].
///
/// `entries` is empty for plain identifiers. A decoded JSON object keeps its
/// members here as `[key0, value0, key1, value1, ...]` with every key a
/// [`Variant::Cadena`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Symbol {
    pub name: String,
    pub entries: Vec<Variant>,
}

impl Symbol {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Iterates the `(key, value)` pairs of a flattened object.
    ///
    /// A trailing key without a value is skipped.
    pub fn pairs(&self) -> impl Iterator<Item = (&Variant, &Variant)> {
        self.entries.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// A built-in procedure, possibly unbound.
#[derive(Clone, Copy, Default)]
pub struct Proc {
    func: Option<NativeFn>,
}

impl Proc {
    #[must_use]
    pub const fn new(func: NativeFn) -> Self {
        Proc { func: Some(func) }
    }

    /// Returns `true` if a function is attached.
    #[inline]
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.func.is_some()
    }

    /// Invokes the procedure, or returns `None` when nothing is bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::{Proc, Variant};
    ///
    /// fn count(args: &[Variant]) -> Variant {
    ///     Variant::from(args.len() as u32)
    /// }
    ///
    /// let builtin = Proc::new(count);
    /// let result = builtin.call(&[Variant::from("a"), Variant::from("b")]);
    /// assert_eq!(result, Some(Variant::Number("2".to_string())));
    /// assert_eq!(Proc::default().call(&[]), None);
    /// ```
    pub fn call(&self, args: &[Variant]) -> Option<Variant> {
        self.func.map(|func| func(args))
    }
}

impl PartialEq for Proc {
    fn eq(&self, other: &Self) -> bool {
        match (self.func, other.func) {
            (Some(a), Some(b)) => a as usize == b as usize,
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Proc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.func {
            Some(func) => write!(f, "Proc({:#x})", func as usize),
            None => f.write_str("Proc(<unbound>)"),
        }
    }
}

/// A user-defined callable.
///
/// The payload is carried but never interpreted by this crate; an evaluator
/// built on top decides what `params`, `body` and the environment mean.
#[derive(Clone, Default)]
pub struct Lambda {
    pub params: Vec<String>,
    pub body: Option<Box<Variant>>,
    env: Option<Env>,
}

impl Lambda {
    #[must_use]
    pub fn new(params: Vec<String>, body: Variant) -> Self {
        Lambda {
            params,
            body: Some(Box::new(body)),
            env: None,
        }
    }

    /// Attaches a captured environment.
    #[must_use]
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn env(&self) -> Option<&Env> {
        self.env.as_ref()
    }
}

// Environments compare by identity.
impl PartialEq for Lambda {
    fn eq(&self, other: &Self) -> bool {
        let same_env = match (&self.env, &other.env) {
            (Some(a), Some(b)) => Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const (),
            (None, None) => true,
            _ => false,
        };
        same_env && self.params == other.params && self.body == other.body
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lambda")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("env", &self.env.as_ref().map(|_| "<env>"))
            .finish()
    }
}

/// Canonical text for a number that went through `f64`.
///
/// `1.50` becomes `"1.5"`, `3.0` becomes `"3"` and `1e2` becomes `"100"`.
#[must_use]
pub fn canonical_number(value: f64) -> String {
    value.to_string()
}

impl Variant {
    /// Builds a value with the given tag and no payload: empty text, no
    /// children, no callable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::{Tag, Variant};
    ///
    /// assert_eq!(Variant::make_default(Tag::List), Variant::List(vec![]));
    /// assert_eq!(Variant::make_default(Tag::Cadena).as_text(), Some(""));
    /// assert!(!Variant::make_default(Tag::Proc).is_callable());
    /// ```
    #[must_use]
    pub fn make_default(tag: Tag) -> Self {
        match tag {
            Tag::Symbol => Variant::Symbol(Symbol::default()),
            Tag::Number => Variant::Number(String::new()),
            Tag::Cadena => Variant::Cadena(String::new()),
            Tag::List => Variant::List(Vec::new()),
            Tag::Proc => Variant::Proc(Proc::default()),
            Tag::Lambda => Variant::Lambda(Lambda::default()),
        }
    }

    /// Builds a `Symbol`, `Number` or `Cadena` carrying `text`.
    ///
    /// The text is not validated, so a `Number` may hold non-numeric text.
    /// Tags without a text slot ignore `text` and return
    /// [`Variant::make_default`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::{Tag, Variant};
    ///
    /// let num = Variant::with_text(Tag::Number, "12.5");
    /// assert_eq!(num.as_f64(), Some(12.5));
    ///
    /// let odd = Variant::with_text(Tag::Number, "twelve");
    /// assert_eq!(odd.as_text(), Some("twelve"));
    /// assert_eq!(odd.as_f64(), None);
    /// ```
    #[must_use]
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        match tag {
            Tag::Symbol => Variant::Symbol(Symbol::new(text)),
            Tag::Number => Variant::Number(text.into()),
            Tag::Cadena => Variant::Cadena(text.into()),
            Tag::List | Tag::Proc | Tag::Lambda => Variant::make_default(tag),
        }
    }

    /// Wraps a native function as a `Proc`.
    #[must_use]
    pub fn callable(func: NativeFn) -> Self {
        Variant::Proc(Proc::new(func))
    }

    /// The zero value: a `Symbol` with empty name and no entries.
    ///
    /// Decoding `null`, `true` or `false` yields exactly this value.
    #[must_use]
    pub fn empty_symbol() -> Self {
        Variant::make_default(Tag::Symbol)
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Variant::Symbol(_) => Tag::Symbol,
            Variant::Number(_) => Tag::Number,
            Variant::Cadena(_) => Tag::Cadena,
            Variant::List(_) => Tag::List,
            Variant::Proc(_) => Tag::Proc,
            Variant::Lambda(_) => Tag::Lambda,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Variant::Symbol(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Variant::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_cadena(&self) -> bool {
        matches!(self, Variant::Cadena(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Variant::List(_))
    }

    /// Returns `true` for a bound `Proc` or any `Lambda`.
    #[inline]
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        match self {
            Variant::Proc(builtin) => builtin.is_bound(),
            Variant::Lambda(_) => true,
            _ => false,
        }
    }

    /// Returns the text payload of a `Symbol`, `Number` or `Cadena`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Variant::Symbol(sym) => Some(&sym.name),
            Variant::Number(text) | Variant::Cadena(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Variant::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the flattened entries of a `Symbol`.
    #[must_use]
    pub fn as_entries(&self) -> Option<&[Variant]> {
        match self {
            Variant::Symbol(sym) => Some(&sym.entries),
            _ => None,
        }
    }

    /// Parses the text of a `Number`. Returns `None` for other tags or
    /// unparseable text.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Variant::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Rebuilds a keyed view of a decoded JSON object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::{from_str, Variant};
    ///
    /// let value = from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
    /// let map = value.to_map().unwrap();
    /// assert_eq!(map.get("name"), Some(&Variant::from("Alice")));
    /// assert_eq!(map.get("age").and_then(Variant::as_f64), Some(30.0));
    /// ```
    #[must_use]
    pub fn to_map(&self) -> Option<VariantMap> {
        VariantMap::from_entries(self.as_entries()?)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::describe(self))
    }
}

/// Writes the JSON shape of a variant.
///
/// `Symbol` and `Cadena` become strings and `List` a sequence. `Number` text
/// is emitted raw when it is a JSON number; any other text (empty, `NaN`,
/// `twelve`) falls back to the `{}` placeholder used for `Proc` and `Lambda`.
/// The raw number path relies on `serde_json`'s `RawValue`, so other
/// serializers see it as a one-field struct.
impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Variant::Symbol(sym) => serializer.serialize_str(&sym.name),
            Variant::Cadena(text) => serializer.serialize_str(text),
            Variant::Number(text) => match raw_number(text) {
                Some(raw) => raw.serialize(serializer),
                None => serializer.serialize_map(Some(0))?.end(),
            },
            Variant::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Variant::Proc(_) | Variant::Lambda(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

fn raw_number(text: &str) -> Option<Box<RawValue>> {
    if !text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return None;
    }
    RawValue::from_string(text.to_string()).ok()
}

/// Reads any self-describing input with the same mapping as the decoder.
///
/// This path has no depth limit of its own: `DecodeOptions::max_depth` is
/// not consulted, so nesting is bounded only by the source deserializer.
/// `serde_json` accepts at most 127 levels of text, but
/// `serde_json::from_value` on an in-memory tree does not stop at all. Use
/// [`from_value`](crate::from_value) for trees of unknown depth.
impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct VariantVisitor;

        impl<'de> Visitor<'de> for VariantVisitor {
            type Value = Variant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E> {
                Ok(Variant::empty_symbol())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Variant::Number(canonical_number(value as f64)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Variant::Number(canonical_number(value as f64)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Variant::Number(canonical_number(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Variant::Cadena(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Variant::Cadena(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Variant::empty_symbol())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Variant::empty_symbol())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Variant::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut symbol = Symbol::default();
                while let Some((key, value)) = map.next_entry::<String, Variant>()? {
                    symbol.entries.push(Variant::Cadena(key));
                    symbol.entries.push(value);
                }
                Ok(Variant::Symbol(symbol))
            }
        }

        deserializer.deserialize_any(VariantVisitor)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Cadena(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Cadena(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Variant {
                fn from(value: $ty) -> Self {
                    Variant::Number(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Rejects `NaN` and the infinities, which have no JSON form.
///
/// # Examples
///
/// ```rust
/// use variant_json::Variant;
///
/// assert_eq!(Variant::try_from(2.5).unwrap(), Variant::Number("2.5".to_string()));
/// assert!(Variant::try_from(f64::NAN).is_err());
/// ```
impl TryFrom<f64> for Variant {
    type Error = Error;

    fn try_from(value: f64) -> crate::Result<Self> {
        if value.is_finite() {
            Ok(Variant::Number(canonical_number(value)))
        } else {
            Err(Error::non_finite(value))
        }
    }
}

impl TryFrom<f32> for Variant {
    type Error = Error;

    fn try_from(value: f32) -> crate::Result<Self> {
        Variant::try_from(f64::from(value))
    }
}

impl From<Vec<Variant>> for Variant {
    fn from(value: Vec<Variant>) -> Self {
        Variant::List(value)
    }
}

impl From<NativeFn> for Variant {
    fn from(value: NativeFn) -> Self {
        Variant::callable(value)
    }
}

impl From<Lambda> for Variant {
    fn from(value: Lambda) -> Self {
        Variant::Lambda(value)
    }
}
