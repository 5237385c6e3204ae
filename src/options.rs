//! Configuration options for JSON decoding.
//!
//! - [`DecodeOptions`]: main configuration struct
//! - [`NumberFormat`]: how decoded numbers become text
//!
//! ## Examples
//!
//! ```rust
//! use variant_json::{from_str_with_options, DecodeOptions, NumberFormat, Variant};
//!
//! let options = DecodeOptions::new()
//!     .with_max_depth(8)
//!     .with_number_format(NumberFormat::Exact);
//!
//! let value = from_str_with_options("9007199254740993", &options).unwrap();
//! assert_eq!(value, Variant::Number("9007199254740993".to_string()));
//! ```

/// Nesting limit applied when no other limit is configured.
///
/// Text is checked against the limit before it reaches `serde_json`, so deep
/// input reports [`Error::DepthExceeded`](crate::Error::DepthExceeded) rather
/// than a parse error. `serde_json` itself accepts at most 127 levels of text,
/// so a configured limit above that (or none) still fails there with `Parse`.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How a decoded JSON number is turned into the text of a `Number`.
///
/// # Examples
///
/// ```rust
/// use variant_json::{from_str_with_options, DecodeOptions, NumberFormat, Variant};
///
/// let canonical = DecodeOptions::new();
/// let exact = DecodeOptions::new().with_number_format(NumberFormat::Exact);
///
/// let big = "12345678901234567890";
/// assert_eq!(
///     from_str_with_options(big, &canonical).unwrap(),
///     Variant::Number("12345678901234567000".to_string())
/// );
/// assert_eq!(
///     from_str_with_options(big, &exact).unwrap(),
///     Variant::Number(big.to_string())
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Convert through `f64` and print the shortest decimal that reads back
    /// to the same float. Large integers and long fractions may shift.
    #[default]
    Canonical,
    /// Keep the parser's own rendering: exact for integers that fit in 64
    /// bits, shortest round-trip text for everything else.
    Exact,
}

/// Configuration options for decoding JSON into a `Variant`.
///
/// # Examples
///
/// ```rust
/// use variant_json::{DecodeOptions, NumberFormat, DEFAULT_MAX_DEPTH};
///
/// let options = DecodeOptions::new();
/// assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
/// assert_eq!(options.number_format, NumberFormat::Canonical);
///
/// let unlimited = DecodeOptions::new().without_depth_limit();
/// assert_eq!(unlimited.max_depth, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest container nesting accepted; `None` disables the check.
    pub max_depth: Option<usize>,
    pub number_format: NumberFormat,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            number_format: NumberFormat::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (depth limit of [`DEFAULT_MAX_DEPTH`], canonical numbers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest container nesting accepted.
    ///
    /// A top-level array or object sits at depth 1; scalars never count.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Disables the depth check. Recursion is then bounded only by the stack.
    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    #[must_use]
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}
