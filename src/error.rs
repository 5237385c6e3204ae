//! Error types for JSON decoding and encoding.
//!
//! Decoding fails in two ways: the JSON text is malformed (reported by
//! `serde_json` and wrapped as [`Error::Parse`]), or the tree nests deeper
//! than the configured limit ([`Error::DepthExceeded`]). Encoding itself never
//! fails; only writing the result to an `io::Write` can. Building a `Number`
//! from a non-finite float is refused with [`Error::NonFiniteNumber`].
//!
//! Null and boolean inputs are not errors: they decode to the empty symbol.
//!
//! ## Examples
//!
//! ```rust
//! use variant_json::{from_str, Error};
//!
//! let result = from_str("{invalid");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().starts_with("failed to parse JSON: "));
//! }
//! ```

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input is not well-formed JSON.
    #[error("failed to parse JSON: {msg}")]
    Parse {
        msg: String,
        line: usize,
        column: usize,
    },

    /// A container nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A float with no JSON form (`NaN` or an infinity) was turned into a `Number`.
    #[error("{value} is not a finite number")]
    NonFiniteNumber { value: f64 },
}

impl Error {
    /// Wraps an error reported by `serde_json`.
    ///
    /// I/O failures while reading keep their own category; everything else is
    /// a parse error carrying the parser's position.
    pub fn from_json(err: &serde_json::Error) -> Self {
        if err.is_io() {
            return Error::Io(err.to_string());
        }
        Error::Parse {
            msg: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Creates a depth-limit error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant_json::Error;
    ///
    /// let err = Error::depth_exceeded(32);
    /// assert_eq!(err.to_string(), "nesting depth exceeds the limit of 32");
    /// ```
    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    pub fn non_finite(value: f64) -> Self {
        Error::NonFiniteNumber { value }
    }

    /// Creates an I/O error for reader or writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
