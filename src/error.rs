//! Error types for the value model, the JSON document model, and the
//! writer/parser pair.
//!
//! Every failure in this crate is reported through [`Error`]. Nothing is
//! retried and no partial result is ever returned: an operation either
//! succeeds completely or propagates one of these variants to the caller.
//!
//! ## Error Categories
//!
//! - **Argument errors**: a required payload was absent ([`Error::NullArgument`])
//! - **Type mismatches**: a typed accessor was used on a value of another kind
//! - **Lookup errors**: absent object keys and out-of-range array indices
//! - **Comparison errors**: operands whose kinds cannot be ordered
//! - **Syntax errors**: malformed JSON text, with line and column
//! - **State errors**: attempts to change the kind of an entry
//!
//! ## Examples
//!
//! ```rust
//! use typed_json::{parse, Error};
//!
//! let result = parse("{\"a\": [1, 2");
//! assert!(matches!(result, Err(Error::InvalidJsonObject { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A payload required by the requested kind was absent.
    #[error("Null argument: {what} must not be null")]
    NullArgument { what: String },

    /// A typed accessor disagrees with the stored kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Object lookup of a key that is not present.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Positional array access outside `0..len` (or `0..=len` for inserts).
    #[error("Index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The kinds of two values cannot be ordered against each other.
    #[error("Values of type {left} and {right} are not comparable")]
    NotComparable { left: String, right: String },

    /// A numeric accessor could not narrow the stored number.
    #[error("Numeric overflow: {value} does not fit in {target}")]
    NumericOverflow { target: String, value: String },

    /// NaN and infinities have no JSON number representation.
    #[error("Non-finite number {0} cannot be stored as a JSON number")]
    NonFiniteNumber(f64),

    /// An entry's kind is fixed once it has been constructed.
    #[error("Cannot change the type of an entry from {from} to {to}")]
    KindChange { from: String, to: String },

    /// A plain object shaped like an extended wrapper would read back as the
    /// extended kind, so the writer refuses it.
    #[error("Object with the single key {marker:?} would read back as an extended value")]
    AmbiguousObject { marker: String },

    /// Syntax error with position information
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The text is not a valid JSON object; `source` holds the cause.
    #[error("Invalid JSON object: {source}")]
    InvalidJsonObject {
        #[source]
        source: Box<Error>,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("Nesting depth limit of {limit} exceeded")]
    DepthLimit { limit: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a null-argument error naming the missing argument.
    pub fn null_argument(what: &str) -> Self {
        Error::NullArgument {
            what: what.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_json::Error;
    ///
    /// let err = Error::type_mismatch("DATE", "STRING");
    /// assert!(err.to_string().contains("expected DATE"));
    /// ```
    pub fn type_mismatch(expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an invalid-key error for an absent object key.
    pub fn invalid_key(key: &str) -> Self {
        Error::InvalidKey(key.to_string())
    }

    /// Creates a not-comparable error from the two operand kinds.
    pub fn not_comparable(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Error::NotComparable {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Creates a numeric overflow error for a failed narrowing conversion.
    pub fn numeric_overflow(target: &str, value: impl fmt::Display) -> Self {
        Error::NumericOverflow {
            target: target.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a kind-change error.
    pub fn kind_change(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Error::KindChange {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn ambiguous_object(marker: &str) -> Self {
        Error::AmbiguousObject {
            marker: marker.to_string(),
        }
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_json::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Wraps a parse failure as an invalid-JSON-object error.
    pub fn invalid_json_object(source: Error) -> Self {
        Error::InvalidJsonObject {
            source: Box::new(source),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
