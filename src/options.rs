//! Configuration options for writing and parsing JSON text.
//!
//! - [`WriterOptions`]: output style, indentation width and nesting limit
//! - [`Style`]: compact or readable output
//! - [`ParserOptions`]: nesting and exponent limits for untrusted input
//!
//! ## Examples
//!
//! ```rust
//! use typed_json::{to_string_with_options, JsonObject, WriterOptions};
//!
//! let mut obj = JsonObject::new();
//! obj.put("id", 7);
//!
//! let text = to_string_with_options(&obj, WriterOptions::readable().with_indent(2)).unwrap();
//! assert_eq!(text, "{\n  \"id\":7\n}");
//! ```

/// Default number of spaces per nesting level in readable mode.
pub const DEFAULT_INDENT: usize = 3;

/// Output style of the [`Writer`](crate::Writer).
///
/// # Examples
///
/// ```rust
/// use typed_json::Style;
///
/// assert_eq!(Style::default(), Style::Compact);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// No whitespace between tokens.
    #[default]
    Compact,
    /// One key or element per line, indented per nesting level.
    Readable,
}

/// Configuration options for JSON output.
///
/// # Examples
///
/// ```rust
/// use typed_json::{Style, WriterOptions};
///
/// let options = WriterOptions::readable();
/// assert_eq!(options.style, Style::Readable);
/// assert_eq!(options.indent, 3);
/// ```
#[derive(Clone, Debug)]
pub struct WriterOptions {
    pub style: Style,
    pub indent: usize,
    pub max_depth: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            style: Style::Compact,
            indent: DEFAULT_INDENT,
            max_depth: 512,
        }
    }
}

impl WriterOptions {
    /// Creates default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for compact output.
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Creates options for readable output with 3-space indentation.
    #[must_use]
    pub fn readable() -> Self {
        WriterOptions {
            style: Style::Readable,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects readable output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the maximum container nesting the writer accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub(crate) fn is_readable(&self) -> bool {
        self.style == Style::Readable
    }
}

/// Configuration options for JSON input.
///
/// # Examples
///
/// ```rust
/// use typed_json::{parse_with_options, Error, ParserOptions};
///
/// let options = ParserOptions::new().with_max_depth(2);
/// let result = parse_with_options("{\"a\":{\"b\":{\"c\":1}}}", options);
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ParserOptions {
    pub max_depth: usize,
    /// Largest exponent magnitude accepted in a number literal.
    pub max_exponent: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: 128,
            max_exponent: 1024,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum container nesting the parser accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the largest exponent magnitude a number literal may carry.
    ///
    /// ```rust
    /// use typed_json::{parse_with_options, ParserOptions};
    ///
    /// let options = ParserOptions::new().with_max_exponent(10);
    /// assert!(parse_with_options("{\"n\":1e10}", options.clone()).is_ok());
    /// assert!(parse_with_options("{\"n\":1e-11}", options).is_err());
    /// ```
    #[must_use]
    pub fn with_max_exponent(mut self, max_exponent: u32) -> Self {
        self.max_exponent = max_exponent;
        self
    }
}
