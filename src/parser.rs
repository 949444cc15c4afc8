//! JSON text input.
//!
//! The [`Parser`] reads standard JSON (RFC 8259) into the document model.
//! Any object consisting of exactly one extended marker key (`%bn%`, `%dt%`,
//! `%tm%`, `%ts%`) mapping to a string or `null` is turned into the
//! corresponding extended [`JsonEntry`] rather than a nested object.
//!
//! ## Overview
//!
//! - **Single pass**: one cursor over the input, no backtracking
//! - **Exact numbers**: number tokens are parsed straight into decimals
//! - **Positions**: every syntax error carries line and column
//! - **Bounded nesting**: see [`ParserOptions::max_depth`](crate::ParserOptions)
//!
//! ## Usage
//!
//! ```rust
//! use typed_json::{JsonType, Parser};
//!
//! let mut parser = Parser::new(r#"{"born": {"%dt%": "2024-01-15"}, "n": 1.50}"#);
//! let obj = parser.parse_object().unwrap();
//! assert_eq!(obj.get("born").unwrap().kind(), JsonType::Date);
//! assert_eq!(obj.get_number("n").unwrap().to_string(), "1.50");
//! ```

use crate::{Error, JsonArray, JsonEntry, JsonObject, ParserOptions, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// The JSON parser.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            options,
        }
    }

    /// Parses the whole input as one JSON object.
    ///
    /// A top-level extended wrapper is not unwrapped here: the caller asked
    /// for an object and gets the object as written.
    pub fn parse_object(&mut self) -> Result<JsonObject> {
        self.skip_whitespace();
        if self.peek_char() != Some('{') {
            return Err(self.error("Expected '{'"));
        }
        let object = self.parse_raw_object()?;
        self.expect_end()?;
        Ok(object)
    }

    /// Parses the whole input as one JSON array.
    pub fn parse_array(&mut self) -> Result<JsonArray> {
        self.skip_whitespace();
        if self.peek_char() != Some('[') {
            return Err(self.error("Expected '['"));
        }
        let array = self.parse_raw_array()?;
        self.expect_end()?;
        Ok(array)
    }

    /// Parses the whole input as one JSON value of any kind.
    pub fn parse_entry(&mut self) -> Result<JsonEntry> {
        let entry = self.parse_value()?;
        self.expect_end()?;
        Ok(entry)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(_) => Err(self.error(&format!("Expected '{}'", expected))),
            None => Err(self.error(&format!("Unexpected end of input, expected '{}'", expected))),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.position < self.input.len() {
            return Err(self.error("Unexpected trailing characters"));
        }
        Ok(())
    }

    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        if self.input[self.position..].starts_with(literal) {
            for _ in 0..literal.len() {
                self.next_char();
            }
            Ok(())
        } else {
            Err(self.error(&format!("Expected '{}'", literal)))
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::DepthLimit {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<JsonEntry> {
        self.skip_whitespace();
        match self.peek_char() {
            Some('{') => {
                let line = self.line;
                let column = self.column;
                let object = self.parse_raw_object()?;
                JsonEntry::from_object(object).map_err(|e| Error::syntax(line, column, &e.to_string()))
            }
            Some('[') => Ok(JsonEntry::Array(self.parse_raw_array()?)),
            Some('"') => Ok(JsonEntry::String(self.parse_string()?)),
            Some('t') => {
                self.expect_literal("true")?;
                Ok(JsonEntry::Boolean(true))
            }
            Some('f') => {
                self.expect_literal("false")?;
                Ok(JsonEntry::Boolean(false))
            }
            Some('n') => {
                self.expect_literal("null")?;
                Ok(JsonEntry::Null)
            }
            Some(ch) if ch == '-' || ch.is_ascii_digit() => Ok(JsonEntry::Number(self.parse_number()?)),
            Some(_) => Err(self.error("Expected a JSON value")),
            None => Err(self.error("Unexpected end of input, expected a JSON value")),
        }
    }

    fn parse_raw_object(&mut self) -> Result<JsonObject> {
        self.enter()?;
        self.expect('{')?;
        let mut object = JsonObject::new();

        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.depth -= 1;
            return Ok(object);
        }

        loop {
            self.skip_whitespace();
            if self.peek_char() != Some('"') {
                return Err(self.error("Expected string key"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek_char() != Some(':') {
                return Err(self.error("Expected ':' after key"));
            }
            self.next_char();

            let value = self.parse_value()?;
            object.put(key, value);

            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some('}') => break,
                Some(_) => return Err(self.error("Expected ',' or '}'")),
                None => return Err(self.error("Unexpected end of input in object")),
            }
        }

        self.depth -= 1;
        Ok(object)
    }

    fn parse_raw_array(&mut self) -> Result<JsonArray> {
        self.enter()?;
        self.expect('[')?;
        let mut array = JsonArray::new();

        self.skip_whitespace();
        if self.peek_char() == Some(']') {
            self.next_char();
            self.depth -= 1;
            return Ok(array);
        }

        loop {
            let value = self.parse_value()?;
            array.add(value);

            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some(']') => break,
                Some(_) => return Err(self.error("Expected ',' or ']'")),
                None => return Err(self.error("Unexpected end of input in array")),
            }
        }

        self.depth -= 1;
        Ok(array)
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut result = String::new();

        while let Some(ch) = self.next_char() {
            match ch {
                '"' => return Ok(result),
                '\\' => match self.next_char() {
                    Some('"') => result.push('"'),
                    Some('\\') => result.push('\\'),
                    Some('/') => result.push('/'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('u') => {
                        let ch = self.parse_unicode_escape()?;
                        result.push(ch);
                    }
                    Some(_) => return Err(self.error("Invalid escape sequence")),
                    None => return Err(self.error("Unexpected end of input in string")),
                },
                c if c < '\u{0020}' => {
                    return Err(self.error("Unescaped control character in string"))
                }
                other => result.push(other),
            }
        }
        Err(self.error("Unterminated string"))
    }

    /// Reads the digits after `\u`, combining a surrogate pair if present.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let first = self.parse_hex4()?;
        let code_point = if (0xD800..0xDC00).contains(&first) {
            if !self.input[self.position..].starts_with("\\u") {
                return Err(self.error("Unpaired surrogate in unicode escape"));
            }
            self.next_char();
            self.next_char();
            let second = self.parse_hex4()?;
            if !(0xDC00..0xE000).contains(&second) {
                return Err(self.error("Invalid low surrogate in unicode escape"));
            }
            0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
        } else {
            first
        };

        char::from_u32(code_point).ok_or_else(|| self.error("Invalid unicode code point"))
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            match self.next_char().and_then(|ch| ch.to_digit(16)) {
                Some(digit) => value = value * 16 + digit,
                None => {
                    return Err(self.error(
                        "Invalid unicode escape sequence (expected 4 hex digits)",
                    ))
                }
            }
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<BigDecimal> {
        let start = self.position;

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        match self.peek_char() {
            Some('0') => {
                self.next_char();
            }
            Some(ch) if ch.is_ascii_digit() => self.skip_digits(),
            _ => return Err(self.error("Invalid number: expected digit")),
        }

        if self.peek_char() == Some('.') {
            self.next_char();
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.error("Invalid number: expected digit after '.'"));
            }
            self.skip_digits();
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            self.next_char();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.next_char();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.error("Invalid number: expected exponent digits"));
            }
            let mut exponent = 0u64;
            while let Some(digit) = self.peek_char().and_then(|ch| ch.to_digit(10)) {
                exponent = exponent.saturating_mul(10).saturating_add(u64::from(digit));
                self.next_char();
            }
            if exponent > u64::from(self.options.max_exponent) {
                return Err(self.error("Invalid number: exponent out of range"));
            }
        }

        let number_str = &self.input[start..self.position];
        BigDecimal::from_str(number_str).map_err(|_| self.error("Invalid number"))
    }

    fn skip_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.next_char();
        }
    }
}
