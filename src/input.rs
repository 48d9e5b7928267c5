//! Reading whitespace-separated tokens and whole lines.
//!
//! [`Scanner`] wraps any [`BufRead`] source and buffers one line at a time.
//! Tokens are parsed with [`FromStr`], so anything from integers to floats to
//! `String` can be read with the same call.
//!
//! ```
//! use fastfmt::input::Scanner;
//!
//! let mut scanner = Scanner::new("3\n10 20 30\n".as_bytes());
//! let count: usize = scanner.read().unwrap();
//! let sum: i64 = (0..count).map(|_| scanner.read::<i64>().unwrap()).sum();
//! assert_eq!(sum, 60);
//! ```

use alloc::string::String;
use core::str::FromStr;
use std::io::{self, BufRead, StdinLock};

/// Error returned when reading input fails.
#[derive(Debug)]
pub enum InputError {
    /// The underlying reader failed
    Io(io::Error),
    /// The input ended before a token or line was found
    Eof,
    /// A token could not be parsed as the requested type
    Parse {
        /// The offending token
        token: String,
        /// Name of the type the token was parsed as
        type_name: &'static str,
    },
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "reading input failed: {error}"),
            Self::Eof => f.write_str("unexpected end of input"),
            Self::Parse { token, type_name } => {
                write!(f, "could not parse {token:?} as {type_name}")
            }
        }
    }
}

impl core::error::Error for InputError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Eof | Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// Reads whitespace-separated tokens and lines from a buffered reader.
///
/// Token and line reads can be mixed freely: [`Scanner::next_line`] returns
/// whatever is left of the current line after the last token.
#[derive(Debug)]
pub struct Scanner<R> {
    /// The source
    reader: R,
    /// The line currently being consumed
    line: String,
    /// Read position within `line`
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Reads the next whitespace-separated token and parses it as `T`.
    ///
    /// # Errors
    ///
    /// - [`InputError::Eof`] if the input contains no further tokens.
    /// - [`InputError::Parse`] if the token is not a valid `T`. The token is
    ///   consumed either way.
    /// - [`InputError::Io`] if the reader fails.
    pub fn read<T: FromStr>(&mut self) -> Result<T, InputError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| InputError::Parse {
            token: String::from(token),
            type_name: core::any::type_name::<T>(),
        })
    }

    /// Reads the rest of the current line, or the next line if the current
    /// one has been used up, without its line terminator.
    ///
    /// # Errors
    ///
    /// - [`InputError::Eof`] if the input is exhausted.
    /// - [`InputError::Io`] if the reader fails.
    pub fn next_line(&mut self) -> Result<String, InputError> {
        if self.pos >= self.line.len() && !self.fill()? {
            return Err(InputError::Eof);
        }
        let rest = strip_terminator(&self.line[self.pos..]);
        let line = String::from(rest);
        self.pos = self.line.len();
        Ok(line)
    }

    /// Consumes the scanner, returning the underlying reader.
    ///
    /// Input that was already buffered by the scanner is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Skips whitespace, crossing line boundaries, and returns the next
    /// token.
    fn next_token(&mut self) -> Result<&str, InputError> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                return Ok(&self.line[start..start + len]);
            }
            if !self.fill()? {
                return Err(InputError::Eof);
            }
        }
    }

    /// Replaces the current line with the next one from the reader.
    /// Returns `false` at the end of the input.
    fn fill(&mut self) -> Result<bool, InputError> {
        self.line.clear();
        self.pos = 0;
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }
}

impl Scanner<StdinLock<'static>> {
    /// Creates a scanner over standard input.
    ///
    /// Standard input stays locked for as long as the scanner exists.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

/// Reads one line from standard input, without its line terminator.
///
/// # Errors
///
/// - [`InputError::Eof`] if standard input is closed.
/// - [`InputError::Io`] if reading fails.
pub fn read_line() -> Result<String, InputError> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    let len = strip_terminator(&line).len();
    line.truncate(len);
    Ok(line)
}

/// Strips a trailing `\n` or `\r\n`.
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
