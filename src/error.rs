//! Errors produced while validating templates and substituting arguments.
//!
//! Every error aborts the formatting call it came from: no partial output is
//! ever returned. None of them are transient, so nothing is retried; a
//! malformed template or call site is a defect at the call site.

/// Which kind of brace was left unmatched in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brace {
    /// A `{` that is never closed.
    Opening,
    /// A `}` with no `{` before it.
    Closing,
}

/// An error from validating a template or formatting with it.
///
/// # Examples
///
/// ```
/// use fastfmt::{Brace, FormatError, Template};
///
/// assert_eq!(
///     Template::new("abc}").unwrap_err(),
///     FormatError::UnbalancedBraces {
///         brace: Brace::Closing,
///         position: 3
///     }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The template failed validation; it cannot be used at all.
    UnbalancedBraces {
        /// The kind of brace left unmatched.
        brace: Brace,
        /// Byte offset of the offending brace.
        position: usize,
    },
    /// The template has more placeholders than arguments were supplied.
    MissingArgument {
        /// Zero-based index of the argument that was needed.
        index: usize,
    },
    /// A `{` was never closed before the end of the template.
    UnterminatedPlaceholder {
        /// Byte offset of the opening brace.
        position: usize,
    },
    /// A `}` appeared outside any placeholder and was not doubled.
    UnmatchedClosingBrace {
        /// Byte offset of the closing brace.
        position: usize,
    },
    /// More arguments were supplied than an argument list can hold.
    TooManyArguments {
        /// Number of arguments supplied.
        count: usize,
        /// Maximum number of arguments allowed.
        capacity: usize,
    },
}

impl FormatError {
    /// A short, static description of the error kind.
    ///
    /// This is usable in `const` contexts, which is how malformed literal
    /// templates are reported at compile time.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnbalancedBraces {
                brace: Brace::Opening,
                ..
            } => "unmatched opening brace in format template",
            Self::UnbalancedBraces {
                brace: Brace::Closing,
                ..
            } => "unmatched closing brace in format template",
            Self::MissingArgument { .. } => "not enough arguments for format template",
            Self::UnterminatedPlaceholder { .. } => "unterminated placeholder in format template",
            Self::UnmatchedClosingBrace { .. } => "unmatched closing brace in format template",
            Self::TooManyArguments { .. } => "too many format arguments",
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())?;
        match *self {
            Self::UnbalancedBraces { position, .. }
            | Self::UnterminatedPlaceholder { position }
            | Self::UnmatchedClosingBrace { position } => write!(f, " at byte {position}"),
            Self::MissingArgument { index } => write!(f, " (argument {index} is missing)"),
            Self::TooManyArguments { count, capacity } => {
                write!(f, " ({count} given, at most {capacity} allowed)")
            }
        }
    }
}

impl core::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        let error = FormatError::UnbalancedBraces {
            brace: Brace::Opening,
            position: 0,
        };
        assert_eq!(
            error.to_string(),
            "unmatched opening brace in format template at byte 0"
        );

        let error = FormatError::MissingArgument { index: 1 };
        assert_eq!(
            error.to_string(),
            "not enough arguments for format template (argument 1 is missing)"
        );

        let error = FormatError::TooManyArguments {
            count: 17,
            capacity: 16,
        };
        assert_eq!(
            error.to_string(),
            "too many format arguments (17 given, at most 16 allowed)"
        );
    }

    #[test]
    fn test_message_is_const() {
        const MESSAGE: &str = FormatError::UnterminatedPlaceholder { position: 3 }.message();
        assert_eq!(MESSAGE, "unterminated placeholder in format template");
    }
}
