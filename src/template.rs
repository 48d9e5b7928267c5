//! Validated format templates.
//!
//! A [`Template`] is a string that has passed brace validation. Since the
//! check happens when the template is created, every formatting call using it
//! can skip straight to substitution. Literal templates passed to the
//! [`format!`](crate::format!) family of macros are validated inside a
//! `const` block, so a malformed literal is a compile error.
//!
//! # Syntax
//!
//! - `{}` is replaced by the next positional argument. Anything between the
//!   braces is accepted and ignored.
//! - `{{` is a literal `{`.
//! - `}}` is a literal `}`.

use crate::error::{Brace, FormatError};

/// Checks that every unescaped `{` in `template` has a matching unescaped `}`
/// and that no `}` appears before its `{`.
///
/// Doubled braces (`{{` and `}}`) are literal braces and do not take part in
/// the count.
///
/// # Errors
///
/// Returns [`FormatError::UnbalancedBraces`] naming the kind of brace that
/// was left unmatched and where it was.
///
/// # Examples
///
/// ```
/// use fastfmt::{Brace, FormatError, validate};
///
/// assert!(validate("{} and {{literal}}").is_ok());
/// assert_eq!(
///     validate("{abc"),
///     Err(FormatError::UnbalancedBraces {
///         brace: Brace::Opening,
///         position: 0
///     })
/// );
/// ```
pub const fn validate(template: &str) -> Result<(), FormatError> {
    let bytes = template.as_bytes();
    let mut depth: usize = 0;
    let mut last_open = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                    i += 2;
                    continue;
                }
                depth += 1;
                last_open = i;
            }
            b'}' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    i += 2;
                    continue;
                }
                if depth == 0 {
                    return Err(FormatError::UnbalancedBraces {
                        brace: Brace::Closing,
                        position: i,
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }

    if depth > 0 {
        return Err(FormatError::UnbalancedBraces {
            brace: Brace::Opening,
            position: last_open,
        });
    }
    Ok(())
}

/// Counts the placeholders substitution will fill, scanning the way the
/// substitution driver does: a single `{` opens a placeholder that runs to the
/// next `}`.
const fn count_placeholders(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        let escaped = i + 1 < bytes.len() && bytes[i + 1] == bytes[i];
        match bytes[i] {
            b'{' if !escaped => {
                count += 1;
                i += 1;
                while i < bytes.len() && bytes[i] != b'}' {
                    i += 1;
                }
                i += 1;
            }
            b'{' | b'}' if escaped => i += 2,
            _ => i += 1,
        }
    }
    count
}

/// A format template that has passed brace validation.
///
/// Templates are cheap to copy and can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use fastfmt::Template;
///
/// const GREETING: Template<'static> = Template::new_const("Hello, {}!");
/// assert_eq!(GREETING.placeholder_count(), 1);
///
/// let runtime = Template::new("{} + {} = {}").unwrap();
/// assert_eq!(runtime.placeholder_count(), 3);
/// assert!(Template::new("{oops").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template<'a> {
    /// The template text
    text: &'a str,
    /// How many placeholders the text contains
    placeholders: usize,
}

impl<'a> Template<'a> {
    /// Validates `text` and wraps it as a template.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnbalancedBraces`] if [`validate`] rejects the
    /// text.
    pub const fn new(text: &'a str) -> Result<Self, FormatError> {
        match validate(text) {
            Ok(()) => Ok(Self {
                text,
                placeholders: count_placeholders(text),
            }),
            Err(error) => Err(error),
        }
    }

    /// Validates `text` and wraps it as a template, panicking if validation
    /// fails.
    ///
    /// Meant for `const` items and `const` blocks, where the panic becomes a
    /// compile error.
    ///
    /// # Panics
    ///
    /// Panics if the text has unbalanced braces.
    ///
    /// ```compile_fail
    /// const BROKEN: fastfmt::Template<'static> = fastfmt::Template::new_const("{abc");
    /// ```
    #[must_use]
    pub const fn new_const(text: &'a str) -> Self {
        match Self::new(text) {
            Ok(template) => template,
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Opening,
                ..
            }) => panic!("unmatched opening brace in format template"),
            Err(_) => panic!("unmatched closing brace in format template"),
        }
    }

    /// Runtime counterpart of [`Template::new`] that also reports rejected
    /// templates to `tracing` when that feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnbalancedBraces`] if [`validate`] rejects the
    /// text.
    pub fn parse(text: &'a str) -> Result<Self, FormatError> {
        let result = Self::new(text);
        #[cfg(feature = "tracing")]
        if let Err(error) = &result {
            tracing::debug!(template = text, %error, "rejected format template");
        }
        result
    }

    /// The template text.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the template text in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the template text is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of placeholders in the template, i.e. how many arguments a
    /// formatting call needs at least.
    #[inline]
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholders
    }
}

impl<'a> TryFrom<&'a str> for Template<'a> {
    type Error = FormatError;

    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl core::fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_balanced() {
        assert_eq!(validate(""), Ok(()));
        assert_eq!(validate("no braces at all"), Ok(()));
        assert_eq!(validate("{}"), Ok(()));
        assert_eq!(validate("{} + {} = {}"), Ok(()));
        assert_eq!(validate("{{abc}}"), Ok(()));
        assert_eq!(validate("{{{}}}"), Ok(()));
        assert_eq!(validate("{ignored spec}"), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unbalanced() {
        assert_eq!(
            validate("{abc"),
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Opening,
                position: 0
            })
        );
        assert_eq!(
            validate("abc}"),
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Closing,
                position: 3
            })
        );
        assert_eq!(
            validate("{} {"),
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Opening,
                position: 3
            })
        );
        // `{{` is a literal, so the lone `}` has nothing to close
        assert_eq!(
            validate("{{}"),
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Closing,
                position: 2
            })
        );
    }

    #[test]
    fn test_validate_fails_at_first_negative_depth() {
        assert_eq!(
            validate("} {"),
            Err(FormatError::UnbalancedBraces {
                brace: Brace::Closing,
                position: 0
            })
        );
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(count_placeholders("literal only"), 0);
        assert_eq!(count_placeholders("{}-{}"), 2);
        assert_eq!(count_placeholders("{{}}"), 0);
        assert_eq!(count_placeholders("{{{}}}"), 1);
        assert_eq!(count_placeholders("{a{b}"), 1);
        assert_eq!(count_placeholders("Iteration {}: value = {}"), 2);
    }

    #[test]
    fn test_template_accessors() {
        let template = Template::new("x = {}").unwrap();
        assert_eq!(template.as_str(), "x = {}");
        assert_eq!(template.len(), 6);
        assert!(!template.is_empty());
        assert_eq!(template.placeholder_count(), 1);
        assert!(Template::new("").unwrap().is_empty());
    }

    #[test]
    fn test_template_const() {
        const TEMPLATE: Template<'static> = Template::new_const("{{{}}}");
        assert_eq!(TEMPLATE.placeholder_count(), 1);
    }

    #[test]
    fn test_template_try_from() {
        assert!(Template::try_from("{}").is_ok());
        assert_eq!(
            Template::try_from("}").unwrap_err(),
            FormatError::UnbalancedBraces {
                brace: Brace::Closing,
                position: 0
            }
        );
    }
}
