//! Writing formatted output to standard output or any [`std::io::Write`]
//! sink.
//!
//! Each call renders everything into one pre-sized [`OutputBuffer`] first
//! and then hands it to the sink with a single `write_all`, so a sink never
//! sees partial output from a call that failed to format.
//!
//! The print macros ([`println_fmt!`](crate::println_fmt!),
//! [`fprintln_spaced!`](crate::fprintln_spaced!) and friends) are thin
//! wrappers around [`write_values`] and [`write_formatted`].

use std::io::{self, Write};

use crate::{Argument, FormatError, OutputBuffer, Template, arguments::estimate_total_size};

/// Writes `args` to `sink` one after another, optionally separated by
/// `separator` and followed by a newline.
///
/// # Errors
///
/// Returns any error reported by the sink.
///
/// # Examples
///
/// ```
/// use fastfmt::{arguments, io::write_values};
///
/// let mut out = Vec::new();
/// write_values(&mut out, &arguments!("a", 'b', 3), Some(", "), true).unwrap();
/// assert_eq!(out, b"a, b, 3\n");
/// ```
pub fn write_values<W: Write + ?Sized>(
    sink: &mut W,
    args: &[Argument<'_>],
    separator: Option<&str>,
    newline: bool,
) -> io::Result<()> {
    let separator = separator.unwrap_or("");
    let mut buf = OutputBuffer::with_capacity(
        estimate_total_size(args) + separator.len() * args.len() + usize::from(newline),
    );

    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            buf.append(separator);
        }
        arg.render(&mut buf);
    }
    if newline {
        buf.append_char('\n');
    }

    sink.write_all(buf.as_str().as_bytes())
}

/// Formats `args` into `template` and writes the result to `sink`,
/// optionally followed by a newline.
///
/// # Errors
///
/// - [`PrintError::Format`] if formatting fails. Nothing is written.
/// - [`PrintError::Io`] if the sink reports an error.
pub fn write_formatted<W: Write + ?Sized>(
    sink: &mut W,
    template: &Template<'_>,
    args: &[Argument<'_>],
    newline: bool,
) -> Result<(), PrintError> {
    let buf = render_formatted(template, args, newline)?;
    sink.write_all(buf.as_str().as_bytes())?;
    Ok(())
}

/// Fills `template` into a buffer reserved once for the text, the argument
/// estimates and the trailing newline.
fn render_formatted(
    template: &Template<'_>,
    args: &[Argument<'_>],
    newline: bool,
) -> Result<OutputBuffer, FormatError> {
    let mut buf = OutputBuffer::with_capacity(0);
    buf.reserve(reservation(template, args, newline));
    crate::vformat_to(&mut buf, template, args)?;
    if newline {
        buf.append_char('\n');
    }
    Ok(buf)
}

#[inline]
fn reservation(template: &Template<'_>, args: &[Argument<'_>], newline: bool) -> usize {
    template.len() + estimate_total_size(args) + usize::from(newline)
}

/// Error returned by the template-based print macros.
#[derive(Debug)]
pub enum PrintError {
    /// The template could not be filled with the given arguments
    Format(FormatError),
    /// The sink failed to accept the output
    Io(io::Error),
}

impl core::fmt::Display for PrintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Format(error) => write!(f, "formatting failed: {error}"),
            Self::Io(error) => write!(f, "writing output failed: {error}"),
        }
    }
}

impl core::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Format(error) => Some(error),
            Self::Io(error) => Some(error),
        }
    }
}

impl From<FormatError> for PrintError {
    fn from(error: FormatError) -> Self {
        Self::Format(error)
    }
}

impl From<io::Error> for PrintError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};
    use core::error::Error;

    use super::*;

    /// A sink that refuses every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_values_back_to_back() {
        let mut out = Vec::new();
        write_values(&mut out, &arguments!("x=", 1, ',', true), None, false).unwrap();
        assert_eq!(out, b"x=1,true");
    }

    #[test]
    fn test_write_values_spaced() {
        let mut out = Vec::new();
        write_values(&mut out, &arguments!('a', "b", 'c'), Some(" "), true).unwrap();
        assert_eq!(out, b"a b c\n");
    }

    #[test]
    fn test_write_values_empty() {
        let mut out = Vec::new();
        write_values(&mut out, &[], Some(" "), true).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_write_formatted() {
        let mut out = Vec::new();
        let template = Template::new("{} + {} = {}").unwrap();
        write_formatted(&mut out, &template, &arguments!(2, 3, 5), true).unwrap();
        assert_eq!(out, b"2 + 3 = 5\n");
    }

    #[test]
    fn test_newline_fits_the_single_reservation() {
        let template = Template::new("{}: {}").unwrap();
        let args = arguments!("total", 12345u16);
        let expected = reservation(&template, &args, true);

        let buf = render_formatted(&template, &args, true).unwrap();
        assert_eq!(buf.as_str(), "total: 12345\n");
        assert!(buf.len() <= expected);

        // Nothing grew the buffer past the one up-front reservation
        let mut reserved = OutputBuffer::with_capacity(0);
        reserved.reserve(expected);
        assert_eq!(buf.capacity(), reserved.capacity());
    }

    #[test]
    fn test_write_formatted_writes_nothing_on_error() {
        let mut out = Vec::new();
        let template = Template::new("{} {}").unwrap();
        let error = write_formatted(&mut out, &template, &arguments!(1), true).unwrap_err();
        assert!(matches!(
            error,
            PrintError::Format(FormatError::MissingArgument { index: 1 })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_io_error_is_reported() {
        let template = Template::new("{}").unwrap();
        let error = write_formatted(&mut Broken, &template, &arguments!(1), false).unwrap_err();
        assert!(matches!(error, PrintError::Io(_)));
        assert_eq!(error.to_string(), "writing output failed: sink closed");
        assert_eq!(error.source().unwrap().to_string(), "sink closed");

        assert!(write_values(&mut Broken, &arguments!(1), None, false).is_err());
    }
}
