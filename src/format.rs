//! Placeholder substitution.
//!
//! The driver makes one left-to-right pass over the template. Literal text is
//! copied in spans, doubled braces collapse to a single brace, and each
//! placeholder is replaced by the next argument in call order. Arguments left
//! over once the template ends are ignored.

use alloc::string::String;

use crate::{
    Argument, FormatError, MAX_ARGUMENTS, OutputBuffer, Template, arguments::estimate_total_size,
};

/// Formats `args` into `template`, returning the result as a new string.
///
/// The output buffer is reserved once, from the template length plus the
/// arguments' size estimates.
///
/// # Errors
///
/// - [`FormatError::TooManyArguments`] if more than [`MAX_ARGUMENTS`]
///   arguments are given.
/// - [`FormatError::MissingArgument`] if the template has more placeholders
///   than there are arguments.
/// - [`FormatError::UnterminatedPlaceholder`] if a `{` is never closed.
/// - [`FormatError::UnmatchedClosingBrace`] for a stray, undoubled `}`.
///
/// # Examples
///
/// ```
/// use fastfmt::{FormatError, Template, arguments, vformat};
///
/// let template = Template::new("{} + {} = {}").unwrap();
/// assert_eq!(vformat(&template, &arguments!(2, 3, 5)).unwrap(), "2 + 3 = 5");
/// assert_eq!(
///     vformat(&template, &arguments!(2, 3)),
///     Err(FormatError::MissingArgument { index: 2 })
/// );
/// ```
pub fn vformat(template: &Template<'_>, args: &[Argument<'_>]) -> Result<String, FormatError> {
    let mut buf = OutputBuffer::with_capacity(0);
    vformat_to(&mut buf, template, args)?;
    Ok(buf.into_string())
}

/// Formats `args` into `template`, appending the result to `buf`.
///
/// On failure `buf` is restored to the length it had before the call, so no
/// partial output is left behind.
///
/// # Errors
///
/// Same as [`vformat`].
///
/// # Examples
///
/// ```
/// use fastfmt::{OutputBuffer, Template, arguments, vformat_to};
///
/// let mut buf = OutputBuffer::new();
/// buf.append("> ");
/// vformat_to(&mut buf, &Template::new("{}!").unwrap(), &arguments!("ready")).unwrap();
/// assert_eq!(buf.as_str(), "> ready!");
///
/// assert!(vformat_to(&mut buf, &Template::new("{}").unwrap(), &[]).is_err());
/// assert_eq!(buf.as_str(), "> ready!");
/// ```
pub fn vformat_to(
    buf: &mut OutputBuffer,
    template: &Template<'_>,
    args: &[Argument<'_>],
) -> Result<(), FormatError> {
    let result = check_capacity(args).and_then(|()| {
        let start = buf.len();
        buf.reserve(template.len() + estimate_total_size(args));
        substitute(buf, template.as_str(), args).inspect_err(|_| buf.truncate(start))
    });

    #[cfg(feature = "tracing")]
    if let Err(error) = &result {
        tracing::debug!(
            template = template.as_str(),
            arguments = args.len(),
            %error,
            "formatting failed"
        );
    }

    result
}

/// Rejects argument lists longer than [`MAX_ARGUMENTS`].
#[inline]
fn check_capacity(args: &[Argument<'_>]) -> Result<(), FormatError> {
    if args.len() > MAX_ARGUMENTS {
        return Err(FormatError::TooManyArguments {
            count: args.len(),
            capacity: MAX_ARGUMENTS,
        });
    }
    Ok(())
}

/// Runs the substitution state machine over `template`.
///
/// Braces are ASCII, so every index at which one is found is a `char`
/// boundary and the literal spans between them can be sliced directly.
fn substitute(
    buf: &mut OutputBuffer,
    template: &str,
    args: &[Argument<'_>],
) -> Result<(), FormatError> {
    let bytes = template.as_bytes();
    let mut next_arg = 0;
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let brace = bytes[pos];
        if brace != b'{' && brace != b'}' {
            pos += 1;
            continue;
        }

        buf.append(&template[literal_start..pos]);

        if bytes.get(pos + 1) == Some(&brace) {
            buf.append_char(char::from(brace));
            pos += 2;
            literal_start = pos;
            continue;
        }

        if brace == b'}' {
            return Err(FormatError::UnmatchedClosingBrace { position: pos });
        }

        let arg = args
            .get(next_arg)
            .ok_or(FormatError::MissingArgument { index: next_arg })?;
        arg.render(buf);
        next_arg += 1;

        // Anything up to the closing brace is reserved for field specs.
        let open = pos;
        pos = match bytes[pos + 1..].iter().position(|&b| b == b'}') {
            Some(offset) => open + 1 + offset + 1,
            None => return Err(FormatError::UnterminatedPlaceholder { position: open }),
        };
        literal_start = pos;
    }

    buf.append(&template[literal_start..]);
    Ok(())
}
