/// Captures a list of values as the [`Arguments`](crate::Arguments) of a
/// formatting call.
///
/// Every value is borrowed, never moved, and paired with the built-in
/// [handler](crate::handlers) that matches its static type. At most
/// [`MAX_ARGUMENTS`](crate::MAX_ARGUMENTS) values may be given; more is a
/// compile error.
///
/// The values borrow temporaries that only live until the end of the
/// enclosing statement, so the result is normally passed straight to
/// [`vformat`](crate::vformat) or [`vformat_to`](crate::vformat_to).
///
/// # Examples
///
/// ```
/// use fastfmt::{Template, arguments, vformat};
///
/// let unit = String::from("ms");
/// let template = Template::new("{} {} ({})").unwrap();
/// let output = vformat(&template, &arguments!(12.5, unit, true)).unwrap();
/// assert_eq!(output, "12.5 ms (true)");
/// ```
#[macro_export]
macro_rules! arguments {
    ($($arg:expr),* $(,)?) => {
        $crate::__arguments!(@[] $($arg),*)
    };
}

// Gives every argument its own binding, then captures all of them inside a
// single match so the borrowed values outlive the returned handles.
#[doc(hidden)]
#[macro_export]
macro_rules! __arguments {
    (@[$($name:ident = $value:expr,)*]) => {
        match ($(&$value,)*) {
            ($($name,)*) => $crate::Arguments::new([$({
                #[allow(unused_imports)]
                use $crate::__private::kind::*;
                (&&&&&&$crate::__private::kind::Wrap($name)).capture()
            },)*]),
        }
    };
    (@[$($acc:tt)*] $head:expr $(, $rest:expr)*) => {
        $crate::__arguments!(@[$($acc)* value = $head,] $($rest),*)
    };
}

/// Validates a string literal as a [`Template`](crate::Template) at compile
/// time.
///
/// # Examples
///
/// ```
/// const ROW: fastfmt::Template<'static> = fastfmt::template!("{}: {}");
/// assert_eq!(ROW.placeholder_count(), 2);
/// ```
///
/// Unbalanced braces are rejected by the compiler:
///
/// ```compile_fail
/// let row = fastfmt::template!("{}: {");
/// ```
#[macro_export]
macro_rules! template {
    ($template:literal) => {
        const { $crate::Template::new_const($template) }
    };
}

/// Formats the arguments into a template literal, returning a
/// `Result<String, FormatError>`.
///
/// The template is validated at compile time. Running out of arguments is
/// reported as [`FormatError::MissingArgument`](crate::FormatError::MissingArgument).
///
/// # Examples
///
/// ```
/// let name = "world";
/// assert_eq!(fastfmt::format!("Hello, {}!", name).unwrap(), "Hello, world!");
/// assert_eq!(fastfmt::format!("{} {}", -42, 'x').unwrap(), "-42 x");
/// assert!(fastfmt::format!("{} {}", 1).is_err());
/// ```
#[macro_export]
macro_rules! format {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::vformat(&$crate::template!($template), &$crate::arguments!($($arg),*))
    };
}

/// Formats the arguments into a template literal, appending the result to an
/// [`OutputBuffer`](crate::OutputBuffer).
///
/// The buffer is left as it was if formatting fails.
///
/// # Examples
///
/// ```
/// let mut buf = fastfmt::OutputBuffer::new();
/// for i in 1..=3 {
///     fastfmt::format_to!(&mut buf, "[{}]", i).unwrap();
/// }
/// assert_eq!(buf.as_str(), "[1][2][3]");
/// ```
#[macro_export]
macro_rules! format_to {
    ($buf:expr, $template:literal $(, $arg:expr)* $(,)?) => {
        $crate::vformat_to($buf, &$crate::template!($template), &$crate::arguments!($($arg),*))
    };
}

/// Writes the values back to back to standard output.
///
/// Returns a [`std::io::Result`].
///
/// # Examples
///
/// ```
/// fastfmt::print!("total: ", 42, '\n').unwrap();
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! print {
    ($($arg:expr),* $(,)?) => {
        $crate::io::write_values(
            &mut $crate::__private::stdout().lock(),
            &$crate::arguments!($($arg),*),
            ::core::option::Option::None,
            false,
        )
    };
}

/// Writes the values back to back to standard output, followed by a newline.
///
/// # Examples
///
/// ```
/// fastfmt::println!("done in ", 3, "ms").unwrap();
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! println {
    ($($arg:expr),* $(,)?) => {
        $crate::io::write_values(
            &mut $crate::__private::stdout().lock(),
            &$crate::arguments!($($arg),*),
            ::core::option::Option::None,
            true,
        )
    };
}

/// Writes the values to standard output separated by single spaces.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! print_spaced {
    ($($arg:expr),* $(,)?) => {
        $crate::io::write_values(
            &mut $crate::__private::stdout().lock(),
            &$crate::arguments!($($arg),*),
            ::core::option::Option::Some(" "),
            false,
        )
    };
}

/// Writes the values to standard output separated by single spaces, followed
/// by a newline.
///
/// # Examples
///
/// ```
/// fastfmt::println_spaced!(1, 2.5, "three").unwrap();
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! println_spaced {
    ($($arg:expr),* $(,)?) => {
        $crate::io::write_values(
            &mut $crate::__private::stdout().lock(),
            &$crate::arguments!($($arg),*),
            ::core::option::Option::Some(" "),
            true,
        )
    };
}

/// Writes the values back to back to a [`std::io::Write`] sink.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// fastfmt::fprint!(&mut out, "x=", 1).unwrap();
/// assert_eq!(out, b"x=1");
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprint {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::write_values(
            $sink,
            &$crate::arguments!($($arg),*),
            ::core::option::Option::None,
            false,
        )
    };
}

/// Writes the values back to back to a [`std::io::Write`] sink, followed by a
/// newline.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprintln {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::write_values(
            $sink,
            &$crate::arguments!($($arg),*),
            ::core::option::Option::None,
            true,
        )
    };
}

/// Writes the values to a [`std::io::Write`] sink separated by single spaces.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprint_spaced {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::write_values(
            $sink,
            &$crate::arguments!($($arg),*),
            ::core::option::Option::Some(" "),
            false,
        )
    };
}

/// Writes the values to a [`std::io::Write`] sink separated by single spaces,
/// followed by a newline.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// fastfmt::fprintln_spaced!(&mut out, 'a', "b", String::from("c")).unwrap();
/// assert_eq!(out, b"a b c\n");
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprintln_spaced {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::io::write_values(
            $sink,
            &$crate::arguments!($($arg),*),
            ::core::option::Option::Some(" "),
            true,
        )
    };
}

/// Formats the arguments into a template literal and writes the result to
/// standard output.
///
/// Fails with a [`PrintError`] if formatting or writing fails. Nothing is
/// written if formatting fails.
///
/// [`PrintError`]: crate::io::PrintError
///
/// # Examples
///
/// ```
/// fastfmt::print_fmt!("{} of {}\n", 1, 2).unwrap();
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! print_fmt {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::io::write_formatted(
            &mut $crate::__private::stdout().lock(),
            &$crate::template!($template),
            &$crate::arguments!($($arg),*),
            false,
        )
    };
}

/// Formats the arguments into a template literal and writes the result to
/// standard output, followed by a newline.
///
/// # Examples
///
/// ```
/// fastfmt::println_fmt!("Iteration {}: value = {}", 7, 14).unwrap();
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! println_fmt {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::io::write_formatted(
            &mut $crate::__private::stdout().lock(),
            &$crate::template!($template),
            &$crate::arguments!($($arg),*),
            true,
        )
    };
}

/// Formats the arguments into a template literal and writes the result to a
/// [`std::io::Write`] sink.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprint_fmt {
    ($sink:expr, $template:literal $(, $arg:expr)* $(,)?) => {
        $crate::io::write_formatted(
            $sink,
            &$crate::template!($template),
            &$crate::arguments!($($arg),*),
            false,
        )
    };
}

/// Formats the arguments into a template literal and writes the result to a
/// [`std::io::Write`] sink, followed by a newline.
///
/// # Examples
///
/// ```
/// use fastfmt::{FormatError, io::PrintError};
///
/// let mut out = Vec::new();
/// fastfmt::fprintln_fmt!(&mut out, "{} + {} = {}", 2, 3, 5).unwrap();
/// assert_eq!(out, b"2 + 3 = 5\n");
///
/// let error = fastfmt::fprintln_fmt!(&mut out, "{} {}", 1).unwrap_err();
/// assert!(matches!(
///     error,
///     PrintError::Format(FormatError::MissingArgument { index: 1 })
/// ));
/// assert_eq!(out, b"2 + 3 = 5\n");
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprintln_fmt {
    ($sink:expr, $template:literal $(, $arg:expr)* $(,)?) => {
        $crate::io::write_formatted(
            $sink,
            &$crate::template!($template),
            &$crate::arguments!($($arg),*),
            true,
        )
    };
}
