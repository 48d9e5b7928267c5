//! Handlers that control how each argument type is rendered.
//!
//! Every value substituted into a template is rendered by exactly one
//! handler. The [`format!`](crate::format!) family of macros selects the
//! handler from the static type of each argument when the call is compiled;
//! there is no runtime registry.
//!
//! # Built-in Handlers
//!
//! | Handler       | Types                                | Output                                   |
//! |---------------|--------------------------------------|------------------------------------------|
//! | [`Bool`]      | `bool`                               | `true` or `false`                        |
//! | [`Char`]      | `char`                               | the character itself                     |
//! | [`Integer`]   | every primitive integer type         | minimal decimal digits, `-` if negative  |
//! | [`Float`]     | `f32`, `f64`                         | shortest round-trip decimal              |
//! | [`Str`]       | anything that is [`AsRef<str>`]      | the text verbatim, no quoting            |
//! | [`Display`]   | any other [`core::fmt::Display`] type | the type's `Display` output             |
//!
//! When more than one handler could apply, the macros prefer them in the
//! order of the table above. A type that has none of these capabilities does
//! not compile as a format argument.
//!
//! # Floating Point Output
//!
//! Floats are rendered through their [`core::fmt::Display`] implementation,
//! which produces the shortest decimal that round-trips to the same value:
//! `1.5` renders as `1.5`, `1.0` as `1`, `1e21` as `1000000000000000000000`,
//! and the special values as `NaN`, `inf` and `-inf`. There is no precision
//! control.
//!
//! # Custom Handlers
//!
//! Implement [`ArgumentHandler`] on your own marker type and capture the
//! argument with [`Argument::new_custom`](crate::Argument::new_custom):
//!
//! ```
//! use fastfmt::{
//!     Argument, OutputBuffer, Template,
//!     handlers::ArgumentHandler,
//!     vformat,
//! };
//!
//! struct Upper;
//!
//! impl ArgumentHandler<&str> for Upper {
//!     fn render(value: &&str, buf: &mut OutputBuffer) {
//!         for ch in value.chars() {
//!             buf.append_char(ch.to_ascii_uppercase());
//!         }
//!     }
//!
//!     fn estimated_size(value: &&str) -> usize {
//!         value.len()
//!     }
//! }
//!
//! let name = "world";
//! let template = Template::new("hello {}").unwrap();
//! let output = vformat(&template, &[Argument::new_custom::<_, Upper>(&name)]).unwrap();
//! assert_eq!(output, "hello WORLD");
//! ```

use core::fmt::Write;

pub use fastfmt_internals::handlers::{ArgumentHandler, DEFAULT_ESTIMATE};

use crate::OutputBuffer;

/// Handler for `bool`: renders `true` or `false`.
///
/// # Example
///
/// ```
/// assert_eq!(fastfmt::format!("{}/{}", true, false).unwrap(), "true/false");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Bool;

impl ArgumentHandler<bool> for Bool {
    #[inline]
    fn render(value: &bool, buf: &mut OutputBuffer) {
        buf.append(if *value { "true" } else { "false" });
    }

    #[inline]
    fn estimated_size(value: &bool) -> usize {
        if *value { 4 } else { 5 }
    }
}

/// Handler for `char`: renders the character verbatim, without escaping.
#[derive(Copy, Clone, Debug)]
pub struct Char;

impl ArgumentHandler<char> for Char {
    #[inline]
    fn render(value: &char, buf: &mut OutputBuffer) {
        buf.append_char(*value);
    }

    #[inline]
    fn estimated_size(value: &char) -> usize {
        value.len_utf8()
    }
}

/// Handler for the primitive integer types.
///
/// Renders the minimal decimal representation: no leading zeros, no grouping
/// separators, and a leading `-` for negative values.
///
/// # Example
///
/// ```
/// assert_eq!(fastfmt::format!("{}", i64::MIN).unwrap(), "-9223372036854775808");
/// assert_eq!(fastfmt::format!("{}", 0u8).unwrap(), "0");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Integer;

impl<T: Integral> ArgumentHandler<T> for Integer {
    #[inline]
    fn render(value: &T, buf: &mut OutputBuffer) {
        let mut digits = [0u8; MAX_INTEGER_LEN];
        let start = value.write_decimal(&mut digits);
        // SAFETY: `write_decimal` only writes ASCII digits and `-` into
        // `digits[start..]`, which is therefore valid UTF-8.
        let text = unsafe { core::str::from_utf8_unchecked(&digits[start..]) };
        buf.append(text);
    }

    #[inline]
    fn estimated_size(_value: &T) -> usize {
        T::ESTIMATE
    }
}

/// Handler for `f32` and `f64`.
///
/// See the [module documentation](self#floating-point-output) for the exact
/// output format.
#[derive(Copy, Clone, Debug)]
pub struct Float;

/// Size estimate for either float type.
const FLOAT_ESTIMATE: usize = 24;

impl ArgumentHandler<f32> for Float {
    #[inline]
    fn render(value: &f32, buf: &mut OutputBuffer) {
        let _ = write!(buf, "{value}");
    }

    #[inline]
    fn estimated_size(_value: &f32) -> usize {
        FLOAT_ESTIMATE
    }
}

impl ArgumentHandler<f64> for Float {
    #[inline]
    fn render(value: &f64, buf: &mut OutputBuffer) {
        let _ = write!(buf, "{value}");
    }

    #[inline]
    fn estimated_size(_value: &f64) -> usize {
        FLOAT_ESTIMATE
    }
}

/// Handler for string-like values: `&str`, `String`, `Cow<str>`,
/// `Box<str>`, and anything else implementing [`AsRef<str>`].
///
/// The text is appended as is, without quoting or escaping, and its exact
/// length is used as the size estimate.
#[derive(Copy, Clone, Debug)]
pub struct Str;

impl<T: AsRef<str>> ArgumentHandler<T> for Str {
    #[inline]
    fn render(value: &T, buf: &mut OutputBuffer) {
        buf.append(value.as_ref());
    }

    #[inline]
    fn estimated_size(value: &T) -> usize {
        value.as_ref().len()
    }
}

/// Fallback handler for any type implementing [`core::fmt::Display`].
///
/// The value's `Display` output is written straight into the output buffer.
/// Errors returned by a `Display` implementation end the rendering of that
/// value; whatever it wrote before failing is kept.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::new(127, 0, 0, 1);
/// assert_eq!(fastfmt::format!("listening on {}", addr).unwrap(), "listening on 127.0.0.1");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Display;

impl<T: core::fmt::Display> ArgumentHandler<T> for Display {
    /// Writes the value's `Display` output into `buf`.
    ///
    /// A [`core::fmt::Error`] from the value's `Display` implementation is
    /// discarded: rendering of this value stops, the text written before the
    /// error stays in `buf`, and the formatting call still succeeds.
    #[inline]
    fn render(value: &T, buf: &mut OutputBuffer) {
        let _ = write!(buf, "{value}");
    }
}

/// Longest rendering of any primitive integer: the 39 digits of `u128::MAX`,
/// or the 39 digits and sign of `i128::MIN`.
const MAX_INTEGER_LEN: usize = 40;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types rendered by the [`Integer`] handler.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Integral: Copy + sealed::Sealed {
    /// Size estimate for values of this type: three bytes per byte of
    /// storage, plus two for the sign of signed types.
    const ESTIMATE: usize;

    /// Writes the decimal digits of `self` to the end of `digits` and returns
    /// the index of the first byte written.
    #[doc(hidden)]
    fn write_decimal(self, digits: &mut [u8; MAX_INTEGER_LEN]) -> usize;
}

/// Writes the digits of an unsigned value right-aligned into a buffer,
/// evaluating to the index of the first digit.
macro_rules! write_unsigned {
    ($value:expr, $digits:expr) => {{
        let mut value = $value;
        let mut start = $digits.len();
        loop {
            start -= 1;
            $digits[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break start;
            }
        }
    }};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integral for $ty {
                const ESTIMATE: usize = core::mem::size_of::<$ty>() * 3;

                #[inline]
                fn write_decimal(self, digits: &mut [u8; MAX_INTEGER_LEN]) -> usize {
                    write_unsigned!(self, digits)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integral for $ty {
                const ESTIMATE: usize = core::mem::size_of::<$ty>() * 3 + 2;

                #[inline]
                fn write_decimal(self, digits: &mut [u8; MAX_INTEGER_LEN]) -> usize {
                    let mut start = write_unsigned!(self.unsigned_abs(), digits);
                    if self < 0 {
                        start -= 1;
                        digits[start] = b'-';
                    }
                    start
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);
