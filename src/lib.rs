#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fast, type-safe, allocation-conscious positional text formatting.
//!
//! ## Overview
//!
//! fastfmt substitutes values into templates like `"{} + {} = {}"`. Templates
//! are checked for balanced braces when they are introduced, which for
//! literals means at compile time. Each argument is captured by reference
//! together with a rendering rule chosen from its static type, and the output
//! buffer is sized once from the template and the arguments' size estimates
//! before anything is written.
//!
//! ## Quick Example
//!
//! ```
//! let sum = fastfmt::format!("{} + {} = {}", 2, 3, 5).unwrap();
//! assert_eq!(sum, "2 + 3 = 5");
//!
//! let line = fastfmt::format!("Iteration {}: value = {}", 7, 14).unwrap();
//! assert_eq!(line, "Iteration 7: value = 14");
//!
//! // Doubled braces are literal braces
//! assert_eq!(fastfmt::format!("{{{}}}", 5).unwrap(), "{5}");
//! ```
//!
//! A malformed literal template does not compile:
//!
//! ```compile_fail
//! let _ = fastfmt::format!("{abc", 1);
//! ```
//!
//! Running out of arguments is reported when the call runs:
//!
//! ```
//! use fastfmt::FormatError;
//!
//! assert_eq!(
//!     fastfmt::format!("{}-{}", 1),
//!     Err(FormatError::MissingArgument { index: 1 })
//! );
//! ```
//!
//! ## Template Syntax
//!
//! - `{}` is replaced by the next argument, strictly left to right.
//! - `{{` and `}}` are a literal `{` and `}`.
//! - Anything between `{` and `}` is accepted and ignored.
//! - Arguments beyond the number of placeholders are ignored.
//!
//! There are no width, alignment, precision, named or indexed placeholders.
//!
//! ## Core Concepts
//!
//! - A [`Template`] is text that has passed [`validate`].
//! - An [`Argument`] is a borrowed, type-erased handle to one value, paired
//!   with the [handler](handlers) that renders it. [`Arguments`] holds the
//!   handles of one call, at most [`MAX_ARGUMENTS`] of them.
//! - An [`OutputBuffer`] accumulates the result.
//! - [`vformat`] and [`vformat_to`] drive the substitution. The
//!   [`format!`], [`format_to!`] and [`arguments!`] macros put the pieces
//!   together at the call site.
//!
//! For implementation details, see the [`fastfmt-internals`] crate.
//!
//! [`fastfmt-internals`]: fastfmt_internals
//!
//! ## Printing and Reading
//!
//! With the `std` feature (enabled by default) the crate also provides
//! print macros that write to standard output or any [`std::io::Write`]
//! sink, such as [`println_fmt!`] and [`println_spaced!`], a whitespace
//! token [`Scanner`](input::Scanner) for reading input, and a
//! [`Stopwatch`].
//!
//! ## Features
//!
//! - `std` (default): the [`io`] and [`input`] modules, the print macros, and
//!   [`Stopwatch`].
//! - `tracing`: emits a `debug` event through the [`tracing`] crate whenever
//!   a template is rejected at runtime or a formatting call fails.
//!
//! [`tracing`]: https://docs.rs/tracing

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod handlers;
pub mod prelude;

mod arguments;
mod error;
mod format;
mod template;

#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
mod stopwatch;

pub use fastfmt_internals::buffer::{DEFAULT_CAPACITY, OutputBuffer};

pub use self::{
    arguments::{Argument, Arguments, MAX_ARGUMENTS},
    error::{Brace, FormatError},
    format::{vformat, vformat_to},
    template::{Template, validate},
};
#[cfg(feature = "std")]
pub use self::stopwatch::Stopwatch;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "std")]
    #[doc(hidden)]
    pub use std::io::stdout;

    /// Selects the handler for each macro argument from its static type.
    ///
    /// The macros call `(&&&&&&Wrap(value)).capture()`. Method resolution
    /// strips one reference per step and stops at the first trait whose impl
    /// applies, so the traits below are tried from the most to the least
    /// specific handler.
    pub mod kind {
        use crate::{Argument, handlers};

        #[doc(hidden)]
        pub struct Wrap<'a, T>(pub &'a T);

        #[doc(hidden)]
        pub trait BoolKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> BoolKind<'a> for &&&&&Wrap<'a, T>
        where
            handlers::Bool: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Bool>(self.0)
            }
        }

        #[doc(hidden)]
        pub trait CharKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> CharKind<'a> for &&&&Wrap<'a, T>
        where
            handlers::Char: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Char>(self.0)
            }
        }

        #[doc(hidden)]
        pub trait IntegerKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> IntegerKind<'a> for &&&Wrap<'a, T>
        where
            handlers::Integer: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Integer>(self.0)
            }
        }

        #[doc(hidden)]
        pub trait FloatKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> FloatKind<'a> for &&Wrap<'a, T>
        where
            handlers::Float: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Float>(self.0)
            }
        }

        #[doc(hidden)]
        pub trait StrKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> StrKind<'a> for &Wrap<'a, T>
        where
            handlers::Str: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Str>(self.0)
            }
        }

        #[doc(hidden)]
        pub trait DisplayKind<'a> {
            fn capture(&self) -> Argument<'a>;
        }

        impl<'a, T> DisplayKind<'a> for Wrap<'a, T>
        where
            handlers::Display: handlers::ArgumentHandler<T>,
        {
            #[inline(always)]
            fn capture(&self) -> Argument<'a> {
                Argument::new_custom::<T, handlers::Display>(self.0)
            }
        }

    }
}
