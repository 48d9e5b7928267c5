//! Handlers that define how a captured argument is rendered.
//!
//! This module provides the core trait for implementing the rendering rule of
//! a type. The concrete rules shipped with the library live in the
//! `fastfmt::handlers` module; this crate only defines the contract the
//! type-erased vtables dispatch through.

use crate::buffer::OutputBuffer;

/// Estimate used when a handler has no better idea of its output size.
pub const DEFAULT_ESTIMATE: usize = 32;

/// Trait for implementing the rendering rule of an argument type.
///
/// Handlers are zero-sized marker types. A handler `H` implementing
/// `ArgumentHandler<T>` says: "values of type `T` can be rendered by `H`".
/// A single handler may support many types, and a single type may be
/// supported by many handlers; which pair is used is decided when the
/// argument is captured.
///
/// # Required Methods
///
/// - [`render`](ArgumentHandler::render): Appends the textual form of the
///   value to the buffer
///
/// # Optional Methods
///
/// - [`estimated_size`](ArgumentHandler::estimated_size): Returns a cheap
///   estimate of the rendered length in bytes. The default returns
///   [`DEFAULT_ESTIMATE`].
///
/// # Examples
///
/// ```
/// use fastfmt_internals::{buffer::OutputBuffer, handlers::ArgumentHandler};
///
/// struct Celsius(f32);
///
/// struct CelsiusHandler;
///
/// impl ArgumentHandler<Celsius> for CelsiusHandler {
///     fn render(value: &Celsius, buf: &mut OutputBuffer) {
///         use core::fmt::Write;
///         let _ = write!(buf, "{}°C", value.0);
///     }
///
///     fn estimated_size(_value: &Celsius) -> usize {
///         8
///     }
/// }
/// ```
pub trait ArgumentHandler<T>: 'static {
    /// Appends the textual form of `value` to `buf`.
    ///
    /// Implementations must append complete characters only and must not
    /// remove anything already in the buffer.
    fn render(value: &T, buf: &mut OutputBuffer);

    /// Returns an estimate of how many bytes [`render`] will append.
    ///
    /// The estimate is only used to pre-size the output buffer. Rendering is
    /// correct no matter how far off it is, but an estimate that is far too
    /// small costs extra reallocations.
    ///
    /// [`render`]: ArgumentHandler::render
    #[inline]
    fn estimated_size(value: &T) -> usize {
        let _ = value;
        DEFAULT_ESTIMATE
    }
}
