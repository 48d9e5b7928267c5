//! Capturing the arguments of a formatting call.
//!
//! Each argument is captured as an [`Argument`]: a borrowed handle that knows
//! how to render the value and how large the rendering will roughly be, while
//! hiding the value's concrete type from the substitution driver. Nothing is
//! copied; the caller keeps ownership of every value for the duration of the
//! call.
//!
//! The [`arguments!`](crate::arguments!) macro picks a handler for each value
//! from its static type. [`Argument::new_custom`] lets you pick one yourself.

use fastfmt_internals::RawArgument;

use crate::{OutputBuffer, handlers::ArgumentHandler};

/// Maximum number of arguments a single formatting call accepts.
pub const MAX_ARGUMENTS: usize = 16;

/// A borrowed, type-erased handle to one argument of a formatting call.
///
/// Handles are [`Copy`], two pointers wide, and tied to the lifetime of the
/// value they borrow.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Argument<'a> {
    /// The type-erased handle
    raw: RawArgument<'a>,
}

impl<'a> Argument<'a> {
    /// Captures `value`, rendering it with the handler `H`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastfmt::{Argument, OutputBuffer, handlers};
    ///
    /// let value = 0xffu32;
    /// let arg = Argument::new_custom::<u32, handlers::Integer>(&value);
    /// let mut buf = OutputBuffer::new();
    /// arg.render(&mut buf);
    /// assert_eq!(buf.as_str(), "255");
    /// ```
    #[inline]
    #[must_use]
    pub fn new_custom<T, H>(value: &'a T) -> Self
    where
        H: ArgumentHandler<T>,
    {
        Self {
            raw: RawArgument::new::<T, H>(value),
        }
    }

    /// Appends the rendered value to `buf`.
    #[inline]
    pub fn render(self, buf: &mut OutputBuffer) {
        self.raw.render(buf);
    }

    /// Estimated length of the rendered value in bytes.
    #[inline]
    #[must_use]
    pub fn estimated_size(self) -> usize {
        self.raw.estimated_size()
    }

    /// The name of the captured value's type.
    #[inline]
    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.raw.type_name()
    }
}

impl core::fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Argument")
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}

/// Sums the size estimates of a run of arguments.
#[inline]
pub(crate) fn estimate_total_size(args: &[Argument<'_>]) -> usize {
    args.iter().map(|arg| arg.estimated_size()).sum()
}

/// The ordered arguments of one formatting call.
///
/// The capacity `N` is chosen at the call site to match the number of
/// arguments and may not exceed [`MAX_ARGUMENTS`]; exceeding it is a compile
/// error.
///
/// ```compile_fail
/// let args = fastfmt::arguments!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17);
/// ```
///
/// # Examples
///
/// ```
/// let name = String::from("disk");
/// let args = fastfmt::arguments!(name, 93, '%');
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.estimate_total_size(), 4 + 14 + 1);
/// ```
#[derive(Clone, Copy)]
pub struct Arguments<'a, const N: usize> {
    /// The handles, in call order
    handles: [Argument<'a>; N],
}

impl<'a, const N: usize> Arguments<'a, N> {
    /// Wraps the handles of one call.
    #[inline]
    #[must_use]
    pub const fn new(handles: [Argument<'a>; N]) -> Self {
        const {
            assert!(N <= MAX_ARGUMENTS, "too many format arguments");
        }
        Self { handles }
    }

    /// Number of arguments.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether there are no arguments.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The argument at `index`, if there is one.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Argument<'a>> {
        self.handles.get(index).copied()
    }

    /// Iterates over the arguments in call order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Argument<'a>> + '_ {
        self.handles.iter().copied()
    }

    /// The arguments as a slice, in call order.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Argument<'a>] {
        &self.handles
    }

    /// Sum of the size estimates of all arguments.
    #[inline]
    #[must_use]
    pub fn estimate_total_size(&self) -> usize {
        estimate_total_size(&self.handles)
    }
}

impl<'a, const N: usize> core::ops::Deref for Arguments<'a, N> {
    type Target = [Argument<'a>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.handles
    }
}

impl<const N: usize> core::fmt::Debug for Arguments<'_, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.handles.iter()).finish()
    }
}
