//! Type-erased argument handle.
//!
//! This module encapsulates the `ptr` and `vtable` fields of [`RawArgument`],
//! ensuring they are only visible within this module. This visibility
//! restriction guarantees the safety invariant: **the pointer always comes
//! from a `&'a T` and the vtable was created for that same `T`**.
//!
//! # Safety Invariant
//!
//! Since the fields can only be set via [`RawArgument::new`] (which takes
//! both from the same generic instantiation), and cannot be modified
//! afterward, the pointer and the vtable stay in sync for the whole lifetime
//! of the handle. The `'a` lifetime keeps the original borrow alive, so the
//! pointee cannot be moved, mutated or dropped while the handle exists.
//!
//! # Type Erasure
//!
//! The concrete type parameter `T` is erased by casting the pointer to
//! [`Erased`]. The vtable provides the operations needed to render the value
//! without knowing its type.

use core::{marker::PhantomData, ptr::NonNull};

use crate::{
    argument::vtable::ArgumentVtable, buffer::OutputBuffer, handlers::ArgumentHandler,
    util::Erased,
};

/// A borrowed, type-erased handle to one argument of a formatting call.
///
/// The handle is two pointers wide and [`Copy`]. It is neither [`Send`] nor
/// [`Sync`], since the value it points to need not be.
#[derive(Clone, Copy)]
pub struct RawArgument<'a> {
    /// Pointer to the borrowed argument value
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer was created from a `&'a T` for the `T` that `vtable` was
    ///    created for.
    /// 2. The pointee stays borrowed, and therefore initialized and
    ///    unmodified, for the lifetime `'a`.
    ptr: NonNull<Erased>,
    /// The vtable of the argument type
    vtable: &'static ArgumentVtable,
    /// Marker for the borrow of the original value
    _marker: PhantomData<&'a ()>,
}

impl<'a> RawArgument<'a> {
    /// Creates a new [`RawArgument`] borrowing `value` and rendering it with
    /// the handler `H`.
    #[inline]
    #[must_use]
    pub fn new<T, H>(value: &'a T) -> Self
    where
        H: ArgumentHandler<T>,
    {
        Self {
            ptr: NonNull::from(value).cast::<Erased>(),
            vtable: ArgumentVtable::new::<T, H>(),
            _marker: PhantomData,
        }
    }

    /// Appends the rendered value to `buf` using the [`ArgumentHandler::render`]
    /// method of the handler used to create this handle.
    #[inline]
    pub fn render(self, buf: &mut OutputBuffer) {
        // SAFETY:
        // 1. `self.ptr` points to a live `T` for the lifetime `'a`, and `self.vtable`
        //    was created for that same `T`, as guaranteed by `RawArgument::new`.
        unsafe { self.vtable.render(self.ptr, buf) }
    }

    /// Estimates the rendered size in bytes using the
    /// [`ArgumentHandler::estimated_size`] method of the handler used to
    /// create this handle.
    #[inline]
    #[must_use]
    pub fn estimated_size(self) -> usize {
        // SAFETY:
        // 1. `self.ptr` points to a live `T` for the lifetime `'a`, and `self.vtable`
        //    was created for that same `T`, as guaranteed by `RawArgument::new`.
        unsafe { self.vtable.estimated_size(self.ptr) }
    }

    /// The name of the argument type, as reported by
    /// [`core::any::type_name`].
    #[inline]
    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.vtable.type_name()
    }
}

impl core::fmt::Debug for RawArgument<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawArgument")
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    struct HandlerI32;
    impl ArgumentHandler<i32> for HandlerI32 {
        fn render(value: &i32, buf: &mut OutputBuffer) {
            use core::fmt::Write;
            let _ = write!(buf, "{value}");
        }
    }

    struct HandlerString;
    impl ArgumentHandler<String> for HandlerString {
        fn render(value: &String, buf: &mut OutputBuffer) {
            buf.append(value);
        }

        fn estimated_size(value: &String) -> usize {
            value.len()
        }
    }

    #[test]
    fn test_raw_argument_size() {
        assert_eq!(
            core::mem::size_of::<RawArgument<'_>>(),
            2 * core::mem::size_of::<usize>()
        );
        assert_eq!(
            core::mem::size_of::<Option<RawArgument<'_>>>(),
            2 * core::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_raw_argument_render() {
        let number = 42;
        let text = String::from("text");
        let int_arg = RawArgument::new::<i32, HandlerI32>(&number);
        let string_arg = RawArgument::new::<String, HandlerString>(&text);

        let mut buf = OutputBuffer::with_capacity(8);
        int_arg.render(&mut buf);
        buf.append_char(' ');
        string_arg.render(&mut buf);
        assert_eq!(buf.as_str(), "42 text");

        // Rendering is repeatable, the handle is Copy
        int_arg.render(&mut buf);
        assert_eq!(buf.as_str(), "42 text42");
    }

    #[test]
    fn test_raw_argument_estimates() {
        let number = 42;
        let text = String::from("twelve chars");
        let int_arg = RawArgument::new::<i32, HandlerI32>(&number);
        let string_arg = RawArgument::new::<String, HandlerString>(&text);

        assert_eq!(
            int_arg.estimated_size(),
            crate::handlers::DEFAULT_ESTIMATE
        );
        assert_eq!(string_arg.estimated_size(), 12);
    }

    #[test]
    fn test_raw_argument_vtables_differ() {
        let number = 1;
        let text = String::new();
        let int_arg = RawArgument::new::<i32, HandlerI32>(&number);
        let string_arg = RawArgument::new::<String, HandlerString>(&text);

        assert!(!core::ptr::eq(int_arg.vtable, string_arg.vtable));
        assert_eq!(int_arg.type_name(), "i32");
        assert_eq!(string_arg.type_name(), "alloc::string::String");
    }

    #[test]
    fn test_raw_argument_debug() {
        use alloc::format;

        let number = 5;
        let arg = RawArgument::new::<i32, HandlerI32>(&number);
        assert_eq!(format!("{arg:?}"), "RawArgument { type_name: \"i32\", .. }");
    }
}
