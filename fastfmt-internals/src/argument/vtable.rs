//! Vtable for type-erased argument operations.
//!
//! This module contains the [`ArgumentVtable`] which enables calling handler
//! methods on arguments when their concrete type `T` and handler type `H`
//! have been erased. The vtable stores function pointers that dispatch to the
//! correct typed implementations.
//!
//! This module encapsulates the fields of [`ArgumentVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's type parameters must match the actual type of
//! the value the accompanying pointer points to**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created as `&'static`
//! references via [`ArgumentVtable::new`], which pairs the function pointers
//! with specific types `T` and `H` at compile time.

use core::ptr::NonNull;

use crate::{buffer::OutputBuffer, handlers::ArgumentHandler, util::Erased};

/// Vtable for type-erased argument operations.
///
/// # Safety Invariant
///
/// The fields `render` and `estimated_size` are guaranteed to point to the
/// functions defined below instantiated with the argument type `T` and
/// handler type `H` that were used to create this [`ArgumentVtable`].
pub(crate) struct ArgumentVtable {
    /// Gets the name of the argument type that was used to create this
    /// [`ArgumentVtable`].
    type_name: fn() -> &'static str,
    /// Renders the pointed-to value using the `render` method on the handler.
    render: unsafe fn(NonNull<Erased>, &mut OutputBuffer),
    /// Estimates the rendered size of the pointed-to value using the
    /// `estimated_size` method on the handler.
    estimated_size: unsafe fn(NonNull<Erased>) -> usize,
}

impl ArgumentVtable {
    /// Creates a new [`ArgumentVtable`] for the argument type `T` and the
    /// handler type `H`.
    pub(super) const fn new<T, H: ArgumentHandler<T>>() -> &'static Self {
        const {
            &Self {
                type_name: core::any::type_name::<T>,
                render: render::<T, H>,
                estimated_size: estimated_size::<T, H>,
            }
        }
    }

    /// Gets the name of the argument type that was used to create this
    /// [`ArgumentVtable`].
    #[inline]
    pub(super) fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Renders the value behind `ptr` using the [`H::render`] function used
    /// when creating this [`ArgumentVtable`].
    ///
    /// [`H::render`]: ArgumentHandler::render
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live, initialized value of the type `T` this
    ///    [`ArgumentVtable`] was created for.
    #[inline]
    pub(super) unsafe fn render(&self, ptr: NonNull<Erased>, buf: &mut OutputBuffer) {
        // SAFETY: We know that `self.render` points to the function `render::<T, H>`
        // below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.render)(ptr, buf) }
    }

    /// Estimates the rendered size of the value behind `ptr` using the
    /// [`H::estimated_size`] function used when creating this
    /// [`ArgumentVtable`].
    ///
    /// [`H::estimated_size`]: ArgumentHandler::estimated_size
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live, initialized value of the type `T` this
    ///    [`ArgumentVtable`] was created for.
    #[inline]
    pub(super) unsafe fn estimated_size(&self, ptr: NonNull<Erased>) -> usize {
        // SAFETY: We know that `self.estimated_size` points to the function
        // `estimated_size::<T, H>` below. That function's safety requirements are
        // upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.estimated_size)(ptr) }
    }
}

/// Renders a value using its handler's render implementation.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to a live, initialized value of type `T`
unsafe fn render<T, H: ArgumentHandler<T>>(ptr: NonNull<Erased>, buf: &mut OutputBuffer) {
    // SAFETY:
    // 1. Guaranteed by the caller. The value is only read.
    let value: &T = unsafe { ptr.cast::<T>().as_ref() };
    H::render(value, buf);
}

/// Estimates the rendered size of a value using its handler.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to a live, initialized value of type `T`
unsafe fn estimated_size<T, H: ArgumentHandler<T>>(ptr: NonNull<Erased>) -> usize {
    // SAFETY:
    // 1. Guaranteed by the caller. The value is only read.
    let value: &T = unsafe { ptr.cast::<T>().as_ref() };
    H::estimated_size(value)
}
