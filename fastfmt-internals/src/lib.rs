#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`fastfmt`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased argument handles that power
//! the [`fastfmt`] formatting engine. A formatting call captures each of its
//! arguments as a [`RawArgument`]: a borrowed pointer to the caller's value
//! paired with a `'static` vtable that knows how to render the value and how
//! large the rendering is likely to be.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`fastfmt`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`argument`]**: Type-erased argument handles
//!   - [`RawArgument`]: Borrowed, `Copy` handle to one call argument
//!   - [`ArgumentVtable`]: Function pointers for type-erased dispatch
//!
//! - **[`handlers`]**: The [`ArgumentHandler`] trait defining how a value of a
//!   given type is rendered and estimated
//!
//! - **[`buffer`]**: The [`OutputBuffer`] every handler renders into
//!
//! # Safety Strategy
//!
//! A [`RawArgument`] stores its pointee as a pointer to [`Erased`]. The vtable
//! stored next to it was instantiated for the concrete type at the moment the
//! handle was created, and both fields are private to the module that creates
//! them, so the two can never drift apart. The lifetime parameter on
//! [`RawArgument`] keeps the borrow of the original value alive for as long as
//! the handle exists.
//!
//! [`fastfmt`]: https://docs.rs/fastfmt/latest/fastfmt/
//! [`ArgumentVtable`]: argument::vtable::ArgumentVtable
//! [`ArgumentHandler`]: handlers::ArgumentHandler
//! [`OutputBuffer`]: buffer::OutputBuffer
//! [`Erased`]: util::Erased

extern crate alloc;

mod argument;
pub mod buffer;
pub mod handlers;
mod util;

pub use argument::RawArgument;
