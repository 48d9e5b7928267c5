//! Module containing the type-erased argument handle

mod raw;
mod vtable;

pub use self::raw::RawArgument;
