//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use fastfmt::prelude::*;
//!
//! let template = Template::new("{}/{}").unwrap();
//! let mut buf = OutputBuffer::new();
//! vformat_to(&mut buf, &template, &arguments!(3, 4)).unwrap();
//! assert_eq!(buf.as_str(), "3/4");
//! ```
//!
//! # What's Included
//!
//! - **[`Template`]**, **[`OutputBuffer`]** and **[`FormatError`]**
//! - **[`vformat`]** and **[`vformat_to`]**
//! - **[`arguments!`]**, **[`template!`]** and **[`format_to!`]**
//! - **[`handlers`]**, together with the [`ArgumentHandler`] trait for
//!   writing your own
//!
//! The crate's `format!` and print macros are not included since their names
//! collide with the standard library's. Call them by path instead.

pub use crate::{
    Argument, Arguments, FormatError, OutputBuffer, Template, arguments, format_to,
    handlers::{self, ArgumentHandler},
    template, vformat, vformat_to,
};
