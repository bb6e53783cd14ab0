//! A consuming optional container.
//!
//! [`O`] holds either a value or nothing. Unlike [`Option`], the extraction
//! methods work through `&mut self` and always leave the container empty, so
//! a container embedded in a struct field hands its value out exactly once.
//!
//! ```
//! use opt::O;
//!
//! let mut greeting = O::occupied("hello");
//! greeting
//!     .if_occupied(|g| assert_eq!(*g, "hello"))
//!     .if_empty(|| unreachable!());
//! assert_eq!(greeting.unwrap(), Ok("hello"));
//! assert!(greeting.is_empty());
//! assert!(greeting.unwrap().is_err());
//! ```
#![no_std]

extern crate alloc;

pub mod result;
pub use result::{EmptyValueError, Result};

// O module
pub mod o;
pub use o::*; // Allow `$crate::O` in macros

pub mod convert;

/// Shorthand for `O::Empty`.
#[macro_export]
macro_rules! empty {
    () => {
        $crate::O::Empty
    };
}

/// Shorthand for `O::Occupied(val)`.
#[macro_export]
macro_rules! occupied {
    ($val:expr) => {
        $crate::O::Occupied($val)
    };
}
