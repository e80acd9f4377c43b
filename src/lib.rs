//! A growable LIFO stack which validates every operation and clears
//! storage as soon as it is released.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
struct _ReadmeDoctests;

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

extern crate alloc;

pub(crate) mod buffer;

pub mod capacity;

pub(crate) mod error;

pub mod stack;

pub use self::error::StackError;
pub use self::stack::SecureStack;
