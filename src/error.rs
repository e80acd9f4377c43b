//! Error handling.

use core::fmt;

/// An enumeration of error types raised by stack operations.
///
/// Every operation reports its error before modifying the stack, so a
/// failed call leaves the stack exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// An argument was rejected: a zero initial capacity or an absent value.
    InvalidArgument(&'static str),
    /// The stack held no elements to pop or peek.
    EmptyStack(&'static str),
    /// The slot buffer could not be allocated at the requested capacity.
    Storage(&'static str),
}

impl StackError {
    pub(crate) const ZERO_CAPACITY: Self =
        Self::InvalidArgument("Initial capacity must be greater than zero");
    pub(crate) const NULL_VALUE: Self =
        Self::InvalidArgument("Null values are not allowed in the stack");
    pub(crate) const UNDERFLOW: Self =
        Self::EmptyStack("Stack underflow: Cannot pop from an empty stack");
    pub(crate) const PEEK_EMPTY: Self = Self::EmptyStack("Stack is empty: Cannot peek");
    pub(crate) const CAPACITY_OVERFLOW: Self = Self::Storage("Stack capacity overflow");
    pub(crate) const ALLOC_FAILED: Self = Self::Storage("Stack storage could not be allocated");

    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument(reason) | Self::EmptyStack(reason) | Self::Storage(reason) => {
                reason
            }
        }
    }

    /// Check if this error rejected an argument.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error was raised by an empty stack.
    #[inline]
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, Self::EmptyStack(_))
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str())
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StackError {}
