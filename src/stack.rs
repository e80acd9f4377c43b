//! The `SecureStack` container.

use core::fmt;

use log::{debug, warn};

use crate::buffer::StackBuffer;
use crate::capacity::{self, DEFAULT_CAPACITY};
use crate::error::StackError;

/// A last-in-first-out stack backed by a contiguous buffer.
///
/// The buffer starts at an explicit, non-zero capacity and doubles whenever
/// a value is pushed onto a full stack. It never shrinks. Popped slots are
/// zeroized, and so is every buffer the stack releases, whether left behind
/// by growth or on drop.
///
/// Operations which can fail return their error before modifying the stack.
pub struct SecureStack<T> {
    buffer: StackBuffer<T>,
}

impl<T> SecureStack<T> {
    /// Constructs a new, empty `SecureStack<T>` with the default capacity of 4.
    ///
    /// # Panics
    /// Panics if the initial buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_stack::SecureStack;
    ///
    /// let stack = SecureStack::<&str>::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.capacity(), 4);
    /// ```
    pub fn new() -> Self {
        match Self::with_capacity(DEFAULT_CAPACITY) {
            Ok(stack) => stack,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a new, empty `SecureStack<T>` with an exact initial
    /// capacity. A capacity of zero is rejected with `StackError::InvalidArgument`.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_stack::SecureStack;
    ///
    /// let stack = SecureStack::<u32>::with_capacity(10).unwrap();
    /// assert_eq!(stack.capacity(), 10);
    ///
    /// let err = SecureStack::<u32>::with_capacity(0).unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        let capacity = capacity::check_initial(capacity)?;
        let buffer = StackBuffer::with_capacity(capacity)?;
        Ok(Self { buffer })
    }

    /// The number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The number of values currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.length()
    }

    /// Check if the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.length() == 0
    }

    /// Push a value onto the top of the stack, doubling the capacity first
    /// if every slot is occupied.
    ///
    /// # Panics
    /// Panics if the buffer needs to grow and cannot.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_stack::SecureStack;
    ///
    /// let mut stack = SecureStack::<i32>::with_capacity(1).unwrap();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.capacity(), 2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// ```
    pub fn push(&mut self, value: T) {
        if let Err(error) = self.reserve_slot() {
            error.panic();
        }
        self.buffer.push(value);
    }

    /// Push a value which may be absent. `None` is rejected with
    /// `StackError::InvalidArgument`, and a buffer which cannot grow with
    /// `StackError::Storage`. Either way the stack is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_stack::SecureStack;
    ///
    /// let mut stack = SecureStack::<&str>::new();
    /// assert!(stack.push_some(None).unwrap_err().is_invalid_argument());
    /// stack.push_some(Some("value")).unwrap();
    /// assert_eq!(stack.len(), 1);
    /// ```
    pub fn push_some(&mut self, value: Option<T>) -> Result<(), StackError> {
        let Some(value) = value else {
            return Err(StackError::NULL_VALUE);
        };
        self.reserve_slot()?;
        self.buffer.push(value);
        Ok(())
    }

    /// Remove and return the topmost value. Its slot is zeroized so the
    /// buffer no longer holds any part of the value.
    ///
    /// Popping an empty stack fails with `StackError::EmptyStack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_stack::SecureStack;
    ///
    /// let mut stack = SecureStack::<&str>::new();
    /// stack.push("first");
    /// stack.push("second");
    /// assert_eq!(stack.pop(), Ok("second"));
    /// assert_eq!(stack.pop(), Ok("first"));
    /// assert!(stack.pop().unwrap_err().is_empty_stack());
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.buffer.pop().ok_or(StackError::UNDERFLOW)
    }

    /// Access the topmost value without removing it.
    ///
    /// Peeking an empty stack fails with `StackError::EmptyStack`.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.buffer.as_slice().last().ok_or(StackError::PEEK_EMPTY)
    }

    /// Drop every held value, topmost first. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Ensure a vacant slot is available, doubling the capacity if needed.
    #[inline]
    fn reserve_slot(&mut self) -> Result<(), StackError> {
        if self.buffer.is_full() {
            self.grow()
        } else {
            Ok(())
        }
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), StackError> {
        let prev = self.buffer.capacity();
        let result = capacity::next_capacity(prev)
            .and_then(|next| self.buffer.grow(next).map(|released| (next, released)));
        match result {
            Ok((next, released)) => {
                drop(released);
                debug!("stack capacity grown from {} to {}", prev, next);
                Ok(())
            }
            Err(error) => {
                warn!("stack capacity could not grow from {}: {}", prev, error);
                Err(error)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SecureStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.as_slice()).finish()
    }
}

impl<T> Default for SecureStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
