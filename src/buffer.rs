//! Slot storage backing a `SecureStack`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::mem::{self, MaybeUninit};
use core::{ptr, slice};

use zeroize::Zeroize;

use crate::error::StackError;

/// An exactly-sized run of slots, of which the first `length` hold
/// initialized values.
///
/// Vacated slots are zeroized as soon as their value leaves the buffer, and
/// every slot is zeroized before its allocation is released.
pub(crate) struct StackBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
    length: usize,
}

/// Allocate exactly `capacity` uninitialized slots.
fn allocate_slots<T>(capacity: usize) -> Result<Box<[MaybeUninit<T>]>, StackError> {
    if Layout::array::<T>(capacity).is_err() {
        return Err(StackError::CAPACITY_OVERFLOW);
    }
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| StackError::ALLOC_FAILED)?;
    // SAFETY: `capacity` slots are reserved and `MaybeUninit` requires no
    // initialization.
    unsafe { slots.set_len(capacity) };
    Ok(slots.into_boxed_slice())
}

impl<T> StackBuffer<T> {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        Ok(Self {
            slots: allocate_slots(capacity)?,
            length: 0,
        })
    }

    /// Move the live values into a new allocation of `capacity` slots.
    /// The previous slots are zeroized and handed back for release. On
    /// failure the buffer is untouched.
    pub fn grow(&mut self, capacity: usize) -> Result<Box<[MaybeUninit<T>]>, StackError> {
        debug_assert!(capacity > self.slots.len());
        let mut slots = allocate_slots(capacity)?;
        // SAFETY: the allocations are distinct and both hold at least
        // `length` slots.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), slots.as_mut_ptr(), self.length);
        }
        let mut prev = mem::replace(&mut self.slots, slots);
        prev[..].zeroize();
        Ok(prev)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.length == self.slots.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `length` slots are always initialized.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.length) }
    }

    /// Write a value into the first vacant slot.
    ///
    /// # Panics
    /// Panics if the buffer is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.slots[self.length].write(value);
        self.length += 1;
    }

    /// Move the topmost value out of the buffer and zeroize its slot.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.length = self.length.checked_sub(1)?;
        let slot = &mut self.slots[self.length];
        // SAFETY: the slot was below the previous length, so it holds an
        // initialized value which is no longer counted as live.
        let value = unsafe { slot.assume_init_read() };
        slice::from_mut(slot).zeroize();
        Some(value)
    }

    /// Drop every live value, topmost first, zeroizing each slot.
    pub fn clear(&mut self) {
        while let Some(value) = self.pop() {
            drop(value);
        }
    }

    /// # Safety
    /// The first `length` slots must be initialized.
    #[cfg(test)]
    pub unsafe fn set_length(&mut self, length: usize) {
        self.length = length;
    }
}

/// Zeroizes the borrowed slots when dropped, including while unwinding.
struct ZeroizeSlots<'s, T>(&'s mut [MaybeUninit<T>]);

impl<T> Drop for ZeroizeSlots<'_, T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<T> Drop for StackBuffer<T> {
    fn drop(&mut self) {
        let length = mem::replace(&mut self.length, 0);
        let mut guard = ZeroizeSlots(&mut self.slots[..]);
        let live = ptr::slice_from_raw_parts_mut(guard.0.as_mut_ptr().cast::<T>(), length);
        // SAFETY: the first `length` slots were initialized, and the length
        // has been reset so they are not read again.
        unsafe { ptr::drop_in_place(live) };
    }
}
