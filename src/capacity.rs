//! Capacity policy for stack buffers.
//!
//! A stack starts with an explicit, non-zero capacity and only ever grows by
//! doubling, at the moment a push finds every slot occupied. Capacity is
//! never reduced.

use crate::error::StackError;

/// The initial capacity used by [`SecureStack::new`](crate::SecureStack::new).
pub const DEFAULT_CAPACITY: usize = 4;

/// The factor applied to the capacity on each growth event.
pub const GROWTH_FACTOR: usize = 2;

/// Validate a requested initial capacity.
#[inline]
pub fn check_initial(capacity: usize) -> Result<usize, StackError> {
    if capacity == 0 {
        Err(StackError::ZERO_CAPACITY)
    } else {
        Ok(capacity)
    }
}

/// Calculate the capacity which follows `prev` after a growth event.
#[inline]
pub fn next_capacity(prev: usize) -> Result<usize, StackError> {
    prev.checked_mul(GROWTH_FACTOR)
        .ok_or(StackError::CAPACITY_OVERFLOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_zero_rejected() {
        assert_eq!(check_initial(0), Err(StackError::ZERO_CAPACITY));
        assert_eq!(check_initial(1), Ok(1));
        assert_eq!(check_initial(DEFAULT_CAPACITY), Ok(4));
    }

    #[test]
    fn doubling_sequence() {
        let mut cap = 3;
        for expect in [6, 12, 24, 48] {
            cap = next_capacity(cap).unwrap();
            assert_eq!(cap, expect);
        }
    }

    #[test]
    fn doubling_overflow() {
        assert_eq!(
            next_capacity(usize::MAX / 2 + 1),
            Err(StackError::CAPACITY_OVERFLOW)
        );
        assert_eq!(next_capacity(usize::MAX / 2), Ok(usize::MAX - 1));
    }
}
