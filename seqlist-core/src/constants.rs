//! Constants and growth policy for the seqlist containers

/// Capacity of a freshly constructed [`ArrayList`](crate::ArrayList)
pub const DEFAULT_CAPACITY: usize = 10;

/// Floor applied by the auto-expand policy, so an empty or released buffer
/// regrows straight to a useful size
pub const MIN_GROWTH_CAPACITY: usize = 10;

/// Process exit status used for out-of-range indices
pub const EXIT_INDEX_OUT_OF_BOUNDS: i32 = 1;

/// Process exit status used for failed (re)allocations
pub const EXIT_MEMORY_ERROR: i32 = 2;

/// Process exit status used when an operation is not offered by a container
pub const EXIT_UNSUPPORTED: i32 = 3;

/// Next capacity under the auto-expand policy: `max(10, cap + cap / 2)`
///
/// Saturates instead of overflowing; the allocation itself then fails.
pub const fn grow_capacity(capacity: usize) -> usize {
    let grown = capacity.saturating_add(capacity >> 1);
    if grown > MIN_GROWTH_CAPACITY {
        grown
    } else {
        MIN_GROWTH_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_sequence() {
        let mut cap = DEFAULT_CAPACITY;
        let mut seen = alloc::vec![cap];
        for _ in 0..5 {
            cap = grow_capacity(cap);
            seen.push(cap);
        }
        assert_eq!(seen, [10, 15, 22, 33, 49, 73]);
    }

    #[test]
    fn test_growth_floor() {
        assert_eq!(grow_capacity(0), 10);
        assert_eq!(grow_capacity(1), 10);
        assert_eq!(grow_capacity(6), 10);
        assert_eq!(grow_capacity(7), 10);
        assert_eq!(grow_capacity(8), 12);
    }

    #[test]
    fn test_growth_saturates() {
        assert_eq!(grow_capacity(usize::MAX), usize::MAX);
    }
}
