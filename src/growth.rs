use crate::error::{ByteVecError, Result};

/// Capacity of a vector created with `ByteVec::new`.
pub const DEFAULT_CAPACITY: usize = 100;

pub(crate) const GROWTH_FACTOR: usize = 2;
pub(crate) const GROWTH_OFFSET: usize = 1;

/// Growth target for a vector sized around `base` elements: `2 * base + 1`.
///
/// Also the initial capacity of a vector pre-filled with `base` elements.
pub(crate) fn grow_target(base: usize) -> usize {
    base.saturating_mul(GROWTH_FACTOR)
        .saturating_add(GROWTH_OFFSET)
}

/// Capacity to reallocate to before one more element is inserted.
///
/// Returns `None` while a slot is free, otherwise `2 * len + 1`. Growth fires
/// only when full, not whenever `capacity <= 2 * len`, a trigger that would
/// reallocate on every push once reached.
pub(crate) fn grown_capacity(capacity: usize, len: usize) -> Option<usize> {
    if len < capacity {
        None
    } else {
        Some(grow_target(len))
    }
}

/// Capacity to reallocate to before a batch of `count` elements is appended.
///
/// Returns `None` while the batch fits, otherwise `2 * (len + count) + 1`,
/// even for a batch of one. Either way the capacity at least doubles, so `k`
/// appends cost O(log k) reallocations.
pub(crate) fn grown_capacity_for_batch(capacity: usize, len: usize, count: usize) -> Option<usize> {
    let required = len.saturating_add(count);
    if required <= capacity {
        None
    } else {
        Some(grow_target(required))
    }
}

/// Number of bytes backing `elements` elements of `element_width` bytes.
pub(crate) fn byte_size(elements: usize, element_width: usize) -> Result<usize> {
    elements
        .checked_mul(element_width)
        .ok_or(ByteVecError::CapacityOverflow {
            elements,
            element_width,
        })
}
