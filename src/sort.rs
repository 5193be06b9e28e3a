//! In-place sorting of fixed-width byte blocks.
//!
//! Elements cannot be viewed as a `[T]`, so the standard slice sorts do not
//! apply. Heapsort works on the blocks directly: O(n log n) worst case, no
//! scratch allocation, not stable.

use core::cmp::Ordering;

#[allow(clippy::indexing_slicing)] // callers pass indices below `data.len() / width`
pub(crate) fn block(data: &[u8], width: usize, index: usize) -> &[u8] {
    &data[index * width..(index + 1) * width]
}

/// Exchanges the blocks at `a` and `b`.
#[allow(clippy::indexing_slicing)]
pub(crate) fn swap_blocks(data: &mut [u8], width: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = data.split_at_mut(high * width);
    head[low * width..(low + 1) * width].swap_with_slice(&mut tail[..width]);
}

/// Sorts the `data.len() / width` blocks of `data` by `compare`.
pub(crate) fn sort_blocks<F>(data: &mut [u8], width: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let count = data.len() / width;
    if count < 2 {
        return;
    }

    for root in (0..count / 2).rev() {
        sift_down(data, width, root, count, &mut compare);
    }
    for end in (1..count).rev() {
        swap_blocks(data, width, 0, end);
        sift_down(data, width, 0, end, &mut compare);
    }
}

fn sift_down<F>(data: &mut [u8], width: usize, mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end
            && compare(block(data, width, child), block(data, width, child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if compare(block(data, width, root), block(data, width, child)) != Ordering::Less {
            return;
        }
        swap_blocks(data, width, root, child);
        root = child;
    }
}
