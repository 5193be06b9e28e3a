use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{ByteVecError, Result};
use crate::growth::{
    byte_size, grow_target, grown_capacity, grown_capacity_for_batch, DEFAULT_CAPACITY,
};
use crate::iter::{ByteVecIter, ByteVecRevIter};
use crate::sort::{block, sort_blocks, swap_blocks};

/// A growable vector of fixed-width elements stored back to back in one buffer
///
/// Live bytes are `buffer[..len * element_width]`; `capacity` is tracked in
/// elements and the buffer always has room for that many.
#[derive(Debug)]
pub struct ByteVec {
    buffer: Vec<u8>,
    capacity: usize,
    element_width: usize,
}

impl ByteVec {
    /// Creates an empty `ByteVec` with the default capacity (100 elements).
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::InvalidConfiguration` if `element_width` is 0,
    /// or an allocation error if the buffer cannot be allocated.
    pub fn new(element_width: usize) -> Result<Self> {
        Self::with_capacity(element_width, DEFAULT_CAPACITY)
    }

    /// Creates an empty `ByteVec` with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::InvalidConfiguration` if `element_width` is 0,
    /// `ByteVecError::CapacityOverflow` if the buffer size overflows `usize`,
    /// or `ByteVecError::AllocationFailed` if the allocator refuses.
    pub fn with_capacity(element_width: usize, capacity: usize) -> Result<Self> {
        if element_width == 0 {
            return Err(ByteVecError::InvalidConfiguration {
                parameter: "element_width",
                value: element_width,
            });
        }

        let mut vector = Self {
            buffer: Vec::new(),
            capacity: 0,
            element_width,
        };
        vector.reallocate(capacity)?;
        Ok(vector)
    }

    /// Creates a `ByteVec` holding `length` copies of `initial_value`.
    ///
    /// The capacity is `2 * length + 1`, leaving room for growth.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::with_capacity`], plus `ByteVecError::WidthMismatch`
    /// if `initial_value` is not `element_width` bytes long.
    pub fn filled(length: usize, element_width: usize, initial_value: &[u8]) -> Result<Self> {
        if initial_value.len() != element_width {
            return Err(ByteVecError::WidthMismatch {
                expected: element_width,
                actual: initial_value.len(),
            });
        }
        let mut vector = Self::with_capacity(element_width, grow_target(length))?;

        for _ in 0..length {
            vector.buffer.extend_from_slice(initial_value);
        }
        Ok(vector)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len() / self.element_width
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn element_width(&self) -> usize {
        self.element_width
    }

    /// Returns the live elements as one contiguous byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn check_width(&self, actual: usize) -> Result<()> {
        if actual == self.element_width {
            Ok(())
        } else {
            Err(ByteVecError::WidthMismatch {
                expected: self.element_width,
                actual,
            })
        }
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        let length = self.len();
        if index >= length {
            Err(ByteVecError::IndexOutOfBounds { index, length })
        } else {
            Ok(())
        }
    }

    fn last_index(&self) -> Result<usize> {
        self.len().checked_sub(1).ok_or(ByteVecError::EmptyVector)
    }

    /// Resizes the buffer to hold exactly `new_capacity` elements.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        let bytes = byte_size(new_capacity, self.element_width)?;

        if bytes > self.buffer.capacity() {
            self.buffer
                .try_reserve_exact(bytes - self.buffer.len())
                .map_err(|_| ByteVecError::AllocationFailed {
                    requested_bytes: bytes,
                })?;
        } else {
            self.buffer.shrink_to(bytes);
        }

        log::debug!(
            "bytevec: reallocated from {} to {} elements of {} bytes",
            self.capacity,
            new_capacity,
            self.element_width
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Reallocates to `target` when the growth policy asks for it.
    fn grow_to(&mut self, target: Option<usize>) -> Result<()> {
        match target {
            Some(new_capacity) => self.reallocate(new_capacity),
            None => Ok(()),
        }
    }

    /// Resizes the buffer to hold exactly `new_capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::CapacityBelowLength` if `new_capacity` is less
    /// than the current length, or an allocation error.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        let length = self.len();
        if new_capacity < length {
            return Err(ByteVecError::CapacityBelowLength {
                requested: new_capacity,
                length,
            });
        }
        self.reallocate(new_capacity)
    }

    /// Shrinks the capacity to the current length.
    ///
    /// # Errors
    ///
    /// Returns an allocation error only if the byte size overflows, which
    /// cannot happen for elements already stored.
    pub fn trim(&mut self) -> Result<()> {
        log::debug!("bytevec: trimming {} slack elements", self.capacity - self.len());
        self.reallocate(self.len())
    }

    /// Releases the buffer. The vector is left empty with capacity 0 and
    /// allocates again on the next insertion.
    pub fn destroy(&mut self) {
        log::debug!(
            "bytevec: releasing {} elements of {} bytes",
            self.capacity,
            self.element_width
        );
        self.buffer = Vec::new();
        self.capacity = 0;
    }

    /// Returns a view of the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.element_width)?;
        let end = start.checked_add(self.element_width)?;
        self.buffer.get(start..end)
    }

    /// Copies the element at `index` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::IndexOutOfBounds` if `index >= len()`, or
    /// `ByteVecError::WidthMismatch` if `dest` is not one element wide.
    pub fn at(&self, index: usize, dest: &mut [u8]) -> Result<()> {
        self.check_width(dest.len())?;
        self.check_bounds(index)?;
        dest.copy_from_slice(block(&self.buffer, self.element_width, index));
        Ok(())
    }

    /// Copies the first element into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty, or
    /// `ByteVecError::WidthMismatch` if `dest` is not one element wide.
    pub fn front(&self, dest: &mut [u8]) -> Result<()> {
        if self.is_empty() {
            return Err(ByteVecError::EmptyVector);
        }
        self.at(0, dest)
    }

    /// Copies the last element into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty, or
    /// `ByteVecError::WidthMismatch` if `dest` is not one element wide.
    pub fn back(&self, dest: &mut [u8]) -> Result<()> {
        let last = self.last_index()?;
        self.at(last, dest)
    }

    /// Returns the index of the first element whose bytes equal `value`.
    ///
    /// Equality is byte-wise: values of types with padding or non-trivial
    /// equality may compare unequal even when they are logically equal.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if `value` is not one element
    /// wide.
    pub fn index_of(&self, value: &[u8]) -> Result<Option<usize>> {
        self.check_width(value.len())?;
        Ok(self.iter().position(|element| element == value))
    }

    /// Byte-wise membership test, see [`ByteVec::index_of`].
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if `value` is not one element
    /// wide.
    pub fn contains(&self, value: &[u8]) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// See [`ByteVec::insert_at`].
    pub fn push_back(&mut self, value: &[u8]) -> Result<()> {
        self.insert_at(value, self.len())
    }

    /// Inserts `value` before the first element.
    ///
    /// # Errors
    ///
    /// See [`ByteVec::insert_at`].
    pub fn push_front(&mut self, value: &[u8]) -> Result<()> {
        self.insert_at(value, 0)
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// When the buffer is full the capacity grows to `2 * len() + 1`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if `value` is not one element
    /// wide, `ByteVecError::IndexOutOfBounds` if `index > len()`, or an
    /// allocation error.
    #[allow(clippy::indexing_slicing)] // bounds checked above
    pub fn insert_at(&mut self, value: &[u8], index: usize) -> Result<()> {
        self.check_width(value.len())?;
        let length = self.len();
        if index > length {
            return Err(ByteVecError::IndexOutOfBounds { index, length });
        }
        self.grow_to(grown_capacity(self.capacity, self.len()))?;

        let width = self.element_width;
        let offset = index * width;
        let end = self.buffer.len();

        self.buffer.extend_from_slice(value);
        if index != length {
            self.buffer.copy_within(offset..end, offset + width);
            self.buffer[offset..offset + width].copy_from_slice(value);
        }
        Ok(())
    }

    /// Appends every element of `source` in one bulk copy.
    ///
    /// At most one reallocation happens, to `2 * (len() + count) + 1`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::MisalignedArray` if `source.len()` is not a
    /// multiple of the element width, or an allocation error.
    pub fn append_array(&mut self, source: &[u8]) -> Result<()> {
        if source.len() % self.element_width != 0 {
            return Err(ByteVecError::MisalignedArray {
                len: source.len(),
                element_width: self.element_width,
            });
        }
        let count = source.len() / self.element_width;
        self.grow_to(grown_capacity_for_batch(self.capacity, self.len(), count))?;
        self.buffer.extend_from_slice(source);
        Ok(())
    }

    /// Removes the last element.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<()> {
        let last = self.last_index()?;
        self.remove_at(last)
    }

    /// Removes the first element.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn pop_front(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(ByteVecError::EmptyVector);
        }
        self.remove_at(0)
    }

    /// Removes the element at `index`, shifting later elements one slot left.
    ///
    /// The capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;

        let width = self.element_width;
        let offset = index * width;
        let end = self.buffer.len();

        self.buffer.copy_within(offset + width..end, offset);
        self.buffer.truncate(end - width);
        Ok(())
    }

    /// Removes every element whose bytes equal `value` and returns how many
    /// were removed.
    ///
    /// One forward pass: each element is examined exactly once and the
    /// survivors are compacted towards the front in their original order.
    /// Equality is byte-wise, see [`ByteVec::index_of`].
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if `value` is not one element
    /// wide; the vector is unchanged.
    pub fn remove(&mut self, value: &[u8]) -> Result<usize> {
        self.check_width(value.len())?;
        Ok(self.remove_matching(value))
    }

    /// Compaction pass behind [`ByteVec::remove`]; `value` is one element wide.
    pub(crate) fn remove_matching(&mut self, value: &[u8]) -> usize {
        debug_assert_eq!(value.len(), self.element_width);

        let width = self.element_width;
        let length = self.len();
        let mut kept = 0;
        for read in 0..length {
            if block(&self.buffer, width, read) == value {
                continue;
            }
            if read != kept {
                self.buffer
                    .copy_within(read * width..(read + 1) * width, kept * width);
            }
            kept += 1;
        }
        self.buffer.truncate(kept * width);
        length - kept
    }

    /// Shortens the vector to `length` elements. No-op if already shorter.
    pub fn truncate(&mut self, length: usize) {
        if let Some(bytes) = length.checked_mul(self.element_width) {
            self.buffer.truncate(bytes);
        }
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        let width = self.element_width;
        let length = self.len();
        if length < 2 {
            return;
        }

        let (mut left, mut right) = (0, length - 1);
        while left < right {
            swap_blocks(&mut self.buffer, width, left, right);
            left += 1;
            right -= 1;
        }
    }

    /// Exchanges contents and capacities with `other` without copying
    /// element bytes.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if the element widths differ;
    /// both vectors are then left untouched.
    pub fn swap(&mut self, other: &mut ByteVec) -> Result<()> {
        self.check_width(other.element_width)?;
        log::trace!(
            "bytevec: swapping {} and {} elements",
            self.len(),
            other.len()
        );
        core::mem::swap(&mut self.buffer, &mut other.buffer);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
        Ok(())
    }

    /// Copies all live bytes into the front of `dest`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::BufferTooSmall` if `dest` is shorter than
    /// `len() * element_width()` bytes.
    #[allow(clippy::indexing_slicing)] // length checked above
    pub fn copy_to_array(&self, dest: &mut [u8]) -> Result<()> {
        let required = self.buffer.len();
        if dest.len() < required {
            return Err(ByteVecError::BufferTooSmall {
                required,
                provided: dest.len(),
            });
        }
        dest[..required].copy_from_slice(&self.buffer);
        Ok(())
    }

    /// Sorts the elements in place with a three-way comparison over their
    /// bytes. The sort is not stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        log::trace!("bytevec: sorting {} elements", self.len());
        sort_blocks(&mut self.buffer, self.element_width, compare);
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> ByteVecIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> ByteVecRevIter<'_> {
        ByteVecRevIter::new(self.buffer.chunks_exact(self.element_width))
    }
}
