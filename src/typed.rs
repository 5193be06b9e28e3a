//! Typed facade over [`ByteVec`] for plain-old-data element types.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::mem::size_of;

use bytemuck::{bytes_of, cast_slice, cast_slice_mut, pod_read_unaligned, Pod};

use crate::container::ValueContainer;
use crate::core::ByteVec;
use crate::error::{ByteVecError, Result};

/// A `ByteVec` whose elements are values of `T`
///
/// The element width is `size_of::<T>()`. Values are copied in and out of the
/// byte buffer, so the buffer carries no alignment requirement. `T: Pod` has
/// no padding bytes, which makes byte-wise equality agree with `==` for
/// everything except floating point `-0.0` and `NaN`.
#[derive(Debug)]
pub struct TypedVec<T> {
    inner: ByteVec,
    _marker: PhantomData<T>,
}

impl<T: Pod> TypedVec<T> {
    /// Creates an empty vector with the default capacity.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::InvalidConfiguration` for zero-sized `T`, or an
    /// allocation error.
    pub fn new() -> Result<Self> {
        Ok(Self::wrap(ByteVec::new(size_of::<T>())?))
    }

    /// Creates an empty vector with room for `capacity` values.
    ///
    /// # Errors
    ///
    /// See [`ByteVec::with_capacity`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::wrap(ByteVec::with_capacity(size_of::<T>(), capacity)?))
    }

    /// Creates a vector holding `length` copies of `value`, with capacity
    /// `2 * length + 1`.
    ///
    /// # Errors
    ///
    /// See [`ByteVec::filled`].
    pub fn filled(length: usize, value: T) -> Result<Self> {
        Ok(Self::wrap(ByteVec::filled(
            length,
            size_of::<T>(),
            bytes_of(&value),
        )?))
    }

    /// Reinterprets a `ByteVec` whose element width is `size_of::<T>()`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::WidthMismatch` if the widths differ.
    pub fn from_byte_vec(inner: ByteVec) -> Result<Self> {
        if inner.element_width() != size_of::<T>() {
            return Err(ByteVecError::WidthMismatch {
                expected: size_of::<T>(),
                actual: inner.element_width(),
            });
        }
        Ok(Self::wrap(inner))
    }

    fn wrap(inner: ByteVec) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[must_use]
    pub fn as_byte_vec(&self) -> &ByteVec {
        &self.inner
    }

    #[must_use]
    pub fn into_byte_vec(self) -> ByteVec {
        self.inner
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.get(index).map(pod_read_unaligned::<T>)
    }

    /// Returns a copy of the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<T> {
        self.get(index).ok_or(ByteVecError::IndexOutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn front(&self) -> Result<T> {
        self.get(0).ok_or(ByteVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn back(&self) -> Result<T> {
        let last = self.len().checked_sub(1).ok_or(ByteVecError::EmptyVector)?;
        self.at(last)
    }

    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let needle = bytes_of(value);
        self.inner.iter().position(|element| element == needle)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// # Errors
    ///
    /// Returns an allocation error if the vector must grow and cannot.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.inner.push_back(bytes_of(&value))
    }

    /// # Errors
    ///
    /// Returns an allocation error if the vector must grow and cannot.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.inner.push_front(bytes_of(&value))
    }

    /// # Errors
    ///
    /// See [`ByteVec::insert_at`].
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        self.inner.insert_at(bytes_of(&value), index)
    }

    /// Appends all `values` with at most one reallocation.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the vector must grow and cannot.
    pub fn append_slice(&mut self, values: &[T]) -> Result<()> {
        self.inner.append_array(cast_slice(values))
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let value = self.back()?;
        self.inner.pop_back()?;
        Ok(value)
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let value = self.front()?;
        self.inner.pop_front()?;
        Ok(value)
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let value = self.at(index)?;
        self.inner.remove_at(index)?;
        Ok(value)
    }

    /// Removes every value bitwise equal to `value`, returning the count.
    pub fn remove(&mut self, value: &T) -> usize {
        self.inner.remove_matching(bytes_of(value))
    }

    pub fn truncate(&mut self, length: usize) {
        self.inner.truncate(length);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// # Errors
    ///
    /// See [`ByteVec::reserve`].
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        self.inner.reserve(new_capacity)
    }

    /// # Errors
    ///
    /// See [`ByteVec::trim`].
    pub fn trim(&mut self) -> Result<()> {
        self.inner.trim()
    }

    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Exchanges contents with `other` in O(1). The element types match, so
    /// this cannot fail.
    pub fn swap(&mut self, other: &mut TypedVec<T>) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Copies all values into the front of `dest`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::BufferTooSmall` (sizes in bytes) if `dest` is
    /// shorter than `len()`.
    pub fn copy_to_slice(&self, dest: &mut [T]) -> Result<()> {
        self.inner.copy_to_array(cast_slice_mut(dest))
    }

    /// Sorts in place by `compare`. The sort is not stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.inner.sort_by(|a, b| {
            compare(&pod_read_unaligned::<T>(a), &pod_read_unaligned::<T>(b))
        });
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.inner.iter().map(pod_read_unaligned::<T>)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Pod + Ord> TypedVec<T> {
    /// Sorts in ascending order. The sort is not stable.
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }
}

impl<T: Pod> ValueContainer for TypedVec<T> {
    fn element_width(&self) -> usize {
        size_of::<T>()
    }

    fn len(&self) -> usize {
        TypedVec::len(self)
    }
}
