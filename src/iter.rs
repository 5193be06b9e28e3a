use core::slice::ChunksExact;

use crate::core::ByteVec;

/// Iterator over elements in a `ByteVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ByteVecIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for ByteVecIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for ByteVecIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}

impl ExactSizeIterator for ByteVecIter<'_> {}

impl<'a> IntoIterator for &'a ByteVec {
    type Item = &'a [u8];
    type IntoIter = ByteVecIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ByteVecIter {
            chunks: self.as_bytes().chunks_exact(self.element_width()),
        }
    }
}

/// Reverse iterator over elements in a `ByteVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ByteVecRevIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> ByteVecRevIter<'a> {
    pub(crate) fn new(chunks: ChunksExact<'a, u8>) -> Self {
        Self { chunks }
    }
}

impl<'a> Iterator for ByteVecRevIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for ByteVecRevIter<'_> {}
