use crate::core::ByteVec;

/// Common interface of containers that store opaque fixed-width values by copy.
///
/// Every container is created with a fixed element width, copies values in on
/// insertion and out on access, and reports its size.
pub trait ValueContainer {
    /// Width in bytes of every stored value.
    fn element_width(&self) -> usize;

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValueContainer for ByteVec {
    fn element_width(&self) -> usize {
        ByteVec::element_width(self)
    }

    fn len(&self) -> usize {
        ByteVec::len(self)
    }

    fn is_empty(&self) -> bool {
        ByteVec::is_empty(self)
    }
}
