use thiserror::Error;

/// Result alias used by every fallible `ByteVec` operation.
pub type Result<T> = core::result::Result<T, ByteVecError>;

/// Error types for `ByteVec` operations
///
/// A failing operation always leaves the vector unchanged.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ByteVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
    /// A value or a second vector does not have the vector's element width
    #[error("Element width mismatch: expected {expected} bytes, got {actual} bytes")]
    WidthMismatch {
        /// Element width of the vector
        expected: usize,
        /// Width that was provided
        actual: usize,
    },
    /// Source array length is not a whole number of elements
    #[error("Misaligned array: {len} bytes is not a multiple of element width {element_width}")]
    MisalignedArray {
        /// Length of the source in bytes
        len: usize,
        /// Element width of the vector
        element_width: usize,
    },
    /// Destination buffer cannot hold the vector contents
    #[error("Buffer too small: {required} bytes required, {provided} bytes provided")]
    BufferTooSmall {
        /// Number of bytes needed
        required: usize,
        /// Number of bytes in the destination
        provided: usize,
    },
    /// Requested capacity would drop live elements
    #[error("Capacity {requested} is below vector length {length}")]
    CapacityBelowLength {
        /// Capacity that was requested
        requested: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Invalid configuration parameter
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
    /// Buffer size in bytes does not fit in `usize`
    #[error("Capacity overflow: {elements} elements of {element_width} bytes")]
    CapacityOverflow {
        /// Number of elements requested
        elements: usize,
        /// Element width of the vector
        element_width: usize,
    },
    /// The allocator could not provide the requested memory
    #[error("Allocation failed: could not allocate {requested_bytes} bytes")]
    AllocationFailed {
        /// Size of the failed allocation in bytes
        requested_bytes: usize,
    },
}
