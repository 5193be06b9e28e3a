#![cfg_attr(not(test), no_std)]

//! `ByteVec`: a growable vector of fixed-width elements.
//!
//! Every element is an opaque block of `element_width` bytes, chosen when the
//! vector is created. Values are copied in on insertion and copied out on
//! access; the vector never interprets element bytes except through
//! caller-supplied comparison callbacks.
//!
//! Buffer layout: `[element 0][element 1]...[element len-1][free slots]`
//! Element `i` lives at byte offset `i * element_width`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1)
//! - `insert_at()`, `push_front()`, `remove_at()`, `pop_front()`: O(n) - shifts the tail
//! - `at()`, `get()`, `front()`, `back()`, `pop_back()`: O(1)
//! - `append_array()`: O(count), at most one reallocation
//! - `index_of()`, `remove()`, `reverse()`: O(n)
//! - `sort_by()`: O(n log n), not stable
//! - `swap()`: O(1) - exchanges buffers, never copies elements
//!
//! ## Growth Policy
//! - `new()` starts with room for 100 elements
//! - `filled(n, ..)` starts with room for `2n + 1` elements
//! - When an insertion finds no free slot, the capacity becomes `2 * len + 1`
//! - `append_array()` of `count` elements that do not fit reserves
//!   `2 * (len + count) + 1`
//! - Capacity only shrinks through `trim()` or an explicit `reserve()`
//!
//! ## `no_std` Compatibility
//!
//! This crate only needs `core` and `alloc`. Enable the optional `std`
//! feature to get `std::error::Error` on [`ByteVecError`]:
//! ```toml
//! [dependencies]
//! bytevec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Errors
//!
//! Invalid indices, empty-vector access, width mismatches and allocation
//! failures are reported as [`ByteVecError`] values. A failing operation leaves
//! the vector unchanged.
//!
//! ```
//! # use bytevec::{ByteVec, ByteVecError};
//! let mut vector = ByteVec::new(4).unwrap();
//! let mut out = [0u8; 4];
//!
//! assert_eq!(vector.back(&mut out), Err(ByteVecError::EmptyVector));
//! assert_eq!(
//!     vector.push_back(b"too long"),
//!     Err(ByteVecError::WidthMismatch { expected: 4, actual: 8 })
//! );
//! ```
//!
//! # Raw Interface
//!
//! ```
//! # use bytevec::ByteVec;
//! let mut vector = ByteVec::new(4).unwrap();
//!
//! for value in [6i32, 1, 5, 2, 4, 3] {
//!     vector.push_back(&value.to_ne_bytes()).unwrap();
//! }
//!
//! let mut out = [0u8; 4];
//! vector.back(&mut out).unwrap();
//! assert_eq!(i32::from_ne_bytes(out), 3);
//! assert_eq!(vector.len(), 6);
//!
//! vector.sort_by(|a, b| {
//!     let a = i32::from_ne_bytes(a.try_into().unwrap());
//!     let b = i32::from_ne_bytes(b.try_into().unwrap());
//!     a.cmp(&b)
//! });
//! vector.front(&mut out).unwrap();
//! assert_eq!(i32::from_ne_bytes(out), 1);
//! ```
//!
//! # Typed Interface
//!
//! [`TypedVec`] wraps a `ByteVec` for any `bytemuck::Pod` type, with
//! `element_width = size_of::<T>()`:
//!
//! ```
//! # use bytevec::TypedVec;
//! let mut vector = TypedVec::<i32>::new().unwrap();
//! vector.append_slice(&[6, 1, 5, 2, 4, 3]).unwrap();
//!
//! vector.sort();
//! assert_eq!(vector.to_vec(), [1, 2, 3, 4, 5, 6]);
//! assert_eq!(vector.pop_back().unwrap(), 6);
//! ```
//!
//! # Byte-wise Equality
//!
//! [`ByteVec::index_of`] and [`ByteVec::remove`] compare raw bytes. Types with
//! padding bytes or a custom notion of equality may compare unequal even when
//! they are logically equal.

extern crate alloc;

mod container;
mod core;
mod error;
mod growth;
mod iter;
mod sort;
mod typed;

// Re-export public types and traits
pub use crate::core::ByteVec;
pub use container::ValueContainer;
pub use error::{ByteVecError, Result};
pub use growth::DEFAULT_CAPACITY;
pub use iter::{ByteVecIter, ByteVecRevIter};
pub use typed::TypedVec;
