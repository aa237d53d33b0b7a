//! Append-efficient construction of contiguous byte buffers.
//!
//! This crate accumulates already-encoded byte [`Chunk`]s in a persistent
//! binary tree (the [`Builder`]) whose merge operation is an associative
//! monoid append with an O(1) amortized fast path for the common
//! "append one chunk to the end" pattern. A finished tree is realized into
//! one contiguous `Vec<u8>` in two passes: measure, then copy.
//!
//! The tree never interprets chunk contents and never inserts padding or
//! framing; the realized buffer is the byte-for-byte concatenation of the
//! appended chunks in append order.
//!
//! # Core types
//!
//! - [`Chunk`] — an immutable, already-encoded byte payload of known length.
//! - [`Builder`] — the persistent chunk tree (singleton, merge, fold,
//!   realize).
//! - [`encode`] — fixed-width primitive encoders, one per numeric kind,
//!   generic over [`byteorder::ByteOrder`].
//!
//! # Example
//!
//! ```
//! use bytebuild_builder::{encode, BigEndian, Builder};
//!
//! let b = Builder::singleton(encode::u16::<BigEndian>(0x0102))
//!     .merge(Builder::singleton(encode::u8(3)));
//! assert_eq!(b.realize().unwrap(), vec![1, 2, 3]);
//! ```

#![warn(missing_docs)]

mod builder;
mod chunk;
pub mod encode;
mod error;
mod flatten;

pub use builder::Builder;
pub use byteorder::{BE, BigEndian, ByteOrder, LE, LittleEndian, NativeEndian};
pub use chunk::Chunk;
pub use error::{Error, Result};
pub use flatten::realize;
