//! Ordered, typed writes into one contiguous output buffer.
//!
//! A [`PutSession`] lets a caller issue a chain of primitive-encoding steps
//! as ordinary statements. Each step encodes its value into a
//! [`Chunk`](bytebuild_builder::Chunk) and appends it to the session's
//! accumulated [`Builder`](bytebuild_builder::Builder) through the O(1)
//! append-to-end merge path; [`PutSession::run`] realizes everything into
//! one `Vec<u8>`.
//!
//! Nested structures are built with [`PutSession::subsession`], which runs
//! a sub-sequence of puts to completion and returns its concatenated bytes
//! as a single chunk, so an outer session can write a length prefix before
//! appending it, with no second pass over the data.
//!
//! # Example
//!
//! ```
//! use bytebuild_put::{BigEndian, PutSession};
//!
//! let mut s = PutSession::new();
//! s.put_u16::<BigEndian>(0x0102);
//! let body = PutSession::subsession(|s| {
//!     s.put_u8(3);
//!     s.put_u8(4);
//! })
//! .unwrap();
//! s.put_u8(body.len() as u8);
//! s.put_chunk(body);
//! assert_eq!(s.run().unwrap(), vec![1, 2, 2, 3, 4]);
//! ```

#![warn(missing_docs)]

mod session;

pub use bytebuild_builder::{
    BE, BigEndian, Builder, ByteOrder, Chunk, Error, LE, LittleEndian, NativeEndian, Result,
};
pub use session::PutSession;
