//! The session accumulator behind the typed put actions.

use bytebuild_builder::{Builder, Chunk, Result, encode};
use byteorder::ByteOrder;

/// An ordered sequence of append actions accumulating into a
/// [`Builder`].
///
/// Every `put_*` call appends exactly one chunk; chunks appear in the
/// realized buffer in program order of the calls that produced them, with
/// no padding or framing inserted in between. Length prefixes, alignment
/// and framing are the caller's to write, as ordinary puts.
///
/// A session is finalized at most once: [`PutSession::run`] consumes it.
#[derive(Debug, Default)]
pub struct PutSession {
    builder: Builder,
}

impl PutSession {
    /// Start an empty session.
    pub fn new() -> Self {
        PutSession {
            builder: Builder::empty(),
        }
    }

    /// The one primitive append action: everything else in this type is an
    /// encoder call followed by this.
    pub fn put_chunk(&mut self, chunk: Chunk) {
        let acc = std::mem::take(&mut self.builder);
        self.builder = acc.merge(Builder::singleton(chunk));
    }

    /// Append a raw byte slice as one chunk.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.put_chunk(Chunk::from(bytes));
    }

    /// Append an unsigned byte.
    pub fn put_u8(&mut self, value: u8) {
        self.put_chunk(encode::u8(value));
    }

    /// Append a signed byte.
    pub fn put_i8(&mut self, value: i8) {
        self.put_chunk(encode::i8(value));
    }

    /// Append an unsigned 16-bit integer in byte order `O`.
    pub fn put_u16<O: ByteOrder>(&mut self, value: u16) {
        self.put_chunk(encode::u16::<O>(value));
    }

    /// Append a signed 16-bit integer in byte order `O`.
    pub fn put_i16<O: ByteOrder>(&mut self, value: i16) {
        self.put_chunk(encode::i16::<O>(value));
    }

    /// Append an unsigned 32-bit integer in byte order `O`.
    pub fn put_u32<O: ByteOrder>(&mut self, value: u32) {
        self.put_chunk(encode::u32::<O>(value));
    }

    /// Append a signed 32-bit integer in byte order `O`.
    pub fn put_i32<O: ByteOrder>(&mut self, value: i32) {
        self.put_chunk(encode::i32::<O>(value));
    }

    /// Append an unsigned 64-bit integer in byte order `O`.
    pub fn put_u64<O: ByteOrder>(&mut self, value: u64) {
        self.put_chunk(encode::u64::<O>(value));
    }

    /// Append a signed 64-bit integer in byte order `O`.
    pub fn put_i64<O: ByteOrder>(&mut self, value: i64) {
        self.put_chunk(encode::i64::<O>(value));
    }

    /// Append an IEEE-754 single-precision float in byte order `O`.
    pub fn put_f32<O: ByteOrder>(&mut self, value: f32) {
        self.put_chunk(encode::f32::<O>(value));
    }

    /// Append an IEEE-754 double-precision float in byte order `O`.
    pub fn put_f64<O: ByteOrder>(&mut self, value: f64) {
        self.put_chunk(encode::f64::<O>(value));
    }

    /// Bytes accumulated so far, i.e. the length [`PutSession::run`] would
    /// realize at this point. Useful for writing framing fields.
    pub fn len(&self) -> Result<usize> {
        self.builder.total_len()
    }

    /// `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// Run a nested sequence of put actions to completion and return its
    /// concatenated output as one standalone chunk.
    ///
    /// The chunk's [`len`](Chunk::len) is the sub-structure's byte length,
    /// so a caller can write a length prefix and then `put_chunk` the body,
    /// without a second pass over the whole buffer.
    pub fn subsession(actions: impl FnOnce(&mut PutSession)) -> Result<Chunk> {
        let mut nested = PutSession::new();
        actions(&mut nested);
        Ok(Chunk::new(nested.run()?))
    }

    /// Hand the accumulated builder over without realizing it, e.g. to
    /// merge it into another builder.
    pub fn into_builder(self) -> Builder {
        self.builder
    }

    /// Finalize: drain the accumulated builder into the single contiguous
    /// output buffer. Consumes the session, so a finished session cannot be
    /// appended to or run again.
    pub fn run(self) -> Result<Vec<u8>> {
        self.builder.realize()
    }
}

#[cfg(test)]
mod tests {
    use bytebuild_builder::{BigEndian, LittleEndian};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn puts_concatenate_in_program_order() {
        let mut s = PutSession::new();
        s.put_u8(1);
        s.put_u16::<BigEndian>(0x0203);
        s.put_bytes(&[4, 5]);
        s.put_u16::<LittleEndian>(0x0706);
        assert_eq!(s.run().unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn signed_16_big_endian_realizes_twos_complement() {
        let mut s = PutSession::new();
        s.put_i16::<BigEndian>(-2);
        assert_eq!(s.run().unwrap(), vec![255, 254]);
    }

    #[test]
    fn subsession_bytes_prefix_with_their_length() {
        let mut s = PutSession::new();
        s.put_u8(1);
        s.put_u8(2);
        let body = PutSession::subsession(|s| {
            s.put_u8(3);
            s.put_u8(4);
        })
        .unwrap();
        s.put_u8(body.len() as u8);
        s.put_chunk(body);
        assert_eq!(s.run().unwrap(), vec![1, 2, 2, 3, 4]);
    }

    #[test]
    fn empty_session_runs_to_empty_buffer() {
        let s = PutSession::new();
        assert!(s.is_empty());
        assert_eq!(s.run().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn len_tracks_accumulated_bytes() {
        let mut s = PutSession::new();
        assert_eq!(s.len().unwrap(), 0);
        s.put_u32::<BigEndian>(7);
        s.put_f64::<LittleEndian>(0.5);
        assert_eq!(s.len().unwrap(), 12);
        assert_eq!(s.run().unwrap().len(), 12);
    }

    #[test]
    fn into_builder_composes_with_other_builders() {
        let mut head = PutSession::new();
        head.put_u8(0xAA);
        let mut tail = PutSession::new();
        tail.put_u8(0xBB);
        let merged = head.into_builder().merge(tail.into_builder());
        assert_eq!(merged.realize().unwrap(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn every_width_and_order_has_an_action() {
        let mut s = PutSession::new();
        s.put_i8(-1);
        s.put_u16::<LittleEndian>(1);
        s.put_i32::<BigEndian>(-1);
        s.put_u64::<LittleEndian>(1);
        s.put_i64::<BigEndian>(-1);
        s.put_f32::<BigEndian>(1.0);
        let out = s.run().unwrap();
        assert_eq!(out.len(), 1 + 2 + 4 + 8 + 8 + 4);
        assert_eq!(out[..3], [0xFF, 1, 0]);
        assert_eq!(out[3..7], [0xFF; 4]);
    }

    proptest! {
        #[test]
        fn raw_puts_realize_to_their_concatenation(
            pieces in prop::collection::vec(
                prop::collection::vec(any::<u8>(), 0..16),
                0..32,
            ),
        ) {
            let mut s = PutSession::new();
            for piece in &pieces {
                s.put_bytes(piece);
            }
            let expected: Vec<u8> = pieces.concat();
            prop_assert_eq!(s.run().unwrap(), expected);
        }
    }
}
