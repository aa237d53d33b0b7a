//! Fixed-width primitive encoders.
//!
//! One pure function per numeric kind; each encodes its value into a
//! freshly allocated [`Chunk`] of the kind's exact byte width. Multi-byte
//! kinds are generic over [`ByteOrder`], so `u32::<BigEndian>(7)` and
//! `u32::<LittleEndian>(7)` pick the wire order at the call site, the same
//! way `byteorder` is used elsewhere in this workspace.
//!
//! Out-of-range inputs are unrepresentable: the Rust integer and float
//! types fix the width, so no encoder validates anything.

use byteorder::ByteOrder;

use crate::Chunk;

/// Encode an unsigned byte. Byte order is irrelevant at width 1.
pub fn u8(value: u8) -> Chunk {
    Chunk::from([value])
}

/// Encode a signed byte (two's complement). Byte order is irrelevant at
/// width 1.
pub fn i8(value: i8) -> Chunk {
    Chunk::from([value as u8])
}

/// Encode an unsigned 16-bit integer in the given byte order.
pub fn u16<O: ByteOrder>(value: u16) -> Chunk {
    let mut buf = [0u8; 2];
    O::write_u16(&mut buf, value);
    Chunk::from(buf)
}

/// Encode a signed 16-bit integer (two's complement) in the given byte
/// order.
pub fn i16<O: ByteOrder>(value: i16) -> Chunk {
    let mut buf = [0u8; 2];
    O::write_i16(&mut buf, value);
    Chunk::from(buf)
}

/// Encode an unsigned 32-bit integer in the given byte order.
pub fn u32<O: ByteOrder>(value: u32) -> Chunk {
    let mut buf = [0u8; 4];
    O::write_u32(&mut buf, value);
    Chunk::from(buf)
}

/// Encode a signed 32-bit integer (two's complement) in the given byte
/// order.
pub fn i32<O: ByteOrder>(value: i32) -> Chunk {
    let mut buf = [0u8; 4];
    O::write_i32(&mut buf, value);
    Chunk::from(buf)
}

/// Encode an unsigned 64-bit integer in the given byte order.
pub fn u64<O: ByteOrder>(value: u64) -> Chunk {
    let mut buf = [0u8; 8];
    O::write_u64(&mut buf, value);
    Chunk::from(buf)
}

/// Encode a signed 64-bit integer (two's complement) in the given byte
/// order.
pub fn i64<O: ByteOrder>(value: i64) -> Chunk {
    let mut buf = [0u8; 8];
    O::write_i64(&mut buf, value);
    Chunk::from(buf)
}

/// Encode an IEEE-754 single-precision float in the given byte order.
pub fn f32<O: ByteOrder>(value: f32) -> Chunk {
    let mut buf = [0u8; 4];
    O::write_f32(&mut buf, value);
    Chunk::from(buf)
}

/// Encode an IEEE-754 double-precision float in the given byte order.
pub fn f64<O: ByteOrder>(value: f64) -> Chunk {
    let mut buf = [0u8; 8];
    O::write_f64(&mut buf, value);
    Chunk::from(buf)
}
