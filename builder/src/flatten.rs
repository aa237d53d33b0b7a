//! Buffer realization: measure once, copy once.

use crate::{Builder, Result};

/// Consume a builder and produce the single contiguous output buffer.
///
/// Two in-order passes over the tree, O(total chunk bytes):
///
/// 1. a measuring fold sums every chunk's length (checked);
/// 2. the output vector is allocated at exactly that size, then a copying
///    fold appends each chunk's bytes at the running offset.
///
/// The offset after the final chunk always equals the measured total; that
/// equality is the correctness invariant of this pass. The only failure
/// modes are a length sum exceeding `usize` and the host refusing the
/// allocation, both reported to the caller. A partial buffer is never
/// returned.
pub fn realize(builder: Builder) -> Result<Vec<u8>> {
    let total = builder.total_len()?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)?;

    let out = builder.fold(out, |mut out, chunk| {
        out.extend_from_slice(chunk.as_bytes());
        out
    });
    debug_assert_eq!(out.len(), total);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::{Builder, Chunk};

    fn singleton(bytes: &[u8]) -> Builder {
        Builder::singleton(Chunk::from(bytes))
    }

    #[test]
    fn empty_builder_realizes_to_empty_buffer() {
        assert_eq!(Builder::empty().realize().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn realized_bytes_are_concatenation_in_append_order() {
        let b = singleton(&[1, 2])
            .merge(singleton(&[]))
            .merge(singleton(&[3]))
            .merge(singleton(&[4, 5, 6]));
        assert_eq!(b.realize().unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn parenthesization_does_not_change_realized_bytes() {
        let grouped = (singleton(&[1]).merge(singleton(&[2])))
            .merge(singleton(&[3]).merge(singleton(&[4])));
        let chained = singleton(&[1])
            .merge(singleton(&[2]).merge(singleton(&[3]).merge(singleton(&[4]))));
        assert_eq!(grouped.realize().unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(chained.realize().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn measured_length_equals_realized_length() {
        let b = singleton(&[9; 17])
            .merge(singleton(&[]))
            .merge(singleton(&[1, 2, 3]));
        let measured = b.total_len().unwrap();
        assert_eq!(b.realize().unwrap().len(), measured);
    }

    #[test]
    fn ten_thousand_appends_realize_exactly() {
        let mut b = Builder::empty();
        let expected: Vec<u8> = (0..10_000u32).map(|i| (i % 256) as u8).collect();
        for &byte in &expected {
            b = b.merge(singleton(&[byte]));
        }
        let out = b.realize().unwrap();
        assert_eq!(out.len(), 10_000);
        assert_eq!(out, expected);
    }
}
