//! The immutable byte payload carried by every tree node.

/// An immutable, already-encoded, contiguous run of bytes.
///
/// Chunks are produced by the [`encode`](crate::encode) catalogue or lifted
/// from caller-provided bytes; the [`Builder`](crate::Builder) never reads
/// or rewrites their contents, it only concatenates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    bytes: Vec<u8>,
}

impl Chunk {
    /// Wrap an owned byte vector. No copy is made.
    pub fn new(bytes: Vec<u8>) -> Self {
        Chunk { bytes }
    }

    /// The byte length of this chunk.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if this chunk carries zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the chunk and return the owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Chunk::new(bytes)
    }
}

impl From<&[u8]> for Chunk {
    fn from(bytes: &[u8]) -> Self {
        Chunk::new(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Chunk {
    fn from(bytes: [u8; N]) -> Self {
        Chunk::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
