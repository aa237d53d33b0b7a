use std::collections::TryReserveError;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for buffer realization.
///
/// Building a tree of chunks cannot fail; the only fallible step is turning
/// the finished tree into one contiguous buffer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The host refused to allocate the output buffer. Fatal for that
    /// realize call; never retried internally.
    #[error("output buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Summed chunk lengths exceed `usize`.
    #[error("overflow error {0}")]
    Overflow(&'static str),
}
