//! Error type shared by every collection in the crate.

use thiserror::Error;

/// The error returned by fallible collection operations.
///
/// Every variant describes a violated precondition of the call that produced
/// it. Checks happen before any mutation, so a collection that returned an
/// error is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index argument was outside the valid bound for the operation.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },
    /// The operation requires at least one element.
    #[error("collection is empty")]
    Empty,
    /// The operation is part of the contract but deliberately not implemented.
    #[error("operation `{operation}` is not supported")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

/// A specialized [`Result`](core::result::Result) type for collection
/// operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Fails with [`Error::OutOfRange`] unless `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}

/// Fails with [`Error::OutOfRange`] unless `index <= len`.
///
/// Inserting at `len` is valid since it appends after all elements.
#[inline]
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}
