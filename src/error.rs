//! Error types for tuple operations.

use thiserror::Error;

/// Result type alias for tuple operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A violated call-site contract.
///
/// Every variant means the caller passed something that can never be valid
/// for the tuple in question. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index outside `0..dimensions`.
    #[error("Index {index} is out of range for {dimensions} dimensions")]
    IndexOutOfRange {
        /// The index as given by the caller.
        index: i128,
        /// The number of components that were available.
        dimensions: usize,
    },

    /// A buffer, array or index list of the wrong length.
    #[error("Size mismatch: need {required} values, got {actual}")]
    SizeMismatch {
        /// The length the operation needs.
        required: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// Any other invalid argument, e.g. a negative tolerance.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn index_out_of_range(index: i128, dimensions: usize) -> Self {
        log::trace!("index {} rejected for {} dimensions", index, dimensions);
        Error::IndexOutOfRange {index, dimensions}
    }

    pub(crate) fn size_mismatch(required: usize, actual: usize) -> Self {
        log::trace!("size {} rejected, {} required", actual, required);
        Error::SizeMismatch {required, actual}
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("invalid argument: {}", message);
        Error::InvalidArgument(message)
    }
}

// ----------------------------------------------------------------------------
