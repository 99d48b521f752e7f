use std::io;

use thiserror::Error;

/// Errors surfaced by [`BufferedRegion`](crate::BufferedRegion).
///
/// Nothing is retried internally. Stream failures are reported after the fill
/// cursor has absorbed whatever the stream delivered.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying stream failed to read.
    #[error("stream read failed: {0}")]
    Io(#[from] io::Error),
    /// The stream reported end-of-stream while the buffer still had free space.
    #[error("end of stream")]
    EndOfStream,
    /// `clear` was asked to discard more bytes than the buffer can hold.
    #[error("invalid clear position {position} (capacity {capacity})")]
    InvalidPosition {
        /// The rejected position.
        position: usize,
        /// Capacity of the buffer when the call was made.
        capacity: usize,
    },
}

impl Error {
    /// Returns `true` for [`Error::EndOfStream`].
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
