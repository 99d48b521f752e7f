use core::fmt;
use std::io::Read;

use bstr::BStr;

use crate::{
    error::{Error, Result},
    options::RegionOptions,
};

/// A single growable byte buffer filled from a blocking stream.
///
/// Valid data always starts at offset 0 and ends at the fill cursor
/// ([`buffered`](Self::buffered)). Everything past the cursor is free space for
/// the next [`fill`](Self::fill).
///
/// ```rust
/// use bufregion::BufferedRegion;
///
/// let mut region = BufferedRegion::with_capacity(&b"HELLO, WORLD"[..], 16);
/// region.fill()?;
/// assert_eq!(region.peek(0, 5), Some(&b"HELLO"[..]));
/// region.clear(7)?;
/// assert_eq!(region.data(), b"WORLD");
/// # Ok::<(), bufregion::Error>(())
/// ```
pub struct BufferedRegion<S> {
    stream: S,
    buffer: Vec<u8>,
    filled: usize,
    scrub_on_clear: bool,
}

impl<S> BufferedRegion<S> {
    /// Wraps `stream` with a buffer of [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) bytes.
    pub fn new(stream: S) -> Self {
        Self::with_options(stream, RegionOptions::default())
    }

    /// Wraps `stream` with a buffer of `capacity` bytes.
    pub fn with_capacity(stream: S, capacity: usize) -> Self {
        Self::with_options(
            stream,
            RegionOptions {
                capacity,
                ..RegionOptions::default()
            },
        )
    }

    /// Wraps `stream` using the given options.
    pub fn with_options(stream: S, options: RegionOptions) -> Self {
        Self {
            stream,
            buffer: vec![0; options.capacity],
            filled: 0,
            scrub_on_clear: options.scrub_on_clear,
        }
    }

    /// Number of valid bytes at the front of the buffer.
    #[inline]
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.filled
    }

    /// Total size of the buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Free space left for the next fill.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.filled
    }

    /// Whether the next fill has no room to read into.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.buffer.len()
    }

    /// Whether no valid bytes are buffered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns `buffer[start..stop]`, or `None` when there is nothing to show.
    ///
    /// `None` means "not enough data yet": `start` lies past the fill cursor,
    /// `stop` lies past the capacity, or `start > stop`. A `stop` beyond
    /// [`buffered`](Self::buffered) but within the capacity is allowed and
    /// exposes free-space bytes that no fill has written since the last clear.
    ///
    /// The returned slice borrows the region, so no fill, clear or grow can
    /// happen while it is alive.
    #[must_use]
    pub fn peek(&self, start: usize, stop: usize) -> Option<&[u8]> {
        if start > self.filled || start > stop {
            return None;
        }
        self.buffer.get(start..stop)
    }

    /// All valid bytes, `buffer[0..buffered()]`.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer[..self.filled]
    }

    /// Discards the first `position` bytes and moves the rest to the front.
    ///
    /// `position` is checked against the capacity, not the fill cursor. A
    /// position past the cursor discards everything and leaves the region
    /// empty.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] when `position > capacity()`. The region is
    /// left untouched.
    pub fn clear(&mut self, position: usize) -> Result<()> {
        let capacity = self.buffer.len();
        if position > capacity {
            return Err(Error::InvalidPosition { position, capacity });
        }

        if position < self.filled {
            let remaining = self.filled - position;
            self.buffer.copy_within(position..self.filled, 0);
            if self.scrub_on_clear {
                self.buffer[remaining..self.filled].fill(0);
            }
            self.filled = remaining;
        } else {
            if self.scrub_on_clear {
                self.buffer[..position].fill(0);
            }
            self.filled = 0;
        }

        tracing::trace!(position, buffered = self.filled, "cleared region");
        Ok(())
    }

    /// Appends `extra` zeroed bytes to the buffer.
    ///
    /// Buffered data and the fill cursor are unchanged. There is no upper
    /// bound; callers reading from an untrusted peer should cap it themselves.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes. Allocation
    /// failure aborts.
    pub fn grow(&mut self, extra: usize) {
        self.buffer.reserve_exact(extra);
        let capacity = self.buffer.len() + extra;
        self.buffer.resize(capacity, 0);
        tracing::debug!(capacity, "region capacity grown");
    }

    /// Borrows the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Mutably borrows the underlying stream.
    ///
    /// Reading from it directly bypasses the buffer.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Unwraps the stream. Buffered bytes are dropped.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read> BufferedRegion<S> {
    /// Issues exactly one read into the free tail and advances the cursor.
    ///
    /// Returns the number of bytes read, which may be anything from zero up
    /// to [`remaining`](Self::remaining). Callers needing a minimum amount
    /// loop on `fill` and check [`buffered`](Self::buffered) in between.
    ///
    /// When the buffer is already full the read still happens, with an empty
    /// target, and whatever the stream answers is passed back unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::EndOfStream`] when the stream returns zero bytes for a
    ///   non-empty target.
    /// - [`Error::Io`] for any stream error, `Interrupted` included.
    pub fn fill(&mut self) -> Result<usize> {
        let tail = &mut self.buffer[self.filled..];
        let requested = tail.len();

        match self.stream.read(tail) {
            Ok(0) if requested > 0 => {
                tracing::debug!(buffered = self.filled, "end of stream");
                Err(Error::EndOfStream)
            }
            Ok(read) => {
                debug_assert!(read <= requested, "reader overreported {read} > {requested}");
                let read = read.min(requested);
                self.filled += read;
                tracing::trace!(read, buffered = self.filled, "filled region");
                Ok(read)
            }
            Err(err) => {
                tracing::debug!(error = %err, buffered = self.filled, "stream read failed");
                Err(err.into())
            }
        }
    }
}

impl<S> fmt::Debug for BufferedRegion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedRegion")
            .field("buffered", &self.filled)
            .field("capacity", &self.buffer.len())
            .field("data", &BStr::new(self.data()))
            .finish_non_exhaustive()
    }
}
