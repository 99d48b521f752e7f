//! A buffering adapter in front of a blocking byte stream.
//!
//! [`BufferedRegion`] keeps one growable buffer and a fill cursor. Callers
//! accumulate bytes with [`fill`](BufferedRegion::fill), look at them with
//! [`peek`](BufferedRegion::peek), and drop what they consumed with
//! [`clear`](BufferedRegion::clear), which compacts the unconsumed tail back to
//! offset 0. No buffer is allocated per read.
//!
//! The usual shape is a polling loop that waits for a minimum frame size:
//!
//! ```rust
//! use bufregion::{BufferedRegion, Error};
//!
//! let mut region = BufferedRegion::with_capacity(&b"abcdefgh"[..], 16);
//! let mut frames = Vec::new();
//! loop {
//!     match region.fill() {
//!         Ok(_) => {}
//!         Err(Error::EndOfStream) => break,
//!         Err(err) => return Err(err),
//!     }
//!     while let Some(frame) = region.peek(0, 4).filter(|_| region.buffered() >= 4) {
//!         frames.push(frame.to_vec());
//!         region.clear(4)?;
//!     }
//! }
//! assert_eq!(frames, [b"abcd".to_vec(), b"efgh".to_vec()]);
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod options;
mod region;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use options::{DEFAULT_CAPACITY, RegionOptions};
pub use region::BufferedRegion;
