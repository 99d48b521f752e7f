/// Capacity used by [`BufferedRegion::new`](crate::BufferedRegion::new).
pub const DEFAULT_CAPACITY: usize = 2048;

/// Configuration for a [`BufferedRegion`](crate::BufferedRegion).
///
/// # Examples
///
/// ```rust
/// use bufregion::{BufferedRegion, RegionOptions};
///
/// let options = RegionOptions {
///     capacity: 64,
///     ..Default::default()
/// };
/// let region = BufferedRegion::with_options(&b"abc"[..], options);
/// assert_eq!(region.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct RegionOptions {
    /// Initial size of the buffer in bytes.
    ///
    /// The buffer only ever changes size through an explicit
    /// [`grow`](crate::BufferedRegion::grow).
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`] (2048)
    pub capacity: usize,

    /// Whether [`clear`](crate::BufferedRegion::clear) zeroes the bytes it
    /// vacates.
    ///
    /// Zeroing keeps stale data out of peeks that reach past the fill cursor.
    /// It does not change what is visible inside `[0, buffered())`.
    ///
    /// # Default
    ///
    /// `true`
    pub scrub_on_clear: bool,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            scrub_on_clear: true,
        }
    }
}
