//! Wall clock source

/// Monotonic millisecond clock
///
/// The firmware backs this with the embassy time driver.
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;
}
