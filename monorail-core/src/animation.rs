//! Animation clock and the simulated speed readout
//!
//! The readout follows `100 * sin(phase * PI)^2`, where `phase` is a sawtooth
//! over a coarse tick time base. One tick is `tick_ms` milliseconds of wall
//! time and the sawtooth repeats every `period_ticks` ticks.

use core::f64::consts::PI;
use core::fmt::Write;

use heapless::String;

/// Default tick length in milliseconds
pub const DEFAULT_TICK_MS: u32 = 10;

/// Default sawtooth period in ticks (10 s of wall time)
pub const DEFAULT_PERIOD_TICKS: u32 = 1000;

/// Upper bound of the readout
pub const MAX_SPEED: f64 = 100.0;

/// Capacity of a formatted readout ("100.00" plus headroom)
pub const SPEED_TEXT_LEN: usize = 8;

/// Formatted readout
pub type SpeedText = String<SPEED_TEXT_LEN>;

/// Frame clock owned by the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationClock {
    last_frame_ms: u64,
    elapsed_ms: u64,
    period_ticks: u32,
    tick_ms: u32,
}

impl AnimationClock {
    /// Create a clock with its origin at `now_ms`
    ///
    /// Zero `period_ticks` or `tick_ms` are clamped to 1.
    pub const fn new(now_ms: u64, period_ticks: u32, tick_ms: u32) -> Self {
        Self {
            last_frame_ms: now_ms,
            elapsed_ms: 0,
            period_ticks: if period_ticks == 0 { 1 } else { period_ticks },
            tick_ms: if tick_ms == 0 { 1 } else { tick_ms },
        }
    }

    /// Record a new frame at `now_ms` and return the readout for it
    pub fn advance(&mut self, now_ms: u64) -> f64 {
        self.elapsed_ms = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;
        speed_at_ticks(self.ticks(now_ms), self.period_ticks)
    }

    /// Coarse time base for `now_ms`
    pub const fn ticks(&self, now_ms: u64) -> u64 {
        now_ms / self.tick_ms as u64
    }

    /// Timestamp of the most recent frame
    pub const fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    /// Time between the two most recent frames
    ///
    /// Tracked for frame pacing; rendering does not read it.
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Sawtooth period in ticks
    pub const fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    /// Tick length in milliseconds
    pub const fn tick_ms(&self) -> u32 {
        self.tick_ms
    }
}

/// Sawtooth phase in `[0, 1)`
pub fn phase(ticks: u64, period_ticks: u32) -> f64 {
    let period = period_ticks.max(1) as u64;
    (ticks % period) as f64 / period as f64
}

/// Readout for a tick count, always within `[0, MAX_SPEED]`
pub fn speed_at_ticks(ticks: u64, period_ticks: u32) -> f64 {
    let s = libm::sin(phase(ticks, period_ticks) * PI);
    (MAX_SPEED * s * s).clamp(0.0, MAX_SPEED)
}

/// Format a readout as a zero-padded, 6-wide, 2-decimal string ("042.30")
pub fn format_speed(speed: f64) -> SpeedText {
    let mut text = SpeedText::new();
    // Readouts are clamped to [0, 100], so the longest output is "100.00"
    let _ = write!(text, "{:06.2}", speed.clamp(0.0, MAX_SPEED));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_at_period_start() {
        assert_eq!(speed_at_ticks(0, 1000), 0.0);
        assert_eq!(speed_at_ticks(1000, 1000), 0.0);
        assert_eq!(speed_at_ticks(7000, 1000), 0.0);
    }

    #[test]
    fn test_max_at_half_period() {
        assert_eq!(speed_at_ticks(500, 1000), 100.0);
        assert_eq!(speed_at_ticks(3500, 1000), 100.0);
    }

    #[test]
    fn test_quarter_period_is_half_speed() {
        let v = speed_at_ticks(250, 1000);
        assert!((v - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(42.3).as_str(), "042.30");
        assert_eq!(format_speed(0.0).as_str(), "000.00");
        assert_eq!(format_speed(100.0).as_str(), "100.00");
        assert_eq!(format_speed(7.5).as_str(), "007.50");
    }

    #[test]
    fn test_format_clamps_out_of_range() {
        assert_eq!(format_speed(-3.0).as_str(), "000.00");
        assert_eq!(format_speed(250.0).as_str(), "100.00");
    }

    #[test]
    fn test_clock_tracks_elapsed() {
        let mut clock = AnimationClock::new(1_000, 1000, 10);
        assert_eq!(clock.elapsed_ms(), 0);

        clock.advance(1_016);
        assert_eq!(clock.elapsed_ms(), 16);
        assert_eq!(clock.last_frame_ms(), 1_016);

        clock.advance(1_050);
        assert_eq!(clock.elapsed_ms(), 34);
    }

    #[test]
    fn test_clock_end_to_end() {
        let mut clock = AnimationClock::new(0, 1000, 10);
        assert_eq!(format_speed(clock.advance(0)).as_str(), "000.00");
        // 5000 ms = 500 ticks = half period
        assert_eq!(format_speed(clock.advance(5_000)).as_str(), "100.00");
        // Sub-tick milliseconds are truncated
        assert_eq!(clock.advance(5_009), 100.0);
    }

    #[test]
    fn test_zero_config_is_clamped() {
        let clock = AnimationClock::new(0, 0, 0);
        assert_eq!(clock.period_ticks(), 1);
        assert_eq!(clock.tick_ms(), 1);
    }

    proptest! {
        #[test]
        fn prop_speed_in_range(ticks in any::<u64>()) {
            let v = speed_at_ticks(ticks, 1000);
            prop_assert!((0.0..=100.0).contains(&v));
        }

        #[test]
        fn prop_speed_is_periodic(ticks in 0u64..u64::MAX - 1000) {
            prop_assert_eq!(speed_at_ticks(ticks, 1000), speed_at_ticks(ticks + 1000, 1000));
        }

        #[test]
        fn prop_phase_is_sawtooth(ticks in any::<u64>(), period in 1u32..100_000) {
            let p = phase(ticks, period);
            prop_assert!((0.0..1.0).contains(&p));
        }

        #[test]
        fn prop_formatted_width_is_fixed(speed in 0.0f64..=100.0) {
            let text = format_speed(speed);
            prop_assert_eq!(text.len(), 6);
            prop_assert_eq!(text.as_bytes()[3], b'.');
        }
    }
}
