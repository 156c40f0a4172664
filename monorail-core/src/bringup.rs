//! Display bring-up
//!
//! A panel that fails `init` is retried a fixed number of times with a pause
//! in between. Once every attempt has failed the caller gives up and the
//! display stays dark.

use embedded_hal_async::delay::DelayNs;

use crate::traits::{DisplayError, DisplaySurface};

/// Init attempts before giving up
pub const INIT_ATTEMPTS: u8 = 3;

/// Pause between init attempts
pub const INIT_RETRY_DELAY_MS: u32 = 1000;

/// Retry schedule for display init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitRetry {
    /// Total attempts, including the first (0 is treated as 1)
    pub attempts: u8,
    /// Pause after each failed attempt except the last
    pub delay_ms: u32,
}

impl Default for InitRetry {
    fn default() -> Self {
        Self {
            attempts: INIT_ATTEMPTS,
            delay_ms: INIT_RETRY_DELAY_MS,
        }
    }
}

/// Initialize `surface`, retrying on failure
///
/// `on_failure` is called with the 1-based attempt number and the error of
/// every failed attempt. Returns the attempt that succeeded, or the last
/// error once all attempts are used up.
pub async fn init_with_retry<S, D, F>(
    surface: &mut S,
    delay: &mut D,
    retry: InitRetry,
    mut on_failure: F,
) -> Result<u8, DisplayError>
where
    S: DisplaySurface,
    D: DelayNs,
    F: FnMut(u8, DisplayError),
{
    let attempts = retry.attempts.max(1);
    let mut attempt = 1;
    loop {
        match surface.init().await {
            Ok(()) => return Ok(attempt),
            Err(e) => {
                on_failure(attempt, e);
                if attempt >= attempts {
                    return Err(e);
                }
                attempt += 1;
                delay.delay_ms(retry.delay_ms).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Xbm;
    use crate::layout::Position;
    use crate::traits::FontFace;
    use embassy_futures::block_on;
    use std::vec::Vec;

    /// Surface whose `init` fails a set number of times
    struct FlakySurface {
        failures_left: u8,
        inits: u8,
    }

    impl FlakySurface {
        fn failing(times: u8) -> Self {
            Self {
                failures_left: times,
                inits: 0,
            }
        }
    }

    impl DisplaySurface for FlakySurface {
        async fn init(&mut self) -> Result<(), DisplayError> {
            self.inits += 1;
            if self.failures_left > 0 {
                self.failures_left -= 1;
                Err(DisplayError::Communication)
            } else {
                Ok(())
            }
        }

        fn set_font(&mut self, _font: FontFace) {}

        fn clear_buffer(&mut self) {}

        fn draw_bitmap(&mut self, _origin: Position, _bitmap: &Xbm) {}

        fn draw_text(&mut self, _origin: Position, _text: &str) {}

        async fn present(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn begin_paged_frame(&mut self) {}

        async fn next_page(&mut self) -> Result<bool, DisplayError> {
            Ok(false)
        }
    }

    /// Delay that records requested pauses instead of waiting
    #[derive(Default)]
    struct RecordingDelay {
        pauses_ms: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        async fn delay_ns(&mut self, _ns: u32) {}

        async fn delay_ms(&mut self, ms: u32) {
            self.pauses_ms.push(ms);
        }
    }

    #[test]
    fn test_first_attempt_succeeds() {
        let mut surface = FlakySurface::failing(0);
        let mut delay = RecordingDelay::default();
        let mut failures = Vec::new();

        let result = block_on(init_with_retry(
            &mut surface,
            &mut delay,
            InitRetry::default(),
            |n, e| failures.push((n, e)),
        ));

        assert_eq!(result, Ok(1));
        assert_eq!(surface.inits, 1);
        assert!(delay.pauses_ms.is_empty());
        assert!(failures.is_empty());
    }

    #[test]
    fn test_recovers_after_failures() {
        let mut surface = FlakySurface::failing(2);
        let mut delay = RecordingDelay::default();
        let mut failures = Vec::new();

        let result = block_on(init_with_retry(
            &mut surface,
            &mut delay,
            InitRetry::default(),
            |n, e| failures.push((n, e)),
        ));

        assert_eq!(result, Ok(3));
        assert_eq!(surface.inits, 3);
        assert_eq!(delay.pauses_ms, [1000, 1000]);
        assert_eq!(
            failures,
            [(1, DisplayError::Communication), (2, DisplayError::Communication)]
        );
    }

    #[test]
    fn test_gives_up_after_three_attempts() {
        let mut surface = FlakySurface::failing(u8::MAX);
        let mut delay = RecordingDelay::default();
        let mut failures = Vec::new();

        let result = block_on(init_with_retry(
            &mut surface,
            &mut delay,
            InitRetry::default(),
            |n, _| failures.push(n),
        ));

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(surface.inits, 3);
        // No pause after the final attempt
        assert_eq!(delay.pauses_ms, [1000, 1000]);
        assert_eq!(failures, [1, 2, 3]);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let mut surface = FlakySurface::failing(u8::MAX);
        let mut delay = RecordingDelay::default();
        let retry = InitRetry {
            attempts: 0,
            delay_ms: 5,
        };

        let result = block_on(init_with_retry(&mut surface, &mut delay, retry, |_, _| {}));

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(surface.inits, 1);
        assert!(delay.pauses_ms.is_empty());
    }
}
