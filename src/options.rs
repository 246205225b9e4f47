//! Configuration options for a reading session.
//!
//! This module provides [`ReaderOptions`] and [`ReaderOptionsBuilder`]
//! for configuring pacing speed and the gesture/lifecycle timing thresholds
//! used by the playback state machine.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::ReaderOptions;
//! use std::time::Duration;
//!
//! // Using defaults (300 WPM)
//! let options = ReaderOptions::default();
//!
//! // Using builder for custom values
//! let options = ReaderOptions::builder()
//!     .base_wpm(400.0)
//!     .tap_threshold(Duration::from_millis(250))
//!     .build();
//! ```

use std::time::Duration;

/// Configuration options for a reading session.
///
/// Controls the nominal reading speed and the timing windows the playback
/// state machine uses to classify gestures and settle transitions.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Nominal reading speed in words per minute.
    ///
    /// The pacer derives its base per-word interval as `60 / base_wpm`
    /// seconds, then adjusts per word.
    ///
    /// Default: `300.0`
    pub base_wpm: f64,

    /// Presses shorter than this count as a tap; longer presses are holds.
    ///
    /// A tap toggles playback; a hold pauses only while held.
    ///
    /// Default: `200ms`
    pub tap_threshold: Duration,

    /// Window after foreground reactivation during which press events are
    /// dropped.
    ///
    /// Synthetic gesture events delivered during the background-to-foreground
    /// transition arrive within this window; real user taps take longer.
    ///
    /// Default: `100ms`
    pub gesture_debounce: Duration,

    /// Delay between displaying the final word and entering the finished
    /// state.
    ///
    /// Gives the reader a moment with the last word on screen before the
    /// session is marked read.
    ///
    /// Default: `200ms`
    pub settle_delay: Duration,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            base_wpm: 300.0,
            tap_threshold: Duration::from_millis(200),
            gesture_debounce: Duration::from_millis(100),
            settle_delay: Duration::from_millis(200),
        }
    }
}

impl ReaderOptions {
    /// Creates a new builder for ReaderOptions
    pub fn builder() -> ReaderOptionsBuilder {
        ReaderOptionsBuilder::default()
    }
}

/// Builder for [`ReaderOptions`].
///
/// ## Example
///
/// ```rust
/// use rapidread::ReaderOptions;
///
/// let options = ReaderOptions::builder()
///     .base_wpm(250.0)
///     .build();
/// ```
#[derive(Default)]
pub struct ReaderOptionsBuilder {
    base_wpm: Option<f64>,
    tap_threshold: Option<Duration>,
    gesture_debounce: Option<Duration>,
    settle_delay: Option<Duration>,
}

impl ReaderOptionsBuilder {
    /// Set the nominal reading speed in words per minute
    pub fn base_wpm(mut self, wpm: f64) -> Self {
        self.base_wpm = Some(wpm);
        self
    }

    /// Set the tap/hold classification threshold
    pub fn tap_threshold(mut self, threshold: Duration) -> Self {
        self.tap_threshold = Some(threshold);
        self
    }

    /// Set the post-reactivation gesture debounce window
    pub fn gesture_debounce(mut self, debounce: Duration) -> Self {
        self.gesture_debounce = Some(debounce);
        self
    }

    /// Set the end-of-article settling delay
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    /// Build the ReaderOptions
    pub fn build(self) -> ReaderOptions {
        let defaults = ReaderOptions::default();
        ReaderOptions {
            base_wpm: self.base_wpm.unwrap_or(defaults.base_wpm),
            tap_threshold: self.tap_threshold.unwrap_or(defaults.tap_threshold),
            gesture_debounce: self.gesture_debounce.unwrap_or(defaults.gesture_debounce),
            settle_delay: self.settle_delay.unwrap_or(defaults.settle_delay),
        }
    }
}
