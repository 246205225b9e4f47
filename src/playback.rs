//! Playback state machine for a reading session.
//!
//! [`PlaybackController`] drives the one-word-at-a-time presentation loop:
//! it owns the press/hold/release gesture protocol, the
//! foreground/background lifecycle rules, and the advance loop that asks the
//! pacer for the next interval. Progress is written through a
//! [`ProgressStore`] at pause, backgrounding, and completion, never during
//! active playback.
//!
//! The controller is synchronous and single-threaded: every event takes an
//! explicit [`Instant`], and scheduling is cooperative. The host arms one
//! wake-up at a time from [`PlaybackController::next_wake`] and calls
//! [`PlaybackController::on_wake`] when it fires. Nothing blocks and nothing
//! races; event-arrival order is resolved deterministically by the gesture
//! debounce and staleness rules.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::{PlaybackController, PlaybackState, ReaderOptions, ReadingPacer};
//! use std::time::Instant;
//!
//! # struct NoStore;
//! # impl rapidread::ProgressStore for NoStore {
//! #     fn starting_index(&self) -> usize { 0 }
//! #     fn completed(&self) -> bool { false }
//! #     fn mark_opened(&mut self) {}
//! #     fn activate(&mut self, _index: usize) {}
//! #     fn save_index(&mut self, _index: usize) {}
//! #     fn mark_read(&mut self) {}
//! # }
//! let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
//! let pacer = ReadingPacer::new(words, 300.0);
//! let mut controller =
//!     PlaybackController::new(pacer, NoStore, ReaderOptions::default());
//!
//! let now = Instant::now();
//! controller.on_appear(now);
//! assert_eq!(controller.state(), PlaybackState::Paused);
//!
//! // A quick tap starts playback.
//! controller.press_start(now);
//! controller.press_end(now + std::time::Duration::from_millis(50));
//! assert_eq!(controller.state(), PlaybackState::Playing);
//! assert!(controller.next_wake().is_some());
//! ```

use crate::options::ReaderOptions;
use crate::pacer::ReadingPacer;
use log::debug;
use std::time::Instant;

/// Playback state of a reading session.
///
/// `Finished` is terminal; only re-opening the session with reset progress
/// leaves it, which is outside the controller's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
    Finished,
}

/// An in-flight press gesture, alive between press-start and its matching
/// press-end.
#[derive(Debug, Clone, Copy)]
struct HoldGesture {
    start_time: Instant,
    was_playing_before: bool,
}

/// A single cancellable deferred wake-up.
///
/// At most one deadline is armed at a time; arming replaces any previous
/// deadline and cancelling an unarmed timer is a no-op.
#[derive(Debug, Default)]
struct WakeTimer {
    deadline: Option<Instant>,
}

impl WakeTimer {
    fn arm(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consume the deadline if it is due at `now`.
    fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Persisted reading progress, as seen by the controller.
///
/// The sink side accepts word-index updates and terminal read markers; the
/// source side provides the session's starting index and prior completion
/// state. Implementations stamp their own wall-clock times.
pub trait ProgressStore {
    /// Word index the session starts from.
    fn starting_index(&self) -> usize;

    /// Whether a previous session already finished this article.
    fn completed(&self) -> bool;

    /// The reading screen became visible; refresh last-opened bookkeeping.
    fn mark_opened(&mut self);

    /// First-ever activation at `index`. Implementations ignore the call if
    /// the article already has progress.
    fn activate(&mut self, index: usize);

    /// Persist the current word index.
    fn save_index(&mut self, index: usize);

    /// Persist the terminal read marker.
    fn mark_read(&mut self);
}

impl ProgressStore for crate::Article {
    fn starting_index(&self) -> usize {
        self.status.reading_progress()
    }

    fn completed(&self) -> bool {
        self.status.is_read()
    }

    fn mark_opened(&mut self) {
        use crate::ReadingStatus;
        use std::time::SystemTime;
        self.status = match self.status {
            ReadingStatus::Unread { .. } => ReadingStatus::Unread {
                created_at: SystemTime::now(),
            },
            ReadingStatus::InProgress { progress, .. } => ReadingStatus::InProgress {
                progress,
                last_opened_at: SystemTime::now(),
            },
            ReadingStatus::Read { read_at } => ReadingStatus::Read { read_at },
        };
    }

    fn activate(&mut self, index: usize) {
        use crate::ReadingStatus;
        if let ReadingStatus::Unread { .. } = self.status {
            self.status = ReadingStatus::InProgress {
                progress: index,
                last_opened_at: std::time::SystemTime::now(),
            };
        }
    }

    fn save_index(&mut self, index: usize) {
        use crate::ReadingStatus;
        if let ReadingStatus::InProgress { last_opened_at, .. } = self.status {
            self.status = ReadingStatus::InProgress {
                progress: index,
                last_opened_at,
            };
        }
    }

    fn mark_read(&mut self) {
        self.status = crate::ReadingStatus::Read {
            read_at: std::time::SystemTime::now(),
        };
    }
}

/// Drives word-by-word playback of one article.
///
/// Single logical thread of control: gesture events, lifecycle events, and
/// scheduled wake-ups are all delivered on the same execution context. See
/// the module docs for the host-loop contract.
pub struct PlaybackController<S: ProgressStore> {
    pacer: ReadingPacer,
    store: S,
    options: ReaderOptions,
    state: PlaybackState,
    current_index: usize,
    words_since_resume: usize,
    hold: Option<HoldGesture>,
    last_reactivated: Option<Instant>,
    backgrounded: bool,
    settling: bool,
    wake: WakeTimer,
}

impl<S: ProgressStore> PlaybackController<S> {
    /// Create a controller over a paced article, resuming from the store's
    /// persisted index. Starts paused, or finished if a prior session
    /// completed the article.
    pub fn new(pacer: ReadingPacer, store: S, options: ReaderOptions) -> Self {
        let state = if store.completed() {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        };
        let word_count = pacer.word_count();
        let current_index = store.starting_index().min(word_count.saturating_sub(1));
        Self {
            pacer,
            store,
            options,
            state,
            current_index,
            words_since_resume: 0,
            hold: None,
            last_reactivated: None,
            backgrounded: false,
            settling: false,
            wake: WakeTimer::default(),
        }
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the word currently on screen.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The word currently on screen, or `""` past the end.
    pub fn current_word(&self) -> &str {
        self.pacer.word(self.current_index).unwrap_or("")
    }

    /// Deadline of the armed wake-up, if any. The host calls
    /// [`on_wake`](Self::on_wake) once it passes.
    pub fn next_wake(&self) -> Option<Instant> {
        self.wake.deadline
    }

    /// Access the progress store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The reading screen became visible.
    ///
    /// No-op when a prior session already finished the article; otherwise
    /// refreshes the store's last-opened bookkeeping. Playback itself waits
    /// for a tap.
    pub fn on_appear(&mut self, _now: Instant) {
        if self.state == PlaybackState::Finished {
            return;
        }
        self.store.mark_opened();
    }

    /// The reading screen is being torn down: cancel any pending wake-up and
    /// persist the current index.
    pub fn on_disappear(&mut self, _now: Instant) {
        self.wake.cancel();
        self.store.save_index(self.current_index);
    }

    /// The app moved to the background or became inactive.
    ///
    /// Forces a pause (with persist) if playing. An open gesture is kept;
    /// whether it was orphaned by the interruption is decided at the next
    /// press event against the reactivation timestamp, which avoids losing a
    /// gesture that is still genuinely in flight.
    pub fn on_background(&mut self, _now: Instant) {
        self.backgrounded = true;
        if self.state == PlaybackState::Playing {
            self.enter_paused();
        }
    }

    /// The app returned to the foreground. Records the reactivation
    /// timestamp used by the debounce and staleness checks.
    pub fn on_foreground(&mut self, now: Instant) {
        self.backgrounded = false;
        self.last_reactivated = Some(now);
    }

    /// A press gesture began.
    ///
    /// Dropped while backgrounded and within the debounce window after
    /// reactivation (synthetic events delivered during the transition fire
    /// that quickly). A leftover gesture whose start predates the last
    /// reactivation lost its end event to the interruption and is discarded
    /// before the new press is considered.
    pub fn press_start(&mut self, now: Instant) {
        if self.backgrounded {
            return;
        }
        if let Some(reactivated) = self.last_reactivated {
            if now.duration_since(reactivated) < self.options.gesture_debounce {
                return;
            }
            if let Some(hold) = self.hold {
                if hold.start_time < reactivated {
                    debug!("discarding stale gesture from before reactivation");
                    self.hold = None;
                }
            }
        }

        if self.hold.is_none() {
            let was_playing = self.state == PlaybackState::Playing;
            self.hold = Some(HoldGesture {
                start_time: now,
                was_playing_before: was_playing,
            });
            if was_playing {
                // Provisional pause-on-hold; undone if the press turns out to
                // be a hold rather than a tap.
                self.enter_paused();
            }
        }
    }

    /// A press gesture ended.
    ///
    /// The gesture is closed unconditionally. Beyond that this is a no-op
    /// when there was no open gesture, while backgrounded, when the gesture
    /// is stale, or when the session is finished. A tap toggles playback; a
    /// hold pauses for its duration and resumes on release.
    pub fn press_end(&mut self, now: Instant) {
        let Some(hold) = self.hold.take() else {
            return;
        };
        if self.backgrounded {
            return;
        }
        if let Some(reactivated) = self.last_reactivated {
            if hold.start_time < reactivated {
                return;
            }
        }
        if self.state == PlaybackState::Finished {
            return;
        }

        let press_duration = now.duration_since(hold.start_time);
        if press_duration < self.options.tap_threshold {
            // Tap: pause if it was playing (already applied at press-start),
            // resume otherwise.
            if !hold.was_playing_before {
                self.resume(now);
            }
        } else {
            // Hold: the provisional pause is undone on release; holding while
            // already paused changes nothing.
            if hold.was_playing_before {
                self.resume(now);
            }
        }
    }

    /// A scheduled wake-up fired.
    ///
    /// Advances by exactly one word when the state is still `Playing`, then
    /// either arms the next wake-up or, at the last word, a short settling
    /// delay after which the session finishes.
    pub fn on_wake(&mut self, now: Instant) {
        if !self.wake.fire_due(now) {
            return;
        }

        if self.settling {
            self.settling = false;
            if self.state == PlaybackState::Playing {
                self.state = PlaybackState::Finished;
                debug!("playback finished at index {}", self.current_index);
                self.store.mark_read();
            }
            return;
        }

        if self.state != PlaybackState::Playing {
            return;
        }

        let word_count = self.pacer.word_count();
        let last_index = word_count.saturating_sub(1);
        if self.current_index < last_index {
            self.current_index += 1;
        }
        self.words_since_resume += 1;

        if self.current_index >= last_index {
            self.settling = true;
            self.wake.arm(now + self.options.settle_delay);
        } else {
            self.wake
                .arm(now + self.pacer.interval(self.current_index, self.words_since_resume));
        }
    }

    fn resume(&mut self, now: Instant) {
        self.words_since_resume = 0;
        self.state = PlaybackState::Playing;
        debug!("playback resumed at index {}", self.current_index);
        self.store.activate(self.current_index);
        self.wake
            .arm(now + self.pacer.interval(self.current_index, self.words_since_resume));
    }

    /// Entering `Paused` by any path persists the current index immediately;
    /// progress is never written during active playback.
    fn enter_paused(&mut self) {
        self.state = PlaybackState::Paused;
        self.settling = false;
        self.wake.cancel();
        debug!("playback paused at index {}", self.current_index);
        self.store.save_index(self.current_index);
    }
}
