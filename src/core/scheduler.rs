//! # Playback Scheduler
//!
//! Walks a [`WordSequence`] one word per tick and reports what to draw.
//!
//! ```text
//!             start()                    tick(): word rendered, rate > 0
//!   ┌──────┐ ───────────► ┌─────────┐ ◄──────────────┐
//!   │ Idle │              │ Running │ ───────────────┘
//!   └──────┘ ◄─────────── └─────────┘
//!      ▲   pause()/stop()/load()  │ tick(): index == len  → Finished
//!      │                          │ tick(): rate == 0     → InvalidRate
//!      └──────────────────────────┘
//! ```
//!
//! The rate is read when each tick is handled, never cached at `start()`, so
//! a rate change shows up at the next word boundary without restarting.
//!
//! Every scheduled tick gets a fresh [`TickId`]. Anything that cancels the
//! pending tick forgets its id, so a late delivery of a cancelled tick is
//! recognised and dropped instead of rendering a word twice.

use log::{debug, info, warn};
use std::fmt;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::core::pivot::{self, PivotLayout};
use crate::core::timer::{TickId, TickTimer};
use crate::core::tokenizer::WordSequence;

/// Reading speed used when nothing else is configured.
pub const DEFAULT_WPM: u32 = 300;

/// Recoverable playback errors. The scheduler is Idle after either one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// `start()` with no words loaded.
    EmptySequence,
    /// `start()` or a tick found the rate at zero.
    InvalidRate,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::EmptySequence => write!(f, "no words loaded"),
            PlaybackError::InvalidRate => write!(f, "reading rate must be above 0 wpm"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Everything the scheduler reports outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Show this word now.
    Render(PivotLayout),
    /// The last word has been shown and its time is up.
    Finished,
    Error(PlaybackError),
}

/// Receives [`PlaybackEvent`]s as they happen.
pub trait PlaybackListener {
    fn on_event(&mut self, event: PlaybackEvent);
}

/// Buffers events for the owner to drain.
impl PlaybackListener for Vec<PlaybackEvent> {
    fn on_event(&mut self, event: PlaybackEvent) {
        self.push(event);
    }
}

impl PlaybackListener for Sender<PlaybackEvent> {
    fn on_event(&mut self, event: PlaybackEvent) {
        if self.send(event).is_err() {
            warn!("Failed to send playback event: receiver dropped");
        }
    }
}

/// Coarse playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Running,
    /// Idle with every word already shown. `start()` replays from the top.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    /// Next word to show. Equals the sequence length once exhausted.
    pub current_index: usize,
    /// Words per minute. Zero stops playback at the next tick.
    pub rate: u32,
    pub running: bool,
}

/// Time one word stays on screen at `rate` words per minute, rounded to the
/// nearest millisecond. `None` for a zero rate.
pub fn word_delay(rate: u32) -> Option<Duration> {
    if rate == 0 {
        return None;
    }
    let rate = u64::from(rate);
    Some(Duration::from_millis((60_000 + rate / 2) / rate))
}

pub struct Scheduler<T: TickTimer, L: PlaybackListener> {
    words: WordSequence,
    state: PlaybackState,
    pending: Option<TickId>,
    generation: u64,
    timer: T,
    listener: L,
}

impl<T: TickTimer, L: PlaybackListener> Scheduler<T, L> {
    pub fn new(timer: T, listener: L, rate: u32) -> Self {
        Self {
            words: WordSequence::new(),
            state: PlaybackState {
                current_index: 0,
                rate,
                running: false,
            },
            pending: None,
            generation: 0,
            timer,
            listener,
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Replaces the word list, rewinds to the first word and stops playback.
    pub fn load(&mut self, words: WordSequence) {
        self.cancel_pending();
        self.state.running = false;
        self.state.current_index = 0;
        info!("Loaded {} words", words.len());
        self.words = words;
    }

    /// Starts or resumes playback. The first word is shown without delay.
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        if self.words.is_empty() {
            return Err(self.fail(PlaybackError::EmptySequence));
        }
        if self.state.rate == 0 {
            return Err(self.fail(PlaybackError::InvalidRate));
        }
        if self.state.running {
            debug!("start() while running, ignoring");
            return Ok(());
        }

        if self.state.current_index >= self.words.len() {
            debug!("Sequence exhausted, replaying from the start");
            self.state.current_index = 0;
        }

        info!(
            "Playback started at word {}/{} ({} wpm)",
            self.state.current_index,
            self.words.len(),
            self.state.rate
        );
        self.state.running = true;
        self.schedule(Duration::ZERO);
        Ok(())
    }

    /// Stops playback, keeping the position. No-op when idle.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.cancel_pending();
        self.state.running = false;
        info!("Playback paused at word {}", self.state.current_index);
    }

    /// Same as [`pause`](Self::pause): the position is kept, not rewound.
    pub fn stop(&mut self) {
        self.pause();
    }

    /// Sets the rate used from the next tick on. The pending tick keeps its
    /// original delay.
    pub fn set_rate(&mut self, rate: u32) {
        debug!("Rate set to {} wpm", rate);
        self.state.rate = rate;
    }

    /// Timer callback. Ignores anything but the tick currently pending.
    pub fn tick(&mut self, tick: TickId) {
        if self.pending != Some(tick) || !self.state.running {
            debug!("Ignoring stale tick {}", tick.generation());
            return;
        }
        self.pending = None;

        let Some(word) = self.words.get(self.state.current_index) else {
            self.state.running = false;
            info!("Playback finished after {} words", self.words.len());
            self.listener.on_event(PlaybackEvent::Finished);
            return;
        };

        let layout = pivot::segments(word);
        self.state.current_index += 1;
        self.listener.on_event(PlaybackEvent::Render(layout));

        match word_delay(self.state.rate) {
            Some(delay) => self.schedule(delay),
            None => {
                self.state.running = false;
                info!(
                    "Rate is 0, pausing at word {}",
                    self.state.current_index
                );
                self.listener
                    .on_event(PlaybackEvent::Error(PlaybackError::InvalidRate));
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn status(&self) -> PlaybackStatus {
        if self.state.running {
            PlaybackStatus::Running
        } else if self.is_exhausted() {
            PlaybackStatus::Exhausted
        } else {
            PlaybackStatus::Idle
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn rate(&self) -> u32 {
        self.state.rate
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_exhausted(&self) -> bool {
        !self.words.is_empty() && self.state.current_index >= self.words.len()
    }

    /// `(words shown, total words)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_index, self.words.len())
    }

    /// Layout of the word the next tick would show.
    pub fn upcoming(&self) -> Option<PivotLayout> {
        self.words.get(self.state.current_index).map(pivot::segments)
    }

    /// The tick the scheduler is waiting for, if any.
    pub fn pending(&self) -> Option<TickId> {
        self.pending
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn schedule(&mut self, delay: Duration) {
        self.cancel_pending();
        self.generation += 1;
        let tick = TickId(self.generation);
        self.pending = Some(tick);
        debug!(
            "Scheduling tick {} in {}ms",
            tick.generation(),
            delay.as_millis()
        );
        self.timer.schedule(tick, delay);
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.timer.cancel();
        }
    }

    fn fail(&mut self, error: PlaybackError) -> PlaybackError {
        warn!("Cannot start playback: {}", error);
        self.listener.on_event(PlaybackEvent::Error(error));
        error
    }
}

impl<T: TickTimer, L: PlaybackListener> Drop for Scheduler<T, L> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
