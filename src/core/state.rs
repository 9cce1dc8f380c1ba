//! # Application State
//!
//! Core reader state. Domain logic only, no TUI-specific types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── scheduler: Scheduler<T, Vec<PlaybackEvent>>  // words, position, rate, timer
//! ├── display: Option<PivotLayout>                 // word currently on screen
//! ├── source_name: String                          // where the words came from
//! ├── status_message: String                       // status bar text
//! ├── wpm_step: u32                                // rate change per key press
//! └── max_wpm: u32                                 // upper bound for the rate
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::pivot::PivotLayout;
use crate::core::scheduler::{PlaybackEvent, Scheduler};
use crate::core::timer::TickTimer;

pub struct App<T: TickTimer> {
    pub scheduler: Scheduler<T, Vec<PlaybackEvent>>,
    /// What the reader view shows. Holds a preview of the next word while
    /// idle and the last rendered word while playing.
    pub display: Option<PivotLayout>,
    pub source_name: String,
    pub status_message: String,
    pub wpm_step: u32,
    pub max_wpm: u32,
}

impl<T: TickTimer> App<T> {
    pub fn new(timer: T, config: &ResolvedConfig) -> Self {
        Self {
            scheduler: Scheduler::new(timer, Vec::new(), config.wpm),
            display: None,
            source_name: String::new(),
            status_message: String::from("Load some text to start reading."),
            wpm_step: config.wpm_step,
            max_wpm: config.max_wpm,
        }
    }

    pub fn wpm(&self) -> u32 {
        self.scheduler.rate()
    }
}
