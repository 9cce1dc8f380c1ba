//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::scheduler::{PlaybackEvent, PlaybackListener, Scheduler};
use crate::core::state::App;
use crate::core::timer::{TickId, TickTimer};
use crate::core::tokenizer::tokenize;

/// A timer that only records what it was asked to do. Tests deliver ticks
/// by hand with [`fire`] or `Scheduler::tick`.
#[derive(Debug, Default)]
pub struct ManualTimer {
    pub scheduled: Vec<(TickId, Duration)>,
    pub cancels: usize,
}

impl ManualTimer {
    pub fn last(&self) -> Option<(TickId, Duration)> {
        self.scheduled.last().copied()
    }
}

impl TickTimer for ManualTimer {
    fn schedule(&mut self, tick: TickId, delay: Duration) {
        self.scheduled.push((tick, delay));
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

/// Scheduler over a manual timer with `text` already loaded.
pub fn test_scheduler(text: &str, rate: u32) -> Scheduler<ManualTimer, Vec<PlaybackEvent>> {
    let mut scheduler = Scheduler::new(ManualTimer::default(), Vec::new(), rate);
    scheduler.load(tokenize(text));
    scheduler
}

/// Delivers the pending tick, as if its delay had elapsed.
pub fn fire<L: PlaybackListener>(scheduler: &mut Scheduler<ManualTimer, L>) {
    let tick = scheduler
        .pending()
        .expect("fire() called with no pending tick");
    scheduler.tick(tick);
}

/// The words of every render event, in order.
pub fn rendered_words(events: &[PlaybackEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            PlaybackEvent::Render(layout) => Some(layout.word()),
            _ => None,
        })
        .collect()
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig::default()
}

/// Creates a test App over a manual timer.
pub fn test_app() -> App<ManualTimer> {
    App::new(ManualTimer::default(), &test_config())
}
