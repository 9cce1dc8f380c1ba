//! # Actions
//!
//! Everything that can happen in the reader becomes an `Action`.
//! User presses Space? That's `Action::TogglePlayback`.
//! A word's time is up? That's `Action::Tick(id)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it to the scheduler, then folds the scheduler's events into display state.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::scheduler::{PlaybackError, PlaybackEvent};
use crate::core::state::App;
use crate::core::timer::{TickId, TickTimer};
use crate::core::tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the text being read.
    Load { source_name: String, text: String },
    Start,
    Pause,
    Stop,
    /// Play when idle, pause when playing.
    TogglePlayback,
    /// Raise the rate by one step.
    Faster,
    /// Lower the rate by one step (may reach 0).
    Slower,
    SetRate(u32),
    Tick(TickId),
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update<T: TickTimer>(app: &mut App<T>, action: Action) -> Effect {
    if !matches!(action, Action::Tick(_)) {
        debug!("update: {:?}", action);
    }

    match action {
        Action::Load { source_name, text } => {
            let words = tokenize(&text);
            let count = words.len();
            app.scheduler.load(words);
            app.source_name = source_name;
            app.display = app.scheduler.upcoming();
            app.status_message = format!("Loaded {} words.", count);
        }
        Action::Start => start(app),
        Action::Pause => {
            if app.scheduler.is_running() {
                app.scheduler.pause();
                app.status_message = String::from("Paused");
            }
        }
        Action::Stop => {
            if app.scheduler.is_running() {
                app.scheduler.stop();
                app.status_message = String::from("Stopped");
            }
        }
        Action::TogglePlayback => {
            if app.scheduler.is_running() {
                app.scheduler.pause();
                app.status_message = String::from("Paused");
            } else {
                start(app);
            }
        }
        Action::Faster => {
            let rate = app
                .wpm()
                .saturating_add(app.wpm_step)
                .min(app.max_wpm);
            set_rate(app, rate);
        }
        Action::Slower => {
            let rate = app.wpm().saturating_sub(app.wpm_step);
            set_rate(app, rate);
        }
        Action::SetRate(rate) => set_rate(app, rate.min(app.max_wpm)),
        Action::Tick(tick) => app.scheduler.tick(tick),
        Action::Quit => {
            app.scheduler.stop();
            return Effect::Quit;
        }
    }

    apply_events(app);
    Effect::None
}

fn start<T: TickTimer>(app: &mut App<T>) {
    // Errors arrive as events too; apply_events turns them into status text.
    if app.scheduler.start().is_ok() {
        app.status_message = String::from("Playing");
    }
}

fn set_rate<T: TickTimer>(app: &mut App<T>, rate: u32) {
    app.scheduler.set_rate(rate);
    app.status_message = format!("{} wpm", rate);
}

/// Drains the scheduler's buffered events into display state.
fn apply_events<T: TickTimer>(app: &mut App<T>) {
    let events: Vec<PlaybackEvent> = app.scheduler.listener_mut().drain(..).collect();
    for event in events {
        match event {
            PlaybackEvent::Render(layout) => app.display = Some(layout),
            PlaybackEvent::Finished => {
                app.status_message = String::from("Finished. Press Space to read again.");
            }
            PlaybackEvent::Error(PlaybackError::EmptySequence) => {
                app.status_message = String::from("Nothing to read. Open a text file first.");
            }
            PlaybackEvent::Error(PlaybackError::InvalidRate) => {
                app.status_message = String::from("Rate is 0 wpm. Press Up to speed up.");
            }
        }
    }
}
