//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and delivers timer
//! ticks back to the scheduler.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Tick Delivery
//!
//! The scheduler's [`TokioTimer`] sleeps on the tokio runtime and sends each
//! due `TickId` over an unbounded channel. The event loop drains that channel
//! after every input poll, so all state changes still happen on this one
//! thread. The poll timeout is short while playing to keep word timing
//! tight, and long while idle.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::timer::{TickId, TokioTimer};
use crate::source::LoadedText;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const PLAYING_POLL: Duration = Duration::from_millis(5);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core reader logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiState {
    pub show_ticks: bool,
    pub tick_gap: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            show_ticks: config.show_ticks,
            tick_gap: config.tick_gap,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(&ResolvedConfig::default())
    }
}

/// Maps an input event to a core action. `None` for TUI-local events.
fn to_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::TogglePlayback => Some(Action::TogglePlayback),
        TuiEvent::Stop => Some(Action::Stop),
        TuiEvent::Faster => Some(Action::Faster),
        TuiEvent::Slower => Some(Action::Slower),
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleTicks | TuiEvent::Resize => None,
    }
}

/// Runs the reader until the user quits. Must be called from inside a
/// tokio runtime.
pub fn run(config: ResolvedConfig, loaded: LoadedText) -> std::io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut app = App::new(TokioTimer::new(tick_tx), &config);
    let mut tui = TuiState::new(&config);

    update(
        &mut app,
        Action::Load {
            source_name: loaded.name,
            text: loaded.text,
        },
    );
    if config.autoplay {
        update(&mut app, Action::Start);
    }

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &mut tick_rx);

    let (position, total) = app.scheduler.progress();
    info!("Exiting at word {}/{}", position, total);

    // Dropping the app cancels any pending tick
    drop(app);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App<TokioTimer>,
    tui: &mut TuiState,
    tick_rx: &mut mpsc::UnboundedReceiver<TickId>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if app.scheduler.is_running() {
            PLAYING_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if matches!(event, TuiEvent::ToggleTicks) {
                tui.show_ticks = !tui.show_ticks;
                continue;
            }
            if let Some(action) = to_action(event)
                && update(app, action) == Effect::Quit
            {
                return Ok(());
            }
        }

        // Deliver due ticks
        while let Ok(tick) = tick_rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received tick {}", tick.generation());
            update(app, Action::Tick(tick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_state_from_config() {
        let config = ResolvedConfig {
            show_ticks: false,
            tick_gap: 3,
            ..Default::default()
        };
        let tui = TuiState::new(&config);
        assert!(!tui.show_ticks);
        assert_eq!(tui.tick_gap, 3);
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(to_action(TuiEvent::TogglePlayback), Some(Action::TogglePlayback));
        assert_eq!(to_action(TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(to_action(TuiEvent::Slower), Some(Action::Slower));
        assert_eq!(to_action(TuiEvent::ToggleTicks), None);
        assert_eq!(to_action(TuiEvent::Resize), None);
    }
}
