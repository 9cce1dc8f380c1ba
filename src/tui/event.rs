use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    TogglePlayback,
    Stop,
    Faster,
    Slower,
    Quit,
    ForceQuit, // Ctrl+C

    // TUI-local events (handled directly in TUI)
    ToggleTicks,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Ignore key releases on terminals that report them
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Enter) => Some(TuiEvent::TogglePlayback),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Stop),
        (_, KeyCode::Up) | (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => {
            Some(TuiEvent::Faster)
        }
        (_, KeyCode::Down) | (_, KeyCode::Char('-')) => Some(TuiEvent::Slower),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTicks),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}
