//! # TitleBar Component
//!
//! Top bar showing what is being read and how fast.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("notes.txt".to_string(), 300, true);
//! title_bar.render(frame, area);
//! ```
//!
//! The text is `"RSVP Reader | notes.txt | 300 wpm ▶"`, with `▶` shown only
//! while playing. The source name is dropped when empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the loaded text (file name, "stdin", "demo")
    pub source_name: String,
    pub wpm: u32,
    pub playing: bool,
}

impl TitleBar {
    pub fn new(source_name: String, wpm: u32, playing: bool) -> Self {
        Self {
            source_name,
            wpm,
            playing,
        }
    }

    fn text(&self) -> String {
        let indicator = if self.playing { " ▶" } else { "" };
        if self.source_name.is_empty() {
            format!("RSVP Reader | {} wpm{}", self.wpm, indicator)
        } else {
            format!(
                "RSVP Reader | {} | {} wpm{}",
                self.source_name, self.wpm, indicator
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
