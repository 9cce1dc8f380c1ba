//! # StatusBar Component
//!
//! Bottom line: status message on the left, progress and key hints on the
//! right. Hints are dropped first when the terminal is too narrow.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "Space play/pause  ↑↓ speed  t ticks  q quit";

pub struct StatusBar {
    pub status_message: String,
    /// Words shown so far
    pub position: usize,
    pub total: usize,
}

impl StatusBar {
    pub fn new(status_message: String, position: usize, total: usize) -> Self {
        Self {
            status_message,
            position,
            total,
        }
    }

    fn progress(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let progress = self.progress();
        let with_hints = format!("{}  {}", progress, KEY_HINTS);
        let room = usize::from(area.width).saturating_sub(self.status_message.width() + 2);
        let right = if with_hints.width() <= room {
            with_hints
        } else {
            progress
        };

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right.width() as u16)])
                .areas(area);

        frame.render_widget(
            Span::styled(self.status_message.as_str(), Style::default().fg(Color::Yellow)),
            left_area,
        );
        frame.render_widget(
            Paragraph::new(right)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            right_area,
        );
    }
}
