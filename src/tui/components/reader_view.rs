//! # ReaderView Component
//!
//! Draws the current word so its pivot character always lands on the same
//! cell. The anchor is the center of the area:
//!
//! ```text
//!              │          <- top tick
//!                         <- tick_gap rows
//!           recognition
//!           └┬┘│└──┬──┘
//!       prefix │ suffix
//!              │
//!        anchor column, fixed for every word
//! ```
//!
//! The bottom tick mirrors the top one below the word.
//!
//! The prefix ends right before the anchor and the suffix starts right after
//! the pivot's last cell. Widths come from `unicode-width`, so wide glyphs
//! still touch the pivot. Text that does not fit is clipped at the outer
//! edges; the pivot never moves to make room.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::pivot::PivotLayout;
use crate::tui::component::Component;

const TICK_SYMBOL: &str = "│";

/// Fixed anchor cell `(column, row)` for an area.
pub fn anchor(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y + area.height / 2)
}

/// Rows of the top and bottom tick markers, if they fit inside the area.
pub fn tick_rows(area: Rect, gap: u16) -> (Option<u16>, Option<u16>) {
    let (_, row) = anchor(area);
    let offset = gap.saturating_add(1);
    let top = row
        .checked_sub(offset)
        .filter(|&y| y >= area.y);
    let bottom = row
        .checked_add(offset)
        .filter(|&y| y < area.bottom());
    (top, bottom)
}

/// Screen positions for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: u16,
    pub pivot_x: u16,
    pub pivot: String,
    pub prefix_x: u16,
    /// Prefix, clipped from the left to fit.
    pub prefix: String,
    pub suffix_x: u16,
    /// Suffix, clipped from the right to fit.
    pub suffix: String,
}

/// Computes where each part of `layout` goes. `None` for an empty area or
/// an empty word.
pub fn place(layout: &PivotLayout, area: Rect) -> Option<Placement> {
    if area.is_empty() {
        return None;
    }
    let pivot = layout.pivot?;
    let (pivot_x, row) = anchor(area);
    let pivot_width = pivot.width().unwrap_or(1).max(1) as u16;

    let prefix_room = usize::from(pivot_x - area.x);
    let prefix = clip_left(&layout.prefix, prefix_room);
    let prefix_x = pivot_x.saturating_sub(prefix.width() as u16);

    let suffix_x = pivot_x.saturating_add(pivot_width);
    let suffix_room = usize::from(area.right().saturating_sub(suffix_x));
    let suffix = clip_right(&layout.suffix, suffix_room);

    Some(Placement {
        row,
        pivot_x,
        pivot: pivot.to_string(),
        prefix_x,
        prefix,
        suffix_x,
        suffix,
    })
}

/// Longest tail of `text` that fits in `width` cells. Never starts on a
/// zero-width char, so combining marks and variation selectors stay with
/// their base.
fn clip_left(text: &str, width: usize) -> String {
    text.char_indices()
        .filter(|&(i, ch)| i == 0 || ch.width() != Some(0))
        .map(|(i, _)| &text[i..])
        .find(|tail| tail.width() <= width)
        .unwrap_or("")
        .to_string()
}

/// Longest head of `text` that fits in `width` cells. Never ends right
/// before a zero-width char.
fn clip_right(text: &str, width: usize) -> String {
    let cuts = text
        .char_indices()
        .rev()
        .filter(|&(_, ch)| ch.width() != Some(0))
        .map(|(i, _)| i);
    std::iter::once(text.len())
        .chain(cuts)
        .map(|end| &text[..end])
        .find(|head| head.width() <= width)
        .unwrap_or("")
        .to_string()
}

/// The reading area: one word, pivot on the anchor, optional ticks.
pub struct ReaderView<'a> {
    pub layout: Option<&'a PivotLayout>,
    pub show_ticks: bool,
    pub tick_gap: u16,
}

impl<'a> ReaderView<'a> {
    pub fn new(layout: Option<&'a PivotLayout>, show_ticks: bool, tick_gap: u16) -> Self {
        Self {
            layout,
            show_ticks,
            tick_gap,
        }
    }
}

impl Component for ReaderView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        let tick_style = Style::default().fg(Color::DarkGray);

        if self.show_ticks && !area.is_empty() {
            let (x, _) = anchor(area);
            let (top, bottom) = tick_rows(area, self.tick_gap);
            for y in [top, bottom].into_iter().flatten() {
                buf.set_string(x, y, TICK_SYMBOL, tick_style);
            }
        }

        let Some(placement) = self.layout.and_then(|layout| place(layout, area)) else {
            return;
        };

        let text_style = Style::default().fg(Color::White);
        let pivot_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);

        buf.set_string(placement.prefix_x, placement.row, &placement.prefix, text_style);
        buf.set_string(placement.pivot_x, placement.row, &placement.pivot, pivot_style);
        if !placement.suffix.is_empty() {
            buf.set_string(placement.suffix_x, placement.row, &placement.suffix, text_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pivot::segments;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn area() -> Rect {
        Rect::new(0, 0, 21, 7)
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_anchor_is_center() {
        assert_eq!(anchor(area()), (10, 3));
        assert_eq!(anchor(Rect::new(4, 2, 10, 4)), (9, 4));
    }

    #[test]
    fn test_pivot_column_fixed_across_words() {
        for word in ["a", "to", "word", "reading", "recognition", "internationalization"] {
            let placement = place(&segments(word), area()).unwrap();
            assert_eq!(placement.pivot_x, 10, "{word}");
        }
    }

    #[test]
    fn test_prefix_and_suffix_touch_pivot() {
        let placement = place(&segments("recognition"), area()).unwrap();
        assert_eq!(placement.prefix, "rec");
        assert_eq!(placement.prefix_x + 3, placement.pivot_x);
        assert_eq!(placement.pivot, "o");
        assert_eq!(placement.suffix_x, placement.pivot_x + 1);
        assert_eq!(placement.suffix, "gnition");
    }

    #[test]
    fn test_wide_pivot_pushes_suffix() {
        // 3 chars -> pivot 1, a double-width glyph
        let placement = place(&segments("日本語"), area()).unwrap();
        assert_eq!(placement.pivot, "本");
        assert_eq!(placement.prefix_x, placement.pivot_x - 2);
        assert_eq!(placement.suffix_x, placement.pivot_x + 2);
    }

    #[test]
    fn test_overflow_is_clipped_not_shifted() {
        // 21 chars -> pivot 4 ("inco" | "m" | "prehensibilities")
        let narrow = Rect::new(0, 0, 7, 1);
        let placement = place(&segments("incomprehensibilities"), narrow).unwrap();
        assert_eq!(placement.pivot_x, 3);
        assert_eq!(placement.pivot, "m");
        assert_eq!(placement.prefix, "nco");
        assert_eq!(placement.prefix_x, 0);
        assert_eq!(placement.suffix, "pre");
    }

    #[test]
    fn test_emoji_prefix_clipped_in_narrow_area() {
        // Inner area of a 7-column bordered box. Each ❤️ is two cells as a
        // sequence but one cell per char.
        let inner = Rect::new(1, 1, 5, 3);
        let placement = place(&segments("❤\u{FE0F}❤\u{FE0F}abcdefghijkl"), inner).unwrap();
        assert_eq!(placement.pivot_x, 3);
        assert_eq!(placement.pivot, "a");
        assert_eq!(placement.prefix, "❤\u{FE0F}");
        assert_eq!(placement.prefix_x, inner.x);
        assert_eq!(placement.suffix, "bc");
        assert_eq!(placement.suffix_x + 2, inner.right());
    }

    #[test]
    fn test_emoji_suffix_stays_inside_area() {
        let narrow = Rect::new(0, 0, 7, 1);
        let placement = place(&segments("abcd❤\u{FE0F}❤\u{FE0F}"), narrow).unwrap();
        assert_eq!(placement.pivot, "c");
        assert_eq!(placement.suffix, "d❤\u{FE0F}");
        assert!(placement.suffix_x + placement.suffix.width() as u16 <= narrow.right());
    }

    #[test]
    fn test_render_emoji_word_leaves_border_alone() {
        let mut terminal = Terminal::new(TestBackend::new(7, 5)).unwrap();
        let layout = segments("❤\u{FE0F}❤\u{FE0F}abcdefghijkl");
        terminal
            .draw(|f| {
                ReaderView::new(Some(&layout), false, 1).render(f, Rect::new(1, 1, 5, 3));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 2)].symbol(), "a");
        assert_eq!(buffer[(0, 2)].symbol(), " ");
        assert_eq!(buffer[(6, 2)].symbol(), " ");
    }

    #[test]
    fn test_empty_inputs_place_nothing() {
        assert_eq!(place(&segments(""), area()), None);
        assert_eq!(place(&segments("word"), Rect::new(0, 0, 0, 0)), None);
    }

    #[test]
    fn test_tick_rows() {
        assert_eq!(tick_rows(area(), 1), (Some(1), Some(5)));
        assert_eq!(tick_rows(area(), 0), (Some(2), Some(4)));
        assert_eq!(tick_rows(area(), 3), (None, None));
    }

    #[test]
    fn test_render_word_and_ticks() {
        let mut terminal = Terminal::new(TestBackend::new(21, 7)).unwrap();
        let layout = segments("reading");

        terminal
            .draw(|f| {
                ReaderView::new(Some(&layout), true, 1).render(f, f.area());
            })
            .unwrap();

        assert_eq!(row_text(&terminal, 3), "        reading      ");
        assert_eq!(row_text(&terminal, 1).trim(), "│");
        assert_eq!(row_text(&terminal, 5).find('│'), Some(10));

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(10, 3)].fg, Color::Red);
        assert_eq!(buffer[(9, 3)].fg, Color::White);
    }

    #[test]
    fn test_render_without_word_keeps_ticks() {
        let mut terminal = Terminal::new(TestBackend::new(21, 7)).unwrap();
        terminal
            .draw(|f| {
                ReaderView::new(None, true, 1).render(f, f.area());
            })
            .unwrap();

        assert_eq!(row_text(&terminal, 3).trim(), "");
        assert_eq!(row_text(&terminal, 1).trim(), "│");
    }

    #[test]
    fn test_ticks_can_be_hidden() {
        let mut terminal = Terminal::new(TestBackend::new(21, 7)).unwrap();
        let layout = segments("a");
        terminal
            .draw(|f| {
                ReaderView::new(Some(&layout), false, 1).render(f, f.area());
            })
            .unwrap();

        assert_eq!(row_text(&terminal, 1).trim(), "");
        assert_eq!(row_text(&terminal, 3).trim(), "a");
    }
}
