use crate::core::state::App;
use crate::core::timer::TickTimer;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ReaderView, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

/// Splits the frame into title, reading area and status line.
pub fn layout_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui<T: TickTimer>(frame: &mut Frame, app: &App<T>, tui: &TuiState) {
    let [title_area, main_area, status_area] = layout_areas(frame.area());

    TitleBar::new(
        app.source_name.clone(),
        app.wpm(),
        app.scheduler.is_running(),
    )
    .render(frame, title_area);

    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let reading_area = block.inner(main_area);
    frame.render_widget(block, main_area);
    ReaderView::new(app.display.as_ref(), tui.show_ticks, tui.tick_gap)
        .render(frame, reading_area);

    let (position, total) = app.scheduler.progress();
    StatusBar::new(app.status_message.clone(), position, total).render(frame, status_area);
}
