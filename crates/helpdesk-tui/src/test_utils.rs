//! Helpers for rendering widgets into a test backend buffer.

use crate::app::App;
use ratatui::backend::TestBackend;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// Render a single widget and return the buffer contents as a string.
pub fn render_widget_to_content<W: Widget>(widget: W, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| frame.render_widget(widget, frame.area()))
        .unwrap();
    buffer_to_content(terminal.backend())
}

/// Render the full application screen and return the buffer contents.
pub fn render_app_to_content(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| crate::ui::render_app(app, frame.area(), frame.buffer_mut()))
        .unwrap();
    buffer_to_content(terminal.backend())
}

fn buffer_to_content(backend: &TestBackend) -> String {
    backend
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}
