//! Screen composition for the helpdesk TUI.

pub mod theme;

use crate::app::App;
use crate::widgets::{FooterHints, InputBar, StatusBar, TranscriptView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use theme::Styles;

/// Render the whole application into `area`.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Styles::default());

    let [status_area, transcript_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    StatusBar::new(app).render(status_area, buf);
    TranscriptView::new(&app.transcript)
        .sending(app.sending, app.tick)
        .offset(app.scroll_offset)
        .render(transcript_area, buf);
    InputBar::new(&app.input).render(input_area, buf);
    FooterHints::new(app).render(footer_area, buf);

    if app.show_help {
        render_help_overlay(area, buf);
    }
}

fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let width = 46.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    Clear.render(popup, buf);

    let lines: Vec<Line<'static>> = vec![
        Line::from(""),
        help_line("Enter", "send message"),
        help_line("Ctrl+N", "new conversation"),
        help_line("Up/Down", "recall sent messages"),
        help_line("PgUp/PgDn", "scroll transcript"),
        help_line("End", "jump to newest"),
        help_line("Esc", "clear draft / close help"),
        help_line("F1", "toggle this help"),
        help_line("Ctrl+C", "quit"),
    ];

    Paragraph::new(lines)
        .style(Styles::default())
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Styles::title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .render(popup, buf);
}

fn help_line(key: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::accent()),
        Span::styled(what.to_string(), Styles::default()),
    ])
}
