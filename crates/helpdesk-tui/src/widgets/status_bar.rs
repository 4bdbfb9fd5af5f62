//! Status bar and footer hint line.

use crate::app::App;
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line status bar shown at the top of the screen.
pub struct StatusBar<'a> {
    app: &'a App,
}

impl<'a> StatusBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let state = if self.app.sending { "Sending" } else { "Ready" };
        let line = Line::from(vec![
            Span::styled(" AI Helpdesk ", Styles::status_bar().patch(Styles::title())),
            Span::styled("│ ", Styles::status_bar()),
            Span::styled(format!("{state} "), Styles::status_bar()),
            Span::styled("│ ", Styles::status_bar()),
            Span::styled(format!("{} ", self.app.session.id()), Styles::status_bar()),
            Span::styled("│ ", Styles::status_bar()),
            Span::styled(format!("{} ", self.app.server_label), Styles::status_bar()),
        ]);

        buf.set_style(area, Styles::status_bar());
        Paragraph::new(line).style(Styles::status_bar()).render(area, buf);
    }
}

/// One-line footer: key hints, replaced by a notification while one is live.
pub struct FooterHints<'a> {
    app: &'a App,
}

impl<'a> FooterHints<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let line = if let Some(note) = &self.app.notification {
            Line::from(Span::styled(format!(" {note}"), Styles::accent()))
        } else {
            Line::from(Span::styled(
                " Enter send │ Ctrl+N new conversation │ PgUp/PgDn scroll │ F1 help │ Ctrl+C quit",
                Styles::dim(),
            ))
        };
        Paragraph::new(line).render(area, buf);
    }
}
