//! Scrollable transcript pane.
//!
//! Renders the message history with role headers, local-time stamps,
//! wrapped content, escalation and error badges, and a typing indicator
//! while a request is in flight.

use crate::ui::theme::{Styles, Symbols};
use chrono::Local;
use helpdesk_client::{Message, Role, Transcript};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The transcript pane widget.
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    sending: bool,
    tick: usize,
    /// Scroll offset in lines from the bottom; zero follows the newest.
    offset: usize,
}

impl<'a> TranscriptView<'a> {
    /// Create a transcript view.
    pub fn new(transcript: &'a Transcript) -> Self {
        Self {
            transcript,
            sending: false,
            tick: 0,
            offset: 0,
        }
    }

    /// Show the typing indicator, animated by `tick`.
    #[must_use]
    pub fn sending(mut self, sending: bool, tick: usize) -> Self {
        self.sending = sending;
        self.tick = tick;
        self
    }

    /// Scroll offset in lines from the bottom.
    #[must_use]
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
        let (label, header_style) = match message.role {
            Role::User => ("You", Styles::user()),
            Role::Assistant if message.error => ("Support", Styles::error()),
            Role::Assistant => ("Support", Styles::assistant()),
        };
        let stamp = message
            .timestamp
            .with_timezone(&Local)
            .format("%I:%M %p")
            .to_string();

        let mut lines = vec![Line::from(vec![
            Span::styled(label.to_string(), header_style),
            Span::styled(format!("  {stamp}"), Styles::dim()),
        ])];

        for wrapped in textwrap::wrap(&message.content, width.max(1)) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Styles::default(),
            )));
        }

        if message.is_escalated() {
            lines.push(Line::from(Span::styled(
                format!("{} Escalated to human support", Symbols::ESCALATION),
                Styles::warning(),
            )));
        }
        if message.error {
            lines.push(Line::from(Span::styled(
                format!("{} Error occurred", Symbols::ERROR),
                Styles::error(),
            )));
        }

        lines.push(Line::from(""));
        lines
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" AI Customer Support ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let width = usize::from(inner.width);
        let mut lines: Vec<Line<'static>> = Vec::new();
        for message in self.transcript {
            lines.extend(Self::message_lines(message, width));
        }

        if self.sending {
            let frame = Symbols::SPINNER[self.tick % Symbols::SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("Support is typing{frame}"),
                Styles::dim(),
            )));
        }

        // Window the lines: offset counts up from the bottom, clamped so
        // the view never scrolls past the first line.
        let visible = usize::from(inner.height);
        let total = lines.len();
        let max_offset = total.saturating_sub(visible);
        let offset = self.offset.min(max_offset);
        let end = total - offset;
        let start = end.saturating_sub(visible);

        let window: Vec<Line<'static>> = lines.into_iter().skip(start).take(end - start).collect();
        Paragraph::new(window).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_widget_to_content as render_to_content;
    use chrono::Utc;
    use helpdesk_client::GREETING;

    #[test]
    fn test_greeting_rendered_on_mount() {
        let transcript = Transcript::new();
        let content = render_to_content(TranscriptView::new(&transcript), 80, 12);
        assert!(content.contains("AI Customer Support"));
        assert!(content.contains("Support"));
        assert!(content.contains(&GREETING[..30]));
    }

    #[test]
    fn test_badges_rendered() {
        let mut transcript = Transcript::new();
        transcript.push(Message::assistant(
            "An agent will join shortly.",
            Utc::now(),
            Some(true),
        ));
        transcript.push(Message::apology());

        let content = render_to_content(TranscriptView::new(&transcript), 80, 24);
        assert!(content.contains("Escalated to human support"));
        assert!(content.contains("Error occurred"));
    }

    #[test]
    fn test_typing_indicator_when_sending() {
        let transcript = Transcript::new();
        let view = TranscriptView::new(&transcript).sending(true, 3);
        let content = render_to_content(view, 80, 12);
        assert!(content.contains("Support is typing"));
    }

    #[test]
    fn test_long_message_wraps() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("word ".repeat(40)));
        // Narrow view; must not panic and must show the user header
        let content = render_to_content(TranscriptView::new(&transcript), 30, 20);
        assert!(content.contains("You"));
    }

    #[test]
    fn test_scrolled_view_hides_newest() {
        let mut transcript = Transcript::new();
        for i in 0..20 {
            transcript.push(Message::user(format!("message number {i}")));
        }

        let bottom = render_to_content(TranscriptView::new(&transcript).offset(0), 40, 10);
        assert!(bottom.contains("message number 19"));

        let scrolled = render_to_content(TranscriptView::new(&transcript).offset(30), 40, 10);
        assert!(!scrolled.contains("message number 19"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let transcript = Transcript::new();
        render_to_content(TranscriptView::new(&transcript), 3, 2);
    }
}
