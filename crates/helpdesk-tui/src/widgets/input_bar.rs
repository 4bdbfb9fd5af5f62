//! Single-line input bar with cursor, placeholder, and submit history.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Placeholder shown when the draft is empty.
const PLACEHOLDER: &str = "Type your message... (e.g. \"What is your return policy?\")";

/// Prompt prefix.
const PROMPT: &str = "> ";

/// State for the input bar: draft content, cursor, and submit history.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// The draft text.
    content: String,
    /// Cursor position as a byte index, always on a char boundary.
    cursor: usize,
    /// Previously submitted drafts, oldest first.
    history: Vec<String>,
    /// Index into `history` while navigating, `None` at the live draft.
    history_index: Option<usize>,
    /// Live draft saved while navigating history.
    saved_draft: String,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current draft.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a byte index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the draft is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the draft.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Move cursor right one character.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.content[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Take the draft, recording non-blank drafts in history.
    pub fn submit(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        self.history_index = None;
        self.saved_draft.clear();
        if !content.trim().is_empty() {
            self.history.push(content.clone());
        }
        content
    }

    /// Recall the previous submitted draft.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next_index = match self.history_index {
            None => {
                self.saved_draft = self.content.clone();
                self.history.len() - 1
            }
            Some(0) => return,
            Some(i) => i - 1,
        };
        self.history_index = Some(next_index);
        self.content = self.history[next_index].clone();
        self.cursor = self.content.len();
    }

    /// Move forward in history, restoring the live draft at the end.
    pub fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.content = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.content = std::mem::take(&mut self.saved_draft);
        }
        self.cursor = self.content.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}

/// The input bar widget.
pub struct InputBar<'a> {
    state: &'a InputState,
}

impl<'a> InputBar<'a> {
    /// Create an input bar from its state.
    pub fn new(state: &'a InputState) -> Self {
        Self { state }
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let line = if self.state.is_empty() {
            Line::from(vec![
                Span::styled(PROMPT, Styles::accent()),
                Span::styled("_", Styles::default()),
                Span::styled(PLACEHOLDER, Styles::dim()),
            ])
        } else {
            let content = self.state.content();
            let cursor = self.state.cursor();
            let before = &content[..cursor];
            let at = content[cursor..].chars().next();
            let after: &str = at.map_or("", |ch| &content[cursor + ch.len_utf8()..]);

            let mut spans = vec![
                Span::styled(PROMPT, Styles::accent()),
                Span::styled(before.to_string(), Styles::default()),
            ];
            match at {
                Some(ch) => {
                    spans.push(Span::styled(
                        ch.to_string(),
                        Styles::default().add_modifier(ratatui::style::Modifier::REVERSED),
                    ));
                    spans.push(Span::styled(after.to_string(), Styles::default()));
                }
                None => spans.push(Span::styled("_", Styles::default())),
            }

            // Keep the cursor visible when the draft overflows the width
            let visible = usize::from(inner.width);
            let used = PROMPT.width() + before.width() + 1;
            if used > visible {
                // Drop leading characters until the cursor fits
                let mut trimmed = before;
                while PROMPT.width() + trimmed.width() + 1 > visible && !trimmed.is_empty() {
                    let mut chars = trimmed.chars();
                    chars.next();
                    trimmed = chars.as_str();
                }
                spans[1] = Span::styled(trimmed.to_string(), Styles::default());
            }

            Line::from(spans)
        };

        Paragraph::new(vec![line]).render(inner, buf);
    }
}
