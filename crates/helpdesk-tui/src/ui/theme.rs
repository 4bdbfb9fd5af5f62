//! Theme and styling definitions for the helpdesk TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(28, 30, 38);
    pub const FG: Color = Color::Rgb(222, 222, 230);
    pub const DIM: Color = Color::Rgb(135, 140, 160);

    // Role colors
    pub const USER: Color = Color::Rgb(130, 170, 255);
    pub const ASSISTANT: Color = Color::Rgb(130, 220, 160);

    // Status colors
    pub const WARNING: Color = Color::Rgb(240, 200, 100);
    pub const ERROR: Color = Color::Rgb(240, 100, 100);

    // Chrome
    pub const ACCENT: Color = Color::Rgb(130, 170, 255);
    pub const BORDER: Color = Color::Rgb(80, 80, 100);
    pub const STATUS_BG: Color = Color::Rgb(45, 45, 60);
}

/// Typing-indicator animation frames.
pub struct Symbols;

impl Symbols {
    pub const SPINNER: [&'static str; 4] = ["   ", ".  ", ".. ", "..."];
    pub const ESCALATION: &'static str = "[!]";
    pub const ERROR: &'static str = "[x]";
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Header of a user message.
    pub fn user() -> Style {
        Style::default()
            .fg(Palette::USER)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Header of an assistant message.
    pub fn assistant() -> Style {
        Style::default()
            .fg(Palette::ASSISTANT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Escalation badge.
    pub fn warning() -> Style {
        Style::default().fg(Palette::WARNING).bg(Palette::BG)
    }

    /// Error badge and error-flagged headers.
    pub fn error() -> Style {
        Style::default().fg(Palette::ERROR).bg(Palette::BG)
    }

    /// Accented text (prompt, title).
    pub fn accent() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }
}
