//! Reusable widgets for the helpdesk TUI.

pub mod input_bar;
pub mod status_bar;
pub mod transcript;

pub use input_bar::{InputBar, InputState};
pub use status_bar::{FooterHints, StatusBar};
pub use transcript::TranscriptView;
