//! helpdesk-client: protocol types and HTTP client for the support backend
//!
//! This crate provides everything below the UI:
//! - Message, transcript, and session types
//! - The HTTP API client (query submission, session discard, banner, history)
//! - Client configuration

pub mod api;
pub mod config;
pub mod message;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use api::{
    parse_server_timestamp, ApiClient, ApiError, HistoryEntry, QueryReply, ServerStatus,
    SessionHistory,
};
pub use config::{default_config_path, ClientConfig, ConfigError};
pub use message::{Message, Role, APOLOGY, GREETING};
pub use session::Session;
pub use transcript::Transcript;

/// Returns the client library version.
pub fn client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
