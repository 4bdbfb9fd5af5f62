//! Client-generated session tokens.
//!
//! A session token correlates this client's requests with the backend's
//! conversation state. It is opaque to the client: generated locally,
//! replaced wholesale on reset, never mutated in place.

use chrono::Utc;
use uuid::Uuid;

/// Length of the random suffix appended to session tokens.
const SUFFIX_LEN: usize = 9;

/// An active conversation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
}

impl Session {
    /// Generate a fresh session with a new token.
    ///
    /// Tokens have the form `session_<unix_millis>_<rand>`; the millisecond
    /// prefix alone could collide across restarts, so a random suffix is
    /// always appended.
    pub fn new() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(SUFFIX_LEN)
            .collect();
        Self {
            id: format!("session_{millis}_{suffix}"),
        }
    }

    /// The opaque token sent with every request.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let session = Session::new();
        let parts: Vec<&str> = session.id().splitn(3, '_').collect();
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
    }

    #[test]
    fn test_tokens_never_repeat() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id(), b.id());
    }
}
