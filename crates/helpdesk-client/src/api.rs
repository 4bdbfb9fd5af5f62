//! HTTP client for the support backend.
//!
//! The backend is an opaque request/response collaborator: one endpoint to
//! submit a query, one to discard a session, plus a service banner and a
//! server-side history endpoint used by the non-interactive commands.
//! There is no retry or backoff anywhere; every call is a single exchange.

use crate::config::ClientConfig;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Body of `POST /query`.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    session_id: &'a str,
}

/// Reply from `POST /query`.
///
/// Extra fields the backend may send (`knowledge_used`, `session_id`) are
/// kept for diagnostics; the UI displays only the response text and the
/// escalation flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReply {
    /// Assistant response text.
    pub response: String,
    /// Server-side timestamp, ISO-8601 and possibly naive.
    pub timestamp: String,
    /// Whether the backend escalated to a human agent.
    #[serde(default)]
    pub escalation_needed: Option<bool>,
    /// Knowledge-base source the backend consulted, if any.
    #[serde(default)]
    pub knowledge_used: Option<String>,
    /// Session the backend recorded the exchange under.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl QueryReply {
    /// The reply timestamp as UTC, falling back to the local clock when the
    /// server string does not parse.
    pub fn parsed_timestamp(&self) -> DateTime<Utc> {
        parse_server_timestamp(&self.timestamp).unwrap_or_else(Utc::now)
    }
}

/// Service banner from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// One entry of the server-side history for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
    pub timestamp: String,
}

/// Server-side history from `GET /session/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    pub session_id: String,
    pub messages: Vec<HistoryEntry>,
}

/// Errors from talking to the backend.
///
/// The chat view treats both variants identically (apology entry); the
/// distinction only matters for logs and the non-interactive commands.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network, timeout, or body-decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },
}

/// Client for the support backend. Cheap to clone; the inner connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one query under the given session.
    pub async fn send_query(&self, query: &str, session_id: &str) -> Result<QueryReply, ApiError> {
        let body = QueryRequest { query, session_id };
        let response = self
            .http
            .post(format!("{}/query", self.base_url))
            .json(&body)
            .send()
            .await?;

        let response = check_status(response)?;
        let reply: QueryReply = response.json().await?;
        debug!(
            session_id,
            escalation = ?reply.escalation_needed,
            knowledge = ?reply.knowledge_used,
            "query answered"
        );
        Ok(reply)
    }

    /// Ask the backend to discard a session. The response body is unused.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/session/{session_id}", self.base_url))
            .send()
            .await?;
        check_status(response)?;
        debug!(session_id, "session discarded");
        Ok(())
    }

    /// Fetch the service banner.
    pub async fn server_status(&self) -> Result<ServerStatus, ApiError> {
        let response = self.http.get(format!("{}/", self.base_url)).send().await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Fetch the server-side history for a session.
    pub async fn session_history(&self, session_id: &str) -> Result<SessionHistory, ApiError> {
        let response = self
            .http
            .get(format!("{}/session/{session_id}", self.base_url))
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}

/// Map non-2xx responses to `ApiError::Status`.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

/// Parse a server timestamp.
///
/// The backend emits `datetime.now().isoformat()`, which has no UTC offset;
/// naive strings are interpreted as UTC. Offset-qualified RFC 3339 strings
/// are accepted too.
pub fn parse_server_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ApiClient {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let parsed = parse_server_timestamp("2024-05-01T12:30:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        // What the backend actually sends: datetime.now().isoformat()
        let parsed = parse_server_timestamp("2024-05-01T12:30:00.123456").unwrap();
        assert_eq!(parsed.timestamp(), 1_714_566_600);
    }

    #[test]
    fn test_parse_garbage_timestamp() {
        assert!(parse_server_timestamp("not a time").is_none());
        assert!(parse_server_timestamp("").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = test_client("http://localhost:8888/");
        assert_eq!(client.base_url(), "http://localhost:8888");
    }

    #[tokio::test]
    async fn test_send_query_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_json(serde_json::json!({
                "query": "track my order",
                "session_id": "session_1_abc"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": "Here's how...",
                "escalation_needed": false,
                "knowledge_used": "shipping-faq",
                "session_id": "session_1_abc",
                "timestamp": "2024-05-01T12:30:00.000001"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client
            .send_query("track my order", "session_1_abc")
            .await
            .unwrap();

        assert_eq!(reply.response, "Here's how...");
        assert_eq!(reply.escalation_needed, Some(false));
        assert_eq!(reply.knowledge_used.as_deref(), Some("shipping-faq"));
    }

    #[tokio::test]
    async fn test_send_query_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"detail": "orchestrator exploded"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.send_query("hi", "session_1_abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_send_query_reply_without_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": "Sure.",
                "timestamp": "2024-05-01T12:30:00"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.send_query("hi", "session_1_abc").await.unwrap();
        assert_eq!(reply.escalation_needed, None);
        assert_eq!(reply.knowledge_used, None);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/session/session_1_abc"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Session session_1_abc cleared"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.delete_session("session_1_abc").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_unknown_session_is_an_error() {
        // The caller decides whether to swallow this; the client reports it.
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/session/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.delete_session("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_server_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Customer Support Orchestrator API",
                "version": "1.0.0",
                "status": "running"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let banner = client.server_status().await.unwrap();
        assert_eq!(banner.status, "running");
        assert_eq!(banner.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_session_history() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/session/session_1_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "session_id": "session_1_abc",
                "messages": [
                    {"role": "user", "content": "hi", "timestamp": "2024-05-01T12:30:00"},
                    {"role": "assistant", "content": "hello", "timestamp": "2024-05-01T12:30:01"}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let history = client.session_history("session_1_abc").await.unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].role, "user");
    }
}
