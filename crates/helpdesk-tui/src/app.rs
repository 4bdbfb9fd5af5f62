//! Application state and update logic for the helpdesk TUI.
//!
//! The chat view owns three pieces of state: the transcript, the draft
//! input, and the session token. Network effects are spawned by the run
//! loop; this module only mutates state, which keeps the send and reset
//! semantics testable without a terminal or a server.

use crate::event::Action;
use crate::widgets::InputState;
use helpdesk_client::{ApiError, Message, QueryReply, Session, Transcript};
use tracing::warn;

/// How many ticks a notification stays visible (~3s at a 250ms tick).
const NOTIFICATION_TICKS: usize = 12;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Ordered transcript for the current session.
    pub transcript: Transcript,

    /// Draft input state.
    pub input: InputState,

    /// Current session token.
    pub session: Session,

    /// Busy flag: true while a send is in flight. Enforces single-flight.
    pub sending: bool,

    /// Transcript scroll offset in lines, measured from the bottom.
    /// Zero means pinned to the newest message (auto-follow).
    pub scroll_offset: usize,

    /// Tick counter for the typing-indicator animation.
    pub tick: usize,

    /// Backend label shown in the status bar.
    pub server_label: String,

    /// Notification message (displayed temporarily in the footer).
    pub notification: Option<String>,

    /// Ticks remaining until the notification is cleared.
    notification_ttl: usize,
}

impl App {
    /// Create a new app with a fresh session and a greeted transcript.
    pub fn new(server_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            transcript: Transcript::new(),
            input: InputState::new(),
            session: Session::new(),
            sending: false,
            scroll_offset: 0,
            tick: 0,
            server_label: server_label.into(),
            notification: None,
            notification_ttl: 0,
        }
    }

    /// Handle a control action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any action closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Back => {
                // Esc with nothing open clears the draft
                self.input.clear();
            }
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            Action::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Action::ScrollToBottom => {
                self.scroll_offset = 0;
            }
            // NewConversation is intercepted by the run loop (it spawns
            // the best-effort session delete) before reaching here.
            Action::NewConversation | Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Try to submit the current draft.
    ///
    /// Returns the query text to send, or `None` when the send is a no-op:
    /// empty/whitespace draft, or a request already in flight. On success
    /// the user message is appended immediately (optimistic echo) and the
    /// busy flag is set; the caller spawns the actual request.
    pub fn submit_draft(&mut self) -> Option<String> {
        if self.sending {
            return None;
        }
        let text = self.input.submit();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let query = trimmed.to_string();
        self.transcript.push(Message::user(query.clone()));
        self.sending = true;
        self.scroll_offset = 0;
        Some(query)
    }

    /// Settle the in-flight send with the backend's answer.
    ///
    /// Success appends the assistant reply; any failure appends the fixed
    /// apology entry. The underlying error is logged, never displayed.
    pub fn complete_send(&mut self, result: Result<QueryReply, ApiError>) {
        let message = match result {
            Ok(reply) => Message::assistant(
                reply.response.clone(),
                reply.parsed_timestamp(),
                reply.escalation_needed,
            ),
            Err(error) => {
                warn!(%error, session_id = self.session.id(), "send failed");
                Message::apology()
            }
        };
        self.transcript.push(message);
        self.sending = false;
        self.scroll_offset = 0;
    }

    /// Start a new conversation: fresh session token, transcript replaced
    /// with a single greeting. Returns the previous token so the caller can
    /// notify the backend (best-effort; the reset does not wait for it).
    pub fn start_new_conversation(&mut self) -> String {
        let old = self.session.id().to_string();
        self.session = Session::new();
        self.transcript.reset();
        self.scroll_offset = 0;
        self.set_notification("Started a new conversation".to_string());
        old
    }

    /// Set a temporary notification message.
    pub fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Increment tick counter and update time-based state.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Whether the transcript is pinned to the newest message.
    pub fn following(&self) -> bool {
        self.scroll_offset == 0
    }
}
