//! helpdesk-tui: Terminal UI for the AI customer-support helpdesk
//!
//! This crate provides the chat interface: the transcript pane, the
//! input bar, the status bar, and the event loop that drives sends
//! against the backend.

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use helpdesk_client;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use helpdesk_client::{ApiClient, ClientConfig, QueryReply};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::{debug, warn};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(config)?;

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.base_url.clone());

    // Event handler at a 4 Hz tick (250ms) for the typing animation
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, &client).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

type SendHandle = tokio::task::JoinHandle<Result<QueryReply, helpdesk_client::ApiError>>;

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    client: &ApiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    // At most one send in flight, matching the busy flag in App
    let mut send_handle: Option<SendHandle> = None;

    loop {
        // Draw
        terminal.draw(|frame| {
            ui::render_app(app, frame.area(), frame.buffer_mut());
        })?;

        // Settle a finished send (non-blocking)
        if send_handle.as_ref().is_some_and(tokio::task::JoinHandle::is_finished) {
            if let Some(handle) = send_handle.take() {
                match handle.await {
                    Ok(result) => app.complete_send(result),
                    Err(join_error) => {
                        warn!(%join_error, "send task panicked");
                        app.complete_send(Err(helpdesk_client::ApiError::Status { status: 0 }));
                    }
                }
            }
        }

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if handle_chat_key(app, key, client, &mut send_handle) {
                        continue;
                    }
                    let action = key_to_action(key);
                    if action == Action::NewConversation {
                        reset_conversation(app, client);
                        continue;
                    }
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::ScrollUp),
                        MouseEventKind::ScrollDown => app.handle_action(Action::ScrollDown),
                        _ => {}
                    }
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal handles resize on the next draw
                }
            }
        }

        if app.should_quit {
            if let Some(handle) = send_handle.take() {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Handle key input for the chat input bar.
/// Returns true if the key was handled (should not be processed as action).
fn handle_chat_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    client: &ApiClient,
    send_handle: &mut Option<SendHandle>,
) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    if app.show_help {
        return false; // Any key while help is open closes it via actions
    }

    // Control chords belong to the action mapping
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        // Enter submits the draft and spawns the request
        KeyCode::Enter => {
            if let Some(query) = app.submit_draft() {
                let client = client.clone();
                let session_id = app.session.id().to_string();
                debug!(session_id, "sending query");
                *send_handle = Some(tokio::spawn(async move {
                    client.send_query(&query, &session_id).await
                }));
            }
            true
        }

        // Text input
        KeyCode::Char(c) => {
            app.input.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.input.backspace();
            true
        }
        KeyCode::Delete => {
            app.input.delete();
            true
        }
        KeyCode::Left => {
            app.input.move_left();
            true
        }
        KeyCode::Right => {
            app.input.move_right();
            true
        }
        KeyCode::Home => {
            app.input.move_home();
            true
        }
        // End with a draft jumps to the end of the line; with an empty
        // draft it falls through to the scroll-to-bottom action
        KeyCode::End => {
            if app.input.is_empty() {
                false
            } else {
                app.input.move_end();
                true
            }
        }
        KeyCode::Up => {
            app.input.history_prev();
            true
        }
        KeyCode::Down => {
            app.input.history_next();
            true
        }

        _ => false,
    }
}

/// Reset the conversation and tell the backend to drop the old session.
///
/// The delete is best-effort and fire-and-forget: the new conversation
/// starts immediately and a failed delete is only logged.
fn reset_conversation(app: &mut App, client: &ApiClient) {
    let old_session = app.start_new_conversation();
    let client = client.clone();
    tokio::spawn(async move {
        if let Err(error) = client.delete_session(&old_session).await {
            warn!(%error, session_id = old_session, "session cleanup failed");
        }
    });
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
