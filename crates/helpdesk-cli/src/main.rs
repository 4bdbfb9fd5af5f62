//! helpdesk CLI: terminal client for the AI customer-support backend

use clap::{Parser, Subcommand};
use helpdesk_client::{ApiClient, ClientConfig, Session};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

/// Terminal client for the AI customer-support helpdesk
#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Tui,

    /// Send a single question and print the answer
    Ask {
        /// The question to send
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check backend availability and print its banner
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the server-side history of a session
    History {
        /// The session token to look up
        session_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = ClientConfig::load_or_default();
    if let Some(server) = cli.server {
        config.base_url = server;
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            init_file_logging();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(helpdesk_tui::run_tui(&config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Ask { query, json }) => {
            init_stderr_logging();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_ask(&config, &query, json));
        }
        Some(Commands::Status { json }) => {
            init_stderr_logging();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_status(&config, json));
        }
        Some(Commands::History { session_id, json }) => {
            init_stderr_logging();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_history(&config, &session_id, json));
        }
    }
}

/// Log to a file while the TUI owns the terminal.
fn init_file_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = helpdesk_client::default_config_path()
        .map(|p| p.with_file_name("helpdesk.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("helpdesk.log"));
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if let Ok(file) = std::fs::File::create(&log_path) {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .compact()
            .init();
    }
}

/// Log to stderr for one-shot commands.
fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn make_client(config: &ClientConfig) -> ApiClient {
    match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn cmd_ask(config: &ClientConfig, query: &str, json: bool) {
    let client = make_client(config);
    let session = Session::new();

    match client.send_query(query, session.id()).await {
        Ok(reply) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&reply).expect("failed to serialize")
                );
                return;
            }

            println!("{}", reply.response);
            if reply.escalation_needed == Some(true) {
                println!();
                println!("This conversation was flagged for escalation to a human agent.");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    // One-shot sessions are throwaway; tell the backend to drop it
    if let Err(e) = client.delete_session(session.id()).await {
        tracing::warn!(error = %e, session_id = session.id(), "session cleanup failed");
    }
}

async fn cmd_status(config: &ClientConfig, json: bool) {
    let client = make_client(config);

    match client.server_status().await {
        Ok(banner) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&banner).expect("failed to serialize")
                );
                return;
            }

            println!("Server: {}", config.base_url);
            println!("Status: {}", banner.status);
            println!("Message: {}", banner.message);
            println!("Version: {}", banner.version);
        }
        Err(e) => {
            eprintln!("Server {} is unreachable: {e}", config.base_url);
            std::process::exit(1);
        }
    }
}

async fn cmd_history(config: &ClientConfig, session_id: &str, json: bool) {
    let client = make_client(config);

    match client.session_history(session_id).await {
        Ok(history) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&history).expect("failed to serialize")
                );
                return;
            }

            if history.messages.is_empty() {
                println!("No history for session {session_id}");
                return;
            }

            for entry in &history.messages {
                println!("[{}] {}: {}", entry.timestamp, entry.role, entry.content);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
