//! stdin control protocol
//!
//! The server is shut down by typing `stop` on standard input; any other
//! line is reported as invalid and the loop continues. Closing stdin ends
//! the loop without shutting the server down.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;
use tracing::info;

const PROMPT: &str = "Type stop to shut down the server";

/// A parsed control command
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Shut the server down
    Stop,
    /// Anything else (trimmed, non-empty)
    Invalid(String),
}

/// Parse one line of input; blank lines carry no command
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "stop" {
        Some(Command::Stop)
    } else {
        Some(Command::Invalid(trimmed.to_string()))
    }
}

/// Read commands from stdin until `stop` arrives or stdin closes
///
/// On `stop` the shutdown sender fires, which unwinds the HTTP server via
/// graceful shutdown and lets the process exit with status 0.
pub async fn command_loop(shutdown: oneshot::Sender<()>) {
    println!("{}", PROMPT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                match parse_command(&line) {
                    Some(Command::Stop) => {
                        info!("Shutting down the server");
                        let _ = shutdown.send(());
                        return;
                    }
                    Some(Command::Invalid(cmd)) => {
                        println!("Invalid command: {}", cmd);
                    }
                    None => {}
                }
                println!("{}", PROMPT);
            }
            // stdin closed (e.g. running detached): keep serving
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("stdin read failed: {}", e);
                return;
            }
        }
    }
}
