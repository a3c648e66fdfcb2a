//! Line-based interactive chat loop.

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::BackendClient;
use crate::core::capture::{CaptureOutcome, CaptureSession, UnavailableCapture};
use crate::core::config::Config;
use crate::core::session::ChatSession;
use crate::logging::LoggingState;

pub async fn run_chat(
    backend_override: Option<String>,
    log_file: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let base_url = backend_override.unwrap_or_else(|| config.backend_url().to_string());
    let client = BackendClient::new(&base_url);
    let mut session = ChatSession::new(client, config.preview_path());
    let logging = LoggingState::new(log_file)?;
    let mut capture = CaptureSession::new(UnavailableCapture, config.capture_timeout());

    println!("vitrine — chatting with {base_url}");
    if capture.is_available() {
        println!("Type a prompt, or /mic to speak one. /close dismisses the preview. Ctrl+D quits.");
    } else {
        println!("Type a prompt. /close dismisses the preview. Ctrl+D quits.");
        println!("(Speech capture is not available; /mic is disabled.)");
    }
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let prompt = match line {
            "/close" => {
                if session.dismiss_preview() {
                    println!("Preview dismissed.");
                } else {
                    println!("No preview open.");
                }
                continue;
            }
            "/mic" => {
                println!("Listening...");
                match capture.listen().await {
                    CaptureOutcome::Transcript(text) => {
                        println!("You said: {text}");
                        text
                    }
                    CaptureOutcome::Timeout => {
                        println!("Listening timed out.");
                        continue;
                    }
                    CaptureOutcome::Error(err) => {
                        eprintln!("{}", err.user_message());
                        continue;
                    }
                }
            }
            text => text.to_string(),
        };

        match session.submit(&prompt).await {
            Ok(turn) => {
                println!("{}", turn.reply);
                if let Some(path) = session.preview_path() {
                    println!("[preview: {}]", path.display());
                }
                println!();
                if let Err(err) = logging.log_turn(&turn.prompt, &turn.reply) {
                    eprintln!("⚠️  Failed to log turn: {err}");
                }
            }
            Err(err) => {
                eprintln!("Error: Unable to process request. ({err})");
                eprintln!();
            }
        }
    }

    session.dismiss_preview();
    Ok(())
}
