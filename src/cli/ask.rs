//! One-shot prompt command.

use std::error::Error;

use crate::api::BackendClient;
use crate::core::config::Config;
use crate::core::session::ChatSession;

pub async fn run_ask(prompt: Vec<String>, backend_override: Option<String>) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.is_empty() {
        eprintln!("Usage: vitrine ask <prompt>");
        std::process::exit(1);
    }

    let config = Config::load()?;
    let base_url = backend_override.unwrap_or_else(|| config.backend_url().to_string());
    let client = BackendClient::new(&base_url);
    let mut session = ChatSession::new(client, config.preview_path());

    match session.submit(&prompt).await {
        Ok(turn) => {
            println!("{}", turn.reply);
            if let Some(path) = session.preview_path() {
                eprintln!();
                eprintln!("Preview written to: {}", path.display());
            }
            Ok(())
        }
        Err(err) => {
            // The reply bubble text users have always seen on a failed turn.
            eprintln!("Error: Unable to process request.");
            eprintln!("  {err}");
            std::process::exit(1);
        }
    }
}
