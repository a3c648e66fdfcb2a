//! Chat history listing.

use std::error::Error;

use crate::api::BackendClient;
use crate::core::config::Config;

pub async fn list_history(backend_override: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let base_url = backend_override.unwrap_or_else(|| config.backend_url().to_string());
    let client = BackendClient::new(&base_url);

    let entries = client.history().await?;
    if entries.is_empty() {
        println!("No chat history yet.");
        return Ok(());
    }

    println!("Chat history ({} turns, newest first):", entries.len());
    println!();
    for entry in entries {
        let when = entry
            .parsed_timestamp()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| entry.timestamp.clone());
        println!("  {:>5}  {}  {}", entry.id, when, entry.display_prompt());
    }
    Ok(())
}
