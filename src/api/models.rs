use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Deserialize)]
pub struct GenerateResponse {
    pub response: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct SaveTurnRequest {
    pub prompt: String,
    pub result: String,
}

#[derive(Deserialize)]
pub struct SaveTurnResponse {
    pub status: Option<String>,
}

/// One stored turn, as returned by `GET /chat/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub prompt: Option<String>,
    pub timestamp: String,
}

impl HistoryEntry {
    /// Prompt trimmed for list display: 50 characters plus an ellipsis.
    pub fn display_prompt(&self) -> String {
        match &self.prompt {
            Some(p) if p.chars().count() > 50 => {
                let head: String = p.chars().take(50).collect();
                format!("{head}...")
            }
            Some(p) => p.clone(),
            None => "No prompt".to_string(),
        }
    }

    /// Parse the backend's SQLite `CURRENT_TIMESTAMP` format.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%d %H:%M:%S").ok()
    }
}
