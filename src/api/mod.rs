//! HTTP client for the chat backend.
//!
//! The backend is a black box with three endpoints: `POST /api/gemini`
//! proxies a prompt to the AI, `POST /chat` persists a completed turn, and
//! `GET /chat/history` lists stored turns. Responses are treated as opaque
//! strings once received.

pub mod models;

use crate::api::models::{GenerateRequest, GenerateResponse, HistoryEntry, SaveTurnRequest};
use crate::utils::url::construct_api_url;
use std::error::Error;

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        BackendClient {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Proxy a prompt to the AI endpoint and return the reply text.
    pub async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error>> {
        let url = construct_api_url(&self.base_url, "api/gemini");
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("Backend request failed with status {status}: {error_text}").into());
        }

        let body = response.json::<GenerateResponse>().await?;
        match body.response {
            Some(text) => Ok(text),
            None => Err(body
                .error
                .unwrap_or_else(|| "No response from AI.".to_string())
                .into()),
        }
    }

    /// Persist a completed turn to chat history.
    pub async fn save_turn(&self, prompt: &str, result: &str) -> Result<(), Box<dyn Error>> {
        let url = construct_api_url(&self.base_url, "chat");
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(&SaveTurnRequest {
                prompt: prompt.to_string(),
                result: result.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Failed to save to chat history (status {})", response.status()).into());
        }
        Ok(())
    }

    /// Fetch stored history, newest first (the backend's ordering).
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, Box<dyn Error>> {
        let url = construct_api_url(&self.base_url, "chat/history");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("History request failed with status {status}: {error_text}").into());
        }

        let entries = response.json::<Vec<HistoryEntry>>().await?;
        Ok(entries)
    }
}
