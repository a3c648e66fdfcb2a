//! Per-turn chat orchestration.
//!
//! One turn runs generate → persist → render → surface, in that order. The
//! `&mut self` receiver serializes turns: a new submission is only accepted
//! once the previous reply's preview is on disk.

use crate::api::BackendClient;
use crate::core::surface::PreviewSurface;
use crate::preview;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A completed turn, ready for display.
#[derive(Debug)]
pub struct TurnRecord {
    pub prompt: String,
    /// Reply text, possibly annotated when persistence failed.
    pub reply: String,
    pub saved: bool,
}

pub struct ChatSession {
    client: BackendClient,
    preview_dir: PathBuf,
    current_surface: Option<PreviewSurface>,
}

impl ChatSession {
    pub fn new(client: BackendClient, preview_dir: PathBuf) -> Self {
        ChatSession {
            client,
            preview_dir,
            current_surface: None,
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Submit one prompt. A failed generate call is the turn's error; a
    /// failed history save is not — the reply is annotated and the turn
    /// goes on, exactly as the chat surface always behaved.
    pub async fn submit(&mut self, prompt: &str) -> Result<TurnRecord, Box<dyn Error>> {
        debug!(prompt_len = prompt.len(), "submitting prompt");
        let response = self.client.generate(prompt).await?;

        let mut reply = response.clone();
        let saved = match self.client.save_turn(prompt, &response).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to persist turn");
                reply.push_str("\n(Failed to save to history)");
                false
            }
        };

        let escaped = preview::render(&response);
        self.dismiss_preview();
        let surface = PreviewSurface::create(&escaped, &self.preview_dir)?;
        debug!(path = %surface.path().display(), "preview surface written");
        self.current_surface = Some(surface);

        Ok(TurnRecord {
            prompt: prompt.to_string(),
            reply,
            saved,
        })
    }

    /// Path of the currently open preview, if any.
    pub fn preview_path(&self) -> Option<&Path> {
        self.current_surface.as_ref().map(PreviewSurface::path)
    }

    /// Dismiss the open preview. Returns whether there was one.
    pub fn dismiss_preview(&mut self) -> bool {
        match self.current_surface.take() {
            Some(surface) => {
                if let Err(err) = surface.dismiss() {
                    warn!(error = %err, "failed to remove preview surface");
                }
                true
            }
            None => false,
        }
    }
}
