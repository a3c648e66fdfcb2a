//! Speech-capture lifecycle.
//!
//! The capture device sits behind a trait so the session logic is not
//! coupled to any particular recognizer. A capture attempt walks an
//! explicit state machine — `Idle → Listening → (Result | Error | Timeout)
//! → Idle` — with the listening window bounded by the session, not the
//! backend.

use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;
use tokio::time;

/// Where a capture session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Listening,
}

/// Why a capture attempt failed. Categories mirror the recognizer error
/// codes the chat surface reports to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    Network,
    NotAllowed,
    NoSpeech,
    Unavailable,
    Other(String),
}

impl CaptureError {
    /// The user-facing message for this failure.
    pub fn user_message(&self) -> String {
        let detail = match self {
            CaptureError::Network => "Network issue. Check your connection.",
            CaptureError::NotAllowed => "Microphone access denied. Grant permissions.",
            CaptureError::NoSpeech => "No speech detected. Speak louder or closer.",
            CaptureError::Unavailable => "Speech capture is not available on this system.",
            CaptureError::Other(detail) => detail,
        };
        format!("Speech capture failed: {detail}")
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl StdError for CaptureError {}

/// How a capture attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Transcript(String),
    Error(CaptureError),
    Timeout,
}

/// A device that can listen for one utterance and return its transcript.
#[async_trait]
pub trait SpeechCapture {
    async fn capture(&mut self) -> Result<String, CaptureError>;

    /// Whether this backend can capture at all. Callers disable the mic
    /// affordance up front when it cannot.
    fn is_available(&self) -> bool {
        true
    }
}

/// Backend for systems without a recognizer; every attempt reports
/// [`CaptureError::Unavailable`].
pub struct UnavailableCapture;

#[async_trait]
impl SpeechCapture for UnavailableCapture {
    async fn capture(&mut self) -> Result<String, CaptureError> {
        Err(CaptureError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Drives capture attempts through the phase cycle, bounding each listen
/// with a fixed timeout.
pub struct CaptureSession<C> {
    backend: C,
    timeout: Duration,
    phase: CapturePhase,
}

impl<C: SpeechCapture> CaptureSession<C> {
    pub fn new(backend: C, timeout: Duration) -> Self {
        CaptureSession {
            backend,
            timeout,
            phase: CapturePhase::Idle,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Run one capture attempt. The session always returns to `Idle`,
    /// whatever the outcome.
    pub async fn listen(&mut self) -> CaptureOutcome {
        if self.phase != CapturePhase::Idle {
            return CaptureOutcome::Error(CaptureError::Other(
                "A capture session is already in progress.".to_string(),
            ));
        }

        self.phase = CapturePhase::Listening;
        let outcome = match time::timeout(self.timeout, self.backend.capture()).await {
            Ok(Ok(transcript)) => CaptureOutcome::Transcript(transcript),
            Ok(Err(err)) => CaptureOutcome::Error(err),
            Err(_) => CaptureOutcome::Timeout,
        };
        self.phase = CapturePhase::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test backend that replays a fixed result after an optional delay.
    struct ScriptedCapture {
        result: Result<String, CaptureError>,
        delay: Duration,
    }

    #[async_trait]
    impl SpeechCapture for ScriptedCapture {
        async fn capture(&mut self) -> Result<String, CaptureError> {
            time::sleep(self.delay).await;
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn transcript_returns_session_to_idle() {
        let backend = ScriptedCapture {
            result: Ok("make a landing page".to_string()),
            delay: Duration::ZERO,
        };
        let mut session = CaptureSession::new(backend, Duration::from_secs(5));
        assert_eq!(session.phase(), CapturePhase::Idle);

        let outcome = session.listen().await;
        assert_eq!(
            outcome,
            CaptureOutcome::Transcript("make a landing page".to_string())
        );
        assert_eq!(session.phase(), CapturePhase::Idle);
    }

    #[tokio::test]
    async fn backend_errors_surface_as_error_outcome() {
        let backend = ScriptedCapture {
            result: Err(CaptureError::NoSpeech),
            delay: Duration::ZERO,
        };
        let mut session = CaptureSession::new(backend, Duration::from_secs(5));
        let outcome = session.listen().await;
        assert_eq!(outcome, CaptureOutcome::Error(CaptureError::NoSpeech));
        assert_eq!(session.phase(), CapturePhase::Idle);
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let backend = ScriptedCapture {
            result: Ok("too late".to_string()),
            delay: Duration::from_millis(50),
        };
        let mut session = CaptureSession::new(backend, Duration::from_millis(5));
        assert_eq!(session.listen().await, CaptureOutcome::Timeout);
        assert_eq!(session.phase(), CapturePhase::Idle);
    }

    #[tokio::test]
    async fn unavailable_backend_reports_unavailable() {
        let mut session = CaptureSession::new(UnavailableCapture, Duration::from_secs(5));
        assert!(!session.is_available());
        assert_eq!(
            session.listen().await,
            CaptureOutcome::Error(CaptureError::Unavailable)
        );
    }

    #[test]
    fn error_messages_match_the_chat_surface() {
        assert!(CaptureError::Network.user_message().contains("Network issue"));
        assert!(CaptureError::NotAllowed
            .user_message()
            .contains("Microphone access denied"));
        assert!(CaptureError::NoSpeech
            .user_message()
            .contains("No speech detected"));
    }
}
