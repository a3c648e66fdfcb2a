//! Transcript logging for chat sessions.

use std::fs::OpenOptions;
use std::io::Write;

pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = &log_file {
            Self::test_file_access(path)?;
        }
        Ok(LoggingState {
            is_active: log_file.is_some(),
            file_path: log_file,
        })
    }

    /// Append one completed turn to the transcript file.
    pub fn log_turn(&self, prompt: &str, reply: &str) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = &self.file_path else {
            return Ok(());
        };
        if !self.is_active {
            return Ok(());
        }

        let mut file = OpenOptions::new().create(true).append(true).open(file_path)?;
        writeln!(file, "You: {prompt}")?;
        writeln!(file)?;
        for line in reply.lines() {
            writeln!(file, "{line}")?;
        }
        writeln!(file)?;
        file.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    fn test_file_access(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}
