//! In-memory clipboard for testing.

use std::sync::{Arc, RwLock};

use handlegen_core::{
    application::{ApplicationError, ports::Clipboard},
    error::HandlegenResult,
};

/// Clipboard that keeps the last written text. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
    failing: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail as unavailable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok()?.clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> HandlegenResult<()> {
        if self.failing {
            return Err(ApplicationError::ClipboardUnavailable {
                reason: "memory clipboard configured to fail".into(),
            }
            .into());
        }
        let mut contents = self
            .contents
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
