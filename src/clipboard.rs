/*!
 * Clipboard copy for translated text.
 *
 * Copying is best-effort: a successful write produces a short-lived
 * confirmation notice, a failed one is logged and otherwise ignored.
 */

use std::time::Duration;

use arboard::Clipboard;
use log::{debug, warn};

use crate::errors::ClipboardError;

/// Message shown after a successful copy
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// How long a notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Anything that can receive copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }

    /// On Linux the setting process owns the selection, so a write blocks
    /// until a clipboard manager or another client takes it over.
    pub const fn waits_for_handoff() -> bool {
        cfg!(target_os = "linux")
    }
}

impl ClipboardSink for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        debug!("Waiting for clipboard hand-off");
        self.inner
            .set()
            .wait()
            .text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// In-process clipboard, used when no display is available and in tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Transient confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn copied() -> Self {
        Self {
            message: COPIED_MESSAGE.to_string(),
            duration: NOTICE_DURATION,
        }
    }
}

/// Outcome of a copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(Notice),
    /// Nothing to copy
    Skipped,
    Failed,
}

impl CopyOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Copied(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Copy `text` to `sink`, never failing the caller
pub fn copy_result<S: ClipboardSink + ?Sized>(sink: &mut S, text: &str) -> CopyOutcome {
    if text.is_empty() {
        debug!("Nothing to copy");
        return CopyOutcome::Skipped;
    }

    match sink.set_text(text) {
        Ok(()) => CopyOutcome::Copied(Notice::copied()),
        Err(e) => {
            warn!("{}", e);
            CopyOutcome::Failed
        }
    }
}
