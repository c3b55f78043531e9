//! Platform clipboard access.
//!
//! The only boundary the studio has with the host environment. A write
//! either completes or fails with `Error::ClipboardDenied`.

use std::sync::Mutex;

use crate::{slog_debug, Error, Result};

/// Write-to-clipboard capability provided by the host.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened on the first write and kept for the life of the
/// app: on X11 the selection is only served while a handle is alive. A
/// failed write drops the handle so the next one reconnects.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.handle.lock().map(|h| h.is_some()).unwrap_or(false)
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| Error::ClipboardDenied("clipboard handle poisoned".to_string()))?;

        let mut clipboard = match handle.take() {
            Some(clipboard) => clipboard,
            None => {
                slog_debug!("Opening system clipboard");
                arboard::Clipboard::new()?
            }
        };
        clipboard.set_text(text.to_owned())?;
        *handle = Some(clipboard);
        Ok(())
    }
}
