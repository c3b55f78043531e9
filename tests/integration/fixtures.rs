//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - In-memory clipboards (granting and denying)
//! - A harness that runs messages through `dispatch` with test effects
//! - Rendering a snapshot to plain text

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use content_studio::app::{dispatch, Effects};
use content_studio::clipboard::Clipboard;
use content_studio::config::Config;
use content_studio::core::UnwiredGenerator;
use content_studio::render::RenderState;
use content_studio::tea::{Message, Model};
use content_studio::{ui, Error, Result};

/// Clipboard that keeps the last written text and counts writes.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Clipboard that refuses every write, like an insecure or headless host.
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::ClipboardDenied("permission denied".to_string()))
    }
}

/// Runs the update loop the way the logic thread does, minus the terminal.
pub struct StudioHarness {
    pub model: Model,
    pub effects: Effects,
    msg_tx: mpsc::UnboundedSender<Message>,
    msg_rx: mpsc::UnboundedReceiver<Message>,
}

impl StudioHarness {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self::with_config(clipboard, Config::default())
    }

    pub fn with_config(clipboard: Arc<dyn Clipboard>, config: Config) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            model: Model::new(config),
            effects: Effects {
                clipboard,
                generator: Arc::new(UnwiredGenerator),
            },
            msg_tx,
            msg_rx,
        }
    }

    /// Send a message; returns true if the app asked to quit.
    pub async fn send(&mut self, msg: Message) -> bool {
        dispatch(&mut self.model, msg, &self.msg_tx, &self.effects).await
    }

    pub async fn press(&mut self, code: KeyCode) -> bool {
        self.send(Message::Key(KeyEvent::new(code, KeyModifiers::empty())))
            .await
    }

    pub async fn ctrl(&mut self, c: char) -> bool {
        self.send(Message::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
        .await
    }

    pub async fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            self.press(code).await;
        }
    }

    /// Feed completion messages back until every clipboard write resolved.
    pub async fn settle(&mut self) {
        while self.model.output.in_flight() > 0 {
            let msg = tokio::time::timeout(Duration::from_secs(5), self.msg_rx.recv())
                .await
                .expect("clipboard write did not complete")
                .expect("message channel closed");
            self.send(msg).await;
        }
    }
}

pub fn render_to_string(state: &RenderState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
