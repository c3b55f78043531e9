use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::{Choice, CopyState, Language, Length, Selector, Tab, Tone, PLACEHOLDER_OUTPUT};
use crate::tea::{Focus, Notification};

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable view of the model handed to the render thread.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub active_tab: Tab,
    pub focus: Focus,
    pub tone: Tone,
    pub language: Language,
    pub length: Length,
    pub prompt: String,
    pub output: &'static str,
    pub copy_state: CopyState,
    /// Blocking acknowledgment currently shown, if any
    pub acknowledgment: Option<String>,
    pub notification: Option<Notification>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
}

impl RenderState {
    pub fn title(&self) -> &'static str {
        self.active_tab.title()
    }

    pub fn selection(&self, selector: Selector) -> &'static str {
        match selector {
            Selector::Tone => self.tone.label(),
            Selector::Language => self.language.label(),
            Selector::Length => self.length.label(),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            active_tab: Tab::default(),
            focus: Focus::default(),
            tone: Tone::default(),
            language: Language::default(),
            length: Length::default(),
            prompt: String::new(),
            output: PLACEHOLDER_OUTPUT,
            copy_state: CopyState::Idle,
            acknowledgment: None,
            notification: None,
            show_keymap: false,
        }
    }
}
