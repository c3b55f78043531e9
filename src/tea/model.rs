//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime infrastructure.

use std::collections::VecDeque;

use crate::config::Config;
use crate::core::{GeneratorForm, OutputPanel, Selector, Shell};
use crate::render::{next_version, RenderState};

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Error notification - displayed in red with "Error:" prefix
    Error,
}

/// A notification message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// The control that currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tabs,
    Prompt,
    Tone,
    Language,
    Length,
    Generate,
    Copy,
}

impl Focus {
    /// Tab order.
    pub const ORDER: [Focus; 7] = [
        Focus::Tabs,
        Focus::Prompt,
        Focus::Tone,
        Focus::Language,
        Focus::Length,
        Focus::Generate,
        Focus::Copy,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Focus {
        let idx = self.index();
        Self::ORDER[idx.checked_sub(1).unwrap_or(Self::ORDER.len() - 1)]
    }

    /// The selector behind this focus, if it is one.
    pub fn selector(&self) -> Option<Selector> {
        match self {
            Focus::Tone => Some(Selector::Tone),
            Focus::Language => Some(Selector::Language),
            Focus::Length => Some(Selector::Length),
            _ => None,
        }
    }
}

/// Pure application state - the single source of truth.
pub struct Model {
    // Component state, each owned and mutated by its component only
    pub shell: Shell,
    pub form: GeneratorForm,
    pub output: OutputPanel,

    pub focus: Focus,
    /// Pending blocking acknowledgments, one per successful copy.
    pub acknowledgments: VecDeque<String>,
    pub notification: Option<Notification>,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            shell: Shell::default(),
            form: GeneratorForm::default(),
            output: OutputPanel::default(),
            focus: Focus::default(),
            acknowledgments: VecDeque::new(),
            notification: None,
            show_keymap: config.show_keymap,
            dirty: true,
            config,
        }
    }

    /// The acknowledgment currently blocking input, if any.
    pub fn acknowledgment(&self) -> Option<&str> {
        self.acknowledgments.front().map(String::as_str)
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number so the
    /// render thread can skip redundant frames.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            active_tab: self.shell.active_tab(),
            focus: self.focus,
            tone: self.form.tone(),
            language: self.form.language(),
            length: self.form.length(),
            prompt: self.form.prompt().to_string(),
            output: self.output.text(),
            copy_state: self.output.state(),
            acknowledgment: self.acknowledgment().map(str::to_string),
            notification: self.notification.clone(),
            show_keymap: self.show_keymap,
        }
    }
}
