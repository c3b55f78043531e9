//! Shell state: which content mode is active.

use super::choice::{Choice, Step};

/// One of the three mutually exclusive content modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    LinkedIn,
    Email,
    Improve,
}

impl Tab {
    /// Title of the form pane for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::LinkedIn => "LinkedIn Post",
            Tab::Email => "Email Draft",
            Tab::Improve => "Improve Text",
        }
    }

    /// Tab for a 1-based shortcut digit.
    pub fn from_digit(c: char) -> Option<Tab> {
        let idx = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }
}

impl Choice for Tab {
    const ALL: &'static [Self] = &[Tab::LinkedIn, Tab::Email, Tab::Improve];

    fn label(&self) -> &'static str {
        match self {
            Tab::LinkedIn => "LinkedIn",
            Tab::Email => "Email",
            Tab::Improve => "Improve",
        }
    }
}

/// Owns the active tab for the lifetime of the view.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    active_tab: Tab,
}

impl Shell {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn title(&self) -> &'static str {
        self.active_tab.title()
    }

    /// Select a tab. Returns false when it was already active.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        changed
    }

    pub fn step(&mut self, step: Step) -> bool {
        self.select(self.active_tab.step(step))
    }
}
