//! Output panel state and its copy state machine.
//!
//! Idle -> Copying on activation, back to Idle once every issued clipboard
//! write has resolved. Overlapping copies are not deduplicated: each one is
//! counted and each completion is reported on its own.

/// Fixed text shown in the output panel.
pub const PLACEHOLDER_OUTPUT: &str =
    "Your generated content will appear here.\n\n(Next: we’ll wire the Generate button.)";

/// Acknowledgment shown after a successful copy.
pub const COPIED_ACK: &str = "Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copying,
}

#[derive(Debug, Clone, Default)]
pub struct OutputPanel {
    in_flight: usize,
}

impl OutputPanel {
    pub fn text(&self) -> &'static str {
        PLACEHOLDER_OUTPUT
    }

    pub fn state(&self) -> CopyState {
        if self.in_flight > 0 {
            CopyState::Copying
        } else {
            CopyState::Idle
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Enter Copying and return the text to write.
    pub fn begin_copy(&mut self) -> String {
        self.in_flight += 1;
        self.text().to_string()
    }

    /// One issued write resolved, successfully or not.
    pub fn finish_copy(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
