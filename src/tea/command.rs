//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime.

use crate::core::GenerationRequest;

/// Output commands from the update function.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Write text to the platform clipboard (spawns a blocking task)
    CopyToClipboard { text: String },

    /// Hand the form values to the generator
    Generate { request: GenerationRequest },

    // App lifecycle
    Quit,
}
