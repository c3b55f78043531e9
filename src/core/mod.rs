//! Core domain models for the content studio.
//!
//! Each component owns its own state: the shell owns the active tab, the
//! generator form owns its four fields, the output panel owns its copy
//! state. They never share or alias state.

pub mod choice;
pub mod form;
pub mod generate;
pub mod output;
pub mod shell;

pub use choice::{Choice, Language, Length, Step, Tone};
pub use form::{GenerationRequest, GeneratorForm, Selector};
pub use generate::{Generator, UnwiredGenerator};
pub use output::{CopyState, OutputPanel, COPIED_ACK, PLACEHOLDER_OUTPUT};
pub use shell::{Shell, Tab};
