//! Content generation seam.
//!
//! Nothing generates text yet. The Generate control dispatches a
//! `GenerationRequest` to a `Generator`; the only implementation reports
//! that it is not wired, and the output panel keeps its placeholder.

use super::form::GenerationRequest;
use crate::{Error, Result};

/// Produces output text from the four form values.
pub trait Generator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Placeholder generator: always `Error::GeneratorUnavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnwiredGenerator;

impl Generator for UnwiredGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Err(Error::GeneratorUnavailable)
    }
}
