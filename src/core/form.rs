//! Generator form state.
//!
//! Four independently controlled fields: a free-text prompt and three
//! closed-enumeration selectors. Changing one field never touches another.

use super::choice::{Choice, Language, Length, Step, Tone};

/// Identifies one of the three selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Tone,
    Language,
    Length,
}

impl Selector {
    pub const ALL: [Selector; 3] = [Selector::Tone, Selector::Language, Selector::Length];

    pub fn label(&self) -> &'static str {
        match self {
            Selector::Tone => "Tone",
            Selector::Language => "Language",
            Selector::Length => "Length",
        }
    }

    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Selector::Tone => Tone::options(),
            Selector::Language => Language::options(),
            Selector::Length => Length::options(),
        }
    }
}

/// Snapshot of the four form values handed to a `Generator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub tone: Tone,
    pub language: Language,
    pub length: Length,
    pub prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorForm {
    tone: Tone,
    language: Language,
    length: Length,
    prompt: String,
}

impl GeneratorForm {
    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn set_length(&mut self, length: Length) {
        self.length = length;
    }

    /// Move one selector to its previous/next option.
    pub fn step(&mut self, selector: Selector, step: Step) {
        match selector {
            Selector::Tone => self.tone = self.tone.step(step),
            Selector::Language => self.language = self.language.step(step),
            Selector::Length => self.length = self.length.step(step),
        }
    }

    /// Current label of a selector.
    pub fn selection(&self, selector: Selector) -> &'static str {
        match selector {
            Selector::Tone => self.tone.label(),
            Selector::Language => self.language.label(),
            Selector::Length => self.length.label(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.prompt.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.prompt.push_str(s);
    }

    pub fn backspace(&mut self) {
        self.prompt.pop();
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            tone: self.tone,
            language: self.language,
            length: self.length,
            prompt: self.prompt.clone(),
        }
    }
}
