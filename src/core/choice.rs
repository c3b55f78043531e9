//! Closed enumerations shown as single-select controls.
//!
//! Every selectable value comes from `Choice::ALL`, so a control can only
//! ever hold a member of its option set. Cycling wraps in both directions.

/// A field restricted to a fixed, closed set of values.
pub trait Choice: Copy + Eq + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Label shown to the operator.
    fn label(&self) -> &'static str;

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        let pos = self.position();
        Self::ALL[pos.checked_sub(1).unwrap_or(Self::ALL.len() - 1)]
    }

    fn step(&self, step: Step) -> Self {
        match step {
            Step::Forward => self.next(),
            Step::Back => self.prev(),
        }
    }

    /// Labels of the whole option set, in display order.
    fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

/// Direction for cycling a `Choice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Technical,
}

impl Choice for Tone {
    const ALL: &'static [Self] = &[Tone::Professional, Tone::Friendly, Tone::Technical];

    fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Choice for Language {
    const ALL: &'static [Self] = &[Language::Spanish, Language::English];

    fn label(&self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Choice for Length {
    const ALL: &'static [Self] = &[Length::Short, Length::Medium, Length::Long];

    fn label(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}
