use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, TutorError};

/// Practice topics reachable from the main menu. Upload is deliberately not a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Story,
    Time,
    Currency,
    Distance,
    Bellring,
    Operations,
}

impl Section {
    /// Menu order, row-major over a three-column grid.
    pub const ALL: [Section; 6] = [
        Section::Story,
        Section::Time,
        Section::Currency,
        Section::Distance,
        Section::Bellring,
        Section::Operations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Story => "Story",
            Section::Time => "Time",
            Section::Currency => "Currency",
            Section::Distance => "Distance",
            Section::Bellring => "Bellring",
            Section::Operations => "Operations",
        }
    }

    /// Whether a question bank `type` cell belongs to this section.
    pub fn matches_kind(self, kind: &str) -> bool {
        kind.trim().eq_ignore_ascii_case(self.name())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = TutorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.matches_kind(raw))
            .ok_or_else(|| {
                TutorError::new(
                    ErrorKind::PageLoadFailure,
                    format!("unknown section '{raw}'"),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Malayalam,
    Tamil,
    Arabic,
    Sanskrit,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Tamil,
        Language::Arabic,
        Language::Sanskrit,
    ];

    /// Name as shown to the learner, in the language's own script.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Malayalam => "മലയാളം",
            Language::Tamil => "தமிழ்",
            Language::Arabic => "عربي",
            Language::Sanskrit => "संस्कृत",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = TutorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Language::ALL
            .into_iter()
            .find(|language| {
                language.label() == raw || format!("{language:?}").eq_ignore_ascii_case(raw)
            })
            .ok_or_else(|| {
                TutorError::new(ErrorKind::Validation, format!("unknown language '{raw}'"))
            })
    }
}

/// One row of the question bank spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Value of the `type` column.
    pub kind: String,
    pub input: String,
    pub output: String,
}

impl Question {
    pub fn new(kind: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn section(&self) -> Option<Section> {
        self.kind.parse().ok()
    }
}
