//! The declared language set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldsError, Result};

/// A language a multilingual field carries a value for.
///
/// Declaration order is layout order: panes render in the order of
/// [`Language::ALL`], never sorted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Eng,
    Fre,
}

impl Language {
    pub const COUNT: usize = 2;

    /// Every language, in declaration order.
    pub const ALL: [Language; Language::COUNT] = [Language::Eng, Language::Fre];

    /// The language list rows and sort labels use.
    pub const PRIMARY: Language = Language::Eng;

    pub fn code(self) -> &'static str {
        match self {
            Language::Eng => "eng",
            Language::Fre => "fre",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| FieldsError::UnknownLanguage {
                code: code.to_string(),
            })
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Language::Eng => 0,
            Language::Fre => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
