//! Supported languages and bilingual text.
//!
//! Every user-facing string in the engine (card names, position labels,
//! style personas) carries both languages; callers pick one at render time.

use serde::{Deserialize, Serialize};

/// A language the engine can render labels and prompts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    English,
    /// Simplified Chinese.
    Chinese,
}

impl Language {
    /// Both supported languages.
    pub fn all() -> &'static [Self] {
        &[Self::English, Self::Chinese]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Chinese => write!(f, "Chinese"),
        }
    }
}

/// A piece of text available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    /// English text.
    pub en: String,
    /// Chinese text.
    pub cn: String,
}

impl Localized {
    /// Build from an English/Chinese pair.
    pub fn new(en: &str, cn: &str) -> Self {
        Self {
            en: en.to_string(),
            cn: cn.to_string(),
        }
    }

    /// The text for the given language.
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Chinese => &self.cn,
        }
    }
}
