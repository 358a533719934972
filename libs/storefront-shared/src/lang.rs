use serde::{Deserialize, Serialize};

/// Languages the bot can talk in. Persian is the fallback for anything unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fa,
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Fa, Lang::En, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fa => "fa",
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Resolves a language code, falling back to the default language.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Lang::En,
            "ar" => Lang::Ar,
            _ => Lang::Fa,
        }
    }

    /// Caption of the language picker button. Not localized: each language names itself.
    pub fn native_label(self) -> &'static str {
        match self {
            Lang::Fa => "🇮🇷 فارسی",
            Lang::En => "🇬🇧 English",
            Lang::Ar => "🇸🇦 العربية",
        }
    }

    pub fn from_native_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.native_label() == text.trim())
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
