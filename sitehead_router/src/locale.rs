use serde::Serialize;

/// Path segment that marks the English variant of a page.
pub const LOCALE_SEGMENT: &str = "en";

/// The two languages the site is published in. German is the default and
/// lives at the deployment root; English lives under [`LOCALE_SEGMENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    German,
    English,
}

impl Locale {
    pub fn from_is_english(is_english: bool) -> Self {
        if is_english {
            Locale::English
        } else {
            Locale::German
        }
    }

    pub fn is_english(self) -> bool {
        self == Locale::English
    }

    /// The language a switch control on this locale's pages points to.
    pub fn other(self) -> Self {
        match self {
            Locale::German => Locale::English,
            Locale::English => Locale::German,
        }
    }

    /// Directory of this locale relative to the base prefix, `/`-terminated
    /// or empty.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::German => "",
            Locale::English => "en/",
        }
    }

    /// Prefix `file` with this locale's directory.
    pub fn localize(self, file: &str) -> String {
        format!("{}{}", self.dir(), file.trim_start_matches('/'))
    }
}
