//! Fixed page tables of the site.
//!
//! Adding a page to the site means adding a row here.

use std::collections::HashMap;

use serde::Serialize;

use crate::locale::Locale;

/// One page published in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePair {
    pub german: &'static str,
    pub english: &'static str,
}

impl PagePair {
    pub fn file(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::German => self.german,
            Locale::English => self.english,
        }
    }
}

const HOME: PagePair = PagePair {
    german: "index.html",
    english: "index.html",
};
const COSTS: PagePair = PagePair {
    german: "behandlungskosten.html",
    english: "costs.html",
};
const ABOUT: PagePair = PagePair {
    german: "ueber-mich.html",
    english: "about.html",
};
const CONTACT: PagePair = PagePair {
    german: "kontakt.html",
    english: "contact.html",
};
const FAQ: PagePair = PagePair {
    german: "faq.html",
    english: "faq.html",
};

/// German ⇄ English filename dictionary.
pub const PAGES: [PagePair; 8] = [
    HOME,
    COSTS,
    ABOUT,
    CONTACT,
    FAQ,
    PagePair {
        german: "impressum.html",
        english: "imprint.html",
    },
    PagePair {
        german: "datenschutz.html",
        english: "privacy.html",
    },
    PagePair {
        german: "barrierefreiheit.html",
        english: "accessibility.html",
    },
];

/// Home page filename, shared by both languages.
pub const HOME_FILE: &str = HOME.german;

lazy_static::lazy_static! {
    static ref GERMAN_TO_ENGLISH: HashMap<&'static str, &'static str> =
        PAGES.iter().map(|page| (page.german, page.english)).collect();

    static ref ENGLISH_TO_GERMAN: HashMap<&'static str, &'static str> =
        GERMAN_TO_ENGLISH.iter().map(|(german, english)| (*english, *german)).collect();
}

/// Look up the counterpart of `file`, a page of locale `from`.
///
/// Returns `None` for files that are not part of the dictionary.
pub fn translate(file: &str, from: Locale) -> Option<&'static str> {
    let table = match from {
        Locale::German => &*GERMAN_TO_ENGLISH,
        Locale::English => &*ENGLISH_TO_GERMAN,
    };

    table.get(file).copied()
}

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Home,
    Costs,
    About,
    Contact,
    Faq,
}

impl NavKey {
    pub const ALL: [NavKey; 5] = [
        NavKey::Home,
        NavKey::Costs,
        NavKey::About,
        NavKey::Contact,
        NavKey::Faq,
    ];

    /// Value of the `data-page` attribute that tags this link in the header.
    pub fn as_str(self) -> &'static str {
        match self {
            NavKey::Home => "home",
            NavKey::Costs => "costs",
            NavKey::About => "about",
            NavKey::Contact => "contact",
            NavKey::Faq => "faq",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        NavKey::ALL.into_iter().find(|nav| nav.as_str() == key)
    }

    pub fn page(self) -> PagePair {
        match self {
            NavKey::Home => HOME,
            NavKey::Costs => COSTS,
            NavKey::About => ABOUT,
            NavKey::Contact => CONTACT,
            NavKey::Faq => FAQ,
        }
    }

    /// The nav entry whose `locale` variant is `file`, if any.
    pub fn for_file(file: &str, locale: Locale) -> Option<Self> {
        NavKey::ALL
            .into_iter()
            .find(|nav| nav.page().file(locale) == file)
    }
}
