use std::collections::BTreeMap;

use serde::Serialize;
use sitehead_utils::join_path;

use crate::{
    dictionary::{HOME_FILE, NavKey, translate},
    locale::Locale,
    resolver::ResolvedLocation,
};

/// Targets of the two anchors of the language switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLinks {
    pub german_url: String,
    pub english_url: String,
}

impl LanguageLinks {
    pub fn url(&self, locale: Locale) -> &str {
        match locale {
            Locale::German => &self.german_url,
            Locale::English => &self.english_url,
        }
    }
}

/// Localized targets of the navigation bar and the logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkTargets {
    pub links: BTreeMap<NavKey, String>,
    pub logo: String,
}

impl NavLinkTargets {
    pub fn get(&self, key: NavKey) -> Option<&str> {
        self.links.get(&key).map(String::as_str)
    }
}

/// Compute both language-switch targets for `location`.
///
/// The link of the current language always keeps the current file, even when
/// the dictionary does not know it. The other link falls back to that
/// language's home page.
pub fn map_language_switch(location: &ResolvedLocation) -> LanguageLinks {
    let current = location.locale();
    let current_file = location.canonical_file.as_str();
    let other_file = translate(current_file, current).unwrap_or(HOME_FILE);

    let url_for =
        |locale: Locale, file: &str| join_path(&location.base_prefix, &locale.localize(file));

    let current_url = url_for(current, current_file);
    let other_url = url_for(current.other(), other_file);

    match current {
        Locale::German => LanguageLinks {
            german_url: current_url,
            english_url: other_url,
        },
        Locale::English => LanguageLinks {
            german_url: other_url,
            english_url: current_url,
        },
    }
}

/// Compute the localized target of every navigation entry and of the logo.
pub fn map_nav_links(location: &ResolvedLocation) -> NavLinkTargets {
    let locale = location.locale();
    let target = |key: NavKey| {
        join_path(&location.base_prefix, &locale.localize(key.page().file(locale)))
    };

    NavLinkTargets {
        links: NavKey::ALL.into_iter().map(|key| (key, target(key))).collect(),
        logo: target(NavKey::Home),
    }
}

/// The navigation entry that represents the resolved page, if any.
pub fn active_nav_key(location: &ResolvedLocation) -> Option<NavKey> {
    NavKey::for_file(&location.canonical_file, location.locale())
}
