#![allow(missing_docs)]
//! Path resolution and German ⇄ English page mapping for the site header.
//!
//! Everything in here is a pure function of a URL path: the DOM layer reads
//! `location.pathname`, hands it to [`resolve`], and writes the results of
//! [`map_language_switch`] and [`map_nav_links`] into the header's anchors.

mod deployment;
mod dictionary;
mod locale;
mod mapper;
mod resolver;

pub use deployment::Deployment;
pub use dictionary::{HOME_FILE, NavKey, PAGES, PagePair, translate};
pub use locale::{LOCALE_SEGMENT, Locale};
pub use mapper::{
    LanguageLinks, NavLinkTargets, active_nav_key, map_language_switch, map_nav_links,
};
pub use resolver::{ResolvedLocation, resolve, resolve_in};
pub use sitehead_utils::join_path;
