//! Hosting topology detection.
//!
//! The site is published either at the root of a custom domain
//! (`/kontakt.html`, `/en/contact.html`) or inside a project folder of a
//! shared host (`/praxis/kontakt.html`, `/praxis/en/contact.html`).

use serde::Serialize;
use sitehead_utils::{normalize_base, path_segments, strip_query_and_fragment};

use crate::locale::LOCALE_SEGMENT;

/// Where the site is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    /// Served from `/`.
    RootDomain,
    /// Served from `/<prefix>/`. The prefix is stored without slashes.
    Project(String),
}

impl Deployment {
    /// Infer the topology from the first segment of `path`.
    ///
    /// No segment, the locale segment, or an `.html` file mean root hosting;
    /// anything else is taken as the project folder. A project folder named
    /// `en` therefore reads as root hosting; configure the base path
    /// explicitly with [`Deployment::from_base_path`] for such a site.
    pub fn detect(path: &str) -> Self {
        let path = strip_query_and_fragment(path);

        match path_segments(path).first() {
            None => Deployment::RootDomain,
            Some(first) if *first == LOCALE_SEGMENT || first.ends_with(".html") => {
                Deployment::RootDomain
            }
            Some(first) => Deployment::Project((*first).to_owned()),
        }
    }

    /// Build a deployment from a configured base path such as `/` or
    /// `/praxis/`. Slashes around the value are optional.
    pub fn from_base_path(base: &str) -> Self {
        let normalized = normalize_base(base);
        let inner = normalized.trim_matches('/');

        if inner.is_empty() {
            Deployment::RootDomain
        } else {
            Deployment::Project(inner.to_owned())
        }
    }

    /// The base prefix, always starting and ending with `/`.
    pub fn base_prefix(&self) -> String {
        match self {
            Deployment::RootDomain => String::from("/"),
            Deployment::Project(prefix) => normalize_base(prefix),
        }
    }

    /// Drop this deployment's prefix from already split `segments`.
    ///
    /// Paths outside the prefix are returned unchanged.
    pub(crate) fn strip_prefix<'a, 'p>(&self, segments: &'a [&'p str]) -> &'a [&'p str] {
        let Deployment::Project(prefix) = self else {
            return segments;
        };

        let prefix_segments = path_segments(prefix);

        if segments.starts_with(&prefix_segments) {
            &segments[prefix_segments.len()..]
        } else {
            segments
        }
    }
}
