use serde::Serialize;
use sitehead_utils::{path_segments, strip_query_and_fragment};

use crate::{
    deployment::Deployment,
    dictionary::HOME_FILE,
    locale::{LOCALE_SEGMENT, Locale},
};

/// What the header needs to know about the page it is shown on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    /// `/` or `/<project>/`.
    pub base_prefix: String,
    pub is_english: bool,
    /// Bare filename of the page, `index.html` for directory URLs.
    pub canonical_file: String,
}

impl ResolvedLocation {
    pub fn locale(&self) -> Locale {
        Locale::from_is_english(self.is_english)
    }
}

/// Resolve `path`, inferring the deployment from the path itself.
pub fn resolve(path: &str) -> ResolvedLocation {
    resolve_in(path, &Deployment::detect(path))
}

/// Resolve `path` for a known deployment.
pub fn resolve_in(path: &str, deployment: &Deployment) -> ResolvedLocation {
    let path = strip_query_and_fragment(path);
    let segments = path_segments(path);

    let mut rest = deployment.strip_prefix(&segments);

    let is_english = rest.first() == Some(&LOCALE_SEGMENT);
    if is_english {
        rest = &rest[1..];
    }

    let canonical_file = match rest.last() {
        Some(last) if !path.ends_with('/') && last.contains('.') => (*last).to_owned(),
        _ => HOME_FILE.to_owned(),
    };

    ResolvedLocation {
        base_prefix: deployment.base_prefix(),
        is_english,
        canonical_file,
    }
}
