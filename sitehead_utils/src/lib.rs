//! Small URL path primitives shared by the resolver and the DOM layer.

/// Cut a raw path at the first `?` or `#`.
///
/// `location.pathname` never carries either, but hrefs copied out of the DOM
/// and paths handed in by embedders can.
pub fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Split a path into its non-empty `/`-separated segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Normalize a base path to the `/…/` form: leading and trailing slash,
/// no empty segments. An empty base becomes `/`.
pub fn normalize_base(base: &str) -> String {
    let segments = path_segments(base);

    if segments.is_empty() {
        String::from("/")
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Join a base path with a path relative to it.
///
/// The base is treated as a directory (a missing trailing slash is added) and
/// leading slashes of `path` are dropped, so the junction never doubles a
/// slash nor loses one. An absolute `path` that already lives under the base
/// is returned as is instead of being prefixed twice.
pub fn join_path(base: &str, path: &str) -> String {
    let base = normalize_base(base);
    let absolute = path.starts_with('/');
    let relative = path.trim_start_matches('/');
    let inner = base.trim_matches('/');

    if absolute && !inner.is_empty() {
        match relative.strip_prefix(inner) {
            Some("") => return base,
            Some(rest) if rest.starts_with('/') => return format!("/{relative}"),
            _ => {}
        }
    }

    format!("{base}{relative}")
}
