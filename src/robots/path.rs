/// Canonicalizes a robots.txt pattern or request path.
///
/// The result always starts with `/`. A single trailing `*` is dropped since
/// it adds nothing to a prefix match; `/a**` becomes `/a*`, not `/a`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_owned();
    }

    let mut normalized = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    if normalized.ends_with('*') {
        normalized.pop();
    }

    normalized
}
