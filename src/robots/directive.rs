use crate::robots::path::normalize_path;

/// One `Allow:` or `Disallow:` line from a robots.txt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pattern: String,
    normalized_path: String,
    is_allow: bool,
}

impl Directive {
    pub fn new(pattern: &str, is_allow: bool) -> Self {
        Self {
            pattern: pattern.to_owned(),
            normalized_path: normalize_path(pattern),
            is_allow,
        }
    }

    pub fn allow(pattern: &str) -> Self {
        Self::new(pattern, true)
    }

    pub fn disallow(pattern: &str) -> Self {
        Self::new(pattern, false)
    }

    /// The pattern exactly as written, `*` and `$` included.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn normalized_path(&self) -> &str {
        &self.normalized_path
    }

    pub fn is_allow(&self) -> bool {
        self.is_allow
    }

    /// Tests an already normalized request path against this directive.
    ///
    /// An end-anchored pattern (`/fish$`) requires exact equality. Any other
    /// pattern containing `*` has every wildcard removed and is then used as a
    /// plain prefix, so `/a*/b` behaves like `/a/b`. Everything else is a
    /// prefix match on the normalized path.
    pub fn matches_path(&self, path: &str) -> bool {
        if let Some(anchored) = self.pattern.strip_suffix('$') {
            return path == anchored;
        }

        if self.pattern.contains('*') {
            let prefix = self.pattern.replace('*', "");
            return path.starts_with(prefix.as_str());
        }

        path.starts_with(self.normalized_path.as_str())
    }
}
