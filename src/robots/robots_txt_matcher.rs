use crate::robots::directive::Directive;
use crate::robots::path::normalize_path;
use crate::robots::rule_set::RuleSet;

/// Answers allow/deny questions against a borrowed [`RuleSet`].
#[derive(Clone, Copy)]
pub struct RobotsTxtMatcher<'a> {
    rule_set: &'a RuleSet,
}

impl<'a> RobotsTxtMatcher<'a> {
    pub fn new(rule_set: &'a RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn check_path(&self, path: &str) -> bool {
        is_allowed(self.rule_set, path)
    }

    /// The directive that decides `path`, if any matches.
    pub fn decisive_directive(&self, path: &str) -> Option<&'a Directive> {
        longest_match(self.rule_set, &normalize_path(path))
            .map(|index| &self.rule_set.directives()[index])
    }
}

/// Returns whether `path` may be fetched under `rule_set`.
///
/// The matching directive with the longest normalized path wins; on equal
/// lengths the earliest one in the file is kept. With no match the path is
/// allowed.
pub fn is_allowed(rule_set: &RuleSet, path: &str) -> bool {
    let path = normalize_path(path);
    match longest_match(rule_set, &path) {
        Some(index) => {
            let directive = &rule_set.directives()[index];
            tracing::trace!(
                path = %path,
                pattern = directive.pattern(),
                allow = directive.is_allow(),
                "robots.txt directive matched"
            );
            directive.is_allow()
        }
        None => true,
    }
}

fn longest_match(rule_set: &RuleSet, normalized_path: &str) -> Option<usize> {
    let mut best: Option<usize> = None;
    // Normalized paths are at least "/", so any match beats zero.
    let mut best_len = 0;

    for (index, directive) in rule_set.directives().iter().enumerate() {
        if !directive.matches_path(normalized_path) {
            continue;
        }
        let len = directive.normalized_path().len();
        if len > best_len {
            best = Some(index);
            best_len = len;
        }
    }

    best
}
