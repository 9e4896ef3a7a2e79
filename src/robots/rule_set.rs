use crate::robots::directive::Directive;

/// The user-agent group whose directives are collected.
pub const DEFAULT_USER_AGENT_GROUP: &str = "*";

/// Directives parsed from one robots.txt body, in file order.
///
/// Built once by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    user_agent_group: String,
    directives: Vec<Directive>,
}

impl RuleSet {
    pub(crate) fn new(user_agent_group: String, directives: Vec<Directive>) -> Self {
        Self {
            user_agent_group,
            directives,
        }
    }

    pub fn user_agent_group(&self) -> &str {
        &self.user_agent_group
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new(DEFAULT_USER_AGENT_GROUP.to_owned(), Vec::new())
    }
}
