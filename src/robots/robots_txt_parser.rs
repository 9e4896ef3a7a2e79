use crate::robots::directive::Directive;
use crate::robots::rule_set::{DEFAULT_USER_AGENT_GROUP, RuleSet};

const USER_AGENT_PREFIX: &str = "User-agent:";
const ALLOW_PREFIX: &str = "Allow:";
const DISALLOW_PREFIX: &str = "Disallow:";

/// Parses a robots.txt body into a [`RuleSet`].
///
/// Parsing never fails: lines that are not `User-agent:`, `Allow:` or
/// `Disallow:` (matched case-sensitively) are skipped, so garbage in gives an
/// empty rule set, which allows everything.
///
/// Allow/Disallow lines are collected from every agent section, not only the
/// `*` group.
pub fn parse(content: &str) -> RuleSet {
    let mut user_agent_group = DEFAULT_USER_AGENT_GROUP.to_owned();
    let mut directives = Vec::new();

    for line in content.split('\n') {
        let line = line.trim();
        if let Some(agent) = line.strip_prefix(USER_AGENT_PREFIX) {
            let agent = agent.trim();
            if agent == DEFAULT_USER_AGENT_GROUP {
                user_agent_group = agent.to_owned();
            }
        } else if let Some(pattern) = line.strip_prefix(ALLOW_PREFIX) {
            directives.push(Directive::allow(pattern.trim()));
        } else if let Some(pattern) = line.strip_prefix(DISALLOW_PREFIX) {
            directives.push(Directive::disallow(pattern.trim()));
        }
    }

    RuleSet::new(user_agent_group, directives)
}
