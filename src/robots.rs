mod directive;
mod path;
mod robots_fetch_error;
mod robots_txt_matcher;
mod robots_txt_parser;
mod robots_txt_source;
mod rule_set;

pub use directive::Directive;
pub use path::normalize_path;
pub use robots_fetch_error::RobotsFetchError;
pub use robots_txt_matcher::{RobotsTxtMatcher, is_allowed};
pub use robots_txt_parser::parse;
pub use robots_txt_source::{MAX_ROBOTS_TXT_BYTES, RobotsTxtSource, RobotsTxtView};
pub use rule_set::{DEFAULT_USER_AGENT_GROUP, RuleSet};
