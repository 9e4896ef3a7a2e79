//! robots.txt parsing and matching, plus a fail-open gate that fetches
//! robots.txt per origin before deciding whether URLs may be fetched.

pub mod gate;
pub mod robots;

pub use gate::{Decision, DecisionReason, GateConfig, RobotsGate};
pub use robots::{Directive, RobotsFetchError, RuleSet, is_allowed, normalize_path, parse};
