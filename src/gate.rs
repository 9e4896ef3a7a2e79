mod decision;
mod gate_config;
mod robots_gate;

pub use decision::{Decision, DecisionReason};
pub use gate_config::{DEFAULT_USER_AGENT, GateConfig};
pub use robots_gate::RobotsGate;
