use std::time::Duration;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GateConfig {
    user_agent: String,
    robots_url: Option<Url>,
    respect_robots_txt: bool,
    timeout: Duration,
}

impl GateConfig {
    pub fn new(
        user_agent: String,
        robots_url: Option<Url>,
        respect_robots_txt: bool,
        timeout: Duration,
    ) -> Self {
        Self {
            user_agent,
            robots_url,
            respect_robots_txt,
            timeout,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fixed robots.txt location used instead of each URL's own origin.
    pub fn robots_url(&self) -> Option<&Url> {
        self.robots_url.as_ref()
    }

    pub fn respect_robots_txt(&self) -> bool {
        self.respect_robots_txt
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT.to_owned(), None, true, DEFAULT_TIMEOUT)
    }
}
