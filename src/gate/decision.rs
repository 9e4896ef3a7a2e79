use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionReason {
    /// The URL path was evaluated against the fetched rules.
    Matched,
    /// The origin has no robots.txt, so nothing is restricted.
    RobotsNotFound,
    /// robots.txt could not be fetched; the URL is let through anyway.
    FetchFailed(String),
    /// robots.txt checking is turned off.
    NotChecked,
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionReason::Matched => write!(f, "robots.txt rules"),
            DecisionReason::RobotsNotFound => write!(f, "robots.txt not found"),
            DecisionReason::FetchFailed(message) => write!(f, "robots.txt unavailable: {message}"),
            DecisionReason::NotChecked => write!(f, "robots.txt ignored"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    url: Url,
    allowed: bool,
    reason: DecisionReason,
}

impl Decision {
    pub fn new(url: Url, allowed: bool, reason: DecisionReason) -> Self {
        Self {
            url,
            allowed,
            reason,
        }
    }

    pub fn allow(url: Url, reason: DecisionReason) -> Self {
        Self::new(url, true, reason)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn allowed(&self) -> bool {
        self.allowed
    }

    pub fn reason(&self) -> &DecisionReason {
        &self.reason
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.allowed { "allowed" } else { "denied" };
        write!(f, "{}\t{}\t{}", self.url, verdict, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_display() {
        let url = Url::parse("https://example.com/private").unwrap();
        let decision = Decision::new(url.clone(), false, DecisionReason::Matched);
        assert_eq!(
            decision.to_string(),
            "https://example.com/private\tdenied\trobots.txt rules"
        );

        let decision = Decision::allow(url, DecisionReason::FetchFailed("HTTP 500".into()));
        assert!(decision.to_string().ends_with("allowed\trobots.txt unavailable: HTTP 500"));
    }
}
