use std::path::PathBuf;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum RobotsFetchError {
    #[error("robots.txt not found at {0}")]
    NotFound(Url),

    #[error("failed to fetch robots.txt from {url}: HTTP {status}")]
    HttpStatus { url: Url, status: u16 },

    #[error("URL {0} has no host to fetch robots.txt from")]
    MissingHost(Url),

    #[error("failed to read robots.txt at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

impl RobotsFetchError {
    /// A missing robots.txt means no rules apply, unlike other failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RobotsFetchError::NotFound(_))
    }
}
