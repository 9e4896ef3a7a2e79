use crate::robots::robots_fetch_error::RobotsFetchError;
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;
use crate::robots::robots_txt_parser::parse;
use crate::robots::rule_set::RuleSet;
use reqwest::{Client, StatusCode};
use std::path::Path;
use url::Url;

/// Bodies past this size are truncated, as Google does.
pub const MAX_ROBOTS_TXT_BYTES: usize = 500 * 1024;

/// Raw robots.txt text together with where it came from.
#[derive(Debug, Clone)]
pub struct RobotsTxtSource {
    content: String,
    origin: String,
}

impl RobotsTxtSource {
    pub fn new(content: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: origin.into(),
        }
    }

    /// `<scheme>://<host>[:port]/robots.txt` for any URL on that origin.
    pub fn robots_url_for(target: &Url) -> Result<Url, RobotsFetchError> {
        if !target.has_host() {
            return Err(RobotsFetchError::MissingHost(target.clone()));
        }
        let mut robots_txt_url = target.join("/robots.txt")?;
        robots_txt_url.set_query(None);
        robots_txt_url.set_fragment(None);
        Ok(robots_txt_url)
    }

    /// Fetches robots.txt from `robots_txt_url`.
    ///
    /// A 404 comes back as [`RobotsFetchError::NotFound`] so callers can tell
    /// "no rules" apart from a failed fetch.
    pub async fn load_from_url(
        client: &Client,
        robots_txt_url: &Url,
    ) -> Result<Self, RobotsFetchError> {
        tracing::info!("Fetching robots.txt from {}", robots_txt_url);

        let mut robots_response = client.get(robots_txt_url.clone()).send().await?;
        let status = robots_response.status();
        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(RobotsFetchError::NotFound(robots_txt_url.clone()));
            }
            return Err(RobotsFetchError::HttpStatus {
                url: robots_txt_url.clone(),
                status: status.as_u16(),
            });
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = robots_response.chunk().await? {
            let remaining = MAX_ROBOTS_TXT_BYTES - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                tracing::warn!(
                    "robots.txt from {} exceeds {} bytes, ignoring the rest",
                    robots_txt_url,
                    MAX_ROBOTS_TXT_BYTES
                );
                break;
            }
            body.extend_from_slice(&chunk);
        }
        let content = String::from_utf8_lossy(&body).into_owned();
        tracing::debug!(
            bytes = content.len(),
            "Fetched robots.txt from {}",
            robots_txt_url
        );
        Ok(Self::new(content, robots_txt_url.as_str()))
    }

    pub fn from_file(path: &Path) -> Result<Self, RobotsFetchError> {
        let content = std::fs::read_to_string(path).map_err(|source| RobotsFetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(content, path.display().to_string()))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn rule_set(&self) -> RuleSet {
        let rule_set = parse(&self.content);
        tracing::debug!(
            directives = rule_set.len(),
            "Parsed robots.txt from {}",
            self.origin
        );
        rule_set
    }
}

/// A parsed [`RobotsTxtSource`] ready for path checks.
pub struct RobotsTxtView {
    source: RobotsTxtSource,
    rule_set: RuleSet,
}

impl RobotsTxtView {
    pub fn new(source: RobotsTxtSource) -> Self {
        let rule_set = source.rule_set();
        Self { source, rule_set }
    }

    pub fn source(&self) -> &RobotsTxtSource {
        &self.source
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn matcher(&self) -> RobotsTxtMatcher<'_> {
        RobotsTxtMatcher::new(&self.rule_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_robots_url_for_keeps_scheme_host_and_port() {
        let target = Url::parse("http://example.com:8080/docs/page.html?q=1#top").unwrap();
        let robots_url = RobotsTxtSource::robots_url_for(&target).unwrap();
        assert_eq!(robots_url.as_str(), "http://example.com:8080/robots.txt");
    }

    #[test]
    fn test_robots_url_for_rejects_hostless_url() {
        let target = Url::parse("data:text/plain,hello").unwrap();
        let err = RobotsTxtSource::robots_url_for(&target).unwrap_err();
        assert!(matches!(err, RobotsFetchError::MissingHost(_)));
    }

    #[tokio::test]
    async fn test_load_from_url_success() {
        let server = MockServer::start_async().await;
        let robots_body = "User-agent: *\nDisallow: /private/";
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/robots.txt");
                then.status(200).body(robots_body);
            })
            .await;

        let client = Client::new();
        let robots_url = Url::parse(&server.url("/robots.txt")).unwrap();
        let source = RobotsTxtSource::load_from_url(&client, &robots_url)
            .await
            .unwrap();

        assert_eq!(source.content(), robots_body);
        assert_eq!(source.origin(), robots_url.as_str());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_from_url_not_found() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/robots.txt");
                then.status(404);
            })
            .await;

        let client = Client::new();
        let robots_url = Url::parse(&server.url("/robots.txt")).unwrap();
        let err = RobotsTxtSource::load_from_url(&client, &robots_url)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_from_url_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/robots.txt");
                then.status(503);
            })
            .await;

        let client = Client::new();
        let robots_url = Url::parse(&server.url("/robots.txt")).unwrap();
        let err = RobotsTxtSource::load_from_url(&client, &robots_url)
            .await
            .unwrap_err();

        assert!(matches!(err, RobotsFetchError::HttpStatus { status: 503, .. }));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_load_from_url_truncates_oversized_body() {
        let server = MockServer::start_async().await;
        let robots_body = "Disallow: /a\n".repeat(MAX_ROBOTS_TXT_BYTES / 8);
        server
            .mock_async(|when, then| {
                when.method(GET).path("/robots.txt");
                then.status(200).body(robots_body.as_str());
            })
            .await;

        let client = Client::new();
        let robots_url = Url::parse(&server.url("/robots.txt")).unwrap();
        let source = RobotsTxtSource::load_from_url(&client, &robots_url)
            .await
            .unwrap();

        assert!(robots_body.len() > MAX_ROBOTS_TXT_BYTES);
        assert_eq!(source.content().len(), MAX_ROBOTS_TXT_BYTES);
        assert_eq!(source.content(), &robots_body[..MAX_ROBOTS_TXT_BYTES]);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let err = RobotsTxtSource::from_file(&dir.path().join("robots.txt")).unwrap_err();
        assert!(matches!(err, RobotsFetchError::Io { .. }));
    }

    #[test]
    fn test_from_file_reads_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "User-agent: *\nDisallow: /tmp/\n").unwrap();

        let source = RobotsTxtSource::from_file(file.path()).unwrap();
        let view = RobotsTxtView::new(source);
        assert_eq!(view.rule_set().len(), 1);
        assert!(!view.matcher().check_path("/tmp/file"));
        assert!(view.matcher().check_path("/home"));
    }
}
