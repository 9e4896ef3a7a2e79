use crate::gate::decision::{Decision, DecisionReason};
use crate::gate::gate_config::GateConfig;
use crate::robots::{RobotsFetchError, RobotsTxtSource, RobotsTxtView};
use futures::future::join_all;
use percent_encoding::percent_decode_str;
use reqwest::Client;
use std::collections::HashMap;
use url::{Position, Url};

enum RobotsOutcome {
    Rules(RobotsTxtView),
    NotFound,
    Failed(String),
}

/// Decides whether URLs may be fetched, consulting each origin's robots.txt.
///
/// Failing to obtain robots.txt never blocks a URL: a 404 means no rules
/// apply and any other failure is logged and let through.
#[derive(Clone)]
pub struct RobotsGate {
    client: Client,
    config: GateConfig,
}

impl RobotsGate {
    pub fn new(config: GateConfig) -> Result<Self, RobotsFetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: GateConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub async fn check(&self, url: &Url) -> Decision {
        if !self.config.respect_robots_txt() {
            return Decision::allow(url.clone(), DecisionReason::NotChecked);
        }
        match self.robots_url_for(url) {
            Ok(robots_url) => evaluate(&self.load(&robots_url).await, url),
            Err(e) => unchecked(url, e),
        }
    }

    /// Checks every URL, fetching robots.txt once per origin.
    ///
    /// Origins are fetched concurrently; decisions come back in input order.
    pub async fn check_all(&self, urls: &[Url]) -> Vec<Decision> {
        if !self.config.respect_robots_txt() {
            return urls
                .iter()
                .map(|url| Decision::allow(url.clone(), DecisionReason::NotChecked))
                .collect();
        }

        let mut decisions: Vec<Option<Decision>> = vec![None; urls.len()];
        let mut by_robots_url: HashMap<Url, Vec<usize>> = HashMap::new();
        for (index, url) in urls.iter().enumerate() {
            match self.robots_url_for(url) {
                Ok(robots_url) => by_robots_url.entry(robots_url).or_default().push(index),
                Err(e) => decisions[index] = Some(unchecked(url, e)),
            }
        }

        let groups = by_robots_url
            .into_iter()
            .map(move |(robots_url, indices)| async move {
                let outcome = self.load(&robots_url).await;
                indices
                    .into_iter()
                    .map(|index| (index, evaluate(&outcome, &urls[index])))
                    .collect::<Vec<_>>()
            });

        for (index, decision) in join_all(groups).await.into_iter().flatten() {
            decisions[index] = Some(decision);
        }

        decisions.into_iter().flatten().collect()
    }

    fn robots_url_for(&self, url: &Url) -> Result<Url, RobotsFetchError> {
        match self.config.robots_url() {
            Some(robots_url) => Ok(robots_url.clone()),
            None => RobotsTxtSource::robots_url_for(url),
        }
    }

    async fn load(&self, robots_url: &Url) -> RobotsOutcome {
        match RobotsTxtSource::load_from_url(&self.client, robots_url).await {
            Ok(source) => RobotsOutcome::Rules(RobotsTxtView::new(source)),
            Err(e) if e.is_not_found() => {
                tracing::info!("{}, allowing all paths", e);
                RobotsOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!("{}, allowing all paths", e);
                RobotsOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Path and query of `url` with percent-escapes decoded, the form rules are
/// written in (`/search?q=`, `/café`).
fn request_target(url: &Url) -> String {
    let target = &url[Position::BeforePath..Position::AfterQuery];
    percent_decode_str(target).decode_utf8_lossy().into_owned()
}

fn unchecked(url: &Url, error: RobotsFetchError) -> Decision {
    tracing::warn!("Not checking robots.txt for {}: {}", url, error);
    Decision::allow(url.clone(), DecisionReason::FetchFailed(error.to_string()))
}

fn evaluate(outcome: &RobotsOutcome, url: &Url) -> Decision {
    match outcome {
        RobotsOutcome::Rules(view) => {
            let allowed = view.matcher().check_path(&request_target(url));
            if !allowed {
                tracing::info!("{} is disallowed by {}", url, view.source().origin());
            }
            Decision::new(url.clone(), allowed, DecisionReason::Matched)
        }
        RobotsOutcome::NotFound => Decision::allow(url.clone(), DecisionReason::RobotsNotFound),
        RobotsOutcome::Failed(message) => {
            Decision::allow(url.clone(), DecisionReason::FetchFailed(message.clone()))
        }
    }
}
