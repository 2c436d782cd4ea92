//! HTTP client for the repository hosting API.

use crate::report::{Contributor, PullRequest};
use isle_core::{Error, Result, StatsConfig};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

const PER_PAGE: usize = 100;

pub struct StatsClient {
    config: StatsConfig,
    http_client: Client,
}

impl StatsClient {
    pub fn new(config: StatsConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Fetch all pull requests for the repository, in any state
    #[instrument(skip(self))]
    pub async fn fetch_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let url = format!("{}/pulls", self.config.repo_url());
        let prs = self
            .fetch_paginated(&url, &[("state", "all".to_string())])
            .await?;
        info!("Fetched {} pull requests", prs.len());
        Ok(prs)
    }

    /// Fetch the repository's contributors
    #[instrument(skip(self))]
    pub async fn fetch_contributors(&self) -> Result<Vec<Contributor>> {
        let url = format!("{}/contributors", self.config.repo_url());
        let contributors = self.fetch_paginated(&url, &[]).await?;
        info!("Fetched {} contributors", contributors.len());
        Ok(contributors)
    }

    /// Follow `page` parameters until the API returns a short page
    async fn fetch_paginated<T: DeserializeOwned>(
        &self,
        url: &str,
        extra_params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();

        for page in 1.. {
            let mut params = extra_params.to_vec();
            params.push(("per_page", PER_PAGE.to_string()));
            params.push(("page", page.to_string()));

            let batch: Vec<T> = self.get_json(url, &params).await?;
            let batch_len = batch.len();
            items.extend(batch);

            debug!("Page {} of {} returned {} items", page, url, batch_len);
            if batch_len < PER_PAGE {
                break;
            }
        }

        Ok(items)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET {}", url);

        let mut request = self
            .http_client
            .get(url)
            .query(params)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.config.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Request to {} failed: {} - {}", url, status, error_text);
            Err(Error::Network(format!(
                "request to {} failed with status {}: {}",
                url, status, error_text
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = StatsConfig::default();
        let client = StatsClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_keeps_config() {
        let config = StatsConfig {
            owner: "octocat".to_string(),
            repo: "hello-world".to_string(),
            ..Default::default()
        };
        let client = StatsClient::new(config).unwrap();
        assert_eq!(client.config().owner, "octocat");
        assert_eq!(
            client.config().repo_url(),
            "https://api.github.com/repos/octocat/hello-world"
        );
    }
}
