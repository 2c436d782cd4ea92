//! Configuration types.

use serde::{Deserialize, Serialize};

/// Random grid generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridGenConfig {
    /// Width of the generated grid
    pub width: i32,
    /// Height of the generated grid
    pub height: i32,
    /// Probability that a cell is land (0.0 to 1.0)
    pub land_density: f32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for GridGenConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            land_density: 0.35,
            seed: 0,
        }
    }
}

/// Repository stats fetcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Base URL of the repository hosting API
    pub api_base_url: String,
    /// Repository owner login
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Optional bearer token for authenticated requests
    pub token: Option<String>,
    /// User-Agent header (the GitHub API rejects requests without one)
    pub user_agent: String,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
    /// Year of the event window for PR filtering
    pub event_year: i32,
    /// Month of the event window for PR filtering
    pub event_month: u32,
    /// Output path for the JSON report
    pub json_path: String,
    /// Output path for the contributors CSV
    pub csv_path: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            owner: String::new(),
            repo: String::new(),
            token: None,
            user_agent: concat!("isle-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            event_year: 2025,
            event_month: 10,
            json_path: "./hacktoberfest_report.json".to_string(),
            csv_path: "./contributors.csv".to_string(),
        }
    }
}

impl StatsConfig {
    /// URL of the repository resource under the API base
    pub fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.api_base_url, self.owner, self.repo)
    }
}
