//! Report models and assembly.

use chrono::{DateTime, Datelike, Utc};
use isle_core::StatsConfig;
use serde::{Deserialize, Serialize};

/// Pull request state as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Open,
    Closed,
}

/// Author of a pull request. Deleted accounts come back as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
}

/// A pull request, reduced to the fields the report needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: PrState,
    pub user: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Whether the PR was opened in the given calendar month
    pub fn created_in_month(&self, year: i32, month: u32) -> bool {
        self.created_at.year() == year && self.created_at.month() == month
    }
}

/// A repository contributor with their contribution count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

/// Aggregate pull-request figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrSummary {
    pub total: usize,
    pub merged: usize,
    pub open: usize,
    /// PRs opened during the configured event month
    pub event_month: usize,
}

/// Summarize pull requests, counting merged, open, and event-month PRs
pub fn summarize_pull_requests(prs: &[PullRequest], year: i32, month: u32) -> PrSummary {
    PrSummary {
        total: prs.len(),
        merged: prs.iter().filter(|pr| pr.is_merged()).count(),
        open: prs.iter().filter(|pr| pr.state == PrState::Open).count(),
        event_month: prs
            .iter()
            .filter(|pr| pr.created_in_month(year, month))
            .count(),
    }
}

/// Top `n` contributors by contribution count, descending. Ties keep the
/// API ordering, which is already by contributions.
pub fn top_contributors(contributors: &[Contributor], n: usize) -> Vec<Contributor> {
    let mut ranked = contributors.to_vec();
    ranked.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    ranked.truncate(n);
    ranked
}

/// Full stats report for one repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub repository: String,
    pub generated_at: DateTime<Utc>,
    pub pull_requests: PrSummary,
    pub total_contributors: usize,
    pub top_contributors: Vec<Contributor>,
}

impl Report {
    pub fn build(
        config: &StatsConfig,
        prs: &[PullRequest],
        contributors: &[Contributor],
    ) -> Self {
        Self {
            repository: format!("{}/{}", config.owner, config.repo),
            generated_at: Utc::now(),
            pull_requests: summarize_pull_requests(prs, config.event_year, config.event_month),
            total_contributors: contributors.len(),
            top_contributors: top_contributors(contributors, 10),
        }
    }
}
