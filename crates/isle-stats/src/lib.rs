//! Repository stats: fetch pull-request and contributor data from a
//! repository hosting API, summarize it, and export JSON/CSV reports.

pub mod client;
pub mod export;
pub mod report;

pub use client::StatsClient;
pub use report::{Contributor, PullRequest, Report};
