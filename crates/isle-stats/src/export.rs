//! JSON and CSV report output.

use crate::report::{Contributor, Report};
use isle_core::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write the full report as pretty-printed JSON
pub fn write_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    info!("Report saved to {}", path.display());
    Ok(())
}

/// Write contributors as CSV with a header row
pub fn write_contributors_csv(
    contributors: &[Contributor],
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["login", "contributions"])?;
    for contributor in contributors {
        writer.write_record([
            contributor.login.as_str(),
            &contributor.contributions.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("Contributors saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PrSummary;
    use chrono::Utc;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("isle-stats-{}-{}", std::process::id(), name))
    }

    fn sample_report() -> Report {
        Report {
            repository: "octocat/hello-world".to_string(),
            generated_at: Utc::now(),
            pull_requests: PrSummary {
                total: 3,
                merged: 2,
                open: 1,
                event_month: 2,
            },
            total_contributors: 1,
            top_contributors: vec![Contributor {
                login: "octocat".to_string(),
                contributions: 42,
            }],
        }
    }

    #[test]
    fn test_write_json_roundtrip() {
        let path = temp_path("report.json");
        let report = sample_report();

        write_json(&report, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.repository, report.repository);
        assert_eq!(parsed.pull_requests, report.pull_requests);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_contributors_csv() {
        let path = temp_path("contributors.csv");
        let contributors = vec![
            Contributor {
                login: "alice".to_string(),
                contributions: 10,
            },
            Contributor {
                login: "bob".to_string(),
                contributions: 4,
            },
        ];

        write_contributors_csv(&contributors, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "login,contributions");
        assert_eq!(lines[1], "alice,10");
        assert_eq!(lines[2], "bob,4");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_empty_contributors_csv() {
        let path = temp_path("empty.csv");
        write_contributors_csv(&[], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "login,contributions");
        std::fs::remove_file(&path).ok();
    }
}
