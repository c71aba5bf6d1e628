use crate::report::{DirectoryReport, ItemOutcome, SweepReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub directories: Vec<DirectoryResult>,
    pub total_attempted: usize,
    pub total_succeeded: usize,
    pub total_failed: usize,
    pub has_failures: bool,
    pub freed_bytes: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryResult {
    pub target: PathBuf,
    pub items_attempted: usize,
    pub items_succeeded: usize,
    pub items_failed: usize,
    pub has_failures: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_error: Option<String>,
    pub items: Vec<ItemResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResult {
    pub path: PathBuf,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub size_bytes: u64,
}

impl From<&ItemOutcome> for ItemResult {
    fn from(outcome: &ItemOutcome) -> Self {
        Self {
            path: outcome.path.clone(),
            succeeded: outcome.succeeded,
            error: outcome.error_detail.clone(),
            size_bytes: outcome.bytes,
        }
    }
}

impl From<&DirectoryReport> for DirectoryResult {
    fn from(report: &DirectoryReport) -> Self {
        Self {
            target: report.target.clone(),
            items_attempted: report.items_attempted,
            items_succeeded: report.items_succeeded,
            items_failed: report.items_failed,
            has_failures: report.has_failures(),
            listing_error: report
                .listing_failure
                .as_ref()
                .and_then(|o| o.error_detail.clone()),
            items: report.outcomes.iter().map(ItemResult::from).collect(),
        }
    }
}

impl From<&SweepReport> for SweepResult {
    fn from(report: &SweepReport) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: Utc::now(),
            directories: report.directories.iter().map(DirectoryResult::from).collect(),
            total_attempted: report.total_attempted,
            total_succeeded: report.total_succeeded,
            total_failed: report.total_failed,
            has_failures: report.has_failures(),
            freed_bytes: report.bytes_freed(),
            duration_ms: report.duration.as_millis() as u64,
        }
    }
}
