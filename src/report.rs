use crate::error::CleanError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub path: PathBuf,
    pub succeeded: bool,
    pub error_detail: Option<String>,
    /// Subtree size measured right before removal.
    pub bytes: u64,
}

impl ItemOutcome {
    pub fn success(path: PathBuf, bytes: u64) -> Self {
        Self {
            path,
            succeeded: true,
            error_detail: None,
            bytes,
        }
    }

    pub fn failure(path: PathBuf, detail: impl Into<String>) -> Self {
        Self {
            path,
            succeeded: false,
            error_detail: Some(detail.into()),
            bytes: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub target: PathBuf,
    pub items_attempted: usize,
    pub items_succeeded: usize,
    pub items_failed: usize,
    pub outcomes: Vec<ItemOutcome>,
    /// Set when the target could not be listed. Kept out of `outcomes` so the
    /// item counts always reconcile with the outcome list.
    pub listing_failure: Option<ItemOutcome>,
}

impl DirectoryReport {
    pub fn new(target: PathBuf) -> Self {
        Self {
            target,
            items_attempted: 0,
            items_succeeded: 0,
            items_failed: 0,
            outcomes: Vec::new(),
            listing_failure: None,
        }
    }

    pub fn unreadable(target: PathBuf, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let message = CleanError::DirectoryListingFailed {
            target: target.clone(),
            detail,
        }
        .to_string();

        let mut report = Self::new(target.clone());
        report.listing_failure = Some(ItemOutcome::failure(target, message));
        report
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        self.items_attempted += 1;
        if outcome.succeeded {
            self.items_succeeded += 1;
        } else {
            self.items_failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn has_failures(&self) -> bool {
        self.items_failed > 0 || self.listing_failure.is_some()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.bytes)
            .sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub directories: Vec<DirectoryReport>,
    pub total_attempted: usize,
    pub total_succeeded: usize,
    pub total_failed: usize,
    pub duration: Duration,
}

impl SweepReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directory: DirectoryReport) {
        self.total_attempted += directory.items_attempted;
        self.total_succeeded += directory.items_succeeded;
        self.total_failed += directory.items_failed;
        self.directories.push(directory);
    }

    pub fn bytes_freed(&self) -> u64 {
        self.directories.iter().map(|d| d.bytes_freed()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.directories.iter().any(|d| d.has_failures())
    }
}
