use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Error retrieving user home directory")]
    HomeDirectoryUnavailable,

    #[error("Reading directory {} failed: {detail}", .target.display())]
    DirectoryListingFailed { target: PathBuf, detail: String },

    #[error("Failed to remove {}: {detail}", .path.display())]
    ItemDeletionFailed { path: PathBuf, detail: String },

    #[error("Cleanup stopped before producing a report")]
    SweepAborted,
}
