use crate::error::CleanError;
use crate::history::HistoryLogger;
use crate::report::{DirectoryReport, ItemOutcome, SweepReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Deletes one directory entry together with everything below it.
pub trait Remover: Send + Sync {
    fn remove_all(&self, path: &Path) -> io::Result<()>;
}

pub struct FsRemover;

impl Remover for FsRemover {
    fn remove_all(&self, path: &Path) -> io::Result<()> {
        let file_type = fs::symlink_metadata(path)?.file_type();
        // remove_dir_all unlinks a symlink without following it, which also
        // covers directory links that remove_file rejects on Windows.
        if file_type.is_dir() || file_type.is_symlink() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}

pub struct Sweeper<R: Remover = FsRemover> {
    remover: R,
    history_logger: Option<HistoryLogger>,
}

impl Sweeper<FsRemover> {
    pub fn new() -> Self {
        Self::with_remover(FsRemover)
    }
}

impl<R: Remover> Sweeper<R> {
    pub fn with_remover(remover: R) -> Self {
        Self {
            remover,
            history_logger: None,
        }
    }

    pub fn with_history(mut self, logger: HistoryLogger) -> Self {
        self.history_logger = Some(logger);
        self
    }

    /// Sweeps every target in order. Per-directory and per-item failures end
    /// up in the report; nothing here aborts the run.
    pub fn sweep(&self, targets: &[PathBuf]) -> SweepReport {
        let start = Instant::now();
        let mut report = SweepReport::new();

        for target in targets {
            let directory = self.sweep_directory(target);
            tracing::info!(
                dir = %target.display(),
                attempted = directory.items_attempted,
                failed = directory.items_failed,
                "Finished directory"
            );
            report.push(directory);
        }

        report.duration = start.elapsed();
        report
    }

    pub fn sweep_directory(&self, target: &Path) -> DirectoryReport {
        let entries = match list_children(target) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot list {}: {}", target.display(), e);
                return DirectoryReport::unreadable(target.to_path_buf(), e.to_string());
            }
        };

        let mut report = DirectoryReport::new(target.to_path_buf());
        for path in entries {
            let outcome = self.remove_entry(path);
            self.log_history(&outcome);
            report.record(outcome);
        }
        report
    }

    fn remove_entry(&self, path: PathBuf) -> ItemOutcome {
        let size = calculate_size(&path);

        match self.remover.remove_all(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                ItemOutcome::success(path, size)
            }
            Err(e) => {
                let message = CleanError::ItemDeletionFailed {
                    path: path.clone(),
                    detail: e.to_string(),
                }
                .to_string();
                tracing::debug!("{}", message);
                ItemOutcome::failure(path, message)
            }
        }
    }

    fn log_history(&self, outcome: &ItemOutcome) {
        if let Some(ref logger) = self.history_logger {
            if let Err(e) = logger.log_outcome(outcome) {
                tracing::warn!("Failed to write history: {}", e);
            }
        }
    }
}

impl Default for Sweeper<FsRemover> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immediate children of `dir`, in the order the OS returns them. A failure
/// part-way through counts as a failure to list the whole directory.
fn list_children(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}

/// Bytes held by `path` itself. Links are measured, never followed.
fn calculate_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_root_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryAction;
    use std::ffi::OsString;
    use tempfile::TempDir;

    struct LockedRemover {
        locked: OsString,
    }

    impl Remover for LockedRemover {
        fn remove_all(&self, path: &Path) -> io::Result<()> {
            if path.file_name() == Some(self.locked.as_os_str()) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "file is in use",
                ));
            }
            FsRemover.remove_all(path)
        }
    }

    fn populate(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"junk").unwrap();
        }
    }

    #[test]
    fn test_sweep_removes_files_and_subtrees() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path(), &["a.tmp", "b.tmp"]);
        let nested = tmp.path().join("cache");
        fs::create_dir_all(nested.join("deep")).unwrap();
        fs::write(nested.join("deep").join("c.bin"), b"0123456789").unwrap();

        let report = Sweeper::new().sweep(&[tmp.path().to_path_buf()]);

        let dir = &report.directories[0];
        assert_eq!(dir.items_attempted, 3);
        assert_eq!(dir.items_succeeded, 3);
        assert_eq!(dir.items_failed, 0);
        assert!(!dir.has_failures());
        assert_eq!(report.bytes_freed(), 18);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_mixed_outcomes() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path(), &["one", "two", "three"]);

        let entries = list_children(tmp.path()).unwrap();
        let second = entries[1].file_name().unwrap().to_os_string();
        let sweeper = Sweeper::with_remover(LockedRemover { locked: second });

        let dir = sweeper.sweep_directory(tmp.path());

        assert_eq!(dir.items_attempted, 3);
        assert_eq!(dir.items_succeeded, 2);
        assert_eq!(dir.items_failed, 1);
        assert!(dir.has_failures());

        let failed = &dir.outcomes[1];
        assert!(!failed.succeeded);
        assert_eq!(failed.path, entries[1]);
        assert!(failed
            .error_detail
            .as_deref()
            .is_some_and(|d| d.contains("file is in use")));
        assert!(dir.outcomes[0].succeeded && dir.outcomes[2].succeeded);
    }

    #[test]
    fn test_second_sweep_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path(), &["x", "y"]);
        let sweeper = Sweeper::new();

        let first = sweeper.sweep_directory(tmp.path());
        let second = sweeper.sweep_directory(tmp.path());

        assert_eq!(first.items_attempted, 2);
        assert_eq!(second.items_attempted, 0);
        assert!(!second.has_failures());
    }

    #[test]
    fn test_unreadable_target_does_not_stop_sweep() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let readable = tmp.path().join("readable");
        fs::create_dir(&readable).unwrap();
        populate(&readable, &["1", "2"]);

        let report = Sweeper::new().sweep(&[missing.clone(), readable.clone()]);

        assert_eq!(report.directories.len(), 2);
        let first = &report.directories[0];
        assert_eq!(first.target, missing);
        assert_eq!(first.items_attempted, 0);
        assert!(first.has_failures());
        assert!(first.listing_failure.is_some());

        let second = &report.directories[1];
        assert_eq!(second.target, readable);
        assert_eq!(second.items_attempted, 2);
        assert_eq!(second.items_succeeded, 2);

        assert_eq!(report.total_attempted, 2);
        assert_eq!(report.total_succeeded, 2);
        assert_eq!(report.total_failed, 0);
    }

    #[test]
    fn test_empty_directory() {
        let tmp = TempDir::new().unwrap();

        let dir = Sweeper::new().sweep_directory(tmp.path());

        assert_eq!(dir.items_attempted, 0);
        assert_eq!(dir.items_succeeded, 0);
        assert_eq!(dir.items_failed, 0);
        assert!(!dir.has_failures());
    }

    #[test]
    fn test_totals_match_directory_sums() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        populate(a.path(), &["locked", "free"]);
        populate(b.path(), &["locked", "other", "more"]);

        let sweeper = Sweeper::with_remover(LockedRemover {
            locked: OsString::from("locked"),
        });
        let report = sweeper.sweep(&[a.path().to_path_buf(), b.path().to_path_buf()]);

        assert_eq!(
            report.total_attempted,
            report.total_succeeded + report.total_failed
        );
        let attempted: usize = report.directories.iter().map(|d| d.items_attempted).sum();
        let succeeded: usize = report.directories.iter().map(|d| d.items_succeeded).sum();
        let failed: usize = report.directories.iter().map(|d| d.items_failed).sum();
        assert_eq!(attempted, report.total_attempted);
        assert_eq!(succeeded, report.total_succeeded);
        assert_eq!(failed, report.total_failed);
        assert_eq!(report.total_failed, 2);
        for dir in &report.directories {
            assert_eq!(dir.items_attempted, dir.items_succeeded + dir.items_failed);
            assert_eq!(dir.items_attempted, dir.outcomes.len());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_unlinked_not_followed() {
        let tmp = TempDir::new().unwrap();
        let outside = tmp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.bin"), vec![0u8; 4096]).unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&outside, target.join("link")).unwrap();

        let report = Sweeper::new().sweep(&[target.clone()]);

        let dir = &report.directories[0];
        assert_eq!(dir.items_succeeded, 1);
        assert!(dir.outcomes[0].bytes < 4096);
        assert!(report.bytes_freed() < 4096);
        assert!(fs::symlink_metadata(target.join("link")).is_err());
        assert!(outside.join("keep.bin").exists());
    }

    #[test]
    fn test_history_records_each_outcome() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        populate(&target, &["locked", "gone"]);
        let log_path = tmp.path().join("history.log");

        let sweeper = Sweeper::with_remover(LockedRemover {
            locked: OsString::from("locked"),
        })
        .with_history(HistoryLogger::at(log_path.clone()));
        sweeper.sweep(&[target]);

        let entries = HistoryLogger::at(log_path).read_history(None).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.action == HistoryAction::Failed));
        assert!(entries.iter().any(|e| e.action == HistoryAction::Removed));
    }
}
