use crate::config::Config;
use crate::report::ItemOutcome;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Removed,
    Failed,
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HistoryAction::Removed => "REMOVED",
            HistoryAction::Failed => "FAILED",
        })
    }
}

impl FromStr for HistoryAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REMOVED" => Ok(HistoryAction::Removed),
            "FAILED" => Ok(HistoryAction::Failed),
            _ => Err(()),
        }
    }
}

/// One deletion attempt as stored in the history log.
#[derive(Debug, Clone)]
pub struct DeletionRecord {
    pub timestamp: DateTime<Utc>,
    pub action: HistoryAction,
    pub path: PathBuf,
    /// Only known for removals.
    pub size: Option<u64>,
}

impl DeletionRecord {
    pub fn from_outcome(outcome: &ItemOutcome) -> Self {
        let (action, size) = if outcome.succeeded {
            (HistoryAction::Removed, Some(outcome.bytes))
        } else {
            (HistoryAction::Failed, None)
        };
        Self {
            timestamp: Utc::now(),
            action,
            path: outcome.path.clone(),
            size,
        }
    }
}

/// `<rfc3339> <ACTION> <path>[ size=<bytes>]`
impl fmt::Display for DeletionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.to_rfc3339(),
            self.action,
            self.path.display()
        )?;
        if let Some(size) = self.size {
            write!(f, " size={}", size)?;
        }
        Ok(())
    }
}

impl FromStr for DeletionRecord {
    type Err = ();

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (stamp, rest) = line.split_once(' ').ok_or(())?;
        let (action, rest) = rest.split_once(' ').ok_or(())?;

        let timestamp = DateTime::parse_from_rfc3339(stamp)
            .map_err(|_| ())?
            .with_timezone(&Utc);
        let action = action.parse()?;

        // Paths may contain spaces; only a trailing numeric size is split off.
        let (path, size) = rest
            .rsplit_once(" size=")
            .and_then(|(path, size)| size.parse().ok().map(|size| (path, Some(size))))
            .unwrap_or((rest, None));

        Ok(Self {
            timestamp,
            action,
            path: PathBuf::from(path),
            size,
        })
    }
}

/// Append-only log of deletion attempts, enabled with `--history`.
pub struct HistoryLogger {
    log_path: PathBuf,
}

impl HistoryLogger {
    pub fn new() -> Self {
        Self::at(Config::data_dir().join("history.log"))
    }

    pub fn at(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log_outcome(&self, outcome: &ItemOutcome) -> Result<()> {
        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(log, "{}", DeletionRecord::from_outcome(outcome))?;
        Ok(())
    }

    /// Unparseable lines are skipped. With a `limit`, the newest records come
    /// first.
    pub fn read_history(&self, limit: Option<usize>) -> Result<Vec<DeletionRecord>> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let records = content.lines().filter_map(|l| l.parse().ok());
        Ok(match limit {
            Some(n) => records.rev().take(n).collect(),
            None => records.collect(),
        })
    }
}

impl Default for HistoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_with_size_and_spaced_path() {
        let record: DeletionRecord = "2024-01-15T10:30:00+00:00 REMOVED /tmp/my cache size=42"
            .parse()
            .unwrap();
        assert_eq!(record.action, HistoryAction::Removed);
        assert_eq!(record.path, PathBuf::from("/tmp/my cache"));
        assert_eq!(record.size, Some(42));
    }

    #[test]
    fn test_failed_record_has_no_size() {
        let record: DeletionRecord = "2024-01-15T10:30:00+00:00 FAILED /tmp/a.lock"
            .parse()
            .unwrap();
        assert_eq!(record.action, HistoryAction::Failed);
        assert_eq!(record.size, None);
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!("2024-01-15T10:30:00+00:00 MOVED /tmp/x"
            .parse::<DeletionRecord>()
            .is_err());
        assert!("not a history line".parse::<DeletionRecord>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let outcome = ItemOutcome::success(PathBuf::from("/tmp/a b"), 7);
        let line = DeletionRecord::from_outcome(&outcome).to_string();

        assert!(line.ends_with(" REMOVED /tmp/a b size=7"));
        let parsed: DeletionRecord = line.parse().unwrap();
        assert_eq!(parsed.path, PathBuf::from("/tmp/a b"));
        assert_eq!(parsed.size, Some(7));
    }

    #[test]
    fn test_read_history_limit_newest_first() {
        let tmp = TempDir::new().unwrap();
        let logger = HistoryLogger::at(tmp.path().join("logs").join("history.log"));

        for name in ["a", "b", "c"] {
            logger
                .log_outcome(&ItemOutcome::success(PathBuf::from(name), 1))
                .unwrap();
        }

        let records = logger.read_history(Some(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, PathBuf::from("c"));
        assert_eq!(records[1].path, PathBuf::from("b"));
    }

    #[test]
    fn test_missing_log_is_empty() {
        let tmp = TempDir::new().unwrap();
        let logger = HistoryLogger::at(tmp.path().join("nope.log"));
        assert!(logger.read_history(None).unwrap().is_empty());
    }
}
