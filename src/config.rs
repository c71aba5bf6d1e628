use crate::cli::{Cli, OutputFormat};
use std::path::PathBuf;
use std::time::Duration;

const MIN_TICK_MS: u64 = 16;

#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub tick_rate: Duration,
    pub log_history: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            tick_rate: Duration::from_millis(cli.tick_ms.max(MIN_TICK_MS)),
            log_history: cli.history,
            log_file: cli.log_file.clone(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cleanify")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            tick_rate: Duration::from_millis(100),
            log_history: false,
            log_file: None,
        }
    }
}
