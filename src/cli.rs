use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleanify")]
#[command(about = "Delete the contents of temporary-file directories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'F', long, default_value = "tui")]
    pub format: OutputFormat,

    #[arg(long, help = "Record every deletion attempt in the history log")]
    pub history: bool,

    #[arg(long, value_name = "PATH", help = "Write diagnostics to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "100", help = "Spinner refresh interval in milliseconds")]
    pub tick_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tui,
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "View deletion history")]
    History {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
