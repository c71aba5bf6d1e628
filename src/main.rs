mod cleaner;
mod cli;
mod config;
mod error;
mod history;
mod output;
mod report;
mod targets;
mod tui;
mod utils;

use anyhow::Result;
use cleaner::Sweeper;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::CleanError;
use history::HistoryLogger;
use output::json_schema::SweepResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use report::SweepReport;
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::process::ExitCode;
use std::sync::Mutex;
use targets::PathResolver;
use tracing_subscriber::EnvFilter;
use tui::service::start_sweep_after;
use tui::App;
use utils::format_size;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);

    match run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    init_logging(&config)?;

    match cli.command {
        Some(Commands::History { limit }) => run_history(limit)?,
        None => match config.format {
            OutputFormat::Tui => run_tui(config)?,
            OutputFormat::Plain | OutputFormat::Json => run_once(&config)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(ref path) = config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if config.format != OutputFormat::Tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Resolving the targets happens inside the job so a missing home directory
/// is reported through the same completion path as a finished sweep.
fn sweep_job(config: &Config) -> impl FnOnce() -> Result<SweepReport, CleanError> + Send + 'static {
    let sweeper = if config.log_history {
        Sweeper::new().with_history(HistoryLogger::new())
    } else {
        Sweeper::new()
    };

    move || {
        let targets = PathResolver::new().resolve()?;
        Ok(sweeper.sweep(&targets))
    }
}

fn run_tui(config: Config) -> Result<()> {
    let (mut terminal, receiver) = start_sweep_after(setup_terminal, sweep_job(&config))?;

    let mut app = App::new(config, receiver);
    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;

    result?;
    match app.take_failure() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let entered = (|| -> Result<_> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    })();

    if entered.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    entered
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_once(config: &Config) -> Result<()> {
    let report = sweep_job(config)()?;

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&SweepResult::from(&report))?;
            println!("{}", json);
        }
        _ => output::print_report(&report),
    }

    Ok(())
}

fn run_history(limit: usize) -> Result<()> {
    let logger = HistoryLogger::new();
    let entries = logger.read_history(Some(limit))?;

    if entries.is_empty() {
        println!("No history found.");
        return Ok(());
    }

    println!("Last {} deletion attempt(s):\n", entries.len());

    for entry in entries {
        println!(
            "{} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.action,
            entry.path.display()
        );
        if let Some(size) = entry.size {
            println!("    Size: {}", format_size(size));
        }
    }

    Ok(())
}
