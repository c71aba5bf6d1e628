pub mod json_schema;

use crate::report::{DirectoryReport, ItemOutcome, SweepReport};
use crate::utils::{format_duration, format_number, format_size};
use crossterm::style::{style, Color, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Success,
    Failure,
    DirectoryOk,
    DirectoryFailed,
    Summary,
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

pub fn outcome_line(outcome: &ItemOutcome) -> ReportLine {
    if outcome.succeeded {
        ReportLine::new(
            LineKind::Success,
            format!("Successfully removed {}", outcome.path.display()),
        )
    } else {
        let text = outcome
            .error_detail
            .clone()
            .unwrap_or_else(|| format!("Failed to remove {}", outcome.path.display()));
        ReportLine::new(LineKind::Failure, text)
    }
}

pub fn directory_lines(report: &DirectoryReport) -> Vec<ReportLine> {
    let target = report.target.display();
    let mut lines = vec![
        ReportLine::blank(),
        ReportLine::new(LineKind::Header, format!("Cleaning directory: {}", target)),
    ];

    lines.extend(report.listing_failure.iter().map(outcome_line));
    lines.extend(report.outcomes.iter().map(outcome_line));

    if report.has_failures() {
        lines.push(ReportLine::new(
            LineKind::DirectoryFailed,
            format!("Some files in {} could not be removed.", target),
        ));
    } else {
        lines.push(ReportLine::new(
            LineKind::DirectoryOk,
            format!("Finished cleaning directory: {}", target),
        ));
    }
    lines
}

pub fn summary_line(report: &SweepReport) -> ReportLine {
    ReportLine::new(
        LineKind::Summary,
        format!(
            "Removed {} of {} items ({} failed), freed {} in {}",
            format_number(report.total_succeeded),
            format_number(report.total_attempted),
            format_number(report.total_failed),
            format_size(report.bytes_freed()),
            format_duration(report.duration),
        ),
    )
}

/// Every line of the finished view, in processing order.
pub fn report_lines(report: &SweepReport) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = report
        .directories
        .iter()
        .flat_map(directory_lines)
        .collect();

    lines.push(ReportLine::blank());
    lines.push(summary_line(report));
    lines.push(ReportLine::blank());
    lines.push(ReportLine::new(LineKind::DirectoryOk, "Cleanup complete! 🚀"));
    lines
}

fn terminal_color(kind: LineKind) -> Color {
    match kind {
        LineKind::Header => Color::Magenta,
        LineKind::Success | LineKind::DirectoryOk => Color::Green,
        LineKind::Failure | LineKind::DirectoryFailed => Color::Red,
        LineKind::Summary => Color::Cyan,
        LineKind::Blank => Color::Reset,
    }
}

pub fn print_report(report: &SweepReport) {
    for line in report_lines(report) {
        println!("{}", style(line.text).with(terminal_color(line.kind)));
    }
}
