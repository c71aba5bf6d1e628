use crate::error::CleanError;
use crate::output::{report_lines, LineKind};
use crate::report::SweepReport;
use crate::tui::view::components::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Header => Style::default().fg(Color::Magenta),
        LineKind::Success | LineKind::DirectoryOk => Style::default().fg(Color::Green),
        LineKind::Failure | LineKind::DirectoryFailed => Style::default().fg(Color::Red),
        LineKind::Summary => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Blank => Style::default(),
    }
}

pub fn render_results(f: &mut Frame, area: Rect, report: &SweepReport, scroll: u16) {
    let lines: Vec<Line> = report_lines(report)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.text, line_style(l.kind))))
        .collect();

    // Keep the last page reachable but no further.
    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(area.height);
    let paragraph = Paragraph::new(lines).scroll((scroll.min(max_scroll), 0));
    f.render_widget(paragraph, area);
}

pub fn render_failure(f: &mut Frame, area: Rect, failure: &CleanError) {
    let area = centered_rect(80, 50, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {}", failure),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "No directories were cleaned.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Cleanup failed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DirectoryReport, ItemOutcome};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    #[test]
    fn test_scroll_reaches_tail_of_very_long_report() {
        let mut dir = DirectoryReport::new(PathBuf::from("/t"));
        for i in 0..70_000 {
            dir.record(ItemOutcome::success(PathBuf::from(format!("/t/{}", i)), 0));
        }
        let mut report = SweepReport::new();
        report.push(dir);

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| render_results(f, f.area(), &report, u16::MAX))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        // The clamp saturates at u16::MAX lines, so the top row is line 65525:
        // a blank and a header precede the first outcome.
        assert!(text.contains("Successfully removed /t/65523"));
        assert!(!text.contains("Successfully removed /t/4459 "));
    }
}
