use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_running_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        "Please wait, files are being removed",
        Style::default().fg(Color::DarkGray),
    )]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

pub fn render_results_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Scroll  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
        Span::raw(" Page  "),
        Span::styled("Any key", Style::default().fg(Color::Cyan)),
        Span::raw(" Exit"),
    ]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
