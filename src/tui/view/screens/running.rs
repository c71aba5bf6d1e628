use crate::tui::state::Spinner;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_running(f: &mut Frame, area: Rect, spinner: &Spinner) {
    let line = Line::from(vec![
        Span::styled(spinner.symbol(), Style::default().fg(Color::Cyan)),
        Span::raw("  Cleaning in progress..."),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
