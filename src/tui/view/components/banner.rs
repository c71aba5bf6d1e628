use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BANNER: &[&str] = &[
    r"   ____ _                  _  __       ",
    r"  / ___| | ___  __ _ _ __ (_)/ _|_   _ ",
    r" | |   | |/ _ \/ _` | '_ \| | |_| | | |",
    r" | |___| |  __/ (_| | | | | |  _| |_| |",
    r"  \____|_|\___|\__,_|_| |_|_|_|  \__, |",
    r"                                 |___/ ",
];

pub const BANNER_HEIGHT: u16 = BANNER.len() as u16 + 2;

pub fn render_banner(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Cyan))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Starting cleanup process...",
        Style::default().fg(Color::Yellow),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
