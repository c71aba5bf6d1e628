pub mod components;
pub mod screens;

use crate::tui::state::{App, Phase};
use components::banner::{render_banner, BANNER_HEIGHT};
use components::footer::{render_results_footer, render_running_footer};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use screens::{render_failure, render_results, render_running};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_banner(f, chunks[0]);

    match app.phase {
        Phase::Running => {
            render_running(f, chunks[1], &app.spinner);
            render_running_footer(f, chunks[3]);
        }
        Phase::Finished => {
            if let Some(ref failure) = app.failure {
                render_failure(f, chunks[2], failure);
            } else if let Some(ref report) = app.report {
                render_results(f, chunks[2], report, app.scroll);
            }
            render_results_footer(f, chunks[3]);
        }
    }
}
