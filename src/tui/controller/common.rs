use crate::tui::state::App;
use anyhow::Result;
use crossterm::event::KeyCode;

const PAGE: u16 = 10;

/// Keys are ignored while the sweep runs. Once finished, scroll keys move the
/// results and any other key quits.
pub fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if !app.is_finished() {
        return Ok(());
    }

    match code {
        KeyCode::Up => app.scroll = app.scroll.saturating_sub(1),
        KeyCode::Down => app.scroll = app.scroll.saturating_add(1),
        KeyCode::PageUp => app.scroll = app.scroll.saturating_sub(PAGE),
        KeyCode::PageDown => app.scroll = app.scroll.saturating_add(PAGE),
        KeyCode::Home => app.scroll = 0,
        _ => app.should_quit = true,
    }
    Ok(())
}
