use crate::tui::controller::handle_key;
use crate::tui::service::poll_sweep_messages;
use crate::tui::state::App;
use crate::tui::view::render;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;

impl App {
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        let tick_rate = self.config.tick_rate;
        let mut last_tick = Instant::now();

        while !self.should_quit {
            poll_sweep_messages(self);

            terminal.draw(|f| render(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key(self, key.code)?;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
