use crate::config::Config;
use crate::error::CleanError;
use crate::report::SweepReport;
use crate::tui::state::{Phase, Spinner, SweepMessage};
use std::sync::mpsc::Receiver;

pub struct App {
    pub config: Config,
    pub phase: Phase,
    pub report: Option<SweepReport>,
    pub failure: Option<CleanError>,
    pub spinner: Spinner,
    pub scroll: u16,
    pub should_quit: bool,
    pub sweep_receiver: Option<Receiver<SweepMessage>>,
}

impl App {
    pub fn new(config: Config, sweep_receiver: Receiver<SweepMessage>) -> Self {
        Self {
            config,
            phase: Phase::Running,
            report: None,
            failure: None,
            spinner: Spinner::default(),
            scroll: 0,
            should_quit: false,
            sweep_receiver: Some(sweep_receiver),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Moves to `Finished`. Returns false if the run already finished, in
    /// which case the message is dropped.
    pub fn finish(&mut self, message: SweepMessage) -> bool {
        if self.is_finished() {
            return false;
        }

        match message {
            SweepMessage::Complete(report) => self.report = Some(report),
            SweepMessage::Failed(err) => self.failure = Some(err),
        }
        self.phase = Phase::Finished;
        self.sweep_receiver = None;
        true
    }

    pub fn on_tick(&mut self) {
        if self.phase == Phase::Running {
            self.spinner.advance();
        }
    }

    pub fn take_failure(&mut self) -> Option<CleanError> {
        self.failure.take()
    }
}
