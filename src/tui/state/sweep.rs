use crate::error::CleanError;
use crate::report::SweepReport;

/// The single message the background sweep sends when it is done.
#[derive(Debug)]
pub enum SweepMessage {
    Complete(SweepReport),
    Failed(CleanError),
}

pub const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn symbol(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}
