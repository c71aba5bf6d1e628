use crate::error::CleanError;
use crate::report::SweepReport;
use crate::tui::state::{App, SweepMessage};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// Runs `job` on its own thread and returns the receiving end of the one-shot
/// completion channel.
pub fn start_sweep<F>(job: F) -> Receiver<SweepMessage>
where
    F: FnOnce() -> Result<SweepReport, CleanError> + Send + 'static,
{
    let (tx, rx) = channel();

    thread::spawn(move || {
        let message = match job() {
            Ok(report) => SweepMessage::Complete(report),
            Err(e) => SweepMessage::Failed(e),
        };
        let _ = tx.send(message);
    });

    rx
}

/// Runs `setup` first and only starts the sweep once it succeeded, so a
/// display that cannot be brought up never deletes anything.
pub fn start_sweep_after<T, S, F>(setup: S, job: F) -> anyhow::Result<(T, Receiver<SweepMessage>)>
where
    S: FnOnce() -> anyhow::Result<T>,
    F: FnOnce() -> Result<SweepReport, CleanError> + Send + 'static,
{
    let ready = setup()?;
    Ok((ready, start_sweep(job)))
}

pub fn poll_sweep_messages(app: &mut App) {
    let Some(ref rx) = app.sweep_receiver else {
        return;
    };

    match rx.try_recv() {
        Ok(message) => {
            app.finish(message);
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            // The worker died without reporting back.
            tracing::warn!("Sweep thread exited without a result");
            app.finish(SweepMessage::Failed(CleanError::SweepAborted));
        }
    }
}
