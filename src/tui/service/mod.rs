pub mod sweeper;

pub use sweeper::{poll_sweep_messages, start_sweep, start_sweep_after};
