mod app_state;
mod modes;
mod sweep;

pub use app_state::App;
pub use modes::Phase;
pub use sweep::{Spinner, SweepMessage};
