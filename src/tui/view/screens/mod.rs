mod results;
mod running;

pub use results::{render_failure, render_results};
pub use running::render_running;
