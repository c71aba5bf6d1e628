pub mod common;

pub use common::handle_key;
