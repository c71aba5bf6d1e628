pub mod app;
pub mod controller;
pub mod service;
pub mod state;
pub mod view;

pub use state::App;
