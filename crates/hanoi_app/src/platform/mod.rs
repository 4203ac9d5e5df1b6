mod app;
mod effects;
mod input;
pub(crate) mod logging;
mod persistence;
mod ui;

pub use app::run_app;
