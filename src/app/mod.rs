pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod tracing_setup;

pub use context::AppContext;
