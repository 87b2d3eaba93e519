//! Command handlers for CLI operations.

mod serve;

pub use serve::ServeCommandHandler;
