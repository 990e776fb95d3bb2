pub mod types;
pub mod settings;
pub mod errors;

#[cfg(test)]
mod types_test;

// Re-export CommandError for convenience
pub use errors::{CommandError, CommandResult};
