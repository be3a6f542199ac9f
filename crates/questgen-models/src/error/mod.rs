//! Error types for model bootstrap.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ErrorCategory, ModelError, ModelResult, TaskFailure};
