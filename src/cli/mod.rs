//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod list;
pub mod prioritize;
pub mod rm;

pub use definition::{Cli, Commands};
