//! Command-line interface definitions and command entry points.

pub mod args;
pub mod build;
pub mod dev;

pub use args::{Cli, Commands};
