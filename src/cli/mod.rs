//! Command implementations behind the `greach` binary.

pub mod commands;

pub use commands::Report;
