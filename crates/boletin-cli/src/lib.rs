//! Boletin CLI library.
//!
//! Configuration loading (TOML file plus environment overrides), diagnostic
//! log initialization, and the command definitions for the `boletin` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::FileConfig;
pub use error::{CliError, Result};
