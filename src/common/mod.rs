//! # Common Components
//!
//! Shared utilities used by the library and the command-line tool.
//!
//! ## Modules
//!
//! - [`error`]: The [`StegError`](error::StegError) taxonomy
//! - [`config`]: TOML configuration loading
//! - [`logging`]: `env_logger` setup
//! - [`paths`]: Input/output path validation

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Result, StegError};
