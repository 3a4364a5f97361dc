//! Shared utilities for the pactchain workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
