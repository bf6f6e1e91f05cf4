//! Font sources
//!
//! This module covers both font sources: the local fonts folder and the
//! operating system's installed-font inventory.

pub mod category;
pub mod defaults;
pub mod exec;
pub mod folder;
pub mod parse;
pub mod probe;

use thiserror::Error;

/// Errors from the system font detection path
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} exited with status {code}")]
    CommandFailed { command: String, code: i32 },
    #[error("{command} produced more than {limit} bytes of output")]
    OutputTooLarge { command: String, limit: usize },
    #[error("{command} timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },
}

pub use folder::list_folder_fonts;
pub use probe::detect_system_fonts;
