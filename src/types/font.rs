//! Font descriptor types
//!
//! Defines the wire-format records for both font sources.

use serde::{Deserialize, Serialize};

/// Where a font descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// Font file shipped in the local fonts folder
    Folder,
    /// Font enumerated from the host operating system
    System,
}

/// Host platform tag attached to system fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Unknown,
}

impl Platform {
    /// Best-effort detection of the platform the server runs on
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            _ => Self::Unknown,
        }
    }
}

/// Coarse visual classification of a font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Monospace,
    Display,
    System,
    Unknown,
}

/// A font file found in the local fonts folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFont {
    /// Human-readable display name derived from the filename
    pub name: String,
    /// Original filename
    pub file: String,
    /// URL path the front-end loads the file from
    pub path: String,
    #[serde(rename = "type")]
    pub source: FontSource,
}

/// A font family reported by the operating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFont {
    /// Family name as reported by the OS tool
    pub name: String,
    /// Raw identifier from the tool (filename or the name itself)
    pub file: String,
    /// Load reference; same as `file` for OS-enumerated fonts
    pub path: String,
    #[serde(rename = "type")]
    pub source: FontSource,
    pub os: Platform,
    pub category: FontCategory,
}
