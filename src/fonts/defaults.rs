//! Per-OS defaults
//!
//! Display metadata and fallback font lists, kept as one immutable table
//! keyed by platform.

use serde::Serialize;

use crate::types::Platform;

/// Display metadata for a platform, embedded in the system fonts response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OsDisplay {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Defaults for one platform
#[derive(Debug, Clone, Copy)]
pub struct OsDefaults {
    pub display: OsDisplay,
    /// Families substituted when live detection yields nothing
    pub fallback_fonts: &'static [&'static str],
}

const MACOS: OsDefaults = OsDefaults {
    display: OsDisplay {
        name: "macOS",
        icon: "🍎",
    },
    fallback_fonts: &[
        "SF Pro Display",
        "SF Pro Text",
        "Helvetica Neue",
        "Arial",
        "Times",
        "Georgia",
        "Verdana",
        "Courier",
        "Impact",
        "Comic Sans MS",
        "Tahoma",
        "Trebuchet MS",
        "Lucida Console",
        "Palatino",
        "Garamond",
    ],
};

const WINDOWS: OsDefaults = OsDefaults {
    display: OsDisplay {
        name: "Windows",
        icon: "🪟",
    },
    fallback_fonts: &[
        "Segoe UI",
        "Calibri",
        "Arial",
        "Times New Roman",
        "Georgia",
        "Verdana",
        "Courier New",
        "Impact",
        "Comic Sans MS",
        "Tahoma",
        "Trebuchet MS",
        "Lucida Console",
        "Palatino",
        "Garamond",
        "Bookman",
    ],
};

const LINUX: OsDefaults = OsDefaults {
    display: OsDisplay {
        name: "Linux",
        icon: "🐧",
    },
    fallback_fonts: &[
        "Ubuntu",
        "DejaVu Sans",
        "Liberation Sans",
        "Arial",
        "Times New Roman",
        "Georgia",
        "Verdana",
        "Courier New",
        "Impact",
        "Comic Sans MS",
        "Tahoma",
        "Trebuchet MS",
        "Lucida Console",
        "Palatino",
        "Garamond",
    ],
};

const UNKNOWN: OsDefaults = OsDefaults {
    display: OsDisplay {
        name: "Unknown",
        icon: "❓",
    },
    fallback_fonts: &[
        "Arial",
        "Helvetica",
        "Times New Roman",
        "Georgia",
        "Verdana",
        "Courier New",
        "Impact",
        "Comic Sans MS",
        "Tahoma",
        "Trebuchet MS",
        "Lucida Console",
        "Palatino",
        "Garamond",
        "Bookman",
        "Avant Garde",
    ],
};

/// Defaults for the given platform.
pub fn defaults_for(platform: Platform) -> &'static OsDefaults {
    match platform {
        Platform::MacOs => &MACOS,
        Platform::Windows => &WINDOWS,
        Platform::Linux => &LINUX,
        Platform::Unknown => &UNKNOWN,
    }
}
