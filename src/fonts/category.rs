//! Font category classification
//!
//! Pure keyword heuristics over the lowercased family name. First match wins,
//! so a name hitting a generic keyword never reaches the OS-specific check.

use crate::types::{FontCategory, Platform};

/// Classify a font family name into a coarse visual category.
pub fn classify(name: &str, platform: Platform) -> FontCategory {
    let name = name.to_lowercase();

    if contains_any(&name, &["serif", "times", "georgia"]) {
        return FontCategory::Serif;
    }
    if contains_any(&name, &["sans", "arial", "helvetica"]) {
        return FontCategory::SansSerif;
    }
    if contains_any(&name, &["mono", "courier", "console"]) {
        return FontCategory::Monospace;
    }
    if contains_any(&name, &["display", "impact", "comic"]) {
        return FontCategory::Display;
    }

    let system_keywords: &[&str] = match platform {
        Platform::MacOs => &["sf pro", "helvetica neue"],
        Platform::Windows => &["segoe", "calibri"],
        Platform::Linux => &["ubuntu", "dejavu", "liberation"],
        Platform::Unknown => &[],
    };
    if contains_any(&name, system_keywords) {
        return FontCategory::System;
    }

    FontCategory::Unknown
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}
