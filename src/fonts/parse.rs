//! Parsers for OS font tool output
//!
//! Each parser is a pure function from the raw text of one platform's font
//! enumeration tool to uniform records. Lines that do not match the expected
//! shape are dropped; deduplication happens later.

use once_cell::sync::Lazy;
use regex::Regex;

/// One font record as reported by a tool, before post-processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFont {
    pub name: String,
    pub file: String,
    pub path: String,
}

impl RawFont {
    /// Record where the tool only reports a single identifier
    fn from_single(value: &str) -> Self {
        Self {
            name: value.to_string(),
            file: value.to_string(),
            path: value.to_string(),
        }
    }
}

const FONT_FILE_SUFFIXES: [&str; 4] = [".ttf:", ".otf:", ".woff:", ".woff2:"];

/// Parse `system_profiler SPFontsDataType` output.
///
/// Two kinds of lines contribute records in the same pass: font file headers
/// (`Menlo.ttf:`) with the extension and colon stripped, and `Family:` lines
/// with the remainder trimmed.
pub fn parse_system_profiler(raw: &str) -> Vec<RawFont> {
    let mut fonts = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if let Some(stripped) = strip_font_file_suffix(trimmed) {
            if !stripped.is_empty() {
                fonts.push(RawFont::from_single(stripped));
            }
        } else if let Some(rest) = trimmed.strip_prefix("Family:") {
            let family = rest.trim();
            if !family.is_empty() {
                fonts.push(RawFont::from_single(family));
            }
        }
    }

    fonts
}

fn strip_font_file_suffix(line: &str) -> Option<&str> {
    FONT_FILE_SUFFIXES
        .iter()
        .find_map(|suffix| line.strip_suffix(suffix))
}

static REG_SZ_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+REG_SZ\s+(.+)$").expect("invalid registry line pattern"));

/// Parse `reg query` output for the Fonts registry key.
///
/// Header lines (`HKEY_...`) and stray `REG_SZ` lines are skipped; the rest
/// must match `<name>  REG_SZ  <value>` or they are dropped. Double quotes
/// are stripped from both captures.
pub fn parse_reg_query(raw: &str) -> Vec<RawFont> {
    let mut fonts = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("HKEY_") || trimmed.starts_with("REG_SZ") {
            continue;
        }

        if let Some(caps) = REG_SZ_LINE.captures(trimmed) {
            let name = caps[1].replace('"', "");
            let file = caps[2].replace('"', "");
            fonts.push(RawFont {
                name,
                path: file.clone(),
                file,
            });
        }
    }

    fonts
}

/// Parse `fc-list : family` output.
///
/// A line may carry several comma-separated family aliases; they collapse
/// into one combined name with quotes and commas removed.
pub fn parse_fc_list(raw: &str) -> Vec<RawFont> {
    let mut fonts = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("fc-list:") {
            continue;
        }

        let cleaned = trimmed.replace(['"', ','], "");
        let family = cleaned.trim();
        if !family.is_empty() {
            fonts.push(RawFont::from_single(family));
        }
    }

    fonts
}
