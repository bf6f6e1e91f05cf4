//! Folder font listing
//!
//! Scans the local fonts directory and derives display names from filenames.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::types::{FolderFont, FontSource};

const FONT_EXTENSIONS: [&str; 4] = ["woff2", "woff", "ttf", "otf"];

/// List font files in `dir`, sorted by filename.
///
/// A missing or unreadable directory yields an empty list; the caller never
/// sees an error.
pub fn list_folder_fonts(dir: &Path) -> Vec<FolderFont> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(dir = %dir.display(), %error, "fonts directory not readable");
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ty| ty.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|file| has_font_extension(file))
        .collect();
    files.sort();

    files
        .into_iter()
        .filter_map(|file| {
            let name = display_name(&file);
            if name.is_empty() {
                return None;
            }
            Some(FolderFont {
                name,
                path: format!("/fonts/{file}"),
                file,
                source: FontSource::Folder,
            })
        })
        .collect()
}

fn has_font_extension(file: &str) -> bool {
    match file.rsplit_once('.') {
        Some((_, ext)) => FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Derive a display name from a filename: `OpenSansBold.woff2` → `Open Sans
/// Bold`. Takes the segment before the first dot, spaces out uppercase
/// letters, and capitalizes the first character.
fn display_name(file: &str) -> String {
    let stem = file.split('.').next().unwrap_or(file);

    let mut spaced = String::with_capacity(stem.len() + 8);
    for ch in stem.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => collapsed,
    }
}
