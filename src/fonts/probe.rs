//! System font probes
//!
//! One probe per supported platform, pairing the OS font enumeration command
//! with its parser, plus the post-processing shared by all of them.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::fonts::category::classify;
use crate::fonts::exec::run_bounded;
use crate::fonts::parse::{self, RawFont};
use crate::fonts::DetectError;
use crate::types::{FontSource, Platform, SystemFont};

const DETECT_TIMEOUT_SECS: u64 = 10;
const MAX_OUTPUT_BYTES_PROFILER: usize = 10 * 1024 * 1024;
const MAX_OUTPUT_BYTES_DEFAULT: usize = 5 * 1024 * 1024;

/// A source of raw font records for one platform
#[async_trait]
pub trait FontSourceProbe: Send + Sync {
    /// Platform this probe covers
    fn platform(&self) -> Platform;

    /// Invoke the platform tool and parse its output
    async fn detect(&self) -> Result<Vec<RawFont>, DetectError>;
}

// =============================================================================
// Per-platform probes
// =============================================================================

/// macOS: `system_profiler SPFontsDataType`
struct SystemProfilerProbe;

#[async_trait]
impl FontSourceProbe for SystemProfilerProbe {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    async fn detect(&self) -> Result<Vec<RawFont>, DetectError> {
        let raw = run_bounded(
            "system_profiler",
            &["SPFontsDataType"],
            MAX_OUTPUT_BYTES_PROFILER,
            DETECT_TIMEOUT_SECS,
        )
        .await?;
        Ok(parse::parse_system_profiler(&raw))
    }
}

/// Windows: `reg query` on the Fonts registry key
struct RegistryProbe;

#[async_trait]
impl FontSourceProbe for RegistryProbe {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    async fn detect(&self) -> Result<Vec<RawFont>, DetectError> {
        let raw = run_bounded(
            "reg",
            &[
                "query",
                r"HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts",
            ],
            MAX_OUTPUT_BYTES_DEFAULT,
            DETECT_TIMEOUT_SECS,
        )
        .await?;
        Ok(parse::parse_reg_query(&raw))
    }
}

/// Linux: `fc-list : family`
struct FcListProbe;

#[async_trait]
impl FontSourceProbe for FcListProbe {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    async fn detect(&self) -> Result<Vec<RawFont>, DetectError> {
        let raw = run_bounded(
            "fc-list",
            &[":", "family"],
            MAX_OUTPUT_BYTES_DEFAULT,
            DETECT_TIMEOUT_SECS,
        )
        .await?;
        Ok(parse::parse_fc_list(&raw))
    }
}

// =============================================================================
// Detection
// =============================================================================

fn probe_for(platform: Platform) -> Option<Box<dyn FontSourceProbe>> {
    match platform {
        Platform::MacOs => Some(Box::new(SystemProfilerProbe)),
        Platform::Windows => Some(Box::new(RegistryProbe)),
        Platform::Linux => Some(Box::new(FcListProbe)),
        Platform::Unknown => None,
    }
}

/// Detect the fonts installed on the given platform.
///
/// `Ok` carries the parsed, deduplicated, classified records, possibly empty
/// on a machine with no enumerable fonts or an unsupported platform. `Err`
/// means the platform tool could not be invoked or its output was unusable.
pub async fn detect_system_fonts(platform: Platform) -> Result<Vec<SystemFont>, DetectError> {
    let Some(probe) = probe_for(platform) else {
        return Ok(Vec::new());
    };

    let raw = probe.detect().await?;
    debug!(count = raw.len(), ?platform, "parsed raw font records");

    Ok(finalize_records(raw, platform))
}

/// Drop empty names, dedup by exact name keeping the first occurrence, then
/// classify and tag each surviving record.
fn finalize_records(raw: Vec<RawFont>, platform: Platform) -> Vec<SystemFont> {
    let mut seen = HashSet::new();
    let mut fonts = Vec::new();

    for record in raw {
        if record.name.is_empty() {
            continue;
        }
        if !seen.insert(record.name.clone()) {
            continue;
        }

        let category = classify(&record.name, platform);
        fonts.push(SystemFont {
            name: record.name,
            file: record.file,
            path: record.path,
            source: FontSource::System,
            os: platform,
            category,
        });
    }

    fonts
}
