//! Vidasset CLI — manifest inspection helpers shared by the binaries.
//!
//! A manifest is a JSON array of asset descriptors; entries may omit any
//! field and take the descriptor defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use vidasset_core::VideoAsset;

/// Environment variable naming the manifest when no path argument is given.
pub const MANIFEST_ENV: &str = "VIDASSET_MANIFEST";

/// Decode a manifest from its JSON text.
pub fn decode_manifest(raw: &str) -> Result<Vec<VideoAsset>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read and decode a manifest file.
pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<VideoAsset>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let assets = decode_manifest(&raw)
        .with_context(|| format!("Failed to decode manifest {}", path.display()))?;
    tracing::debug!("decoded {} assets from {}", assets.len(), path.display());
    Ok(assets)
}

/// Resolve the manifest path from an optional argument or the
/// `VIDASSET_MANIFEST` environment variable.
pub fn resolve_manifest_path(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }
    match std::env::var(MANIFEST_ENV) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => anyhow::bail!("No manifest given. Pass a path or set {}", MANIFEST_ENV),
    }
}

/// Render a byte count as a short human-readable size.
pub fn format_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let b = bytes as f64;
    if b >= GB {
        format!("{:.2} GB", b / GB)
    } else if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten a table cell to `max_len` characters, appending "..." when cut.
pub fn display_cell(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", head)
}

/// Placeholder shown for empty text fields in tables.
pub fn or_placeholder(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
