use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use vidasset_cli::{format_size, init_tracing, load_manifest, or_placeholder, resolve_manifest_path};
use vidasset_core::VideoAsset;

#[derive(Parser, Debug)]
#[command(name = "asset_stats")]
#[command(about = "Summarize a manifest of video asset descriptors")]
struct Args {
    /// Manifest file (JSON array of descriptors); defaults to $VIDASSET_MANIFEST
    manifest: Option<PathBuf>,

    /// Output format: json or table (default: table)
    #[arg(long, default_value = "table")]
    format: String,
}

fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let path = resolve_manifest_path(args.manifest)?;
    let assets = load_manifest(&path)?;

    let stats = calculate_stats(&assets);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            print_stats_table(&stats);
        }
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct AssetStats {
    total_assets: usize,
    total_size_bytes: i64,
    total_size_mb: f64,
    mean_size_bytes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    largest: Option<LargestAsset>,
    missing_url: usize,
    missing_portable_url: usize,
}

#[derive(serde::Serialize)]
struct LargestAsset {
    display_name: String,
    file_size: i64,
}

fn calculate_stats(assets: &[VideoAsset]) -> AssetStats {
    let total_size_bytes: i64 = assets.iter().map(|a| a.file_size).sum();
    let mean_size_bytes = if assets.is_empty() {
        0
    } else {
        total_size_bytes / assets.len() as i64
    };
    let largest = assets
        .iter()
        .max_by_key(|a| a.file_size)
        .map(|a| LargestAsset {
            display_name: a.display_name.clone(),
            file_size: a.file_size,
        });
    AssetStats {
        total_assets: assets.len(),
        total_size_bytes,
        total_size_mb: total_size_bytes as f64 / (1024.0 * 1024.0),
        mean_size_bytes,
        largest,
        missing_url: assets.iter().filter(|a| a.url.is_empty()).count(),
        missing_portable_url: assets.iter().filter(|a| a.portable_url.is_empty()).count(),
    }
}

fn print_stats_table(stats: &AssetStats) {
    println!("Asset Manifest Summary");
    println!("{}", "=".repeat(40));
    println!("Assets:     {:>8}", stats.total_assets);
    println!(
        "Total Size: {:>8} ({} bytes)",
        format_size(stats.total_size_bytes),
        stats.total_size_bytes
    );
    println!("Mean Size:  {:>8}", format_size(stats.mean_size_bytes));
    if let Some(largest) = &stats.largest {
        println!(
            "Largest:    {:>8}  {}",
            format_size(largest.file_size),
            or_placeholder(&largest.display_name)
        );
    }
    println!("Missing URL:          {:>4}", stats.missing_url);
    println!("Missing Portable URL: {:>4}", stats.missing_portable_url);
}
