use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use vidasset_cli::{
    display_cell, format_size, init_tracing, load_manifest, or_placeholder, resolve_manifest_path,
};
use vidasset_core::VideoAsset;

#[derive(Parser, Debug)]
#[command(name = "list_assets")]
#[command(about = "List video asset descriptors from a manifest")]
struct Args {
    /// Manifest file (JSON array of descriptors); defaults to $VIDASSET_MANIFEST
    manifest: Option<PathBuf>,

    /// Limit number of rows (default: 100)
    #[arg(long, default_value = "100")]
    limit: usize,

    /// Offset for pagination (default: 0)
    #[arg(long, default_value = "0")]
    offset: usize,

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
    tracing::info!("{} assets in {}", assets.len(), path.display());

    let page: Vec<&VideoAsset> = assets.iter().skip(args.offset).take(args.limit).collect();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        _ => {
            print_table(&page);
        }
    }

    Ok(())
}

fn print_table(assets: &[&VideoAsset]) {
    if assets.is_empty() {
        println!("No assets.");
        return;
    }
    println!("{:<32} {:<24} {:>10}  {}", "Name", "Date Added", "Size", "URL");
    println!("{}", "-".repeat(100));
    for asset in assets {
        // Fall back to the portable URL when the primary one is missing.
        let url = if asset.url.is_empty() && !asset.portable_url.is_empty() {
            format!("{} (portable)", asset.portable_url)
        } else {
            asset.url.clone()
        };
        println!(
            "{:<32} {:<24} {:>10}  {}",
            display_cell(or_placeholder(&asset.display_name), 32),
            display_cell(or_placeholder(&asset.date_added), 24),
            format_size(asset.file_size),
            or_placeholder(&url),
        );
    }
}
