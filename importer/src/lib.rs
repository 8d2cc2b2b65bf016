//! # Backup importer
//!
//! Reads a backup produced by the page's "Export all" and extracts it into a
//! workspace folder:
//!
//! - `backup-original.json`: verbatim copy of the input
//! - `images/img-NNN.<ext>`: every photo decoded from its data URL
//! - `letters.json` and `letters.txt`: the letters as JSON and as plain text
//! - `appreciation.html`: the note wrapped in a minimal HTML document
//!
//! Per-photo failures and a failed backup copy are logged and skipped; any
//! other failure aborts the import.

mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use common::model::backup::Backup;
use log::{info, warn};
use serde_json::Value;

pub use extract::{save_backup_copy, write_appreciation, write_letters, write_photos};

#[derive(Debug, Parser)]
#[command(about = "Import a scrapbook backup and extract it into a workspace folder")]
pub struct Args {
    /// Path to the exported backup .txt/.json
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "DATA")]
    pub outdir: PathBuf,
}

/// Everything written by one import.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub backup_copy: Option<PathBuf>,
    pub images: Vec<PathBuf>,
    pub letters: Option<(PathBuf, PathBuf)>,
    pub appreciation: Option<PathBuf>,
}

pub fn import(input: &Path, outdir: &Path) -> Result<ImportSummary> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create output directory {}", outdir.display()))?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let document: Value =
        serde_json::from_str(&text).context("Failed to parse JSON from backup")?;
    // letters are extracted verbatim, including fields the page does not know
    let letters = match document.get("letters") {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };
    let backup = Backup::from_value(document).context("Failed to parse JSON from backup")?;

    let mut summary = ImportSummary::default();

    match save_backup_copy(&text, outdir) {
        Ok(path) => {
            info!("Saved backup copy to: {}", path.display());
            summary.backup_copy = Some(path);
        }
        Err(err) => warn!("Failed saving backup copy: {:#}", err),
    }

    if backup.photos.is_empty() {
        info!("No photos to write");
    } else {
        info!(
            "Writing {} photos to {}",
            backup.photos.len(),
            outdir.join("images").display()
        );
        summary.images = write_photos(&backup.photos, outdir)?;
        for path in &summary.images {
            info!("WROTE {}", path.display());
        }
    }

    if letters.is_empty() {
        info!("No letters to write");
    } else {
        let (json, txt) = write_letters(&letters, outdir)?;
        info!("WROTE letters JSON: {}", json.display());
        info!("WROTE letters text: {}", txt.display());
        summary.letters = Some((json, txt));
    }

    if backup.appreciation.is_empty() {
        info!("No appreciation note found in backup");
    } else {
        let path = write_appreciation(&backup.appreciation, outdir)?;
        info!("WROTE appreciation HTML: {}", path.display());
        summary.appreciation = Some(path);
    }

    info!("Import complete.");
    Ok(summary)
}
