use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use common::model::photo::DataUrl;
use log::{error, warn};
use serde_json::Value;

pub fn save_backup_copy(text: &str, outdir: &Path) -> Result<PathBuf> {
    let path = outdir.join("backup-original.json");
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Decodes every photo into `images/img-NNN.<ext>` (numbered from 1 by
/// position). Entries that are not data URLs or fail to decode or write are
/// logged and skipped; only creating the directory itself is fatal.
pub fn write_photos(photos: &[String], outdir: &Path) -> Result<Vec<PathBuf>> {
    let images_dir = outdir.join("images");
    fs::create_dir_all(&images_dir)
        .with_context(|| format!("failed to create {}", images_dir.display()))?;

    let mut written = Vec::new();
    for (i, photo) in photos.iter().enumerate() {
        let position = i + 1;
        let Ok(url) = photo.parse::<DataUrl>() else {
            warn!("skipping non-data URL photo at index {}", position);
            continue;
        };
        let path = images_dir.join(format!("img-{:03}.{}", position, url.extension()));
        let result = url
            .decode()
            .map_err(anyhow::Error::from)
            .and_then(|bytes| fs::write(&path, bytes).map_err(anyhow::Error::from));
        match result {
            Ok(()) => written.push(path),
            Err(err) => error!("failed to write {}: {}", path.display(), err),
        }
    }
    Ok(written)
}

/// Writes the letters exactly as the backup holds them to `letters.json`, and
/// a readable rendition to `letters.txt`.
pub fn write_letters(letters: &[Value], outdir: &Path) -> Result<(PathBuf, PathBuf)> {
    let json_path = outdir.join("letters.json");
    let json = serde_json::to_string_pretty(letters)?;
    fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let txt_path = outdir.join("letters.txt");
    fs::write(&txt_path, letters_text(letters))
        .with_context(|| format!("failed to write {}", txt_path.display()))?;

    Ok((json_path, txt_path))
}

fn letters_text(letters: &[Value]) -> String {
    let mut out = String::new();
    for (i, letter) in letters.iter().enumerate() {
        let _ = writeln!(out, "--- Letter {} ---", i + 1);
        let _ = writeln!(out, "Title: {}", text_field(letter, "title"));
        let _ = writeln!(
            out,
            "Date: {}",
            letter.get("created").map(letter_date).unwrap_or_default()
        );
        let _ = writeln!(out, "{}\n", text_field(letter, "body"));
    }
    out
}

fn text_field(letter: &Value, key: &str) -> String {
    match letter.get(key) {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Local ISO-8601 time of a letter, empty when it carries no timestamp.
/// Sub-second parts are printed as microseconds and omitted when zero.
fn letter_date(created: &Value) -> String {
    let Some(millis) = created.as_f64().filter(|millis| *millis != 0.0) else {
        return String::new();
    };
    let micros = (millis * 1000.0).round() as i64;
    let fraction = micros.rem_euclid(1_000_000);
    let format = if fraction == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    Local
        .timestamp_opt(micros.div_euclid(1_000_000), fraction as u32 * 1000)
        .earliest()
        .map(|date| date.naive_local().format(format).to_string())
        .unwrap_or_default()
}

pub fn write_appreciation(markup: &str, outdir: &Path) -> Result<PathBuf> {
    let path = outdir.join("appreciation.html");
    let html = format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Appreciation</title></head><body>{}</body></html>",
        markup
    );
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn letters_text_layout() {
        let letters = vec![json!({"title": "Hi", "body": "There"})];
        assert_eq!(
            letters_text(&letters),
            "--- Letter 1 ---\nTitle: Hi\nDate: \nThere\n\n"
        );
    }

    #[test]
    fn letter_date_is_iso_local_time() {
        let date = letter_date(&json!(1_700_000_000_000_i64));
        assert_eq!(date.len(), "2023-11-14T22:13:20".len());
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[10..11], "T");
    }

    #[test]
    fn letter_date_prints_microseconds_when_present() {
        let date = letter_date(&json!(1_700_000_000_123_i64));
        assert_eq!(date.len(), "2023-11-14T22:13:20.123000".len());
        assert!(date.ends_with(".123000"));

        assert_eq!(letter_date(&json!(1700000000000.0)).len(), 19);
    }

    #[test]
    fn missing_or_zero_timestamps_have_no_date() {
        assert_eq!(letter_date(&json!(0)), "");
        assert_eq!(letter_date(&Value::Null), "");
        assert_eq!(letter_date(&json!("yesterday")), "");
    }
}
