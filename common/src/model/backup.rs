//! Backup document: every store of the page in one JSON file.
//!
//! The page exports it through "Export all" and can import it back; the
//! native importer extracts it into a folder. Reading is lenient: missing
//! fields default, and a `photos` or `letters` member that is not an array is
//! treated as empty. Individual entries that do not fit are dropped, and a
//! `version` or `exported` of an unexpected type falls back to its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::letter::Letter;

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default = "default_version", deserialize_with = "lenient_version")]
    pub version: u32,
    /// Export time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub exported: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub photos: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub letters: Vec<Letter>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub appreciation: String,
}

fn default_version() -> u32 {
    BACKUP_VERSION
}

fn lenient_version<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let version = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(version.unwrap_or(BACKUP_VERSION))
}

fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64)),
        _ => None,
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

impl Backup {
    pub fn new(
        photos: &[String],
        letters: &[Letter],
        appreciation: &str,
        exported: Option<i64>,
    ) -> Self {
        Self {
            version: BACKUP_VERSION,
            exported,
            photos: photos.to_vec(),
            letters: letters.to_vec(),
            appreciation: appreciation.to_string(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, BackupError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a backup from an already parsed JSON document.
    pub fn from_value(document: Value) -> Result<Self, BackupError> {
        Ok(serde_json::from_value(document)?)
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.letters.is_empty() && self.appreciation.is_empty()
    }

    /// Download name for an export made on `date` (`YYYY-MM-DD`).
    pub fn file_name(date: &str) -> String {
        format!("lovelife-backup-{}.txt", date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_then_parse_keeps_everything() {
        let letters = vec![Letter::compose("Hi", "There", 10).unwrap()];
        let photos = vec!["data:image/png;base64,AA==".to_string()];
        let backup = Backup::new(&photos, &letters, "<b>thanks</b>", Some(99));

        let parsed = Backup::parse(&backup.to_json().unwrap()).unwrap();
        assert_eq!(parsed, backup);
    }

    #[test]
    fn tolerates_missing_and_mistyped_members() {
        let parsed = Backup::parse(r#"{"photos": "nope", "appreciation": null}"#).unwrap();
        assert_eq!(parsed.version, BACKUP_VERSION);
        assert!(parsed.is_empty());
        assert_eq!(parsed.exported, None);
    }

    #[test]
    fn foreign_version_and_export_time_do_not_block_reading() {
        let parsed = Backup::parse(
            r#"{"version": "1", "exported": "2025-12-29T10:00:00.000Z", "photos": ["data:image/png;base64,AA=="]}"#,
        )
        .unwrap();
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.exported, None);
        assert_eq!(parsed.photos.len(), 1);

        let parsed = Backup::parse(r#"{"version": {"major": 2}, "exported": 1.7e12}"#).unwrap();
        assert_eq!(parsed.version, BACKUP_VERSION);
        assert_eq!(parsed.exported, Some(1_700_000_000_000));
    }

    #[test]
    fn drops_entries_that_do_not_fit() {
        let parsed = Backup::parse(
            r#"{"photos": ["data:image/png;base64,AA==", 3], "letters": [{"title":"A","body":"B","created":1}, "x"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.photos.len(), 1);
        assert_eq!(parsed.letters.len(), 1);
    }

    #[test]
    fn rejects_non_json() {
        assert!(Backup::parse("not json").is_err());
    }

    #[test]
    fn file_name_carries_the_date() {
        assert_eq!(
            Backup::file_name("2025-12-29"),
            "lovelife-backup-2025-12-29.txt"
        );
    }
}
