//! End-to-end tests for the backup importer: a backup file on disk is
//! extracted into a temporary folder and the written files are inspected.

use std::fs;

use scrapbook_import::import;
use tempfile::TempDir;

const BACKUP: &str = r#"{
  "version": 1,
  "exported": 1767000000000,
  "photos": [
    "data:image/png;base64,iVBORw0KGgo=",
    "https://example.com/not-inline.jpg",
    "data:image/jpeg;base64,/9j/4AA=",
    "data:image/webp;base64,UklGRg=="
  ],
  "letters": [
    {"title": "Hi", "body": "There", "created": 1700000000000},
    {"title": "Again", "body": "Second letter", "created": 0}
  ],
  "appreciation": "<b>thank you</b>"
}"#;

fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("lovelife-backup-2025-12-29.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn extracts_every_part_of_the_backup() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, BACKUP);
    let out = dir.path().join("DATA");

    let summary = import(&input, &out).unwrap();

    // verbatim copy
    assert_eq!(
        fs::read_to_string(out.join("backup-original.json")).unwrap(),
        BACKUP
    );

    // the non-data URL keeps its position in the numbering
    let names: Vec<_> = summary
        .images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["img-001.png", "img-003.jpg", "img-004.bin"]);
    assert_eq!(
        fs::read(out.join("images/img-001.png")).unwrap(),
        b"\x89PNG\r\n\x1a\n"
    );

    let letters: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("letters.json")).unwrap()).unwrap();
    assert_eq!(letters[0]["title"], "Hi");
    assert_eq!(letters[1]["created"], 0);

    let text = fs::read_to_string(out.join("letters.txt")).unwrap();
    assert!(text.starts_with("--- Letter 1 ---\nTitle: Hi\nDate: "));
    assert!(text.contains("--- Letter 2 ---\nTitle: Again\nDate: \nSecond letter\n\n"));

    let html = fs::read_to_string(out.join("appreciation.html")).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<body><b>thank you</b></body>"));
}

#[test]
fn letters_json_keeps_every_letter_as_written() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"letters": [{"title":"A","body":"x"},{"title":"B","body":"y","created":1700000000000.0,"mood":"happy"}]}"#,
    );
    let out = dir.path().join("out");

    import(&input, &out).unwrap();

    let letters: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("letters.json")).unwrap()).unwrap();
    assert_eq!(
        letters,
        serde_json::json!([
            {"title": "A", "body": "x"},
            {"title": "B", "body": "y", "created": 1700000000000.0, "mood": "happy"}
        ])
    );

    let text = fs::read_to_string(out.join("letters.txt")).unwrap();
    assert!(text.starts_with("--- Letter 1 ---\nTitle: A\nDate: \nx\n\n--- Letter 2 ---\nTitle: B\nDate: 2023-11-"));
}

#[test]
fn foreign_metadata_does_not_stop_the_import() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"version": "1", "exported": "2025-12-29T10:00:00.000Z", "appreciation": "<i>hi</i>"}"#,
    );
    let out = dir.path().join("out");

    let summary = import(&input, &out).unwrap();
    assert!(summary.appreciation.is_some());
}

#[test]
fn empty_backup_writes_only_the_copy() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"{"photos": "oops"}"#);
    let out = dir.path().join("out");

    let summary = import(&input, &out).unwrap();
    assert!(summary.backup_copy.is_some());
    assert!(summary.images.is_empty());
    assert!(summary.letters.is_none());
    assert!(summary.appreciation.is_none());
    assert!(!out.join("letters.json").exists());
}

#[test]
fn unparsable_backup_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "this is not json");
    let err = import(&input, &dir.path().join("out")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse JSON from backup"));
}
