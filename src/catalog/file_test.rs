// ABOUTME: Tests for CatalogFile - parsing, validation, and loading from disk.
// ABOUTME: Uses tempfile for file-backed fixtures.

use std::io::Write;

use super::*;
use crate::error::CatalogError;

#[test]
fn test_from_json_normalizes_keywords() {
    let file = CatalogFile::from_json(
        r#"{
            "entries": [
                {
                    "name": "Dice Roller",
                    "url": "/apps/dice-roller",
                    "category": "App",
                    "keywords": ["Dice", " D20 ", ""],
                    "icon": "🎲"
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(file.entries.len(), 1);
    assert_eq!(file.entries[0].keywords, vec!["dice", "d20"]);
    assert_eq!(file.entries[0].category, Category::App);
}

#[test]
fn test_from_json_empty_document() {
    let file = CatalogFile::from_json("{}").unwrap();
    assert!(file.entries.is_empty());
}

#[test]
fn test_from_json_rejects_empty_name() {
    let err = CatalogFile::from_json(
        r#"{"entries": [
            {"name": "Snake", "url": "/games/snake", "category": "Game"},
            {"name": "  ", "url": "/games/blank", "category": "Game"}
        ]}"#,
    )
    .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidEntry { index: 1, .. }));
}

#[test]
fn test_from_json_rejects_empty_url() {
    let err = CatalogFile::from_json(
        r#"{"entries": [{"name": "Snake", "url": "", "category": "Game"}]}"#,
    )
    .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidEntry { index: 0, .. }));
}

#[test]
fn test_from_json_rejects_unknown_category() {
    let err = CatalogFile::from_json(
        r#"{"entries": [{"name": "Snake", "url": "/games/snake", "category": "Widget"}]}"#,
    )
    .unwrap_err();

    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn test_load_from_disk() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"{{"entries": [{{"name": "Pomodoro Timer", "url": "/apps/pomodoro", "category": "App", "keywords": ["timer", "focus"]}}]}}"#
    )
    .unwrap();

    let file = CatalogFile::load(tmp.path()).unwrap();
    assert_eq!(file.entries[0].name, "Pomodoro Timer");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogFile::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
