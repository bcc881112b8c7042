//! Unit tests for command handlers

use super::*;
use crate::cli::types::{ReleaseId, SessionId, UserId};
use crate::storage::{PopularRelease, Rejection, ReviewedRelease};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("streaming.db");
    (dir, path)
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_write_outcome_applied() {
    let mut out = Vec::new();
    let applied = write_outcome(&mut out, "test", Ok(Outcome::Applied)).unwrap();
    assert!(applied);
    assert_eq!(output(out), "Success\n");
}

#[test]
fn test_write_outcome_rejected() {
    let mut out = Vec::new();
    let result = Ok(Outcome::Rejected(Rejection::UnknownUser(UserId::new(1))));
    let applied = write_outcome(&mut out, "test", result).unwrap();
    assert!(!applied);
    assert_eq!(output(out), "Fail\n");
}

#[test]
fn test_write_outcome_error_reports_fail() {
    let mut out = Vec::new();
    let applied = write_outcome(&mut out, "test", Err(anyhow::anyhow!("disk on fire"))).unwrap();
    assert!(!applied);
    assert_eq!(output(out), "Fail\n");
}

#[test]
fn test_write_report_lines() {
    let rows = vec![
        PopularRelease {
            rid: ReleaseId::new(2),
            title: "Second".to_string(),
            review_count: 3,
        },
        PopularRelease {
            rid: ReleaseId::new(1),
            title: "First".to_string(),
            review_count: 1,
        },
    ];

    let mut out = Vec::new();
    write_report(&mut out, &rows, "Nothing found", false).unwrap();
    assert_eq!(output(out), "2,Second,3\n1,First,1\n");
}

#[test]
fn test_write_report_empty() {
    let rows: Vec<ReviewedRelease> = Vec::new();

    let mut out = Vec::new();
    write_report(&mut out, &rows, "No reviews found.", false).unwrap();
    assert_eq!(output(out), "No reviews found.\n");

    let mut out = Vec::new();
    write_report(&mut out, &rows, "No reviews found.", true).unwrap();
    assert_eq!(output(out).trim(), "[]");
}

#[test]
fn test_write_report_json() {
    let rows = vec![ReviewedRelease {
        rid: ReleaseId::new(5),
        genre: "comedy".to_string(),
        title: "Laughs".to_string(),
    }];

    let mut out = Vec::new();
    write_report(&mut out, &rows, "unused", true).unwrap();

    let parsed: Vec<ReviewedRelease> = serde_json::from_str(&output(out)).unwrap();
    assert_eq!(parsed, rows);
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty(String::new()), None);
    assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    assert_eq!(non_empty(" ".to_string()), Some(" ".to_string()));
}

#[test]
fn test_open_database_creates_parent_dirs() {
    let (_dir, path) = temp_db();
    let _db = open_database(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_create_tables_command() {
    let (_dir, path) = temp_db();

    let mut out = Vec::new();
    assert!(import::handle_create_tables(&mut out, &path).unwrap());
    assert_eq!(output(out), "Success\n");
}

#[test]
fn test_import_missing_dir_fails() {
    let (dir, path) = temp_db();

    let mut out = Vec::new();
    let applied = import::handle_import(&mut out, &path, &dir.path().join("absent")).unwrap();
    assert!(!applied);
    assert_eq!(output(out), "Fail\n");
}

#[test]
fn test_viewer_commands_round_trip_through_disk() {
    let (_dir, path) = temp_db();

    let params = || viewers::InsertViewerParams {
        uid: UserId::new(9),
        email: "nine@example.com".to_string(),
        nickname: "nine".to_string(),
        street: String::new(),
        city: "Irvine".to_string(),
        state: String::new(),
        zip: String::new(),
        genres: "Drama".to_string(),
        joined_date: "2024-05-01".parse().unwrap(),
        first: "Nina".to_string(),
        last: "Ng".to_string(),
        subscription: "free".parse().unwrap(),
    };

    let mut out = Vec::new();
    assert!(viewers::handle_insert_viewer(&mut out, &path, params()).unwrap());
    assert!(!viewers::handle_insert_viewer(&mut out, &path, params()).unwrap());
    assert!(viewers::handle_add_genre(&mut out, &path, UserId::new(9), "comedy").unwrap());
    assert!(!viewers::handle_add_genre(&mut out, &path, UserId::new(9), "Drama").unwrap());
    assert!(viewers::handle_delete_viewer(&mut out, &path, UserId::new(9)).unwrap());
    assert!(!viewers::handle_delete_viewer(&mut out, &path, UserId::new(9)).unwrap());
    assert_eq!(output(out), "Success\nFail\nSuccess\nFail\nSuccess\nFail\n");
}

#[test]
fn test_insert_viewer_params_conversion() {
    let params = viewers::InsertViewerParams {
        uid: UserId::new(1),
        email: "a@example.com".to_string(),
        nickname: "a".to_string(),
        street: String::new(),
        city: "Irvine".to_string(),
        state: String::new(),
        zip: "92617".to_string(),
        genres: "Drama;comedy;DRAMA".to_string(),
        joined_date: "2024-05-01".parse().unwrap(),
        first: "A".to_string(),
        last: "B".to_string(),
        subscription: "monthly".parse().unwrap(),
    };

    let viewer = crate::storage::NewViewer::from(params);
    assert_eq!(viewer.street, None);
    assert_eq!(viewer.city.as_deref(), Some("Irvine"));
    assert_eq!(viewer.zip.as_deref(), Some("92617"));
    assert_eq!(viewer.genres.to_string(), "drama;comedy");
}

#[test]
fn test_release_commands_on_empty_catalog_fail() {
    let (_dir, path) = temp_db();

    let mut out = Vec::new();
    assert!(!releases::handle_insert_movie(&mut out, &path, ReleaseId::new(1), "u").unwrap());
    assert!(!releases::handle_update_release(&mut out, &path, ReleaseId::new(1), "t").unwrap());
    assert_eq!(output(out), "Fail\nFail\n");
}

#[test]
fn test_reports_on_empty_catalog() {
    let (_dir, path) = temp_db();

    let mut out = Vec::new();
    reports::handle_list_releases(&mut out, &path, UserId::new(1), false).unwrap();
    reports::handle_popular_release(&mut out, &path, 3, false).unwrap();
    reports::handle_release_title(&mut out, &path, SessionId::new(1), false).unwrap();
    reports::handle_active_viewer(
        &mut out,
        &path,
        1,
        "2024-01-01".parse().unwrap(),
        "2024-12-31".parse().unwrap(),
        false,
    )
    .unwrap();
    reports::handle_videos_viewed(&mut out, &path, ReleaseId::new(1), false).unwrap();

    assert_eq!(
        output(out),
        "No reviews found.\nNothing found\nNothing found\nNothing found\nNothing found\n"
    );
}
