//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_database_error_conversion() {
    let db_error = rusqlite::Error::InvalidColumnType(
        0,
        "test_column".to_string(),
        rusqlite::types::Type::Null,
    );
    let stream_error = StreamError::from(db_error);

    match stream_error {
        StreamError::Database(_) => (),
        _ => panic!("Expected Database error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let stream_error = StreamError::from(io_error);

    match stream_error {
        StreamError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let stream_error = StreamError::from(json_error);

    match stream_error {
        StreamError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "not_a_number".parse::<i64>().unwrap_err();
    let stream_error = StreamError::from(parse_error);

    match stream_error {
        StreamError::InvalidId(_) => (),
        _ => panic!("Expected InvalidId error variant"),
    }
}

#[test]
fn test_anyhow_wrapping_rusqlite_keeps_database_variant() {
    let anyhow_error = anyhow::Error::new(rusqlite::Error::QueryReturnedNoRows);
    let stream_error = StreamError::from(anyhow_error);

    match stream_error {
        StreamError::Database(rusqlite::Error::QueryReturnedNoRows) => (),
        other => panic!("Expected Database error variant, got {:?}", other),
    }
}

#[test]
fn test_anyhow_wrapping_csv_keeps_csv_variant() {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader("a,b\nc\n".as_bytes());
    let csv_error = reader
        .records()
        .find_map(|record| record.err())
        .expect("ragged row should fail");

    let anyhow_error = anyhow::Error::new(csv_error).context("loading Users from users.csv");
    match StreamError::from(anyhow_error) {
        StreamError::Csv(_) => (),
        other => panic!("Expected Csv error variant, got {:?}", other),
    }
}

#[test]
fn test_anyhow_error_conversion() {
    let anyhow_error = anyhow::anyhow!("Test anyhow error message");
    let stream_error = StreamError::from(anyhow_error);

    match stream_error {
        StreamError::Storage { message } => {
            assert!(message.contains("Test anyhow error message"));
        }
        _ => panic!("Expected Storage error variant"),
    }
}

#[test]
fn test_error_messages() {
    let error = StreamError::InvalidSubscription {
        value: "weekly".to_string(),
    };
    assert!(error.to_string().contains("weekly"));
    assert!(error.to_string().contains("free, monthly or yearly"));

    let error = StreamError::InvalidDate {
        value: "2024-13-01".to_string(),
        expected: "YYYY-MM-DD",
    };
    assert_eq!(
        error.to_string(),
        "Invalid date or time '2024-13-01': expected YYYY-MM-DD"
    );

    let error = StreamError::MissingDataDir {
        env_var: "STREAMDB_DATABASE".to_string(),
    };
    assert!(error.to_string().contains("STREAMDB_DATABASE"));

    assert_eq!(StreamError::EmptyGenre.to_string(), "Genre must not be empty");
}
