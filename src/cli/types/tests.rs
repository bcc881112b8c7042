//! Unit tests for CLI value types

use super::*;
use crate::error::StreamError;

#[test]
fn test_ids_parse_and_display() {
    let uid: UserId = "42".parse().unwrap();
    assert_eq!(uid, UserId::new(42));
    assert_eq!(uid.to_string(), "42");

    let rid: ReleaseId = " 7 ".parse().unwrap();
    assert_eq!(rid.as_i64(), 7);

    let sid: SessionId = "1001".parse().unwrap();
    assert_eq!(sid.as_i64(), 1001);

    let ep: EpisodeNumber = "3".parse().unwrap();
    assert_eq!(ep.as_i64(), 3);
}

#[test]
fn test_ids_reject_non_numeric() {
    match "abc".parse::<UserId>() {
        Err(StreamError::InvalidId(_)) => (),
        other => panic!("Expected InvalidId error, got {:?}", other),
    }
    assert!("".parse::<ReleaseId>().is_err());
    assert!("1.5".parse::<SessionId>().is_err());
}

#[test]
fn test_date_parsing() {
    let date: Date = "2023-01-15".parse().unwrap();
    assert_eq!(date.to_string(), "2023-01-15");

    assert!("2023-02-30".parse::<Date>().is_err());
    assert!("15/01/2023".parse::<Date>().is_err());
    assert!("".parse::<Date>().is_err());
}

#[test]
fn test_timestamp_parsing() {
    let ts: Timestamp = "2024-03-01 20:15:00".parse().unwrap();
    assert_eq!(ts.to_string(), "2024-03-01 20:15:00");

    let iso: Timestamp = "2024-03-01T20:15:00".parse().unwrap();
    assert_eq!(iso, ts);

    match "2024-03-01".parse::<Timestamp>() {
        Err(StreamError::InvalidDate { expected, .. }) => {
            assert_eq!(expected, "YYYY-MM-DD HH:MM:SS");
        }
        other => panic!("Expected InvalidDate error, got {:?}", other),
    }
}

#[test]
fn test_timestamps_order_chronologically() {
    let earlier: Timestamp = "2024-03-01 09:00:00".parse().unwrap();
    let later: Timestamp = "2024-03-01 21:00:00".parse().unwrap();
    assert!(earlier < later);
    assert!(earlier.to_string() < later.to_string());
}

#[test]
fn test_subscription_parsing() {
    assert_eq!("free".parse::<Subscription>().unwrap(), Subscription::Free);
    assert_eq!("MONTHLY".parse::<Subscription>().unwrap(), Subscription::Monthly);
    assert_eq!(" yearly ".parse::<Subscription>().unwrap(), Subscription::Yearly);
    assert!("weekly".parse::<Subscription>().is_err());
    assert_eq!(Subscription::Yearly.to_string(), "yearly");
}

#[test]
fn test_quality_parsing() {
    assert_eq!("480p".parse::<Quality>().unwrap(), Quality::Sd480);
    assert_eq!("720P".parse::<Quality>().unwrap(), Quality::Hd720);
    assert_eq!("1080p".parse::<Quality>().unwrap(), Quality::Hd1080);
    assert!("4k".parse::<Quality>().is_err());
    assert_eq!(Quality::Hd1080.to_string(), "1080p");
}

#[test]
fn test_device_parsing() {
    assert_eq!("mobile".parse::<Device>().unwrap(), Device::Mobile);
    assert_eq!("Desktop".parse::<Device>().unwrap(), Device::Desktop);
    match "tv".parse::<Device>() {
        Err(StreamError::InvalidDevice { value }) => assert_eq!(value, "tv"),
        other => panic!("Expected InvalidDevice error, got {:?}", other),
    }
}

#[test]
fn test_media_serde_uses_stored_text() {
    assert_eq!(serde_json::to_string(&Quality::Sd480).unwrap(), "\"480p\"");
    assert_eq!(
        serde_json::to_string(&Subscription::Monthly).unwrap(),
        "\"monthly\""
    );
    assert_eq!(serde_json::to_string(&Device::Desktop).unwrap(), "\"desktop\"");
}

#[test]
fn test_genre_list_from_stored() {
    assert!(GenreList::from_stored(None).is_empty());
    assert!(GenreList::from_stored(Some("")).is_empty());
    assert!(GenreList::from_stored(Some(" ; ;")).is_empty());

    let genres = GenreList::from_stored(Some("Drama;comedy; drama ;Horror"));
    assert_eq!(genres.to_string(), "drama;comedy;horror");

    let genres = GenreList::from_stored(Some("Sci-Fi;;Action;Sci-Fi;"));
    assert_eq!(genres.to_stored().as_deref(), Some("sci-fi;action"));
}

#[test]
fn test_genre_normalize_and_contains() {
    assert_eq!(GenreList::normalize("  Sci-Fi ").unwrap(), "sci-fi");

    let genres = GenreList::from_stored(Some("sci-fi"));
    assert!(genres.contains("sci-fi"));
    assert!(genres.contains("SCI-FI"));
    assert!(!genres.contains("drama"));

    match GenreList::normalize("   ") {
        Err(StreamError::EmptyGenre) => (),
        other => panic!("Expected EmptyGenre error, got {:?}", other),
    }
}

#[test]
fn test_genre_list_append_stored_keeps_existing_entries() {
    assert_eq!(GenreList::append_stored(None, "drama"), "drama");
    assert_eq!(GenreList::append_stored(Some(""), "drama"), "drama");
    assert_eq!(
        GenreList::append_stored(Some("Sci-Fi;Action;"), "drama"),
        "Sci-Fi;Action;drama"
    );
}

#[test]
fn test_empty_genre_list_stores_null() {
    assert_eq!(GenreList::default().to_stored(), None);
}
