// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use counter_snapshot_core::{Snapshot, SnapshotError};

// ============================================================
// Round-trip and idempotence
// ============================================================

#[test]
fn test_safety_round_trip_preserves_keys_and_values() {
    let snapshot = Snapshot::from_entries(&[(0, 3), (1, 2), (2, 4), (3, 1)]);

    let decoded = Snapshot::decode(&snapshot.encode()).expect("own encoding must decode");

    assert_eq!(decoded, snapshot, "Round trip must preserve the mapping");
    assert_eq!(decoded.sum(), 10);
}

#[test]
fn test_safety_encoding_is_idempotent_on_quiesced_data() {
    // Entry order from a concurrent map is arbitrary; the encoding must not
    // depend on it
    let first = Snapshot::from_entries(&[(7, 1), (2, 5), (41, 3)]).encode();
    let second = Snapshot::from_entries(&[(41, 3), (7, 1), (2, 5)]).encode();

    assert_eq!(
        first, second,
        "Same mapping must encode to identical text both times"
    );
}

#[test]
fn test_safety_empty_snapshot_round_trips() {
    let snapshot = Snapshot::from_entries(&[]);

    let decoded = Snapshot::decode(&snapshot.encode()).expect("empty encoding must decode");

    assert!(decoded.is_empty());
    assert_eq!(decoded.sum(), 0);
}

// ============================================================
// Decode failure
// ============================================================

#[test]
fn test_safety_corrupt_text_yields_decode_error() {
    let result = Snapshot::decode("this is not a snapshot");

    match result {
        Err(SnapshotError::Decode(_)) => {}
        other => panic!("Expected SnapshotError::Decode, got {:?}", other),
    }
}

#[test]
fn test_safety_wrong_shape_yields_decode_error() {
    // Valid JSON, but not an integer-to-integer object
    let result = Snapshot::decode("[1, 2, 3]");

    assert!(result.is_err(), "An array is not a counter mapping");
}

#[test]
fn test_decode_error_display_names_the_snapshot() {
    let err = Snapshot::decode("{").expect_err("truncated text must not decode");

    assert!(
        err.to_string().starts_with("Failed to decode final snapshot"),
        "Diagnostic must say what failed: {}",
        err
    );
}
