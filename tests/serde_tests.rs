#![cfg(feature = "serde")]

//! Integration tests for serde support in fpstd.
//!
//! These tests verify that the data types returned by the library serialize
//! and deserialize through JSON without loss.

use fpstd::data::array::{self, Separated, Span};
use fpstd::data::either::Either;
use rstest::rstest;

// =============================================================================
// Either Integration Tests
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
fn test_either_externally_tagged() {
    let right: Either<String, i32> = Either::Right(7);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":7}"#);
}

#[rstest]
fn test_either_sequence_roundtrip() {
    let values: Vec<Either<String, u8>> =
        vec![Either::Right(1), Either::Left("x".to_string()), Either::Right(2)];
    let json = serde_json::to_string(&values).unwrap();
    let restored: Vec<Either<String, u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(array::rights(&restored), vec![1, 2]);
    assert_eq!(restored, values);
}

// =============================================================================
// Span / Separated Integration Tests
// =============================================================================

#[rstest]
fn test_span_json_roundtrip() {
    let split = array::span(&[1, 2, 3, 10, 4], |n| *n < 5);
    let json = serde_json::to_string(&split).unwrap();
    assert_eq!(json, r#"{"init":[1,2,3],"rest":[10,4]}"#);

    let restored: Span<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(split, restored);
}

#[rstest]
fn test_separated_json_roundtrip() {
    let separated = array::partition_map(&["1", "a", "2"], |s| {
        s.parse::<i32>().map_or_else(|_| Either::Left((*s).to_string()), Either::Right)
    });
    let json = serde_json::to_string(&separated).unwrap();
    let restored: Separated<String, i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.left, vec!["a".to_string()]);
    assert_eq!(restored.right, vec![1, 2]);
    assert_eq!(separated, restored);
}

#[rstest]
fn test_empty_span_json_roundtrip() {
    let empty: Span<String> = Span::default();
    let restored: Span<String> = serde_json::from_str(&serde_json::to_string(&empty).unwrap()).unwrap();
    assert_eq!(empty, restored);
}
