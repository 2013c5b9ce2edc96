//! Tests for conversion error reporting.

mod common;

use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use url::Url;
use uuid::Uuid;
use value_converter::{convert, ConversionContext, ConversionFailure, FailureReason, Ref};

use common::{Circle, Square};

#[test]
fn test_unsupported_message() {
    let err = convert::<i32, NaiveDateTime>(42, None).unwrap_err();
    assert_eq!(err.source_type(), "i32");
    assert_eq!(err.target_type(), "chrono::NaiveDateTime");
    insta::assert_snapshot!(err, @"cannot convert i32 to chrono::NaiveDateTime: no conversion from i32 to chrono::NaiveDateTime");
}

#[test]
fn test_parse_failure_message() {
    let err = convert::<String, i32>("abc".into(), None).unwrap_err();
    insta::assert_snapshot!(err, @r#"cannot convert alloc::string::String to i32: cannot parse "abc" as i32"#);
}

#[test]
fn test_length_message() {
    let err = convert::<Vec<u8>, Uuid>(vec![1, 2, 3], None).unwrap_err();
    assert_eq!(
        err.failure(),
        &ConversionFailure::incompatible_length(16, 3)
    );
    insta::assert_snapshot!(err, @"cannot convert alloc::vec::Vec<u8> to uuid::Uuid: expected 16 bytes, got 3");
}

#[test]
fn test_reference_message_names_runtime_class() {
    let err =
        convert::<Ref<Square>, Ref<Circle>>(Ref::new(Square { side: 1.0 }), None).unwrap_err();
    insta::assert_snapshot!(err, @"cannot convert tests::Square to tests::Circle: tests::Square is not assignable to tests::Circle");
}

#[test]
fn test_missing_value_message() {
    let err = convert::<Option<String>, Url>(None, None).unwrap_err();
    insta::assert_snapshot!(err, @"cannot convert core::option::Option<alloc::string::String> to url::Url: no value available for non-optional url::Url");
}

#[test]
fn test_invalid_format_message() {
    let context = ConversionContext::new().with_format("Q");
    let err = convert::<i32, String>(7, Some(&context)).unwrap_err();
    insta::assert_snapshot!(err, @r#"cannot convert i32 to alloc::string::String: invalid format string "Q" for i32"#);
}

#[test]
fn test_out_of_range_message() {
    let err = convert::<u32, char>(0xD800, None).unwrap_err();
    insta::assert_snapshot!(err, @"cannot convert u32 to char: 0xd800 is not a character");
}

#[test]
fn test_reason_matches_failure() {
    let err = convert::<String, Uuid>("{bad}".into(), None).unwrap_err();
    assert_eq!(err.reason(), FailureReason::ParseFailure);
    assert_eq!(err.reason(), err.failure().reason());
}
