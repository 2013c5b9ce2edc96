//! Tests for user enumerations.

mod common;

use pretty_assertions::assert_eq;
use value_converter::{convert, try_convert, ConversionContext, Enumeration, FailureReason};

use common::{Color, Priority};

#[test]
fn test_member_name_round_trip() {
    assert_eq!(convert::<Color, String>(Color::Blue, None).unwrap(), "Blue");
    assert_eq!(
        convert::<String, Color>("Blue".into(), None).unwrap(),
        Color::Blue
    );
    assert_eq!(
        convert::<String, Color>("blue".into(), None).unwrap(),
        Color::Blue
    );
    assert_eq!(
        convert::<String, Color>("42".into(), None).unwrap(),
        Color::Blue
    );
}

#[test]
fn test_ordinal_text_on_request() {
    let numeric = ConversionContext::new().with_format("D");
    assert_eq!(
        convert::<Color, String>(Color::Blue, Some(&numeric)).unwrap(),
        "42"
    );
    let general = ConversionContext::new().with_format("G");
    assert_eq!(
        convert::<Color, String>(Color::Blue, Some(&general)).unwrap(),
        "Blue"
    );
}

#[test]
fn test_hex_and_padded_ordinal_text() {
    let text = |format: &str| {
        let context = ConversionContext::new().with_format(format);
        convert::<Color, String>(Color::Blue, Some(&context))
    };
    assert_eq!(text("X").unwrap(), "2A");
    assert_eq!(text("x4").unwrap(), "002a");
    assert_eq!(text("D5").unwrap(), "00042");
    assert_eq!(
        text("N2").unwrap_err().reason(),
        FailureReason::InvalidFormat
    );
    assert_eq!(
        text("Xz").unwrap_err().reason(),
        FailureReason::InvalidFormat
    );
}

#[test]
fn test_numeric_pairs_use_ordinal() {
    assert_eq!(convert::<Color, i32>(Color::Blue, None).unwrap(), 42);
    assert_eq!(convert::<Color, f64>(Color::Green, None).unwrap(), 2.0);
    assert_eq!(convert::<u8, Color>(1, None).unwrap(), Color::Red);
    assert_eq!(
        convert::<f32, Priority>(10.9, None).unwrap(),
        Priority::High
    );
}

#[test]
fn test_undeclared_ordinal() {
    let failure = convert::<i64, Color>(3, None).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::OutOfRange);
    assert_eq!(try_convert::<String, Color>("3".into(), None), None);
}

#[test]
fn test_unknown_name() {
    let failure = convert::<String, Color>("Purple".into(), None).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::ParseFailure);
}

#[test]
fn test_distinct_enumerations_do_not_convert() {
    let failure = convert::<Color, Priority>(Color::Red, None).unwrap_err();
    assert_eq!(failure.reason(), FailureReason::UnsupportedConversion);
}

#[test]
fn test_non_numeric_pairs_fail_both_ways() {
    use chrono::{NaiveDateTime, TimeDelta};
    use uuid::Uuid;

    let unsupported = FailureReason::UnsupportedConversion;
    assert_eq!(
        convert::<Color, NaiveDateTime>(Color::Red, None)
            .unwrap_err()
            .reason(),
        unsupported
    );
    assert_eq!(
        convert::<Color, Uuid>(Color::Red, None)
            .unwrap_err()
            .reason(),
        unsupported
    );
    assert_eq!(
        convert::<Color, Vec<u8>>(Color::Red, None)
            .unwrap_err()
            .reason(),
        unsupported
    );
    assert_eq!(
        convert::<TimeDelta, Color>(TimeDelta::zero(), None)
            .unwrap_err()
            .reason(),
        unsupported
    );
    assert_eq!(
        convert::<bool, Color>(true, None).unwrap_err().reason(),
        unsupported
    );
}

#[test]
fn test_enumeration_metadata() {
    let info = Color::info();
    assert!(info.name().ends_with("::Color"));
    assert_eq!(
        info.members().to_vec(),
        vec![("Red", 1), ("Green", 2), ("Blue", 42)]
    );
    assert_eq!(Color::from_ordinal(2), Some(Color::Green));
}
