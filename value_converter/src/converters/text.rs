//! Format-to-text and parse-from-text
//!
//! Both directions dispatch on the non-text side: `format` on the source
//! value, `parse` on the target descriptor. Formatting honours the context's
//! format string and provider; an unknown format string fails with
//! `InvalidFormat` rather than falling back to the default.

use url::Url;

use super::number_format::{
    format_decimal, format_float, format_integer, parse_decimal, parse_float, parse_integer,
};
use super::{duration, enumeration, identifier, temporal};
use crate::dispatch::ConversionRequest;
use crate::error::Outcome;
use crate::types::{BaseType, Kind, TypeHandle};
use crate::value::Value;

pub(super) fn format(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let format = request.context.format();
    let nf = request.context.format_provider().number_format();
    let checked = |text: Option<String>| {
        text.ok_or_else(|| request.invalid_format(format.unwrap_or_default()))
    };

    let text = match value {
        Value::Bool(v) => v.to_string(),
        Value::I8(v) => checked(format_integer(v.into(), i8::BITS, format, nf))?,
        Value::I16(v) => checked(format_integer(v.into(), i16::BITS, format, nf))?,
        Value::I32(v) => checked(format_integer(v.into(), i32::BITS, format, nf))?,
        Value::I64(v) => checked(format_integer(v.into(), i64::BITS, format, nf))?,
        Value::U8(v) => checked(format_integer(v.into(), u8::BITS, format, nf))?,
        Value::U16(v) => checked(format_integer(v.into(), u16::BITS, format, nf))?,
        Value::U32(v) => checked(format_integer(v.into(), u32::BITS, format, nf))?,
        Value::U64(v) => checked(format_integer(v.into(), u64::BITS, format, nf))?,
        Value::F32(v) => checked(format_float(v, format, nf))?,
        Value::F64(v) => checked(format_float(v, format, nf))?,
        Value::Decimal(v) => checked(format_decimal(v, format, nf))?,
        Value::Char(c) => c.to_string(),
        Value::DateTime(v) => temporal::format_naive(v, request)?,
        Value::DateTimeOffset(v) => temporal::format_offset(v, request)?,
        Value::Duration(v) => duration::format(v, request)?,
        Value::Guid(v) => identifier::format_guid(v, request)?,
        Value::Enum(member) => enumeration::format(member, request)?,
        Value::Url(url) => url.into(),
        Value::Type(handle) => handle.qualified_name(),
        Value::Str(_) | Value::Bytes(_) | Value::Object(_) | Value::Absent => {
            return Err(request.unsupported())
        }
    };
    Ok(Value::Str(text))
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub(super) fn parse(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let Value::Str(text) = value else {
        return Err(request.unsupported());
    };
    let format = request.context.format();
    let nf = request.context.format_provider().number_format();

    let kind = match request.target.base() {
        BaseType::Enumeration(info) => {
            return enumeration::parse(&text, info, request).map(Value::Enum);
        }
        BaseType::Primitive(kind) => kind,
        BaseType::Class(_) => return Err(request.unsupported()),
    };
    let parsed = match kind {
        Kind::Bool => parse_bool(&text).map(Value::Bool),
        Kind::I8 => parse_integer(&text, format, nf).map(Value::I8),
        Kind::I16 => parse_integer(&text, format, nf).map(Value::I16),
        Kind::I32 => parse_integer(&text, format, nf).map(Value::I32),
        Kind::I64 => parse_integer(&text, format, nf).map(Value::I64),
        Kind::U8 => parse_integer(&text, format, nf).map(Value::U8),
        Kind::U16 => parse_integer(&text, format, nf).map(Value::U16),
        Kind::U32 => parse_integer(&text, format, nf).map(Value::U32),
        Kind::U64 => parse_integer(&text, format, nf).map(Value::U64),
        Kind::F32 => parse_float(&text, nf).map(Value::F32),
        Kind::F64 => parse_float(&text, nf).map(Value::F64),
        Kind::Decimal => parse_decimal(&text, nf).map(Value::Decimal),
        Kind::Char => parse_char(&text).map(Value::Char),
        Kind::DateTime => return temporal::parse_naive(&text, request).map(Value::DateTime),
        Kind::DateTimeOffset => {
            return temporal::parse_offset(&text, request).map(Value::DateTimeOffset)
        }
        Kind::Duration => return duration::parse(&text, request).map(Value::Duration),
        Kind::Guid => return identifier::parse_guid(&text, request).map(Value::Guid),
        Kind::Url => Url::parse(text.trim()).ok().map(Value::Url),
        Kind::Type => request
            .types
            .resolve(&text)
            .map(|descriptor| Value::Type(TypeHandle::new(descriptor))),
        Kind::Str | Kind::Bytes | Kind::Enum => return Err(request.unsupported()),
    };
    parsed.ok_or_else(|| request.parse_failure(&text))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::culture::Culture;
    use crate::{convert, try_convert, ConversionContext, FailureReason};

    fn german() -> ConversionContext {
        ConversionContext::new().with_format_provider(Culture::from_name("de-DE").unwrap().clone())
    }

    #[test]
    fn test_booleans() {
        assert_eq!(convert::<bool, String>(true, None).unwrap(), "true");
        assert!(convert::<String, bool>(" TRUE ".into(), None).unwrap());
        assert!(!convert::<String, bool>("false".into(), None).unwrap());
        assert_eq!(
            convert::<String, bool>("yes".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
    }

    #[test]
    fn test_integers_use_invariant_culture_by_default() {
        assert_eq!(convert::<i32, String>(-1234, None).unwrap(), "-1234");
        assert_eq!(convert::<String, i64>(" -42 ".into(), None).unwrap(), -42);
        assert_eq!(
            convert::<String, u8>("256".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let hex = ConversionContext::new().with_format("X4");
        assert_eq!(convert::<i16, String>(-1, Some(&hex)).unwrap(), "FFFF");
        assert_eq!(convert::<u16, String>(255, Some(&hex)).unwrap(), "00FF");
        assert_eq!(
            convert::<String, u16>("00FF".into(), Some(&hex)).unwrap(),
            255
        );
    }

    #[test]
    fn test_hex_parse_overflow_fails_like_decimal() {
        let hex = ConversionContext::new().with_format("X");
        assert_eq!(
            convert::<String, u8>("1FF".into(), Some(&hex))
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
        assert_eq!(
            convert::<String, u8>("511".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
        assert_eq!(
            convert::<String, i8>("80".into(), Some(&hex)).unwrap(),
            i8::MIN
        );
    }

    #[test]
    fn test_numbers_with_culture() {
        let context = german().with_format("N2");
        assert_eq!(
            convert::<f64, String>(1234.5, Some(&context)).unwrap(),
            "1.234,50"
        );
        assert_eq!(
            convert::<String, Decimal>("1.234,5".into(), Some(&german())).unwrap(),
            Decimal::new(12345, 1)
        );
        assert_eq!(
            convert::<String, f64>("2,5".into(), Some(&german())).unwrap(),
            2.5
        );
    }

    #[test]
    fn test_unknown_numeric_format() {
        let context = ConversionContext::new().with_format("Q");
        assert_eq!(
            convert::<i32, String>(1, Some(&context))
                .unwrap_err()
                .reason(),
            FailureReason::InvalidFormat
        );
    }

    #[test]
    fn test_characters() {
        assert_eq!(convert::<char, String>('é', None).unwrap(), "é");
        assert_eq!(convert::<String, char>("é".into(), None).unwrap(), 'é');
        assert_eq!(try_convert::<String, char>("ab".into(), None), None);
    }

    #[test]
    fn test_locators() {
        let url = convert::<String, Url>(" https://example.com/a?b=c ".into(), None).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(
            convert::<Url, String>(url, None).unwrap(),
            "https://example.com/a?b=c"
        );
        assert_eq!(
            convert::<String, Url>("/relative/path".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
    }

    #[test]
    fn test_type_handles() {
        let handle = TypeHandle::of::<Option<Uuid>>();
        let text = convert::<TypeHandle, String>(handle, None).unwrap();
        assert_eq!(text, "core::option::Option<uuid::Uuid>");
        assert_eq!(convert::<String, TypeHandle>(text, None).unwrap(), handle);
        assert_eq!(
            convert::<String, TypeHandle>("i32".into(), None).unwrap(),
            TypeHandle::of::<i32>()
        );
        assert_eq!(
            convert::<String, TypeHandle>("no::Such".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::ParseFailure
        );
    }

    #[test]
    fn test_empty_text_yields_default() {
        assert_eq!(convert::<String, i32>(String::new(), None).unwrap(), 0);
        assert_eq!(
            convert::<String, NaiveDateTime>(String::new(), None).unwrap(),
            NaiveDateTime::default()
        );
        assert_eq!(
            convert::<String, Option<f64>>(String::new(), None).unwrap(),
            None
        );
        assert_eq!(
            convert::<String, Url>(String::new(), None)
                .unwrap_err()
                .reason(),
            FailureReason::MissingValue
        );
    }

    #[test]
    fn test_bytes_have_no_text_form() {
        assert_eq!(
            convert::<Vec<u8>, String>(vec![1, 2], None)
                .unwrap_err()
                .reason(),
            FailureReason::UnsupportedConversion
        );
        assert_eq!(
            convert::<String, Vec<u8>>("AQI=".into(), None)
                .unwrap_err()
                .reason(),
            FailureReason::UnsupportedConversion
        );
    }
}
