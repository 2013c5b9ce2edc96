//! Calendar and timezone-aware timestamps.
//!
//! Calendar timestamps (`NaiveDateTime`) carry no offset and are taken as
//! UTC unless the context asks for local time. Text parsing tries RFC 3339,
//! then the context's format, then ISO 8601 variants, then RFC 2822, then the
//! format provider's standard patterns.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::context::DateStyles;
use crate::culture::{DateTimeFormat, FormatProvider};
use crate::dispatch::ConversionRequest;
use crate::error::{ConversionFailure, Outcome};
use crate::types::utc_offset;
use crate::value::Value;

const NAIVE_DEFAULT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const OFFSET_DEFAULT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

const ISO_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%SZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

/// Strftime pattern of a culture-dependent standard specifier.
fn standard_pattern(specifier: char, dtf: &DateTimeFormat) -> Option<String> {
    let pattern = match specifier {
        'd' => dtf.short_date.to_owned(),
        'D' => dtf.long_date.to_owned(),
        'f' => format!("{} {}", dtf.long_date, dtf.short_time),
        'F' => dtf.full_date_time(),
        'g' => format!("{} {}", dtf.short_date, dtf.short_time),
        'G' => format!("{} {}", dtf.short_date, dtf.long_time),
        't' => dtf.short_time.to_owned(),
        'T' => dtf.long_time.to_owned(),
        _ => return None,
    };
    Some(pattern)
}

fn single_char(format: &str) -> Option<char> {
    let mut chars = format.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Render `value`; `None` when the format is not understood.
fn render(
    value: DateTime<FixedOffset>,
    with_offset: bool,
    format: Option<&str>,
    provider: &dyn FormatProvider,
) -> Option<String> {
    let dtf = provider.date_time_format();
    let mut out = String::new();
    let written = match format {
        None if with_offset => write!(out, "{}", value.format(OFFSET_DEFAULT)),
        None => write!(out, "{}", value.format(NAIVE_DEFAULT)),
        Some(format) => match single_char(format) {
            Some('o' | 'O') => {
                let ticks = value.nanosecond() % 1_000_000_000 / 100;
                write!(out, "{}.{ticks:07}", value.format("%Y-%m-%dT%H:%M:%S")).and_then(|()| {
                    if with_offset {
                        write!(out, "{}", value.format("%:z"))
                    } else {
                        Ok(())
                    }
                })
            }
            Some('s') => write!(out, "{}", value.format("%Y-%m-%dT%H:%M:%S")),
            Some('u') => write!(out, "{}", value.naive_utc().format("%Y-%m-%d %H:%M:%SZ")),
            Some('r' | 'R') => write!(
                out,
                "{}",
                value.naive_utc().format("%a, %d %b %Y %H:%M:%S GMT")
            ),
            Some(specifier) => {
                let pattern = standard_pattern(specifier, dtf)?;
                write!(out, "{}", value.format_localized(&pattern, dtf.locale))
            }
            None => write!(out, "{}", value.format_localized(format, dtf.locale)),
        },
    };
    written.ok().map(|()| out)
}

fn format_with(
    value: DateTime<FixedOffset>,
    with_offset: bool,
    request: &ConversionRequest<'_>,
) -> Outcome<String> {
    let context = request.context;
    render(value, with_offset, context.format(), context.format_provider())
        .ok_or_else(|| request.invalid_format(context.format().unwrap_or_default()))
}

pub(super) fn format_naive(
    value: NaiveDateTime,
    request: &ConversionRequest<'_>,
) -> Outcome<String> {
    format_with(value.and_utc().fixed_offset(), false, request)
}

pub(super) fn format_offset(
    value: DateTime<FixedOffset>,
    request: &ConversionRequest<'_>,
) -> Outcome<String> {
    format_with(value, true, request)
}

// ========== Parsing ==========

#[derive(Debug, Clone, Copy, PartialEq)]
enum Parsed {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

fn parse_with(text: &str, pattern: &str) -> Option<Parsed> {
    if let Ok(value) = DateTime::parse_from_str(text, pattern) {
        return Some(Parsed::Offset(value));
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(text, pattern) {
        return Some(Parsed::Naive(value));
    }
    NaiveDate::parse_from_str(text, pattern)
        .ok()
        .map(|date| Parsed::Naive(date.and_time(NaiveTime::MIN)))
}

fn culture_patterns(dtf: &DateTimeFormat) -> [String; 5] {
    [
        format!("{} {}", dtf.short_date, dtf.long_time),
        format!("{} {}", dtf.short_date, dtf.short_time),
        dtf.short_date.to_owned(),
        dtf.full_date_time(),
        dtf.long_date.to_owned(),
    ]
}

fn parse(text: &str, request: &ConversionRequest<'_>) -> Outcome<Parsed> {
    let context = request.context;
    let text = if context.date_styles().contains(DateStyles::ALLOW_WHITE_SPACES) {
        text.trim()
    } else {
        text
    };
    let dtf = context.format_provider().date_time_format();
    let custom = context.format().and_then(|format| match single_char(format) {
        Some(specifier) => standard_pattern(specifier, dtf),
        None => Some(format.to_owned()),
    });

    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(Parsed::Offset)
        .or_else(|| custom.as_deref().and_then(|pattern| parse_with(text, pattern)))
        .or_else(|| ISO_PATTERNS.iter().find_map(|pattern| parse_with(text, pattern)))
        .or_else(|| DateTime::parse_from_rfc2822(text).ok().map(Parsed::Offset))
        .or_else(|| {
            culture_patterns(dtf)
                .iter()
                .find_map(|pattern| parse_with(text, pattern))
        })
        .ok_or_else(|| request.parse_failure(text))
}

/// Explicit offsets are normalised to UTC.
pub(super) fn parse_naive(text: &str, request: &ConversionRequest<'_>) -> Outcome<NaiveDateTime> {
    Ok(match parse(text, request)? {
        Parsed::Naive(value) => value,
        Parsed::Offset(value) => value.naive_utc(),
    })
}

pub(super) fn parse_offset(
    text: &str,
    request: &ConversionRequest<'_>,
) -> Outcome<DateTime<FixedOffset>> {
    let styles = request.context.date_styles();
    let value = match parse(text, request)? {
        Parsed::Offset(value) => value,
        Parsed::Naive(value) => attach(value, styles)?,
    };
    Ok(adjust(value, styles))
}

// ========== Offset attachment ==========

fn assumes_local(styles: DateStyles) -> bool {
    styles.contains(DateStyles::ASSUME_LOCAL) && !styles.contains(DateStyles::ASSUME_UNIVERSAL)
}

fn attach(value: NaiveDateTime, styles: DateStyles) -> Outcome<DateTime<FixedOffset>> {
    if !assumes_local(styles) {
        return Ok(value.and_utc().fixed_offset());
    }
    Local
        .from_local_datetime(&value)
        .earliest()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| {
            ConversionFailure::out_of_range(format!(
                "{value} does not exist in the local time zone"
            ))
        })
}

fn adjust(value: DateTime<FixedOffset>, styles: DateStyles) -> DateTime<FixedOffset> {
    if styles.contains(DateStyles::ADJUST_TO_UNIVERSAL) {
        value.with_timezone(&utc_offset())
    } else {
        value
    }
}

pub(super) fn attach_offset(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let Value::DateTime(value) = value else {
        return Err(request.unsupported());
    };
    let styles = request.context.date_styles();
    Ok(Value::DateTimeOffset(adjust(attach(value, styles)?, styles)))
}

pub(super) fn strip_offset(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let Value::DateTimeOffset(value) = value else {
        return Err(request.unsupported());
    };
    let naive = if assumes_local(request.context.date_styles()) {
        value.with_timezone(&Local).naive_local()
    } else {
        value.naive_utc()
    };
    Ok(Value::DateTime(naive))
}
