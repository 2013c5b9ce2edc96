//! Duration intervals.
//!
//! | Format          | Shape                        |
//! |-----------------|------------------------------|
//! | `c`, `t`, `T`   | `[-][d.]hh:mm:ss[.fffffff]`  |
//! | `g`             | `[-][d:]h:mm:ss[.FFFFFFF]`   |
//! | `G`             | `[-]d:hh:mm:ss.fffffff`      |
//!
//! Fractions have seven digits (100 ns ticks) unless the value needs
//! nanosecond precision, in which case nine digits are written.

use std::str::FromStr;

use chrono::TimeDelta;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dispatch::ConversionRequest;
use crate::error::{ConversionFailure, Outcome};

const NANOS_PER_SECOND: u128 = 1_000_000_000;
const SECONDS_PER_DAY: u128 = 86_400;

static DAYS_AND_TIME: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(-)?(\d+)[.:](\d{1,2}):(\d{1,2}):(\d{1,2})(?:[.,](\d{1,9}))?$").ok()
});

static TIME: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(-)?(\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:[.,](\d{1,9}))?)?$").ok()
});

static DAYS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(-)?(\d+)$").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Constant,
    GeneralShort,
    GeneralLong,
}

/// A duration split into sign, days, clock fields and nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    negative: bool,
    days: u128,
    hours: u128,
    minutes: u128,
    seconds: u128,
    nanos: u128,
}

impl Parts {
    fn of(value: TimeDelta) -> Parts {
        let total =
            i128::from(value.num_seconds()) * 1_000_000_000 + i128::from(value.subsec_nanos());
        let magnitude = total.unsigned_abs();
        let seconds = magnitude / NANOS_PER_SECOND;
        Parts {
            negative: total < 0,
            days: seconds / SECONDS_PER_DAY,
            hours: seconds % SECONDS_PER_DAY / 3600,
            minutes: seconds % 3600 / 60,
            seconds: seconds % 60,
            nanos: magnitude % NANOS_PER_SECOND,
        }
    }

    /// Fraction digits: ticks when exact, nanoseconds otherwise.
    fn fraction(&self) -> String {
        if self.nanos % 100 == 0 {
            format!("{:07}", self.nanos / 100)
        } else {
            format!("{:09}", self.nanos)
        }
    }
}

fn style(format: Option<&str>) -> Option<Style> {
    match format {
        None | Some("c" | "t" | "T") => Some(Style::Constant),
        Some("g") => Some(Style::GeneralShort),
        Some("G") => Some(Style::GeneralLong),
        Some(_) => None,
    }
}

pub(super) fn format(value: TimeDelta, request: &ConversionRequest<'_>) -> Outcome<String> {
    let format = request.context.format();
    let style = style(format).ok_or_else(|| request.invalid_format(format.unwrap_or_default()))?;
    let separator = request
        .context
        .format_provider()
        .number_format()
        .decimal_separator;
    Ok(render(Parts::of(value), style, separator))
}

fn render(parts: Parts, style: Style, separator: char) -> String {
    let sign = if parts.negative { "-" } else { "" };
    let clock = format!("{:02}:{:02}", parts.minutes, parts.seconds);
    let mut out = match style {
        Style::Constant if parts.days > 0 => {
            format!("{sign}{}.{:02}:{clock}", parts.days, parts.hours)
        }
        Style::Constant => format!("{sign}{:02}:{clock}", parts.hours),
        Style::GeneralShort if parts.days > 0 => {
            format!("{sign}{}:{}:{clock}", parts.days, parts.hours)
        }
        Style::GeneralShort => format!("{sign}{}:{clock}", parts.hours),
        Style::GeneralLong => format!("{sign}{}:{:02}:{clock}", parts.days, parts.hours),
    };
    match style {
        Style::Constant if parts.nanos > 0 => {
            out.push('.');
            out.push_str(&parts.fraction());
        }
        Style::GeneralShort if parts.nanos > 0 => {
            out.push(separator);
            out.push_str(parts.fraction().trim_end_matches('0'));
        }
        Style::GeneralLong => {
            out.push(separator);
            out.push_str(&parts.fraction());
        }
        _ => {}
    }
    out
}

/// Capture group indices of each field; `None` when a shape has no such field.
#[derive(Debug, Clone, Copy)]
struct Groups {
    days: Option<usize>,
    hours: Option<usize>,
    minutes: Option<usize>,
    seconds: Option<usize>,
    fraction: Option<usize>,
}

const DAYS_AND_TIME_GROUPS: Groups = Groups {
    days: Some(2),
    hours: Some(3),
    minutes: Some(4),
    seconds: Some(5),
    fraction: Some(6),
};

const TIME_GROUPS: Groups = Groups {
    days: None,
    hours: Some(2),
    minutes: Some(3),
    seconds: Some(4),
    fraction: Some(5),
};

const DAYS_GROUPS: Groups = Groups {
    days: Some(2),
    hours: None,
    minutes: None,
    seconds: None,
    fraction: None,
};

/// A captured digit run; zero when the group is absent or did not take part.
fn field(captures: &Captures<'_>, index: Option<usize>, text: &str) -> Outcome<u128> {
    match index.and_then(|i| captures.get(i)) {
        Some(digits) => u128::from_str(digits.as_str()).map_err(|_| out_of_range(text)),
        None => Ok(0),
    }
}

/// Right-pad fraction digits to nanoseconds.
fn fraction_nanos(captures: &Captures<'_>, index: Option<usize>) -> u128 {
    index.and_then(|i| captures.get(i)).map_or(0, |m| {
        let digits = m.as_str();
        let scale = 10u128.pow(9 - u32::try_from(digits.len()).unwrap_or(9));
        digits.parse::<u128>().unwrap_or(0) * scale
    })
}

fn out_of_range(text: &str) -> ConversionFailure {
    ConversionFailure::out_of_range(format!("{text:?} exceeds the duration range"))
}

fn captures<'t>(pattern: &Lazy<Option<Regex>>, text: &'t str) -> Option<Captures<'t>> {
    pattern.as_ref().and_then(|regex| regex.captures(text))
}

/// Match `text` against each accepted shape; `None` when none matches.
fn parts_of(text: &str) -> Option<Outcome<Parts>> {
    let (c, groups) = [
        (&DAYS_AND_TIME, DAYS_AND_TIME_GROUPS),
        (&TIME, TIME_GROUPS),
        (&DAYS, DAYS_GROUPS),
    ]
    .into_iter()
    .find_map(|(pattern, groups)| captures(pattern, text).map(|c| (c, groups)))?;
    Some(parts_from(&c, groups, text))
}

fn parts_from(c: &Captures<'_>, groups: Groups, text: &str) -> Outcome<Parts> {
    Ok(Parts {
        negative: c.get(1).is_some(),
        days: field(c, groups.days, text)?,
        hours: field(c, groups.hours, text)?,
        minutes: field(c, groups.minutes, text)?,
        seconds: field(c, groups.seconds, text)?,
        nanos: fraction_nanos(c, groups.fraction),
    })
}

/// Whole seconds in `parts`, or `None` past `u128`.
fn total_seconds(parts: &Parts) -> Option<u128> {
    parts
        .days
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(parts.hours * 3600 + parts.minutes * 60 + parts.seconds)
}

pub(super) fn parse(text: &str, request: &ConversionRequest<'_>) -> Outcome<TimeDelta> {
    let trimmed = text.trim();
    let parts = parts_of(trimmed).ok_or_else(|| request.parse_failure(text))??;
    if parts.hours > 23 || parts.minutes > 59 || parts.seconds > 59 {
        return Err(ConversionFailure::out_of_range(format!(
            "{trimmed:?} has a time component out of range"
        )));
    }
    let magnitude = total_seconds(&parts)
        .and_then(|seconds| i64::try_from(seconds).ok())
        .and_then(|seconds| TimeDelta::new(seconds, u32::try_from(parts.nanos).ok()?))
        .ok_or_else(|| out_of_range(trimmed))?;
    Ok(if parts.negative { -magnitude } else { magnitude })
}
