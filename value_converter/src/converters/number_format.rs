//! Culture-aware number formatting and parsing.
//!
//! Standard specifiers are a letter with an optional precision: `G[n]`, `R`,
//! `F[n]`, `N[n]`, `E[n]`, and for integers only `D[n]` and `X[n]`.

// Hex formatting reinterprets the two's-complement bits of negative values.
#![allow(clippy::cast_sign_loss)]

use std::fmt;
use std::mem;
use std::str::FromStr;

use num_traits::AsPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::culture::NumberFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Specifier {
    General(Option<usize>),
    RoundTrip,
    Fixed(usize),
    Number(usize),
    Exponent { upper: bool, digits: usize },
    Decimal(Option<usize>),
    Hex { upper: bool, digits: Option<usize> },
}

fn specifier(format: Option<&str>) -> Option<Specifier> {
    let Some(format) = format else {
        return Some(Specifier::General(None));
    };
    let mut chars = format.chars();
    let letter = chars.next()?;
    let rest = chars.as_str();
    let precision = if rest.is_empty() {
        None
    } else if rest.len() <= 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
        rest.parse().ok()
    } else {
        return None;
    };
    let spec = match letter {
        'G' | 'g' => Specifier::General(precision),
        'R' | 'r' => Specifier::RoundTrip,
        'F' | 'f' => Specifier::Fixed(precision.unwrap_or(2)),
        'N' | 'n' => Specifier::Number(precision.unwrap_or(2)),
        'E' | 'e' => Specifier::Exponent {
            upper: letter == 'E',
            digits: precision.unwrap_or(6),
        },
        'D' | 'd' => Specifier::Decimal(precision),
        'X' | 'x' => Specifier::Hex {
            upper: letter == 'X',
            digits: precision,
        },
        _ => return None,
    };
    Some(spec)
}

/// Swap the invariant decimal point and minus sign for the culture's.
fn localize(text: &str, nf: &NumberFormat) -> String {
    text.chars()
        .map(|c| match c {
            '.' => nf.decimal_separator,
            '-' => nf.negative_sign,
            c => c,
        })
        .collect()
}

fn group(digits: &str, nf: &NumberFormat) -> String {
    if nf.group_size == 0 {
        return digits.to_owned();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / nf.group_size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % nf.group_size == 0 {
            out.push(nf.group_separator);
        }
        out.push(c);
    }
    out
}

/// Assemble sign, integer digits and fraction digits.
fn compose(
    negative: bool,
    integer: &str,
    fraction: &str,
    grouped: bool,
    nf: &NumberFormat,
) -> String {
    let mut out = String::new();
    if negative {
        out.push(nf.negative_sign);
    }
    if grouped {
        out.push_str(&group(integer, nf));
    } else {
        out.push_str(integer);
    }
    if !fraction.is_empty() {
        out.push(nf.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Split a plain `ddd.fff` magnitude into its parts.
fn split_fixed(text: &str) -> (&str, &str) {
    text.split_once('.').unwrap_or((text, ""))
}

fn exponent(value: f64, upper: bool, digits: usize, nf: &NumberFormat) -> String {
    let text = format!("{value:.digits$e}");
    let (mantissa, exp) = text.split_once('e').unwrap_or((&text, "0"));
    let exp: i32 = exp.parse().unwrap_or_default();
    let mut out = localize(mantissa, nf);
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exp < 0 { nf.negative_sign } else { '+' });
    out.push_str(&format!("{:03}", exp.unsigned_abs()));
    out
}

/// Format an integer of `bits` width; `None` for an unknown specifier.
pub(super) fn format_integer(
    value: i128,
    bits: u32,
    format: Option<&str>,
    nf: &NumberFormat,
) -> Option<String> {
    let negative = value < 0;
    let magnitude = value.unsigned_abs().to_string();
    let text = match specifier(format)? {
        Specifier::General(_) | Specifier::RoundTrip => {
            compose(negative, &magnitude, "", false, nf)
        }
        Specifier::Decimal(digits) => {
            let width = digits.unwrap_or(0);
            compose(negative, &format!("{magnitude:0>width$}"), "", false, nf)
        }
        Specifier::Hex { upper, digits } => {
            let mask = if bits >= 128 {
                u128::MAX
            } else {
                (1u128 << bits) - 1
            };
            let bits = (value as u128) & mask;
            let width = digits.unwrap_or(0);
            if upper {
                format!("{bits:0width$X}")
            } else {
                format!("{bits:0width$x}")
            }
        }
        Specifier::Fixed(decimals) => {
            compose(negative, &magnitude, &"0".repeat(decimals), false, nf)
        }
        Specifier::Number(decimals) => {
            compose(negative, &magnitude, &"0".repeat(decimals), true, nf)
        }
        Specifier::Exponent { upper, digits } => exponent(value.as_(), upper, digits, nf),
    };
    Some(text)
}

/// Format a float; `None` for an unknown or integer-only specifier.
pub(super) fn format_float<T>(value: T, format: Option<&str>, nf: &NumberFormat) -> Option<String>
where
    T: fmt::Display + Into<f64> + Copy,
{
    let wide: f64 = value.into();
    let specifier = specifier(format)?;
    if matches!(specifier, Specifier::Decimal(_) | Specifier::Hex { .. }) {
        return None;
    }
    // Infinities and NaN have no digits to lay out.
    if !wide.is_finite() {
        return Some(localize(&wide.to_string(), nf));
    }
    let text = match specifier {
        Specifier::General(None | Some(0)) | Specifier::RoundTrip => {
            localize(&value.to_string(), nf)
        }
        Specifier::General(Some(digits)) => {
            let precision = digits - 1;
            let rounded: f64 = format!("{wide:.precision$e}").parse().unwrap_or(wide);
            localize(&rounded.to_string(), nf)
        }
        Specifier::Fixed(decimals) => localize(&format!("{wide:.decimals$}"), nf),
        Specifier::Number(decimals) => {
            let text = format!("{:.decimals$}", wide.abs());
            let (integer, fraction) = split_fixed(&text);
            compose(wide < 0.0, integer, fraction, true, nf)
        }
        Specifier::Exponent { upper, digits } => exponent(wide, upper, digits, nf),
        Specifier::Decimal(_) | Specifier::Hex { .. } => return None,
    };
    Some(text)
}

/// Round half away from zero; `Display` precision alone truncates.
fn round(value: Decimal, decimals: usize) -> Decimal {
    let decimals = u32::try_from(decimals).unwrap_or(u32::MAX);
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a decimal; `None` for an unknown or integer-only specifier.
pub(super) fn format_decimal(
    value: Decimal,
    format: Option<&str>,
    nf: &NumberFormat,
) -> Option<String> {
    let text = match specifier(format)? {
        Specifier::General(_) | Specifier::RoundTrip => localize(&value.to_string(), nf),
        Specifier::Fixed(decimals) => {
            let rounded = round(value, decimals);
            localize(&format!("{rounded:.decimals$}"), nf)
        }
        Specifier::Number(decimals) => {
            let text = format!("{:.decimals$}", round(value, decimals).abs());
            let (integer, fraction) = split_fixed(&text);
            compose(value.is_sign_negative() && !value.is_zero(), integer, fraction, true, nf)
        }
        Specifier::Exponent { upper, digits } => {
            exponent(value.to_f64().unwrap_or_default(), upper, digits, nf)
        }
        Specifier::Decimal(_) | Specifier::Hex { .. } => return None,
    };
    Some(text)
}

/// Rewrite culture-specific text into the form Rust's parsers accept.
///
/// Group separators are only dropped when `grouping` is allowed.
fn normalize(text: &str, nf: &NumberFormat, grouping: bool) -> String {
    text.trim()
        .chars()
        .filter(|c| !(grouping && *c == nf.group_separator))
        .map(|c| {
            if c == nf.decimal_separator {
                '.'
            } else if c == nf.negative_sign {
                '-'
            } else {
                c
            }
        })
        .collect()
}

pub(super) fn parse_integer<T>(text: &str, format: Option<&str>, nf: &NumberFormat) -> Option<T>
where
    T: FromStr + Copy + 'static,
    u128: AsPrimitive<T>,
{
    if let Some(Specifier::Hex { .. }) = format.and_then(|f| specifier(Some(f))) {
        // Hex digits are the target's bits, so `FF` reads back as -1 for i8.
        let bits = u32::try_from(mem::size_of::<T>() * 8).unwrap_or(u128::BITS);
        let value = u128::from_str_radix(text.trim(), 16).ok()?;
        if bits < u128::BITS && value >> bits != 0 {
            return None;
        }
        return Some(value.as_());
    }
    normalize(text, nf, false).parse().ok()
}

pub(super) fn parse_float<T: FromStr>(text: &str, nf: &NumberFormat) -> Option<T> {
    normalize(text, nf, true).parse().ok()
}

pub(super) fn parse_decimal(text: &str, nf: &NumberFormat) -> Option<Decimal> {
    let text = normalize(text, nf, true);
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::{Culture, FormatProvider};

    fn invariant() -> NumberFormat {
        *Culture::invariant().number_format()
    }

    fn german() -> NumberFormat {
        *Culture::from_name("de-DE").unwrap().number_format()
    }

    #[test]
    fn test_integer_specifiers() {
        let nf = invariant();
        assert_eq!(format_integer(-42, 32, None, &nf).as_deref(), Some("-42"));
        assert_eq!(
            format_integer(42, 32, Some("D5"), &nf).as_deref(),
            Some("00042")
        );
        assert_eq!(
            format_integer(-42, 32, Some("D5"), &nf).as_deref(),
            Some("-00042")
        );
        assert_eq!(
            format_integer(255, 32, Some("x"), &nf).as_deref(),
            Some("ff")
        );
        assert_eq!(format_integer(-1, 8, Some("X"), &nf).as_deref(), Some("FF"));
        assert_eq!(
            format_integer(10, 16, Some("X4"), &nf).as_deref(),
            Some("000A")
        );
        assert_eq!(
            format_integer(1_234_567, 32, Some("N0"), &nf).as_deref(),
            Some("1,234,567")
        );
        assert_eq!(
            format_integer(7, 32, Some("F"), &nf).as_deref(),
            Some("7.00")
        );
        assert_eq!(
            format_integer(1_234_567, 64, Some("E"), &nf).as_deref(),
            Some("1.234567E+006")
        );
    }

    #[test]
    fn test_unknown_specifier() {
        let nf = invariant();
        assert_eq!(format_integer(1, 32, Some("Q"), &nf), None);
        assert_eq!(format_integer(1, 32, Some("D123"), &nf), None);
        assert_eq!(format_float(1.5f64, Some("X"), &nf), None);
        assert_eq!(format_decimal(Decimal::ONE, Some("D"), &nf), None);
    }

    #[test]
    fn test_float_specifiers() {
        let nf = invariant();
        assert_eq!(format_float(0.1f32, None, &nf).as_deref(), Some("0.1"));
        assert_eq!(
            format_float(2.5f64, Some("F3"), &nf).as_deref(),
            Some("2.500")
        );
        assert_eq!(
            format_float(3.14159f64, Some("G3"), &nf).as_deref(),
            Some("3.14")
        );
        assert_eq!(
            format_float(-1234.5f64, Some("N1"), &nf).as_deref(),
            Some("-1,234.5")
        );
        assert_eq!(
            format_float(0.0001220703125f64, Some("e2"), &nf).as_deref(),
            Some("1.22e-004")
        );
    }

    #[test]
    fn test_non_finite_floats() {
        let nf = invariant();
        for format in [None, Some("E"), Some("e3"), Some("F2"), Some("N"), Some("G5")] {
            assert_eq!(
                format_float(f64::INFINITY, format, &nf).as_deref(),
                Some("inf"),
                "{format:?}"
            );
            assert_eq!(
                format_float(f64::NEG_INFINITY, format, &nf).as_deref(),
                Some("-inf"),
                "{format:?}"
            );
            assert_eq!(
                format_float(f32::NAN, format, &nf).as_deref(),
                Some("NaN"),
                "{format:?}"
            );
        }
        assert_eq!(format_float(f64::NAN, Some("X"), &nf), None);
    }

    #[test]
    fn test_culture_separators() {
        let nf = german();
        assert_eq!(
            format_float(1234.5f64, Some("N2"), &nf).as_deref(),
            Some("1.234,50")
        );
        assert_eq!(format_float(-0.5f64, None, &nf).as_deref(), Some("-0,5"));
        assert_eq!(
            format_decimal(Decimal::new(123_456, 3), Some("F2"), &nf).as_deref(),
            Some("123,46")
        );
    }

    #[test]
    fn test_hex_parse_rejects_values_wider_than_target() {
        let nf = invariant();
        assert_eq!(parse_integer::<u8>("1FF", Some("X"), &nf), None);
        assert_eq!(parse_integer::<i8>("100", Some("X"), &nf), None);
        assert_eq!(parse_integer::<u32>("1FFFFFFFF", Some("X8"), &nf), None);
        assert_eq!(
            parse_integer::<u32>("FFFFFFFF", Some("X8"), &nf),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_parse_with_culture() {
        let nf = german();
        assert_eq!(parse_float::<f64>("1.234,5", &nf), Some(1234.5));
        assert_eq!(parse_decimal(" -0,25 ", &nf), Some(Decimal::new(-25, 2)));
        assert_eq!(parse_integer::<i32>("1.234", None, &nf), None);
        assert_eq!(parse_integer::<i32>("-1234", None, &nf), Some(-1234));
    }

    #[test]
    fn test_parse_invariant() {
        let nf = invariant();
        assert_eq!(parse_integer::<u8>(" 255 ", None, &nf), Some(255));
        assert_eq!(parse_integer::<u8>("256", None, &nf), None);
        assert_eq!(parse_integer::<i8>("FF", Some("X"), &nf), Some(-1));
        assert_eq!(
            parse_integer::<u64>("ffffffffffffffff", Some("x"), &nf),
            Some(u64::MAX)
        );
        assert_eq!(parse_float::<f64>("1,000.25", &nf), Some(1000.25));
        assert_eq!(parse_decimal("1.5e3", &nf), Some(Decimal::new(1500, 0)));
    }
}
