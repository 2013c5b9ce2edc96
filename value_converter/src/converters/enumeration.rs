//! Enumeration members as text.

use super::number_format::format_integer;
use crate::dispatch::ConversionRequest;
use crate::error::{ConversionFailure, Outcome};
use crate::types::{BaseType, EnumInfo, EnumValue};
use crate::value::Value;

/// Members of different enumerations share `Kind::Enum`; only the same
/// enumeration converts.
pub(super) fn same_type(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    match (&value, request.target.base()) {
        (Value::Enum(member), BaseType::Enumeration(info)) if member.info() == info => Ok(value),
        _ => Err(request.unsupported()),
    }
}

/// `G`/`F` (default) write the member name; `D[n]` and `X[n]` write the
/// ordinal the way a 64-bit integer is written.
pub(super) fn format(member: EnumValue, request: &ConversionRequest<'_>) -> Outcome<String> {
    let format = request.context.format();
    match format {
        None | Some("G" | "g" | "F" | "f") => Ok(member.name().to_owned()),
        Some(numeric) if numeric.starts_with(['D', 'd', 'X', 'x']) => {
            let nf = request.context.format_provider().number_format();
            format_integer(member.ordinal().into(), i64::BITS, format, nf)
                .ok_or_else(|| request.invalid_format(numeric))
        }
        Some(other) => Err(request.invalid_format(other)),
    }
}

/// A numeric literal or a member name, matched case-insensitively.
pub(super) fn parse(
    text: &str,
    info: &'static EnumInfo,
    request: &ConversionRequest<'_>,
) -> Outcome<EnumValue> {
    let trimmed = text.trim();
    if let Ok(ordinal) = trimmed.parse::<i64>() {
        return EnumValue::new(info, ordinal).ok_or_else(|| {
            ConversionFailure::out_of_range(format!(
                "{ordinal} is not a declared member of {}",
                info.name()
            ))
        });
    }
    info.ordinal_of(trimmed)
        .and_then(|ordinal| EnumValue::new(info, ordinal))
        .ok_or_else(|| request.parse_failure(text))
}

#[cfg(test)]
mod tests {
    use crate::{convert, enumeration, ConversionContext, FailureReason};

    enumeration! {
        enum Suit {
            Clubs = 1,
            Diamonds = 2,
            Hearts = 3,
            Spades = 4,
        }
    }

    enumeration! {
        enum Rank {
            Ace = 1,
            King = 13,
        }
    }

    #[test]
    fn test_format_name_and_ordinal() {
        assert_eq!(
            convert::<Suit, String>(Suit::Hearts, None).unwrap(),
            "Hearts"
        );
        let numeric = ConversionContext::new().with_format("D");
        assert_eq!(
            convert::<Suit, String>(Suit::Hearts, Some(&numeric)).unwrap(),
            "3"
        );
        let unknown = ConversionContext::new().with_format("N");
        assert_eq!(
            convert::<Suit, String>(Suit::Hearts, Some(&unknown))
                .unwrap_err()
                .reason(),
            FailureReason::InvalidFormat
        );
    }

    #[test]
    fn test_parse_name_or_ordinal() {
        let parse = |text: &str| convert::<String, Suit>(text.into(), None);
        assert_eq!(parse("Spades").unwrap(), Suit::Spades);
        assert_eq!(parse(" diamonds ").unwrap(), Suit::Diamonds);
        assert_eq!(parse("1").unwrap(), Suit::Clubs);
        assert_eq!(parse("9").unwrap_err().reason(), FailureReason::OutOfRange);
        assert_eq!(
            parse("Joker").unwrap_err().reason(),
            FailureReason::ParseFailure
        );
    }

    #[test]
    fn test_identity_and_cross_enumeration() {
        assert_eq!(
            convert::<Suit, Suit>(Suit::Clubs, None).unwrap(),
            Suit::Clubs
        );
        assert_eq!(
            convert::<Suit, Rank>(Suit::Clubs, None)
                .unwrap_err()
                .reason(),
            FailureReason::UnsupportedConversion
        );
    }
}
