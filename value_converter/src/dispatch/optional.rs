//! Optional-wrapper adapter
//!
//! Lifts any converter over `Option` sources and targets. An absent source
//! becomes `None` for optional targets, the kind default for value kinds, and
//! a `MissingValue` failure for reference kinds.

use crate::error::{ConversionFailure, Outcome};
use crate::types::{BaseType, EnumValue, Kind, TypeDescriptor};
use crate::value::Value;

use super::table::ConversionRequest;
use super::TypeConverter;

pub(super) fn adapt(
    engine: &TypeConverter,
    value: Value,
    request: &ConversionRequest<'_>,
) -> Outcome<Value> {
    let inner = request.retarget(request.source.underlying(), request.target.underlying());
    // An unsupported pair fails whether or not the source has a value
    engine.resolve(&inner)?;

    match value {
        Value::Absent => absent_into(request.target),
        Value::Str(text)
            if text.is_empty()
                && request.target.is_optional()
                && inner.target_kind() != Some(Kind::Str) =>
        {
            Ok(Value::Absent)
        }
        value => engine.dispatch_underlying(value, &inner),
    }
}

/// Result of converting "no value" into `target`.
pub(super) fn absent_into(target: TypeDescriptor) -> Outcome<Value> {
    if target.is_optional() {
        return Ok(Value::Absent);
    }
    match target.base() {
        BaseType::Primitive(kind) => kind
            .default_value()
            .ok_or_else(|| ConversionFailure::missing_value(target.name())),
        BaseType::Enumeration(info) => EnumValue::new(info, 0)
            .map(Value::Enum)
            .ok_or_else(|| {
                ConversionFailure::out_of_range(format!(
                    "{} declares no member with ordinal 0",
                    info.name()
                ))
            }),
        BaseType::Class(_) => Err(ConversionFailure::missing_value(target.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureReason;

    #[test]
    fn test_absent_into_optional() {
        let target = TypeDescriptor::primitive(Kind::Url).optional();
        assert_eq!(absent_into(target), Ok(Value::Absent));
    }

    #[test]
    fn test_absent_into_value_kind() {
        assert_eq!(
            absent_into(TypeDescriptor::primitive(Kind::U16)),
            Ok(Value::U16(0))
        );
        assert_eq!(
            absent_into(TypeDescriptor::primitive(Kind::Bool)),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn test_absent_into_reference_kind() {
        for kind in [Kind::Str, Kind::Url, Kind::Bytes, Kind::Type] {
            let failure = absent_into(TypeDescriptor::primitive(kind)).unwrap_err();
            assert_eq!(failure.reason(), FailureReason::MissingValue, "{kind:?}");
        }
    }
}
