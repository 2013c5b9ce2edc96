//! Numeric casts
//!
//! Every numeric pair follows Rust `as` semantics: integer narrowing keeps
//! the low bits, float to integer truncates toward zero and saturates (NaN
//! becomes 0), decimal to integer truncates, and float to decimal saturates
//! at the decimal range. Booleans, characters and enumeration members take
//! part as the integers 0/1, their code point and their ordinal.

// Sign-losing casts are the documented policy for every numeric pair.
#![allow(clippy::cast_sign_loss)]

use num_traits::AsPrimitive;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::dispatch::ConversionRequest;
use crate::error::{ConversionFailure, Outcome};
use crate::types::{BaseType, EnumValue, Kind};
use crate::value::Value;

/// A numeric view of a source value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    fn of(value: &Value) -> Option<Number> {
        let number = match *value {
            Value::Bool(v) => Number::Int(i128::from(v)),
            Value::I8(v) => Number::Int(v.into()),
            Value::I16(v) => Number::Int(v.into()),
            Value::I32(v) => Number::Int(v.into()),
            Value::I64(v) => Number::Int(v.into()),
            Value::U8(v) => Number::Int(v.into()),
            Value::U16(v) => Number::Int(v.into()),
            Value::U32(v) => Number::Int(v.into()),
            Value::U64(v) => Number::Int(v.into()),
            Value::F32(v) => Number::Float(v.into()),
            Value::F64(v) => Number::Float(v),
            Value::Decimal(v) => Number::Decimal(v),
            Value::Char(c) => Number::Int(u32::from(c).into()),
            Value::Enum(member) => Number::Int(member.ordinal().into()),
            _ => return None,
        };
        Some(number)
    }

    fn to_int<T>(self) -> T
    where
        T: Copy + 'static,
        i128: AsPrimitive<T>,
        f64: AsPrimitive<T>,
    {
        match self {
            Number::Int(v) => v.as_(),
            Number::Float(v) => v.as_(),
            Number::Decimal(v) => truncate(v).as_(),
        }
    }

    fn to_float<T>(self) -> T
    where
        T: Copy + 'static,
        i128: AsPrimitive<T>,
        f64: AsPrimitive<T>,
    {
        match self {
            Number::Int(v) => v.as_(),
            Number::Float(v) => v.as_(),
            Number::Decimal(v) => v.to_f64().unwrap_or_default().as_(),
        }
    }

    fn to_decimal(self) -> Decimal {
        match self {
            Number::Int(v) => Decimal::from_i128(v).unwrap_or(if v < 0 {
                Decimal::MIN
            } else {
                Decimal::MAX
            }),
            Number::Float(v) => float_to_decimal(v),
            Number::Decimal(v) => v,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
            Number::Decimal(v) => v.is_zero(),
        }
    }
}

fn truncate(value: Decimal) -> i128 {
    value.trunc().to_i128().unwrap_or_default()
}

pub(super) fn float_to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

fn number_of(value: &Value, request: &ConversionRequest<'_>) -> Outcome<Number> {
    Number::of(value).ok_or_else(|| request.unsupported())
}

pub(super) fn to_number(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let number = number_of(&value, request)?;
    let converted = match request.target_kind() {
        Some(Kind::I8) => Value::I8(number.to_int()),
        Some(Kind::I16) => Value::I16(number.to_int()),
        Some(Kind::I32) => Value::I32(number.to_int()),
        Some(Kind::I64) => Value::I64(number.to_int()),
        Some(Kind::U8) => Value::U8(number.to_int()),
        Some(Kind::U16) => Value::U16(number.to_int()),
        Some(Kind::U32) => Value::U32(number.to_int()),
        Some(Kind::U64) => Value::U64(number.to_int()),
        Some(Kind::F32) => Value::F32(number.to_float()),
        Some(Kind::F64) => Value::F64(number.to_float()),
        Some(Kind::Decimal) => Value::Decimal(number.to_decimal()),
        _ => return Err(request.unsupported()),
    };
    Ok(converted)
}

/// Nonzero is true.
pub(super) fn to_bool(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let number = number_of(&value, request)?;
    Ok(Value::Bool(!number.is_zero()))
}

pub(super) fn to_char(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let code: u32 = number_of(&value, request)?.to_int();
    char::from_u32(code)
        .map(Value::Char)
        .ok_or_else(|| ConversionFailure::out_of_range(format!("{code:#x} is not a character")))
}

pub(super) fn to_enum(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let BaseType::Enumeration(info) = request.target.base() else {
        return Err(request.unsupported());
    };
    let ordinal: i64 = number_of(&value, request)?.to_int();
    EnumValue::new(info, ordinal)
        .map(Value::Enum)
        .ok_or_else(|| {
            ConversionFailure::out_of_range(format!(
                "{ordinal} is not a declared member of {}",
                info.name()
            ))
        })
}
