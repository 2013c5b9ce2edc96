//! Primitive kind tags.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::value::Value;

/// Small integer tag for each primitive kind.
///
/// The converter table is indexed by `(source.index(), target.index())`.
/// `Enum` stands for every enumeration type; the concrete enumeration is
/// carried by the [`BaseType`](super::BaseType) of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Char,
    Str,
    /// Calendar timestamp without offset
    DateTime,
    /// Timezone-aware timestamp
    DateTimeOffset,
    Duration,
    /// 128-bit unique identifier
    Guid,
    /// Absolute resource locator
    Url,
    Bytes,
    /// Runtime-type handle
    Type,
    Enum,
}

impl Kind {
    pub const COUNT: usize = 22;

    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::Bool,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Decimal,
        Kind::Char,
        Kind::Str,
        Kind::DateTime,
        Kind::DateTimeOffset,
        Kind::Duration,
        Kind::Guid,
        Kind::Url,
        Kind::Bytes,
        Kind::Type,
        Kind::Enum,
    ];

    /// Integer, floating point and decimal kinds.
    pub const NUMERIC: [Kind; 11] = [
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Decimal,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_numeric(self) -> bool {
        Kind::NUMERIC.contains(&self)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
                | Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
        )
    }

    /// Reference kinds have no meaningful default value.
    pub fn is_reference(self) -> bool {
        matches!(self, Kind::Str | Kind::Url | Kind::Bytes | Kind::Type)
    }

    /// Canonical qualified name of the host type.
    pub fn qualified_name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Decimal => "rust_decimal::Decimal",
            Kind::Char => "char",
            Kind::Str => "alloc::string::String",
            Kind::DateTime => "chrono::NaiveDateTime",
            Kind::DateTimeOffset => "chrono::DateTime<chrono::FixedOffset>",
            Kind::Duration => "chrono::TimeDelta",
            Kind::Guid => "uuid::Uuid",
            Kind::Url => "url::Url",
            Kind::Bytes => "alloc::vec::Vec<u8>",
            Kind::Type => "value_converter::TypeHandle",
            Kind::Enum => "enum",
        }
    }

    /// Inverse of [`qualified_name`](Self::qualified_name) for concrete kinds.
    pub fn from_qualified_name(name: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .filter(|kind| *kind != Kind::Enum)
            .find(|kind| kind.qualified_name() == name)
    }

    /// Zero value of a value kind; `None` for reference kinds and `Enum`.
    pub(crate) fn default_value(self) -> Option<Value> {
        let value = match self {
            Kind::Bool => Value::Bool(false),
            Kind::I8 => Value::I8(0),
            Kind::I16 => Value::I16(0),
            Kind::I32 => Value::I32(0),
            Kind::I64 => Value::I64(0),
            Kind::U8 => Value::U8(0),
            Kind::U16 => Value::U16(0),
            Kind::U32 => Value::U32(0),
            Kind::U64 => Value::U64(0),
            Kind::F32 => Value::F32(0.0),
            Kind::F64 => Value::F64(0.0),
            Kind::Decimal => Value::Decimal(Decimal::ZERO),
            Kind::Char => Value::Char('\0'),
            Kind::DateTime => Value::DateTime(NaiveDateTime::default()),
            Kind::DateTimeOffset => Value::DateTimeOffset(DateTime::from_naive_utc_and_offset(
                NaiveDateTime::default(),
                utc_offset(),
            )),
            Kind::Duration => Value::Duration(TimeDelta::zero()),
            Kind::Guid => Value::Guid(Uuid::nil()),
            Kind::Str | Kind::Url | Kind::Bytes | Kind::Type | Kind::Enum => return None,
        };
        Some(value)
    }
}

/// The `+00:00` offset.
pub(crate) fn utc_offset() -> FixedOffset {
    Utc.fix()
}
