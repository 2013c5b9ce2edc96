//! Dynamic value carrier
//!
//! Every conversion travels through the dispatcher as a [`Value`]. The
//! [`Convertible`] trait connects the static source and target types of a
//! call to their descriptors and to the matching `Value` variant.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

use crate::types::{ClassType, EnumValue, Kind, Object, Ref, TypeDescriptor, TypeHandle};

/// Dynamic value of any supported kind.
#[derive(Debug, Clone)]
pub enum Value {
    // ========== Value kinds ==========
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Duration(TimeDelta),
    Guid(Uuid),
    /// Member of a user enumeration
    Enum(EnumValue),

    // ========== Reference kinds ==========
    Str(String),
    Url(Url),
    Bytes(Vec<u8>),
    Type(TypeHandle),
    /// Instance of a user class
    Object(Arc<dyn Object>),

    /// An optional with no value
    Absent,
}

impl Value {
    /// Converter table tag of this value; `None` for objects and `Absent`.
    pub fn kind(&self) -> Option<Kind> {
        let kind = match self {
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Decimal(_) => Kind::Decimal,
            Value::Char(_) => Kind::Char,
            Value::DateTime(_) => Kind::DateTime,
            Value::DateTimeOffset(_) => Kind::DateTimeOffset,
            Value::Duration(_) => Kind::Duration,
            Value::Guid(_) => Kind::Guid,
            Value::Enum(_) => Kind::Enum,
            Value::Str(_) => Kind::Str,
            Value::Url(_) => Kind::Url,
            Value::Bytes(_) => Kind::Bytes,
            Value::Type(_) => Kind::Type,
            Value::Object(_) | Value::Absent => return None,
        };
        Some(kind)
    }

    /// Qualified name of the runtime type of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Enum(member) => member.info().name(),
            Value::Object(object) => object.runtime_class().name(),
            Value::Absent => "none",
            other => other.kind().map_or("none", Kind::qualified_name),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Check if this value is the empty string
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Value::Str(text) if text.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

// ========== PartialEq implementation ==========

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::DateTimeOffset(a), Value::DateTimeOffset(b)) => {
                a == b && a.offset() == b.offset()
            }
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Guid(a), Value::Guid(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Url(a), Value::Url(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => a == b,
            // Objects are compared by reference
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Absent, Value::Absent) => true,
            _ => false,
        }
    }
}

// ========== Convertible ==========

/// A static type usable as the source or target of a conversion.
///
/// Implemented for every primitive host type, `Option<T>`, [`Ref<C>`] and
/// (through [`enumeration!`](crate::enumeration)) user enumerations.
pub trait Convertible: Sized {
    fn descriptor() -> TypeDescriptor;
    fn into_value(self) -> Value;
    /// Recover the typed value, `None` if `value` has another shape.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! primitive_convertible {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Convertible for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::primitive(Kind::$kind)
                }

                fn into_value(self) -> Value {
                    Value::$kind(self)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$kind(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

primitive_convertible! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    char => Char,
    String => Str,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    TimeDelta => Duration,
    Uuid => Guid,
    Url => Url,
    Vec<u8> => Bytes,
    TypeHandle => Type,
}

impl<T: Convertible> Convertible for Option<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor().optional()
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Absent,
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Absent => Some(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<C: ClassType> Convertible for Ref<C> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::class(C::class_info())
    }

    fn into_value(self) -> Value {
        Value::Object(self.into_object())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(object) => Ref::cast(object),
            _ => None,
        }
    }
}
