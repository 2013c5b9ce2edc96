//! Typed value conversion engine
//!
//! Converts a value of one static type into another: numbers, booleans,
//! characters, text, timestamps, durations, identifiers, locators, byte
//! sequences, type handles, user enumerations and user classes. It includes:
//!
//! - `TypeConverter`, the engine and its converter table
//! - `ConversionContext` for per-call format strings, cultures and date styles
//! - `Convertible`, connecting host types to the dynamic `Value`
//! - `ConversionError` and `FailureReason` for failure handling
//!
//! # Example
//! ```
//! use value_converter::{convert, try_convert, ConversionContext, FailureReason};
//!
//! assert_eq!(convert::<bool, i32>(true, None).unwrap(), 1);
//! assert_eq!(convert::<Option<String>, Option<i32>>(None, None).unwrap(), None);
//!
//! let context = ConversionContext::new().with_format("X");
//! assert_eq!(convert::<i32, String>(255, Some(&context)).unwrap(), "FF");
//!
//! let failure = convert::<i32, chrono::NaiveDateTime>(42, None).unwrap_err();
//! assert_eq!(failure.reason(), FailureReason::UnsupportedConversion);
//! assert_eq!(try_convert::<String, u8>("300".into(), None), None);
//! ```

// Library code reports failures as values and through tracing, never stderr.
#![deny(clippy::print_stderr)]

pub mod context;
mod converters;
pub mod culture;
pub mod dispatch;
pub mod error;
pub mod types;
pub mod value;

pub use context::{ContextConfig, ContextConfigError, ConversionContext, DateStyles};
pub use culture::{Culture, DateTimeFormat, FormatProvider, NumberFormat};
pub use dispatch::{TypeConverter, TypeConverterBuilder};
pub use error::{ConversionError, ConversionFailure, FailureReason, Outcome};
pub use types::{
    BaseType, ClassInfo, ClassKind, ClassType, EnumInfo, EnumValue, Enumeration, Kind, Object, Ref,
    TypeDescriptor, TypeHandle, TypeRegistry,
};
pub use value::{Convertible, Value};

/// Convert `source` to `T` with the global engine.
pub fn convert<S, T>(source: S, context: Option<&ConversionContext>) -> Result<T, ConversionError>
where
    S: Convertible,
    T: Convertible,
{
    TypeConverter::global().convert(source, context)
}

/// Convert `source` to `T` with the global engine, or `None` on failure.
pub fn try_convert<S, T>(source: S, context: Option<&ConversionContext>) -> Option<T>
where
    S: Convertible,
    T: Convertible,
{
    TypeConverter::global().try_convert(source, context)
}

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use value_converter::prelude::*;
///
/// let context = ConversionContext::new().with_date_styles(DateStyles::ASSUME_UNIVERSAL);
/// assert_eq!(convert::<char, u32>('*', Some(&context)).unwrap(), 42);
/// ```
pub mod prelude {
    pub use super::context::{ConversionContext, DateStyles};
    pub use super::dispatch::TypeConverter;
    pub use super::error::{ConversionError, FailureReason};
    pub use super::types::{ClassType, Enumeration, Ref, TypeHandle};
    pub use super::value::Convertible;
    pub use super::{convert, enumeration, try_convert};
}
