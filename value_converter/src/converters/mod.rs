//! Built-in primitive converters
//!
//! # Module Organization
//!
//! - `numeric.rs`: numeric, boolean, character and enumeration-ordinal casts
//! - `number_format.rs`: culture-aware number formatting and parsing
//! - `text.rs`: format-to-text and parse-from-text for every kind
//! - `temporal.rs`: calendar and timezone-aware timestamps
//! - `duration.rs`: duration intervals
//! - `identifier.rs`: 128-bit identifiers and their byte form
//! - `enumeration.rs`: enumeration members

mod duration;
mod enumeration;
mod identifier;
mod number_format;
mod numeric;
mod temporal;
mod text;

use crate::dispatch::{ConversionRequest, ConverterTable};
use crate::error::Outcome;
use crate::types::Kind;
use crate::value::Value;

fn identity(value: Value, _: &ConversionRequest<'_>) -> Outcome<Value> {
    Ok(value)
}

/// The converter table shared by every engine.
pub(crate) fn builtin_table() -> ConverterTable {
    let mut table = ConverterTable::new();

    for kind in Kind::ALL {
        table.register(kind, kind, identity);
    }
    table.register(Kind::Enum, Kind::Enum, enumeration::same_type);

    // Numbers, booleans, characters and enumeration ordinals into numbers
    let number_like = Kind::NUMERIC
        .into_iter()
        .chain([Kind::Bool, Kind::Char, Kind::Enum]);
    for source in number_like {
        for target in Kind::NUMERIC {
            if source != target {
                table.register(source, target, numeric::to_number);
            }
        }
    }
    for source in Kind::NUMERIC.into_iter().chain([Kind::Char]) {
        table.register(source, Kind::Bool, numeric::to_bool);
    }
    for source in Kind::NUMERIC.into_iter().chain([Kind::Bool]) {
        table.register(source, Kind::Char, numeric::to_char);
    }
    for source in Kind::NUMERIC {
        table.register(source, Kind::Enum, numeric::to_enum);
    }

    // Every kind except raw bytes has a text form
    for kind in Kind::ALL {
        if kind != Kind::Str && kind != Kind::Bytes {
            table.register(kind, Kind::Str, text::format);
            table.register(Kind::Str, kind, text::parse);
        }
    }

    table.register(Kind::DateTime, Kind::DateTimeOffset, temporal::attach_offset);
    table.register(Kind::DateTimeOffset, Kind::DateTime, temporal::strip_offset);
    table.register(Kind::Guid, Kind::Bytes, identifier::to_bytes);
    table.register(Kind::Bytes, Kind::Guid, identifier::from_bytes);

    table
}
