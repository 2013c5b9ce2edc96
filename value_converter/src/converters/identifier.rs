//! 128-bit identifiers: text forms and the 16-byte RFC 4122 layout.

use uuid::Uuid;

use crate::dispatch::ConversionRequest;
use crate::error::{ConversionFailure, Outcome};
use crate::value::Value;

const GUID_LENGTH: usize = 16;

/// Format specifiers `D` (default), `N`, `B`, `P` and `U`, in either case.
pub(super) fn format_guid(value: Uuid, request: &ConversionRequest<'_>) -> Outcome<String> {
    let text = match request.context.format() {
        None | Some("D" | "d") => value.hyphenated().to_string(),
        Some("N" | "n") => value.simple().to_string(),
        Some("B" | "b") => value.braced().to_string(),
        Some("P" | "p") => format!("({})", value.hyphenated()),
        Some("U" | "u") => value.urn().to_string(),
        Some(other) => return Err(request.invalid_format(other)),
    };
    Ok(text)
}

/// Accepts every form [`format_guid`] writes.
pub(super) fn parse_guid(text: &str, request: &ConversionRequest<'_>) -> Outcome<Uuid> {
    let trimmed = text.trim();
    let bare = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    Uuid::parse_str(bare).map_err(|_| request.parse_failure(text))
}

pub(super) fn to_bytes(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    match value {
        Value::Guid(guid) => Ok(Value::Bytes(guid.as_bytes().to_vec())),
        _ => Err(request.unsupported()),
    }
}

pub(super) fn from_bytes(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    let Value::Bytes(bytes) = value else {
        return Err(request.unsupported());
    };
    Uuid::from_slice(&bytes)
        .map(Value::Guid)
        .map_err(|_| ConversionFailure::incompatible_length(GUID_LENGTH, bytes.len()))
}
