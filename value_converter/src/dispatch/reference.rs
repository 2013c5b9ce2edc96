//! Reference-type adapter
//!
//! Class and interface conversions never transform the instance: they
//! succeed with the same shared reference when the target is assignable from
//! the instance's runtime class.

use crate::error::{ConversionFailure, Outcome};
use crate::types::BaseType;
use crate::value::Value;

use super::table::ConversionRequest;

pub(super) fn adapt(value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
    match (request.source.base(), request.target.base(), value) {
        (BaseType::Class(_), BaseType::Class(target), Value::Object(object)) => {
            let runtime = object.runtime_class();
            if target.is_assignable_from(runtime) {
                Ok(Value::Object(object))
            } else {
                Err(ConversionFailure::incompatible_references(
                    runtime.name(),
                    target.name(),
                ))
            }
        }
        _ => Err(ConversionFailure::incompatible_references(
            request.source.name(),
            request.target.name(),
        )),
    }
}
