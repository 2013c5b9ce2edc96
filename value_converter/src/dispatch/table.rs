//! Converter table keyed by (source kind, target kind).

use std::fmt;

use crate::context::ConversionContext;
use crate::error::{ConversionFailure, Outcome};
use crate::types::{Kind, TypeDescriptor, TypeRegistry};
use crate::value::Value;

/// One table entry: converts a value of the source kind to the target kind.
pub(crate) type ConverterFn = fn(Value, &ConversionRequest<'_>) -> Outcome<Value>;

/// Static types and context of a single conversion step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConversionRequest<'a> {
    pub source: TypeDescriptor,
    pub target: TypeDescriptor,
    pub context: &'a ConversionContext,
    pub types: &'a TypeRegistry,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(
        source: TypeDescriptor,
        target: TypeDescriptor,
        context: &'a ConversionContext,
        types: &'a TypeRegistry,
    ) -> Self {
        ConversionRequest {
            source,
            target,
            context,
            types,
        }
    }

    /// The same request between other types.
    pub fn retarget(&self, source: TypeDescriptor, target: TypeDescriptor) -> Self {
        ConversionRequest {
            source,
            target,
            ..*self
        }
    }

    pub fn target_kind(&self) -> Option<Kind> {
        self.target.base().kind()
    }

    pub fn unsupported(&self) -> ConversionFailure {
        ConversionFailure::unsupported(self.source.name(), self.target.name())
    }

    pub fn parse_failure(&self, input: &str) -> ConversionFailure {
        ConversionFailure::parse(input, self.target.name())
    }

    /// Names the non-text side, whose formatter rejected `format`.
    pub fn invalid_format(&self, format: &str) -> ConversionFailure {
        let subject = if self.target_kind() == Some(Kind::Str) {
            self.source
        } else {
            self.target
        };
        ConversionFailure::invalid_format(format, subject.name())
    }
}

/// Dense `Kind::COUNT x Kind::COUNT` table of converters.
///
/// Built once per engine and never mutated afterwards.
#[derive(Clone)]
pub(crate) struct ConverterTable {
    entries: [[Option<ConverterFn>; Kind::COUNT]; Kind::COUNT],
}

impl ConverterTable {
    pub fn new() -> Self {
        ConverterTable {
            entries: [[None; Kind::COUNT]; Kind::COUNT],
        }
    }

    pub fn register(&mut self, from: Kind, to: Kind, converter: ConverterFn) {
        self.entries[from.index()][to.index()] = Some(converter);
    }

    pub fn get(&self, from: Kind, to: Kind) -> Option<ConverterFn> {
        self.entries[from.index()][to.index()]
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .map(|row| row.iter().filter(|entry| entry.is_some()).count())
            .sum()
    }
}

impl fmt::Debug for ConverterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterTable")
            .field("entries", &self.len())
            .finish()
    }
}
