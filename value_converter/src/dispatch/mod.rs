//! Conversion dispatcher
//!
//! [`TypeConverter`] classifies the static source and target types of a call
//! and routes the value to the optional-wrapper adapter, the reference-type
//! adapter, or a converter table entry. Failures stay [`Outcome`] values until
//! the outermost call, where `convert` turns them into a [`ConversionError`]
//! and `try_convert` drops them.

mod optional;
mod reference;
mod table;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::context::ConversionContext;
use crate::converters;
use crate::error::{ConversionError, ConversionFailure, Outcome};
use crate::types::{ClassType, Enumeration, Kind, TypeDescriptor, TypeRegistry};
use crate::value::{Convertible, Value};

pub(crate) use table::{ConversionRequest, ConverterFn, ConverterTable};

static GLOBAL: Lazy<TypeConverter> = Lazy::new(TypeConverter::new);

/// The conversion engine.
///
/// Holds the converter table and the user types known for type-handle
/// resolution. Both are immutable once built, so one engine can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct TypeConverter {
    table: ConverterTable,
    types: TypeRegistry,
}

/// Registers user types before building a [`TypeConverter`].
#[derive(Debug, Default)]
pub struct TypeConverterBuilder {
    types: TypeRegistry,
}

impl TypeConverterBuilder {
    /// Make `E` resolvable from its qualified name.
    pub fn register_enumeration<E: Enumeration>(mut self) -> Self {
        self.types.register_enumeration::<E>();
        self
    }

    /// Make `C`, its base classes and its interfaces resolvable from their
    /// qualified names.
    pub fn register_class<C: ClassType>(mut self) -> Self {
        self.types.register_class::<C>();
        self
    }

    pub fn build(self) -> TypeConverter {
        let table = converters::builtin_table();
        debug!(
            entries = table.len(),
            user_types = self.types.len(),
            "conversion table built"
        );
        TypeConverter {
            table,
            types: self.types,
        }
    }
}

impl Default for TypeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeConverter {
    /// Engine with the built-in converters and no registered user types.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TypeConverterBuilder {
        TypeConverterBuilder::default()
    }

    /// The process-wide engine, built on first use.
    pub fn global() -> &'static TypeConverter {
        &GLOBAL
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Convert `source` to `T`, failing with a [`ConversionError`] that
    /// carries the reason and the attempted pair.
    pub fn convert<S, T>(
        &self,
        source: S,
        context: Option<&ConversionContext>,
    ) -> Result<T, ConversionError>
    where
        S: Convertible,
        T: Convertible,
    {
        self.outcome::<S, T>(source, context).map_err(|failure| {
            ConversionError::new(failure, S::descriptor().name(), T::descriptor().name())
        })
    }

    /// Convert `source` to `T`, or `None` on any failure.
    ///
    /// Use `unwrap_or_default()` on the result for the zero value of `T`.
    pub fn try_convert<S, T>(&self, source: S, context: Option<&ConversionContext>) -> Option<T>
    where
        S: Convertible,
        T: Convertible,
    {
        self.outcome::<S, T>(source, context).ok()
    }

    /// Convert `source` to `T`, keeping the internal failure.
    pub fn outcome<S, T>(&self, source: S, context: Option<&ConversionContext>) -> Outcome<T>
    where
        S: Convertible,
        T: Convertible,
    {
        let request = ConversionRequest::new(
            S::descriptor(),
            T::descriptor(),
            context.unwrap_or(ConversionContext::empty()),
            &self.types,
        );
        let value = self.run(source.into_value(), &request)?;
        T::from_value(value).ok_or_else(|| request.unsupported())
    }

    /// Convert a dynamic value between two described types.
    pub fn convert_value(
        &self,
        value: Value,
        source: TypeDescriptor,
        target: TypeDescriptor,
        context: Option<&ConversionContext>,
    ) -> Outcome<Value> {
        let request = ConversionRequest::new(
            source,
            target,
            context.unwrap_or(ConversionContext::empty()),
            &self.types,
        );
        self.run(value, &request)
    }

    /// Check if a converter exists for the pair, ignoring optional wrappers.
    ///
    /// A supported pair can still fail for particular values.
    pub fn supports(&self, source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        let request = ConversionRequest::new(
            source.underlying(),
            target.underlying(),
            ConversionContext::empty(),
            &self.types,
        );
        self.resolve(&request).is_ok()
    }

    fn run(&self, value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
        self.dispatch(value, request).inspect_err(|failure| {
            trace!(
                from = %request.source,
                to = %request.target,
                reason = ?failure.reason(),
                "conversion failed"
            );
        })
    }

    fn dispatch(&self, value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
        if request.source.is_optional() || request.target.is_optional() {
            return optional::adapt(self, value, request);
        }
        self.dispatch_underlying(value, request)
    }

    /// Dispatch between two non-optional types.
    fn dispatch_underlying(&self, value: Value, request: &ConversionRequest<'_>) -> Outcome<Value> {
        let Some(converter) = self.resolve(request)? else {
            return reference::adapt(value, request);
        };
        if value.is_absent() || (value.is_empty_text() && request.target_kind() != Some(Kind::Str))
        {
            return optional::absent_into(request.target);
        }
        converter(value, request)
    }

    /// Find the converter for the underlying pair.
    ///
    /// `Ok(None)` means both sides are classes and the reference adapter
    /// decides at run time.
    fn resolve(&self, request: &ConversionRequest<'_>) -> Outcome<Option<ConverterFn>> {
        let (source, target) = (request.source.base(), request.target.base());
        match (source.kind(), target.kind()) {
            (None, None) => Ok(None),
            (None, _) | (_, None) => Err(ConversionFailure::incompatible_references(
                request.source.name(),
                request.target.name(),
            )),
            (Some(Kind::Enum), Some(Kind::Enum)) if source != target => Err(request.unsupported()),
            (Some(from), Some(to)) => self
                .table
                .get(from, to)
                .map(Some)
                .ok_or_else(|| request.unsupported()),
        }
    }
}
