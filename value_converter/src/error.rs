//! Conversion failure types
//!
//! Failures travel through the dispatcher as [`ConversionFailure`] values
//! inside an [`Outcome`]. Only the outermost call boundary turns them into a
//! [`ConversionError`] (for `convert`) or drops them (for `try_convert`).

use thiserror::Error;

/// Why a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// No converter is registered for the (source, target) pair.
    UnsupportedConversion,
    /// Text could not be parsed into the target kind.
    ParseFailure,
    /// Reference conversion where the target is not an ancestor or interface
    /// of the source's runtime class.
    IncompatibleReferenceTypes,
    /// Byte sequence of the wrong length for the target.
    IncompatibleLength,
    /// The value has no representation in the target kind.
    OutOfRange,
    /// An absent or empty source cannot populate a non-optional reference target.
    MissingValue,
    /// The context's format string is not understood by the target's formatter.
    InvalidFormat,
}

/// Internal conversion failure, carried as the error side of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionFailure {
    #[error("no conversion from {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("cannot parse {input:?} as {target}")]
    ParseFailure { input: String, target: String },

    #[error("{from} is not assignable to {to}")]
    IncompatibleReferenceTypes { from: String, to: String },

    #[error("expected {expected} bytes, got {actual}")]
    IncompatibleLength { expected: usize, actual: usize },

    #[error("{0}")]
    OutOfRange(String),

    #[error("no value available for non-optional {0}")]
    MissingValue(String),

    #[error("invalid format string {format:?} for {target}")]
    InvalidFormat { format: String, target: String },
}

impl ConversionFailure {
    /// Create an unsupported-conversion failure
    pub fn unsupported<A: Into<String>, B: Into<String>>(from: A, to: B) -> Self {
        ConversionFailure::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a parse failure
    pub fn parse<A: Into<String>, B: Into<String>>(input: A, target: B) -> Self {
        ConversionFailure::ParseFailure {
            input: input.into(),
            target: target.into(),
        }
    }

    /// Create an incompatible-reference failure
    pub fn incompatible_references<A: Into<String>, B: Into<String>>(from: A, to: B) -> Self {
        ConversionFailure::IncompatibleReferenceTypes {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a length failure
    pub fn incompatible_length(expected: usize, actual: usize) -> Self {
        ConversionFailure::IncompatibleLength { expected, actual }
    }

    /// Create an out-of-range failure
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        ConversionFailure::OutOfRange(msg.into())
    }

    /// Create a missing-value failure
    pub fn missing_value<S: Into<String>>(target: S) -> Self {
        ConversionFailure::MissingValue(target.into())
    }

    /// Create an invalid-format failure
    pub fn invalid_format<A: Into<String>, B: Into<String>>(format: A, target: B) -> Self {
        ConversionFailure::InvalidFormat {
            format: format.into(),
            target: target.into(),
        }
    }

    pub fn reason(&self) -> FailureReason {
        match self {
            ConversionFailure::UnsupportedConversion { .. } => FailureReason::UnsupportedConversion,
            ConversionFailure::ParseFailure { .. } => FailureReason::ParseFailure,
            ConversionFailure::IncompatibleReferenceTypes { .. } => {
                FailureReason::IncompatibleReferenceTypes
            }
            ConversionFailure::IncompatibleLength { .. } => FailureReason::IncompatibleLength,
            ConversionFailure::OutOfRange(_) => FailureReason::OutOfRange,
            ConversionFailure::MissingValue(_) => FailureReason::MissingValue,
            ConversionFailure::InvalidFormat { .. } => FailureReason::InvalidFormat,
        }
    }
}

/// Result of a single conversion step.
pub type Outcome<T> = Result<T, ConversionFailure>;

/// Error returned by [`convert`](crate::convert) and
/// [`TypeConverter::convert`](crate::TypeConverter::convert).
///
/// The same type is used for every failure; inspect [`reason`](Self::reason)
/// to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {from} to {to}: {failure}")]
pub struct ConversionError {
    failure: ConversionFailure,
    from: String,
    to: String,
}

impl ConversionError {
    pub fn new<A: Into<String>, B: Into<String>>(
        failure: ConversionFailure,
        from: A,
        to: B,
    ) -> Self {
        ConversionError {
            failure,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reason(&self) -> FailureReason {
        self.failure.reason()
    }

    pub fn failure(&self) -> &ConversionFailure {
        &self.failure
    }

    /// Qualified name of the attempted source type
    pub fn source_type(&self) -> &str {
        &self.from
    }

    /// Qualified name of the attempted target type
    pub fn target_type(&self) -> &str {
        &self.to
    }
}
