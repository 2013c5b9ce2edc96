//! Per-call conversion context.
//!
//! A [`ConversionContext`] is immutable once built and may be shared across
//! any number of calls. Every field is optional; absent fields fall back to
//! the engine defaults (no format string, the invariant culture, no date
//! styles).

use std::sync::Arc;

use bitflags::bitflags;
use serde::Deserialize;

use crate::culture::{Culture, FormatProvider};

bitflags! {
    /// Date-parsing style flags for timestamp conversions.
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
    )]
    pub struct DateStyles: u32 {
        /// Timestamps without an offset are taken as UTC.
        const ASSUME_UNIVERSAL = 1;
        /// Timestamps without an offset are taken as local time.
        const ASSUME_LOCAL = 1 << 1;
        /// Timezone-aware results are normalised to `+00:00`.
        const ADJUST_TO_UNIVERSAL = 1 << 2;
        /// Leading and trailing whitespace is ignored when parsing.
        const ALLOW_WHITE_SPACES = 1 << 3;
    }
}

/// Optional format string, format provider and date styles for one call.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    format: Option<String>,
    format_provider: Option<Arc<dyn FormatProvider>>,
    date_styles: Option<DateStyles>,
}

static EMPTY: ConversionContext = ConversionContext::new();

impl ConversionContext {
    pub const fn new() -> Self {
        ConversionContext {
            format: None,
            format_provider: None,
            date_styles: None,
        }
    }

    /// Shared context with every field absent
    pub fn empty() -> &'static ConversionContext {
        &EMPTY
    }

    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_format_provider<P: FormatProvider + 'static>(mut self, provider: P) -> Self {
        self.format_provider = Some(Arc::new(provider));
        self
    }

    /// Use an already shared provider handle.
    pub fn with_shared_provider(mut self, provider: Arc<dyn FormatProvider>) -> Self {
        self.format_provider = Some(provider);
        self
    }

    pub fn with_date_styles(mut self, styles: DateStyles) -> Self {
        self.date_styles = Some(styles);
        self
    }

    /// The custom format string, if any. Empty strings count as absent.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref().filter(|format| !format.is_empty())
    }

    /// The format provider, falling back to the invariant culture.
    pub fn format_provider(&self) -> &dyn FormatProvider {
        match &self.format_provider {
            Some(provider) => provider.as_ref(),
            None => Culture::invariant(),
        }
    }

    pub fn has_format_provider(&self) -> bool {
        self.format_provider.is_some()
    }

    pub fn date_styles(&self) -> DateStyles {
        self.date_styles.unwrap_or_default()
    }

    /// Build a context from its serialised configuration.
    pub fn from_config(config: &ContextConfig) -> Result<Self, ContextConfigError> {
        let mut context = ConversionContext::new();
        if let Some(format) = &config.format {
            context = context.with_format(format.clone());
        }
        if let Some(name) = &config.culture {
            let culture = Culture::from_name(name)
                .ok_or_else(|| ContextConfigError::UnknownCulture(name.clone()))?;
            context = context.with_format_provider(culture.clone());
        }
        if let Some(styles) = config.date_styles {
            context = context.with_date_styles(styles);
        }
        Ok(context)
    }

    /// Parse a TOML document into a context.
    ///
    /// # Example
    /// ```
    /// use value_converter::{ConversionContext, DateStyles};
    ///
    /// let context = ConversionContext::from_toml_str(r#"
    ///     format = "F"
    ///     culture = "de-DE"
    ///     date_styles = "ASSUME_UNIVERSAL | ADJUST_TO_UNIVERSAL"
    /// "#).unwrap();
    /// assert_eq!(context.format(), Some("F"));
    /// assert_eq!(context.format_provider().name(), "de-DE");
    /// assert!(context.date_styles().contains(DateStyles::ADJUST_TO_UNIVERSAL));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ContextConfigError> {
        let config: ContextConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }
}

/// Serialised form of a [`ConversionContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    #[serde(default)]
    pub format: Option<String>,
    /// Name of a built-in culture, e.g. `"en-US"`
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub date_styles: Option<DateStyles>,
}

/// Errors raised while loading a context configuration.
#[derive(Debug, thiserror::Error)]
pub enum ContextConfigError {
    #[error("invalid context configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown culture {0:?}")]
    UnknownCulture(String),
}
