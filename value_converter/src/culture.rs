//! Culture-specific formatting data.
//!
//! The engine treats cultures as opaque [`FormatProvider`] handles and only
//! reads the separators and date/time patterns it needs for text conversions.
//! Date/time patterns are chrono strftime strings; month and day names are
//! localised through the culture's [`chrono::Locale`].

use std::fmt;

use chrono::Locale;

/// Separators used when formatting and parsing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
    /// Digits per group for `N` formatting
    pub group_size: usize,
}

/// Standard date/time patterns of a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormat {
    pub short_date: &'static str,
    pub long_date: &'static str,
    pub short_time: &'static str,
    pub long_time: &'static str,
    pub locale: Locale,
}

impl DateTimeFormat {
    /// Long date followed by long time (the `F` pattern).
    pub fn full_date_time(&self) -> String {
        format!("{} {}", self.long_date, self.long_time)
    }
}

/// Opaque culture handle consumed by text conversions.
pub trait FormatProvider: fmt::Debug + Send + Sync {
    /// Culture name, e.g. `de-DE`. The invariant culture has an empty name.
    fn name(&self) -> &str;
    fn number_format(&self) -> &NumberFormat;
    fn date_time_format(&self) -> &DateTimeFormat;
}

/// A named culture with fixed formatting data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: &'static str,
    number_format: NumberFormat,
    date_time_format: DateTimeFormat,
}

const INVARIANT: Culture = Culture::new(
    "",
    NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        group_size: 3,
    },
    DateTimeFormat {
        short_date: "%m/%d/%Y",
        long_date: "%A, %d %B %Y",
        short_time: "%H:%M",
        long_time: "%H:%M:%S",
        locale: Locale::POSIX,
    },
);

const EN_US: Culture = Culture::new(
    "en-US",
    NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        group_size: 3,
    },
    DateTimeFormat {
        short_date: "%-m/%-d/%Y",
        long_date: "%A, %B %-d, %Y",
        short_time: "%-I:%M %p",
        long_time: "%-I:%M:%S %p",
        locale: Locale::en_US,
    },
);

const EN_GB: Culture = Culture::new(
    "en-GB",
    NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        group_size: 3,
    },
    DateTimeFormat {
        short_date: "%d/%m/%Y",
        long_date: "%A, %-d %B %Y",
        short_time: "%H:%M",
        long_time: "%H:%M:%S",
        locale: Locale::en_GB,
    },
);

const DE_DE: Culture = Culture::new(
    "de-DE",
    NumberFormat {
        decimal_separator: ',',
        group_separator: '.',
        negative_sign: '-',
        group_size: 3,
    },
    DateTimeFormat {
        short_date: "%d.%m.%Y",
        long_date: "%A, %-d. %B %Y",
        short_time: "%H:%M",
        long_time: "%H:%M:%S",
        locale: Locale::de_DE,
    },
);

const FR_FR: Culture = Culture::new(
    "fr-FR",
    NumberFormat {
        decimal_separator: ',',
        group_separator: '\u{202F}',
        negative_sign: '-',
        group_size: 3,
    },
    DateTimeFormat {
        short_date: "%d/%m/%Y",
        long_date: "%A %-d %B %Y",
        short_time: "%H:%M",
        long_time: "%H:%M:%S",
        locale: Locale::fr_FR,
    },
);

static BUILTIN: [&Culture; 5] = [&INVARIANT, &EN_US, &EN_GB, &DE_DE, &FR_FR];

impl Culture {
    pub const fn new(
        name: &'static str,
        number_format: NumberFormat,
        date_time_format: DateTimeFormat,
    ) -> Self {
        Culture {
            name,
            number_format,
            date_time_format,
        }
    }

    /// The culture used when a context carries no format provider.
    pub fn invariant() -> &'static Culture {
        &INVARIANT
    }

    /// Look up a built-in culture by name (case-insensitive).
    ///
    /// `""` and `"invariant"` both select the invariant culture.
    pub fn from_name(name: &str) -> Option<&'static Culture> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("invariant") {
            return Some(&INVARIANT);
        }
        BUILTIN
            .iter()
            .copied()
            .find(|culture| culture.name.eq_ignore_ascii_case(name))
    }

    /// Names of all built-in cultures
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|culture| culture.name)
    }
}

impl FormatProvider for Culture {
    fn name(&self) -> &str {
        self.name
    }

    fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    fn date_time_format(&self) -> &DateTimeFormat {
        &self.date_time_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Culture::from_name("de-DE").map(|c| c.name()), Some("de-DE"));
        assert_eq!(Culture::from_name("EN-us").map(|c| c.name()), Some("en-US"));
        assert_eq!(Culture::from_name("").map(|c| c.name()), Some(""));
        assert_eq!(Culture::from_name("invariant"), Some(Culture::invariant()));
        assert!(Culture::from_name("xx-XX").is_none());
    }

    #[test]
    fn test_separators() {
        let de = Culture::from_name("de-DE").map(|c| *c.number_format());
        assert_eq!(de.map(|n| n.decimal_separator), Some(','));
        assert_eq!(Culture::invariant().number_format().decimal_separator, '.');
    }

    #[test]
    fn test_full_pattern() {
        assert_eq!(
            Culture::invariant().date_time_format().full_date_time(),
            "%A, %d %B %Y %H:%M:%S"
        );
    }

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = Culture::builtin_names().collect();
        assert_eq!(names, vec!["", "en-US", "en-GB", "de-DE", "fr-FR"]);
    }
}
