//! Enumeration metadata and the `enumeration!` declaration macro.

use std::fmt;

/// Static description of an enumeration type: its qualified name and
/// `(member name, ordinal)` pairs in declaration order.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumInfo {
    name: &'static str,
    members: &'static [(&'static str, i64)],
}

impl EnumInfo {
    pub const fn new(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
        EnumInfo { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> &'static [(&'static str, i64)] {
        self.members
    }

    /// Symbolic name of the first member declared with `ordinal`.
    pub fn name_of(&self, ordinal: i64) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, value)| *value == ordinal)
            .map(|(name, _)| *name)
    }

    /// Ordinal of the member called `name`.
    ///
    /// An exact match wins; otherwise the first case-insensitive match is used.
    pub fn ordinal_of(&self, name: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|(member, _)| *member == name)
            .or_else(|| {
                self.members
                    .iter()
                    .find(|(member, _)| member.eq_ignore_ascii_case(name))
            })
            .map(|(_, ordinal)| *ordinal)
    }

    pub fn is_defined(&self, ordinal: i64) -> bool {
        self.name_of(ordinal).is_some()
    }
}

/// Implemented by enumeration types usable with the converter.
///
/// Use the [`enumeration!`](crate::enumeration) macro rather than
/// implementing this by hand.
pub trait Enumeration: Sized + Copy + 'static {
    fn info() -> &'static EnumInfo;
    fn ordinal(self) -> i64;
    fn from_ordinal(ordinal: i64) -> Option<Self>;
}

/// A member of some enumeration, erased to its metadata and ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    info: &'static EnumInfo,
    ordinal: i64,
}

impl EnumValue {
    /// Member of `info` with `ordinal`, if one is declared.
    pub fn new(info: &'static EnumInfo, ordinal: i64) -> Option<Self> {
        info.is_defined(ordinal).then_some(EnumValue { info, ordinal })
    }

    pub fn of<E: Enumeration>(member: E) -> Self {
        EnumValue {
            info: E::info(),
            ordinal: member.ordinal(),
        }
    }

    pub fn info(&self) -> &'static EnumInfo {
        self.info
    }

    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    pub fn name(&self) -> &'static str {
        self.info.name_of(self.ordinal).unwrap_or_default()
    }

    /// Recover the typed member if this value belongs to `E`.
    pub fn to_enum<E: Enumeration>(&self) -> Option<E> {
        if self.info == E::info() {
            E::from_ordinal(self.ordinal)
        } else {
            None
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declare an enumeration usable as a conversion source or target.
///
/// Every member needs an explicit integer ordinal. The macro derives
/// `Debug, Clone, Copy, PartialEq, Eq, Hash` and implements
/// [`Enumeration`] and [`Convertible`](crate::Convertible).
///
/// # Example
/// ```
/// use value_converter::{convert, enumeration};
///
/// enumeration! {
///     pub enum Color {
///         Red = 1,
///         Green = 2,
///         Blue = 42,
///     }
/// }
///
/// assert_eq!(convert::<Color, String>(Color::Blue, None).unwrap(), "Blue");
/// assert_eq!(convert::<String, Color>("blue".into(), None).unwrap(), Color::Blue);
/// assert_eq!(convert::<Color, i32>(Color::Blue, None).unwrap(), 42);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$member_meta:meta])* $member:ident = $ordinal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i64)]
        $vis enum $name {
            $($(#[$member_meta])* $member = $ordinal),+
        }

        impl $crate::Enumeration for $name {
            fn info() -> &'static $crate::EnumInfo {
                static INFO: $crate::EnumInfo = $crate::EnumInfo::new(
                    concat!(module_path!(), "::", stringify!($name)),
                    &[$((stringify!($member), $ordinal)),+],
                );
                &INFO
            }

            fn ordinal(self) -> i64 {
                self as i64
            }

            fn from_ordinal(ordinal: i64) -> Option<Self> {
                match ordinal {
                    $($ordinal => Some($name::$member),)+
                    _ => None,
                }
            }
        }

        impl $crate::Convertible for $name {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::enumeration(<$name as $crate::Enumeration>::info())
            }

            fn into_value(self) -> $crate::Value {
                $crate::Value::Enum($crate::EnumValue::of(self))
            }

            fn from_value(value: $crate::Value) -> Option<Self> {
                match value {
                    $crate::Value::Enum(member) => member.to_enum::<$name>(),
                    _ => None,
                }
            }
        }
    };
}
