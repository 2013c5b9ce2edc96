//! Static type descriptors.

use std::fmt;

use super::class::{ClassInfo, ClassKind};
use super::enumeration::EnumInfo;
use super::kind::Kind;

/// The underlying (non-optional) shape of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// A primitive kind other than `Kind::Enum`
    Primitive(Kind),
    Enumeration(&'static EnumInfo),
    /// A user-defined class or interface
    Class(&'static ClassInfo),
}

impl BaseType {
    /// Converter table tag for this type, `None` for classes.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            BaseType::Primitive(kind) => Some(*kind),
            BaseType::Enumeration(_) => Some(Kind::Enum),
            BaseType::Class(_) => None,
        }
    }

    /// Reference types have no meaningful default value.
    pub fn is_reference(&self) -> bool {
        match self {
            BaseType::Primitive(kind) => kind.is_reference(),
            BaseType::Enumeration(_) => false,
            BaseType::Class(_) => true,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, BaseType::Class(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, BaseType::Class(info) if info.kind() == ClassKind::Interface)
    }

    pub fn qualified_name(&self) -> &'static str {
        match self {
            BaseType::Primitive(kind) => kind.qualified_name(),
            BaseType::Enumeration(info) => info.name(),
            BaseType::Class(info) => info.name(),
        }
    }
}

/// Describes a static type: its underlying shape and whether it is wrapped
/// in `Option`.
///
/// Nested options collapse: `Option<Option<T>>` has the same descriptor as
/// `Option<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    base: BaseType,
    optional: bool,
}

impl TypeDescriptor {
    pub const fn new(base: BaseType, optional: bool) -> Self {
        TypeDescriptor { base, optional }
    }

    pub const fn primitive(kind: Kind) -> Self {
        TypeDescriptor::new(BaseType::Primitive(kind), false)
    }

    pub const fn enumeration(info: &'static EnumInfo) -> Self {
        TypeDescriptor::new(BaseType::Enumeration(info), false)
    }

    pub const fn class(info: &'static ClassInfo) -> Self {
        TypeDescriptor::new(BaseType::Class(info), false)
    }

    pub fn base(&self) -> BaseType {
        self.base
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The descriptor with the optional wrapper removed.
    pub fn underlying(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.base, false)
    }

    /// The descriptor wrapped in an optional.
    pub fn optional(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.base, true)
    }

    /// Canonical qualified name, e.g. `core::option::Option<i32>`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "core::option::Option<{}>", self.base.qualified_name())
        } else {
            f.write_str(self.base.qualified_name())
        }
    }
}
