//! Name resolution for runtime-type handles.

use std::collections::HashMap;

use super::class::{ClassInfo, ClassType};
use super::descriptor::{BaseType, TypeDescriptor};
use super::enumeration::Enumeration;
use super::kind::Kind;

const OPTION_PREFIX: &str = "core::option::Option<";

/// User enumerations and classes known to an engine, by qualified name.
///
/// Primitive kinds always resolve; user types resolve once registered.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, BaseType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_enumeration<E: Enumeration>(&mut self) {
        let info = E::info();
        self.types.insert(info.name(), BaseType::Enumeration(info));
    }

    /// Register a class or interface together with its bases and interfaces.
    pub fn register_class<C: ClassType>(&mut self) {
        self.register_class_info(C::class_info());
    }

    fn register_class_info(&mut self, info: &'static ClassInfo) {
        if self.types.contains_key(info.name()) {
            return;
        }
        self.types.insert(info.name(), BaseType::Class(info));
        if let Some(base) = info.base() {
            self.register_class_info(base);
        }
        for interface in info.interfaces() {
            self.register_class_info(interface);
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a canonical qualified name such as `i32`, `uuid::Uuid` or
    /// `core::option::Option<chrono::NaiveDateTime>`.
    pub fn resolve(&self, name: &str) -> Option<TypeDescriptor> {
        let name = name.trim();
        if let Some(inner) = name
            .strip_prefix(OPTION_PREFIX)
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return self
                .resolve_base(inner.trim())
                .map(|base| TypeDescriptor::new(base, true));
        }
        self.resolve_base(name)
            .map(|base| TypeDescriptor::new(base, false))
    }

    fn resolve_base(&self, name: &str) -> Option<BaseType> {
        if let Some(kind) = Kind::from_qualified_name(name) {
            return Some(BaseType::Primitive(kind));
        }
        self.types.get(name).copied()
    }
}
