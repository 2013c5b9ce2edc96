//! Runtime-type handles.

use std::fmt;

use super::descriptor::TypeDescriptor;
use crate::value::Convertible;

/// A type as a first-class value.
///
/// Its text form is the canonical qualified name of the described type, and
/// it converts back from text through the engine's
/// [`TypeRegistry`](super::TypeRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(TypeDescriptor);

impl TypeHandle {
    pub fn new(descriptor: TypeDescriptor) -> Self {
        TypeHandle(descriptor)
    }

    /// Handle for the static type `T`.
    pub fn of<T: Convertible>() -> Self {
        TypeHandle(T::descriptor())
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        self.0
    }

    pub fn qualified_name(&self) -> String {
        self.0.name()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
