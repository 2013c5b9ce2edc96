//! User-defined classes and interfaces.
//!
//! Rust has no inheritance, so class hierarchies are described by static
//! [`ClassInfo`] records. A class instance is any [`ClassType`] value behind
//! an `Arc<dyn Object>`; [`Ref<C>`] is such a shared reference viewed as class
//! or interface `C`.
//!
//! ```text
//! Shape (interface)      Named (interface)
//!   └── Polygon (class) ──┘
//!         └── Square (class)
//! ```
//!
//! With the hierarchy above, a `Ref<Square>` converts to `Ref<Polygon>`,
//! `Ref<Shape>` and `Ref<Named>` without touching the instance.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Whether a [`ClassInfo`] describes a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Static description of a class or interface.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ClassInfo {
    name: &'static str,
    kind: ClassKind,
    /// Base class (classes only)
    base: Option<&'static ClassInfo>,
    /// Implemented interfaces for classes, extended interfaces for interfaces
    interfaces: &'static [&'static ClassInfo],
}

impl ClassInfo {
    pub const fn class(
        name: &'static str,
        base: Option<&'static ClassInfo>,
        interfaces: &'static [&'static ClassInfo],
    ) -> Self {
        ClassInfo {
            name,
            kind: ClassKind::Class,
            base,
            interfaces,
        }
    }

    pub const fn interface(name: &'static str, extends: &'static [&'static ClassInfo]) -> Self {
        ClassInfo {
            name,
            kind: ClassKind::Interface,
            base: None,
            interfaces: extends,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn base(&self) -> Option<&'static ClassInfo> {
        self.base
    }

    pub fn interfaces(&self) -> &'static [&'static ClassInfo] {
        self.interfaces
    }

    /// Check if a reference to an instance of `other` can be used where
    /// `self` is expected: `other` is `self`, derives from it, or implements
    /// it (directly, through a base class, or through interface extension).
    pub fn is_assignable_from(&self, other: &ClassInfo) -> bool {
        if self == other {
            return true;
        }
        if other
            .interfaces
            .iter()
            .any(|interface| self.is_assignable_from(interface))
        {
            return true;
        }
        match other.base {
            Some(base) => self.is_assignable_from(base),
            None => false,
        }
    }

    /// This class followed by its base classes, most derived first.
    pub fn ancestors(&'static self) -> impl Iterator<Item = &'static ClassInfo> {
        std::iter::successors(Some(self), |info| info.base)
    }
}

/// Static type marker for a class or interface.
pub trait ClassType: 'static {
    fn class_info() -> &'static ClassInfo;
}

/// A class instance with a runtime class.
///
/// Implemented for every [`ClassType`] that is `Debug + Send + Sync`.
pub trait Object: fmt::Debug + Send + Sync + 'static {
    fn runtime_class(&self) -> &'static ClassInfo;
    fn as_any(&self) -> &dyn Any;
}

impl<T: ClassType + fmt::Debug + Send + Sync> Object for T {
    fn runtime_class(&self) -> &'static ClassInfo {
        T::class_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared reference to a class instance, typed as class or interface `C`.
///
/// The instance's runtime class is always assignable to `C`.
pub struct Ref<C: ClassType> {
    object: Arc<dyn Object>,
    marker: PhantomData<fn() -> C>,
}

impl<C: ClassType> Ref<C> {
    /// Wrap a fresh instance of `C`.
    pub fn new(value: C) -> Self
    where
        C: Object,
    {
        Ref {
            object: Arc::new(value),
            marker: PhantomData,
        }
    }

    /// View `object` as `C`, if its runtime class allows it.
    pub fn cast(object: Arc<dyn Object>) -> Option<Self> {
        C::class_info()
            .is_assignable_from(object.runtime_class())
            .then_some(Ref {
                object,
                marker: PhantomData,
            })
    }

    pub fn object(&self) -> &Arc<dyn Object> {
        &self.object
    }

    pub fn into_object(self) -> Arc<dyn Object> {
        self.object
    }

    pub fn runtime_class(&self) -> &'static ClassInfo {
        self.object.runtime_class()
    }

    /// Borrow the instance as its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.as_any().downcast_ref::<T>()
    }

    /// Reference equality: both point at the same instance.
    pub fn ptr_eq<D: ClassType>(&self, other: &Ref<D>) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl<C: ClassType> Clone for Ref<C> {
    fn clone(&self) -> Self {
        Ref {
            object: Arc::clone(&self.object),
            marker: PhantomData,
        }
    }
}

impl<C: ClassType> fmt::Debug for Ref<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref")
            .field("as", &C::class_info().name())
            .field("object", &self.object)
            .finish()
    }
}
