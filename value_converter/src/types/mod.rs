//! Type model for conversion dispatch.
//!
//! # Module Organization
//!
//! - `kind.rs`: Kind, the small integer tag per primitive kind
//! - `descriptor.rs`: BaseType and TypeDescriptor (optional detection, underlying type)
//! - `enumeration.rs`: EnumInfo, Enumeration, EnumValue and the `enumeration!` macro
//! - `class.rs`: ClassInfo, ClassType, Object and Ref for user classes/interfaces
//! - `handle.rs`: TypeHandle, the runtime-type handle kind
//! - `registry.rs`: TypeRegistry for resolving handles from qualified names

mod class;
mod descriptor;
mod enumeration;
mod handle;
mod kind;
mod registry;


pub use class::{ClassInfo, ClassKind, ClassType, Object, Ref};
pub use descriptor::{BaseType, TypeDescriptor};
pub use enumeration::{EnumInfo, EnumValue, Enumeration};
pub use handle::TypeHandle;
pub use kind::Kind;
pub use registry::TypeRegistry;

pub(crate) use kind::utc_offset;
