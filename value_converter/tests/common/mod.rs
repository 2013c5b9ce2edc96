//! Shared fixtures for integration tests
// Each test target uses a different subset of these fixtures.
#![allow(dead_code)]

use value_converter::{enumeration, ClassInfo, ClassType, ConversionContext, Culture};

enumeration! {
    pub enum Color {
        Red = 1,
        Green = 2,
        Blue = 42,
    }
}

enumeration! {
    pub enum Priority {
        Low = 0,
        High = 10,
    }
}

// Shape (interface)      Named (interface)
//   └── Polygon (class) ──┘
//         └── Square (class)
// Circle (class) implements Shape
pub static SHAPE: ClassInfo = ClassInfo::interface("tests::Shape", &[]);
pub static NAMED: ClassInfo = ClassInfo::interface("tests::Named", &[]);
pub static POLYGON: ClassInfo = ClassInfo::class("tests::Polygon", None, &[&SHAPE, &NAMED]);
pub static SQUARE: ClassInfo = ClassInfo::class("tests::Square", Some(&POLYGON), &[]);
pub static CIRCLE: ClassInfo = ClassInfo::class("tests::Circle", None, &[&SHAPE]);

/// Interface marker; never instantiated.
#[derive(Debug)]
pub struct Shape;

impl ClassType for Shape {
    fn class_info() -> &'static ClassInfo {
        &SHAPE
    }
}

/// Interface marker; never instantiated.
#[derive(Debug)]
pub struct Named;

impl ClassType for Named {
    fn class_info() -> &'static ClassInfo {
        &NAMED
    }
}

#[derive(Debug)]
pub struct Polygon {
    pub sides: u32,
}

impl ClassType for Polygon {
    fn class_info() -> &'static ClassInfo {
        &POLYGON
    }
}

#[derive(Debug)]
pub struct Square {
    pub side: f64,
}

impl ClassType for Square {
    fn class_info() -> &'static ClassInfo {
        &SQUARE
    }
}

#[derive(Debug)]
pub struct Circle {
    pub radius: f64,
}

impl ClassType for Circle {
    fn class_info() -> &'static ClassInfo {
        &CIRCLE
    }
}

/// Context with the named built-in culture as format provider.
pub fn culture(name: &str) -> ConversionContext {
    let culture = Culture::from_name(name).unwrap_or_else(|| panic!("unknown culture {name}"));
    ConversionContext::new().with_format_provider(culture.clone())
}
