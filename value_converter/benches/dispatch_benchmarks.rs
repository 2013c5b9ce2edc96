//! Performance benchmarks for conversion dispatch.
//!
//! - Table lookups: numeric casts and identity
//! - Adapters: optional unwrapping and reference upcasts
//! - Text: culture-aware number and timestamp formatting and parsing

use std::hint::black_box;

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, Criterion};
use value_converter::{
    convert, try_convert, ClassInfo, ClassType, ConversionContext, Culture, Ref,
};

static BASE: ClassInfo = ClassInfo::class("bench::Base", None, &[]);
static DERIVED: ClassInfo = ClassInfo::class("bench::Derived", Some(&BASE), &[]);

#[derive(Debug)]
struct Base;

impl ClassType for Base {
    fn class_info() -> &'static ClassInfo {
        &BASE
    }
}

#[derive(Debug)]
struct Derived;

impl ClassType for Derived {
    fn class_info() -> &'static ClassInfo {
        &DERIVED
    }
}

fn table_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/table");

    group.bench_function("identity_i32", |b| {
        b.iter(|| convert::<i32, i32>(black_box(42), None))
    });
    group.bench_function("i64_to_f64", |b| {
        b.iter(|| convert::<i64, f64>(black_box(-1_234_567), None))
    });
    group.bench_function("unsupported_pair", |b| {
        b.iter(|| try_convert::<i32, NaiveDateTime>(black_box(42), None))
    });

    group.finish();
}

fn adapter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/adapters");

    group.bench_function("optional_some", |b| {
        b.iter(|| convert::<Option<u16>, Option<u64>>(black_box(Some(7)), None))
    });
    group.bench_function("optional_none_to_default", |b| {
        b.iter(|| convert::<Option<String>, i32>(black_box(None), None))
    });
    let derived = Ref::new(Derived);
    group.bench_function("reference_upcast", |b| {
        b.iter(|| convert::<Ref<Derived>, Ref<Base>>(black_box(derived.clone()), None))
    });

    group.finish();
}

fn text_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/text");

    let german = Culture::from_name("de-DE")
        .cloned()
        .unwrap_or_else(|| Culture::invariant().clone());
    let numbers = ConversionContext::new()
        .with_format_provider(german.clone())
        .with_format("N2");
    group.bench_function("format_f64_culture", |b| {
        b.iter(|| convert::<f64, String>(black_box(1_234_567.891), Some(&numbers)))
    });
    group.bench_function("parse_i32", |b| {
        b.iter(|| convert::<String, i32>(black_box("-42".to_owned()), None))
    });

    let timestamp = NaiveDate::from_ymd_opt(2020, 3, 13)
        .and_then(|date| date.and_hms_opt(16, 5, 6))
        .unwrap_or_default();
    let full = ConversionContext::new()
        .with_format_provider(german)
        .with_format("F");
    group.bench_function("format_timestamp_full", |b| {
        b.iter(|| convert::<NaiveDateTime, String>(black_box(timestamp), Some(&full)))
    });
    group.bench_function("parse_timestamp_rfc3339", |b| {
        b.iter(|| {
            convert::<String, NaiveDateTime>(black_box("2020-03-13T16:05:06Z".to_owned()), None)
        })
    });

    group.finish();
}

criterion_group!(benches, table_benchmarks, adapter_benchmarks, text_benchmarks);
criterion_main!(benches);
