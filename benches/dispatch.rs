//! Benchmarks for property-map construction and dispatch.
//!
//! Covers the hot paths: cached map lookup, scalar reads and writes, and
//! indexed element access through a bound view.

extern crate propmap;

use criterion::{criterion_group, criterion_main, Criterion};
use propmap::prelude::*;
use std::hint::black_box;

struct Meter {
    level: i64,
    readings: Vec<(Value, Value)>,
}

impl Meter {
    fn new() -> Self {
        Meter {
            level: 40,
            readings: vec![(Value::from("t0"), Value::Int(12))],
        }
    }
}

impl Introspect for Meter {
    fn methods(table: &mut MethodTable<Self>) {
        table.insert("getLevel", 0, |m, _| Ok(Value::Int(m.level)));
        table.insert("setLevel", 1, |m, args| {
            m.level = args[0].as_int().unwrap_or(0);
            Ok(Value::Null)
        });
        table.insert("getReading", 1, |m, args| {
            let found = m.readings.iter().find(|(k, _)| k == &args[0]);
            Ok(found.map(|(_, v)| v.clone()).unwrap_or(Value::Null))
        });
        table.insert("setReading", 2, |m, args| {
            m.readings.push((args[0].clone(), args[1].clone()));
            Ok(Value::Null)
        });
        table.insert("itrReading", 0, |m, _| Ok(Value::Map(m.readings.clone())));
    }
}

/// Benchmark the cached registry lookup that fronts every operation.
fn bench_cached_map_lookup(c: &mut Criterion) {
    // First access pays the one-time build.
    let _ = property_map::<Meter>().unwrap();

    c.bench_function("registry_cached_lookup", |b| {
        b.iter(|| {
            let map = property_map::<Meter>().unwrap();
            black_box(map.len())
        });
    });
}

/// Benchmark a scalar read through the dispatch trait.
fn bench_scalar_read(c: &mut Criterion) {
    let mut meter = Meter::new();

    c.bench_function("dispatch_scalar_read", |b| {
        b.iter(|| {
            let value = meter.property(black_box("level")).unwrap().into_value();
            black_box(value)
        });
    });
}

/// Benchmark a scalar write through the dispatch trait.
fn bench_scalar_write(c: &mut Criterion) {
    let mut meter = Meter::new();

    c.bench_function("dispatch_scalar_write", |b| {
        b.iter(|| {
            meter
                .set_property(black_box("level"), Value::Int(55))
                .unwrap();
        });
    });
}

/// Benchmark binding an indexed view and reading one element.
fn bench_indexed_read(c: &mut Criterion) {
    let mut meter = Meter::new();

    c.bench_function("dispatch_indexed_read", |b| {
        b.iter(|| {
            let mut reading = meter
                .property(black_box("reading"))
                .unwrap()
                .into_indexed()
                .unwrap();
            black_box(reading.index(Value::from("t0")).unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_cached_map_lookup,
    bench_scalar_read,
    bench_scalar_write,
    bench_indexed_read
);
criterion_main!(benches);
