use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typed_json::{
    parse, to_json_object, to_string, to_string_readable, to_value_array, JsonArray, JsonObject,
    Value,
};

fn product(i: u32) -> JsonObject {
    let mut obj = JsonObject::new();
    obj.put("sku", format!("SKU{}", i));
    obj.put("name", format!("Product {}", i));
    obj.put("price", BigDecimal::new((999 + i64::from(i)).into(), 2));
    obj.put("quantity", i);
    obj.put(
        "added",
        NaiveDate::from_ymd_opt(2024, 1, 1 + i % 28).unwrap(),
    );
    obj
}

fn catalog(size: u32) -> JsonObject {
    let items: JsonArray = (0..size).map(product).collect();
    let mut obj = JsonObject::new();
    obj.put("items", items);
    obj
}

fn benchmark_write_simple(c: &mut Criterion) {
    let obj = product(1);

    c.bench_function("write_simple_object", |b| {
        b.iter(|| to_string(black_box(&obj)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = to_string(&product(1)).unwrap();

    c.bench_function("parse_simple_object", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_write_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_array");

    for size in [10, 50, 100, 500].iter() {
        let obj = catalog(*size);
        group.bench_with_input(BenchmarkId::new("compact", size), size, |b, _| {
            b.iter(|| to_string(black_box(&obj)))
        });
        group.bench_with_input(BenchmarkId::new("readable", size), size, |b, _| {
            b.iter(|| to_string_readable(black_box(&obj)))
        });
    }
    group.finish();
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&catalog(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_value_bridge(c: &mut Criterion) {
    let values: Vec<Value> = (0..100)
        .map(|i| match i % 4 {
            0 => Value::from(i),
            1 => Value::from(f64::from(i) / 3.0),
            2 => Value::from(format!("row {}", i)),
            _ => Value::from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        })
        .collect();

    c.bench_function("value_array_round_trip", |b| {
        b.iter(|| {
            let object = to_json_object(black_box(&values)).unwrap();
            to_value_array(&object)
        })
    });
}

fn benchmark_value_compare(c: &mut Criterion) {
    let a = Value::from(BigDecimal::new(123_456_789.into(), 4));
    let b = Value::from(12_345.678_9);

    c.bench_function("compare_decimal_double", |bench| {
        bench.iter(|| black_box(&a).compare(black_box(&b)))
    });
}

criterion_group!(
    benches,
    benchmark_write_simple,
    benchmark_parse_simple,
    benchmark_write_array,
    benchmark_parse_array,
    benchmark_value_bridge,
    benchmark_value_compare
);
criterion_main!(benches);
