use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_formdata::{from_form_data, to_form_data, FormData};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| to_form_data(black_box(&user)))
    });
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let mut form = FormData::new();
    form.append("id", "123");
    form.append("name", "Alice");
    form.append("email", "alice@example.com");
    form.append("active", "true");

    c.bench_function("decode_simple_struct", |b| {
        b.iter(|| from_form_data(black_box(&form)))
    });
}

fn benchmark_encode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_form_data(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_decode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        let mut form = FormData::new();
        serde_formdata::append_to_form_data(&products, &mut form, Some("products")).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| from_form_data(black_box(&form)))
        });
    }
    group.finish();
}

fn benchmark_encode_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-15".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
    };

    c.bench_function("encode_nested_struct", |b| {
        b.iter(|| to_form_data(black_box(&data)))
    });
}

fn benchmark_round_trip(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-15".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
    };

    c.bench_function("round_trip_nested_struct", |b| {
        b.iter(|| {
            let form = to_form_data(black_box(&data)).unwrap();
            from_form_data(&form)
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_encode_array,
    benchmark_decode_array,
    benchmark_encode_nested,
    benchmark_round_trip
);
criterion_main!(benches);
