use chart_adapter::api::{ChartArgs, ChartRegistry, prepare_chart};
use chart_adapter::core::{Table, convert_edges_to_json};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

fn records_dataset(rows: usize) -> String {
    let records: Vec<Value> = (0..rows)
        .map(|i| {
            json!({
                "id": format!("n{i}"),
                "x": i as f64 * 0.25,
                "y": (i % 97) as f64,
                "category": format!("c{}", i % 8),
            })
        })
        .collect();
    Value::Array(records).to_string()
}

fn bench_load_records_10k(c: &mut Criterion) {
    let dataset = records_dataset(10_000);

    c.bench_function("table_from_records_10k", |b| {
        b.iter(|| {
            let table = Table::from_json_str(black_box(dataset.as_str())).expect("valid dataset");
            black_box(table.column_count());
        })
    });

    c.bench_function("prepare_chart_records_10k", |b| {
        b.iter(|| {
            let mut registry = ChartRegistry::new();
            let chart = prepare_chart(
                &mut registry,
                Some(black_box(dataset.as_str())),
                "bench",
                None,
                &ChartArgs::new(),
            )
            .expect("prepare chart");
            black_box(chart.borrow().dimensionality());
        })
    });
}

fn bench_edges_to_json_10k(c: &mut Criterion) {
    let rows: Vec<[Value; 2]> = (0..10_000)
        .map(|i| [json!(format!("n{i}")), json!(format!("n{}", (i * 31) % 10_000))])
        .collect();

    c.bench_function("convert_edges_to_json_10k", |b| {
        b.iter(|| {
            let json = convert_edges_to_json(black_box(rows.as_slice())).expect("format edges");
            black_box(json.len());
        })
    });
}

criterion_group!(benches, bench_load_records_10k, bench_edges_to_json_10k);
criterion_main!(benches);
