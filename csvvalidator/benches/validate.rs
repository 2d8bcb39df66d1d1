use criterion::{black_box, criterion_group, criterion_main, Criterion};

use csvvalidator::{validate_cell, Column, RowDescriptor, Rule, RuleSet};

const SPECIAL: [&str; 8] = [",", "`", "~", "!", "@", "#", "$", ";"];

fn descriptor(columns: usize) -> RowDescriptor {
    let rules: RuleSet = (0..columns)
        .map(|i| {
            let rule = Rule::between(1, 64).with_restricted_chars(SPECIAL);
            (Column::named(i, format!("col {i}")), rule)
        })
        .collect();
    RowDescriptor::new(columns, rules)
}

fn bench_cell(c: &mut Criterion) {
    let rule = Rule::between(1, 0).with_restricted_chars(SPECIAL);
    let value = "a reasonably long field value without any forbidden characters";

    c.bench_function("validate_cell/restricted", |b| {
        b.iter(|| validate_cell(black_box(value), black_box(&rule)))
    });
}

fn bench_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_row");
    for columns in [4usize, 16, 64] {
        let row = descriptor(columns);
        let fields: Vec<String> = (0..columns).map(|i| format!("field value {i}")).collect();
        group.bench_function(format!("{columns}_columns"), |b| {
            b.iter(|| row.validate_row(black_box(&fields)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cell, bench_row);
criterion_main!(benches);
