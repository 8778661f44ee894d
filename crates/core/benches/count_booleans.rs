use bool_tally_core::{CountMode, Dataset, TallyOptions, count_booleans};
use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;

fn sample_csv(rows: usize) -> String {
    let mut text = String::from("id,active,verified,name,admin\n");
    for i in 0..rows {
        let _ = writeln!(
            text,
            "{i},{},\"{}\",user{i},{}",
            i % 2 == 0,
            i % 3 == 0,
            if i % 5 == 0 { "TRUE" } else { "false" }
        );
    }
    text
}

fn benchmark_count_booleans(c: &mut Criterion) {
    let text = sample_csv(10_000);
    let dataset = Dataset::parse(&text).unwrap();

    c.bench_function("parse_10k_rows", |b| {
        b.iter(|| Dataset::parse(black_box(&text)).unwrap());
    });
    c.bench_function("combination_10k_rows", |b| {
        let options = TallyOptions::new(CountMode::Combination);
        b.iter(|| count_booleans(black_box(&dataset), &options).unwrap());
    });
    c.bench_function("flat_10k_rows", |b| {
        let options = TallyOptions::new(CountMode::Flat);
        b.iter(|| count_booleans(black_box(&dataset), &options).unwrap());
    });
}

criterion_group!(benches, benchmark_count_booleans);
criterion_main!(benches);
