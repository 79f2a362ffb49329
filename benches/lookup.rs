// benches/lookup.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use word_indexer::core::WordIndex;

// Synthetic index roughly the size of a crawled page plus its links
fn sample_index(words: usize) -> WordIndex {
    (0..words)
        .map(|i| (format!("word{i}"), (i % 97) as u64 + 1))
        .collect()
}

fn sample_body(words: usize) -> String {
    let entries: Vec<String> = (0..words)
        .map(|i| format!("\"word{i}\": {}", (i % 97) + 1))
        .collect();
    format!("{{{}}}", entries.join(","))
}

fn bench_lookup(c: &mut Criterion) {
    let index = sample_index(50_000);
    let body = sample_body(50_000);

    c.bench_function("count_hit", |b| {
        b.iter(|| black_box(index.count(black_box("word31337"))))
    });

    c.bench_function("count_miss", |b| {
        b.iter(|| black_box(index.count(black_box("nonexistent"))))
    });

    c.bench_function("top_25", |b| {
        b.iter(|| black_box(index.top(25).len()))
    });

    c.bench_function("parse_body", |b| {
        b.iter(|| black_box(WordIndex::from_json(black_box(&body)).map(|i| i.len()).ok()))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
