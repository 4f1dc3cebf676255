//! Performance benchmarks for paragraph segmentation and chapter splitting
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use duanluo_core::{ChapterSplitter, Config, Segmenter};
use std::hint::black_box;

/// Generate test text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "话说天下大势，分久必合，合久必分。周末七国分争，并入于秦！\n　　及秦灭之后，楚、汉分争，又并入于汉；";
    let repeat_count = size / base.len() + 1;
    base.repeat(repeat_count)
}

/// Generate a novel with `chapters` chapter headings
fn generate_novel(chapters: usize) -> String {
    (1..=chapters)
        .map(|n| format!("第{n}回 回目\n{}\n", generate_text(4 * 1024)))
        .collect()
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let segmenter = Segmenter::new();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark paragraph bounds
fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    let text = generate_text(102_400);

    for (max_len, min_len) in [(50, 10), (100, 20), (300, 60)] {
        let config = Config::builder()
            .max_len(max_len)
            .min_len(min_len)
            .build()
            .unwrap();
        let segmenter = Segmenter::with_config(config);

        group.bench_with_input(
            BenchmarkId::new("max_min", format!("{max_len}_{min_len}")),
            &text,
            |b, text| b.iter(|| segmenter.segment(black_box(text))),
        );
    }

    group.finish();
}

/// Benchmark batch segmentation of many chapters
fn bench_segment_many(c: &mut Criterion) {
    let segmenter = Segmenter::new();
    let chapters: Vec<String> = (0..120).map(|_| generate_text(8 * 1024)).collect();
    let texts: Vec<&str> = chapters.iter().map(String::as_str).collect();

    c.bench_function("segment_many_120_chapters", |b| {
        b.iter(|| segmenter.segment_many(black_box(&texts)));
    });
}

/// Benchmark chapter splitting
fn bench_split(c: &mut Criterion) {
    let novel = generate_novel(120);
    let splitter = ChapterSplitter::default();

    c.bench_function("split_120_chapters", |b| {
        b.iter(|| splitter.split(black_box(&novel)));
    });
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_bounds,
    bench_segment_many,
    bench_split
);
criterion_main!(benches);
