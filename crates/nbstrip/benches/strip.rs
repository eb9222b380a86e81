//! Benchmark – `nbstrip::strip` and `nbstrip::reduce`
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nbstrip::{CellKind, ReduceOptions, SourceBlock, reduce, strip};

const CELL: &str = r#""""
Module docstring spanning
a few lines.
"""
import numpy as np  # arrays
URL = "https://example.com/#anchor"  # keep the fragment

def f(x):
    '''Self-closing docstring.'''
    return x['key'] + "it's # fine"  # trailing

# standalone comment
s = 'escaped \' quote # still string'
"#;

/// A block of `cells` copies of a representative cell.
fn make_source(cells: usize) -> String {
    CELL.repeat(cells)
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");
    for &cells in &[1usize, 100, 1_000] {
        let source = make_source(cells);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &source, |b, src| {
            b.iter(|| black_box(strip(black_box(src))));
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let blocks: Vec<SourceBlock> = (0..500)
        .map(|i| {
            let kind = if i % 3 == 0 {
                CellKind::Markdown
            } else {
                CellKind::Code
            };
            SourceBlock::new(kind, CELL)
        })
        .collect();

    c.bench_function("reduce_500_cells", |b| {
        b.iter(|| {
            let reduced = reduce(black_box(blocks.clone()), &ReduceOptions::default());
            black_box(reduced)
        });
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_strip, bench_reduce }
criterion_main!(benches);
