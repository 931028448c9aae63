//! Feed benchmark: block insertion and the per-block frame cost.
//!
//! A block arrives every 1.8s, so anything under a millisecond per frame is
//! plenty; these numbers guard against regressions in the diff path.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sunscan::buffer::diff::{render_diff, render_full, DiffState};
use sunscan::chain::BlockGenerator;
use sunscan::widget::{BlockFeed, MetricsSampler};
use sunscan::{Buffer, Dashboard, Rect};

fn generator() -> BlockGenerator {
    BlockGenerator::with_rng(982_341, StdRng::seed_from_u64(7))
}

fn feed_insert(c: &mut Criterion) {
    let mut generator = generator();
    let blocks: Vec<_> = (0..64).map(|_| generator.next_block()).collect();

    c.bench_function("feed_insert_64_blocks", |b| {
        b.iter(|| {
            let mut feed = BlockFeed::new(Rect::ZERO);
            for block in &blocks {
                feed.render_block(black_box(block));
            }
            feed
        });
    });
}

fn frame_after_block(c: &mut Criterion) {
    let mut generator = generator();
    let mut dashboard = Dashboard::new(200, 50, MetricsSampler::new(StdRng::seed_from_u64(3)));
    for _ in 0..8 {
        dashboard.on_block(&generator.next_block());
    }
    let mut before = Buffer::new(200, 50);
    dashboard.render(&mut before);
    dashboard.on_block(&generator.next_block());
    let mut after = Buffer::new(200, 50);
    dashboard.render(&mut after);

    c.bench_function("diff_200x50_after_block", |b| {
        b.iter_batched(
            || (Vec::with_capacity(16 * 1024), DiffState::new()),
            |(mut output, mut state)| {
                render_diff(black_box(&before), black_box(&after), &mut output, &mut state);
                output
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("full_200x50", |b| {
        b.iter_batched(
            || (Vec::with_capacity(64 * 1024), DiffState::new()),
            |(mut output, mut state)| {
                render_full(black_box(&after), &mut output, &mut state);
                output
            },
            BatchSize::SmallInput,
        );
    });
}

fn compose_frame(c: &mut Criterion) {
    let mut generator = generator();
    let mut dashboard = Dashboard::new(200, 50, MetricsSampler::new(StdRng::seed_from_u64(3)));
    for _ in 0..8 {
        dashboard.on_block(&generator.next_block());
    }
    dashboard.refresh_metrics();
    let mut buffer = Buffer::new(200, 50);

    c.bench_function("compose_200x50", |b| {
        b.iter(|| dashboard.render(black_box(&mut buffer)));
    });
}

criterion_group!(benches, feed_insert, frame_after_block, compose_frame);
criterion_main!(benches);
