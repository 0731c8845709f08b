use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tagquiz_core::engine::TaggingEngine;
use tagquiz_core::model::{TagDefinition, TagSet};

fn make_set(tag_count: usize) -> TagSet {
    TagSet {
        name: "bench".into(),
        tags: (0..tag_count)
            .map(|i| TagDefinition {
                value: format!("tag-{i}"),
                is_correct: i % 2 == 0,
                feedback: format!("Feedback for tag {i}."),
            })
            .collect(),
    }
}

fn engine_with_all_placed(tag_count: usize) -> TaggingEngine {
    let set = make_set(tag_count);
    let mut engine = TaggingEngine::new(set);
    for i in 0..tag_count {
        engine.move_in(&format!("tag-{i}")).unwrap();
    }
    engine
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit");

    for &n in &[10usize, 100, 1000] {
        group.bench_function(format!("tags={n}"), |b| {
            b.iter_batched(
                || engine_with_all_placed(n),
                |mut engine| black_box(engine.submit().unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_move_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_churn");

    for &n in &[10usize, 100, 1000] {
        group.bench_function(format!("tags={n}"), |b| {
            let mut engine = TaggingEngine::new(make_set(n));
            // Worst case for reinsertion: churn the first tag while the
            // rest of the pool sits behind it.
            b.iter(|| {
                engine.move_in(black_box("tag-0")).unwrap();
                engine.move_out(black_box("tag-0")).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_submit, bench_move_churn);
criterion_main!(benches);
