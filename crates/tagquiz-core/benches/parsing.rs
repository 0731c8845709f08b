use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tagquiz_core::parser::{parse_document_str, validate_document};

fn make_document_json(set_count: usize, tags_per_set: usize) -> String {
    let mut sets = Vec::with_capacity(set_count);
    for s in 0..set_count {
        let options: Vec<String> = (0..tags_per_set)
            .map(|t| format!("\"tag-{t}\""))
            .collect();
        let answers: Vec<String> = (0..tags_per_set / 2)
            .map(|t| {
                format!(
                    "{{\"tag-{t}\": {{\"correct\": true, \"feedback\": \"Feedback {t}.\"}}}}"
                )
            })
            .collect();
        sets.push(format!(
            "\"set-{s}\": {{\"tagOptions\": [{}], \"tagAnswers\": [{}]}}",
            options.join(", "),
            answers.join(", ")
        ));
    }
    format!("{{{}}}", sets.join(", "))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for &(sets, tags) in &[(1usize, 10usize), (10, 20), (100, 20)] {
        let json = make_document_json(sets, tags);
        group.bench_function(format!("sets={sets},tags={tags}"), |b| {
            b.iter(|| parse_document_str(black_box(&json)).unwrap())
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_document");

    let json = make_document_json(100, 20);
    let doc = parse_document_str(&json).unwrap();
    group.bench_function("sets=100,tags=20", |b| {
        b.iter(|| validate_document(black_box(&doc)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
