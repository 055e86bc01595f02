use criterion::{Criterion, criterion_group, criterion_main};
use partialjson::{Options, attempt_parse_with};

fn bench_attempt_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_parse");
    let cases = vec![
        r#"{"type":"container","props":{"direction":"column","gap":4},"children":[]}"#,
        r#"{"type":"container","children":[{"type":"text""#,
        r#"{"type":"text","props":{"content":"The quick brown fox, \"jumps\" over"#,
        r#"{"type":"chart","props":{"variant":"bar","data":[{"name":"Jan","value":10},"#,
        r#"   "#,
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = attempt_parse_with(std::hint::black_box(s), &opts);
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_attempt_parse);
criterion_main!(benches);
