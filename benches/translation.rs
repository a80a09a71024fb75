use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logquery::{translate_filters, translate_global, Filter};

fn filters(n: usize) -> Vec<Filter> {
    let fields = ["level", "message", "resourceId", "traceId", "spanId", "commit"];
    let mut out: Vec<Filter> = (0..n)
        .map(|i| {
            let field = fields[i % fields.len()];
            // Every third filter is left empty, like an untouched form row.
            let value = if i % 3 == 0 { String::new() } else { format!("value-{}", i) };
            Filter::text(field, value)
        })
        .collect();
    out.push(Filter::timestamp_range(
        Some("2023-09-10T00:00:00Z"),
        Some("2023-09-16T00:00:00Z"),
    ));
    out
}

fn bench_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_filters");
    for n in [1, 8, 64] {
        let input = filters(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| translate_filters(black_box(input)).map(|q| q.to_body()))
        });
    }
    group.finish();
}

fn bench_global(c: &mut Criterion) {
    c.bench_function("translate_global", |b| {
        b.iter(|| translate_global(black_box("level:ERROR AND message:\"timeout\"")).map(|q| q.to_body()))
    });
}

criterion_group!(benches, bench_structured, bench_global);
criterion_main!(benches);
