use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waitlist_chart::geometry::Point;
use waitlist_chart::view::ViewOptions;
use waitlist_chart::{apply_view_transform, compute_view_model, ColorAssignment, Record, ZoomTransform, CATEGORY10};

fn gen_records(n: usize, courses: usize) -> Vec<Record> {
    let base = chrono::NaiveDate::from_ymd_opt(2023, 9, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    (0..n)
        .map(|i| {
            let course = i % courses;
            let t = base + chrono::Duration::minutes((i / courses) as i64 * 30);
            // waitlist drains over time with a per-course offset
            let w = ((course * 7 + i / courses) % 40) as f64;
            Record::new(Some(t), format!("DSC{}", 10 + course * 10), w)
        })
        .collect()
}

fn bench_view_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view_model");
    let opts = ViewOptions::default();
    for &n in &[1_000usize, 10_000usize] {
        let records = gen_records(n, 24);
        let colors = ColorAssignment::from_records(&records, &CATEGORY10);
        for term in ["", "dsc1", "dsc10"] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{term:?}")), &term, |b, term| {
                b.iter(|| black_box(compute_view_model(&records, term, &colors, ZoomTransform::IDENTITY, &opts)));
            });
        }
    }
    group.finish();
}

fn bench_zoom_only(c: &mut Criterion) {
    let records = gen_records(10_000, 24);
    let colors = ColorAssignment::from_records(&records, &CATEGORY10);
    let scene = compute_view_model(&records, "", &colors, ZoomTransform::IDENTITY, &ViewOptions::default());
    let t = ZoomTransform::IDENTITY.scale_about(3.0, Point::new(355.0, 175.0));
    c.bench_function("apply_view_transform", |b| {
        let mut s = scene.clone();
        b.iter(|| apply_view_transform(black_box(&mut s), t));
    });
}

criterion_group!(benches, bench_view_model, bench_zoom_only);
criterion_main!(benches);
