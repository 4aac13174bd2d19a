use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waitlist_chart::view::ViewOptions;
use waitlist_chart::{Chart, Record};
use waitlist_render_skia::SkiaRenderer;

fn gen_chart(n: usize) -> Chart {
    let records = (0..n)
        .map(|i| {
            let day = 1 + (i / 96) % 28;
            let minutes = (i % 96) * 15;
            let time = format!("2023-09-{day:02}T{:02}:{:02}:00", minutes / 60, minutes % 60);
            let w = ((i * 37) % 60).to_string();
            Record::parse(&time, &format!("DSC{}", 10 + (i % 12) * 10), &w)
        })
        .collect();
    Chart::with_records(records, ViewOptions::default())
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_rgba8");
    group.sample_size(20);
    let renderer = SkiaRenderer::new();
    for &n in &[1_000usize, 20_000usize] {
        let chart = gen_chart(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let out = renderer.render_to_rgba8(black_box(chart.scene())).expect("render");
                black_box(out.0.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
