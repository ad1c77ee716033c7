use lineplot_core::{linspace, OutputFormat, PlotSession, RecordingRenderer, SessionConfig};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, black_box};

fn bench_session(c: &mut Criterion) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let x = linspace(0.0, std::f64::consts::TAU, 10_000).expect("bounds");
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let mut group = c.benchmark_group("session");
    group.sample_size(20);
    group.bench_function("plot_and_save_10k", |b| {
        b.iter_batched(
            || PlotSession::with_renderer(SessionConfig::rooted_at(tmp.path()), RecordingRenderer::new()),
            |mut s| {
                s.set_output_file("bench.png", OutputFormat::Auto);
                s.plot(x.clone(), y.clone(), "sin(x)").expect("plot");
                black_box(s.save().expect("save"));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
