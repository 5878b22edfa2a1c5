use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_engine::{ColourMode, Engine, EngineConfig, Vec2};

fn engine_with_factor(image_factor: f64) -> Engine {
    EngineConfig {
        image_factor,
        ..EngineConfig::default()
    }
    .build()
    .unwrap()
}

fn bench_generate_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_image");

    for factor in [50.0, 100.0, 200.0] {
        let engine = engine_with_factor(factor);
        let pixels = engine.generate_image().unwrap().pixel_size();
        group.bench_function(format!("{}x{}", pixels.width, pixels.height), |b| {
            b.iter(|| black_box(engine.generate_image().unwrap()))
        });
    }

    group.finish();
}

fn bench_smooth_vs_discrete(c: &mut Criterion) {
    let mut group = c.benchmark_group("colour_mode_150x150");

    for (name, mode) in [
        ("discrete", ColourMode::Discrete),
        ("smooth", ColourMode::Smooth),
    ] {
        let mut engine = engine_with_factor(50.0);
        engine.set_colour_mode(mode);
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.generate_image().unwrap()))
        });
    }

    group.finish();
}

fn bench_zoomed_view(c: &mut Criterion) {
    // deep views spend far more iterations per sample than the initial one
    let mut engine = engine_with_factor(100.0);
    engine.pan(Vec2::new(1.25, 1.4));
    for _ in 0..8 {
        engine.zoom(-0.25);
    }

    c.bench_function("generate_image_zoomed_300x300", |b| {
        b.iter(|| black_box(engine.generate_image().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_generate_image,
    bench_smooth_vs_discrete,
    bench_zoomed_view
);
criterion_main!(benches);
