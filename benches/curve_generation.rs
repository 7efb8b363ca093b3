use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrain_curve::{
    generate_fill_mesh, BlendWeights, CurveConfigBuilder, CurveGenerator, CurveMethod,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve-generation");
    group.sample_size(20);

    for method in CurveMethod::ALL {
        let config = CurveConfigBuilder::new()
            .seed(42)
            .weights(BlendWeights::only(method))
            .and_then(|builder| builder.build())
            .unwrap();
        let generator = CurveGenerator::new(config);
        group.bench_function(method.name(), |b| {
            b.iter(|| black_box(&generator).generate_seeded())
        });
    }

    let config = CurveConfigBuilder::new().seed(42).build().unwrap();
    let curve = CurveGenerator::new(config).generate_seeded().unwrap();
    group.bench_function("fill mesh", |b| {
        b.iter(|| generate_fill_mesh(black_box(&curve)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
