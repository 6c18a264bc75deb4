use criterion::{Criterion, black_box, criterion_group, criterion_main};
use umbra_shadow::*;

fn bench_split_positions(c: &mut Criterion) {
    c.bench_function("split_positions_4", |bencher| {
        bencher.iter(|| compute_split_positions(black_box(4), black_box(0.5), 0.1, 1000.0))
    });
}

fn bench_light_fit(c: &mut Criterion) {
    let inputs = ShadowInputs::default();
    let direction = inputs.light.direction();
    c.bench_function("fit_light_to_caster", |bencher| {
        bencher.iter(|| fit_light_to_caster(black_box(&inputs.caster), black_box(direction)))
    });
}

fn bench_frame_update(c: &mut Criterion) {
    let inputs = ShadowInputs::default();
    let mut shadows = CascadedShadows::new(CascadeSettings::default());
    c.bench_function("cascaded_shadows_update", |bencher| {
        bencher.iter(|| {
            let frame = shadows.update(black_box(&inputs));
            black_box(frame.cascades().len())
        })
    });
}

fn bench_pack_uniform(c: &mut Criterion) {
    let frame = compute_cascades(&ShadowInputs::default(), 4);
    c.bench_function("shadow_uniform_from_frame", |bencher| {
        bencher.iter(|| ShadowUniform::from_frame(black_box(&frame)))
    });
}

criterion_group!(
    benches,
    bench_split_positions,
    bench_light_fit,
    bench_frame_update,
    bench_pack_uniform
);
criterion_main!(benches);
