use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mandelbrot_bench::{render, Backend, BufferDescriptor, RenderRequest, ViewState};

fn bench_backends(c: &mut Criterion) {
    let descriptor = BufferDescriptor::new(320, 240).expect("valid buffer");
    let view = ViewState::default();
    let mut pixels = vec![0u32; descriptor.len()];

    let mut group = c.benchmark_group("render_320x240");
    group.sample_size(20);

    for &backend in Backend::ALL {
        let request = RenderRequest::new(view, descriptor, backend);
        if render(&mut pixels, &request).is_err() {
            continue;
        }

        group.bench_with_input(BenchmarkId::from_parameter(backend), &request, |b, request| {
            b.iter(|| render(black_box(&mut pixels), black_box(request)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
