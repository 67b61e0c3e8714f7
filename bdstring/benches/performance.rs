use bdstring::{bds_append, BufferOptions, Growth, StrBuf};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn options(growth: Growth) -> BufferOptions {
    BufferOptions {
        growth,
        ..BufferOptions::default()
    }
}

fn bench_sequential_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_append");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        for (name, growth) in [("headroom", Growth::default()), ("doubling", Growth::Doubling)] {
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, &size| {
                b.iter(|| {
                    let mut buf = StrBuf::with_options(1, options(growth));
                    for _ in 0..size {
                        buf.append_raw(black_box(b"element_"));
                    }
                    black_box(buf.len())
                });
            });
        }
    }
    group.finish();
}

fn bench_set_and_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_and_clear");

    for size in [16, 256, 4096].iter() {
        let text = vec![b'x'; *size];
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("reused_buffer", size), &text, |b, text| {
            let mut buf = StrBuf::new();
            b.iter(|| {
                buf.set(black_box(text));
                buf.clear();
            });
        });
    }
    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for size in [10, 100].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("append_formatted", size), size, |b, &size| {
            b.iter(|| {
                let mut buf = StrBuf::new();
                for i in 0..size {
                    bds_append!(buf, "item_{},", black_box(i));
                }
                black_box(buf.len())
            });
        });
    }
    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    c.bench_function("slice_middle", |b| {
        let text = vec![b'y'; 1024];
        b.iter(|| {
            let mut buf = StrBuf::from_bytes(&text);
            buf.slice(black_box(256), black_box(768));
            black_box(buf.len())
        });
    });
}

criterion_group!(
    benches,
    bench_sequential_append,
    bench_set_and_clear,
    bench_formatting,
    bench_slice
);
criterion_main!(benches);
