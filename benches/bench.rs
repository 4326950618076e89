use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use interleaved_fft::{fft_32, fft_64, fft_with_opts, Direction, Options};
use utilities::gen_random_signal;
use utilities::rustfft::num_complex::Complex;
use utilities::rustfft::num_traits::Float;
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
];

fn generate_numbers<T>(n: usize) -> Vec<T>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut data = vec![T::zero(); 2 * n];
    gen_random_signal(&mut data);
    data
}

fn generate_complex_numbers<T>(n: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    generate_numbers::<T>(n)
        .chunks_exact(2)
        .map(|z| Complex::new(z[0], z[1]))
        .collect()
}

fn benchmark_forward_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f32");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let id = "interleaved-fft Forward";
        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_numbers::<f32>(len),
                |mut data| fft_32(&mut data, Direction::Forward),
                BatchSize::SmallInput,
            );
        });

        let id = "RustFFT FFT Forward";
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(len);

        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_complex_numbers::<f32>(len),
                |mut signal| {
                    fft.process(&mut signal);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_inverse_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse f32");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let id = "interleaved-fft Inverse";
        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_numbers::<f32>(len),
                |mut data| fft_32(&mut data, Direction::Inverse),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_forward_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let id = "interleaved-fft Forward";
        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_numbers::<f64>(len),
                |mut data| fft_64(&mut data, Direction::Forward),
                BatchSize::SmallInput,
            );
        });

        let id = "RustFFT FFT Forward";
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(len);

        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_complex_numbers::<f64>(len),
                |mut signal| {
                    fft.process(&mut signal);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_inverse_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let id = "interleaved-fft Inverse";
        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_numbers::<f64>(len),
                |mut data| fft_64(&mut data, Direction::Inverse),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_twiddle_refresh_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Twiddle refresh f64");

    for n in [16, 20] {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        for refresh in [0, 64, 4096] {
            let opts = Options::default().with_twiddle_refresh(refresh);
            let id = format!("refresh every {refresh}");

            group.bench_function(BenchmarkId::new(id, len), |b| {
                b.iter_batched(
                    || generate_numbers::<f64>(len),
                    |mut data| fft_with_opts(&mut data, Direction::Forward, &opts),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_forward_f32,
    benchmark_inverse_f32,
    benchmark_forward_f64,
    benchmark_inverse_f64,
    benchmark_twiddle_refresh_f64
);
criterion_main!(benches);
