pub extern crate rustfft;

// export rustfft to interleaved-fft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fill an interleaved `[re, im, re, im, ...]` buffer with a random, complex, signal
/// whose components are drawn uniformly from `[-1, 1)`
///
/// # Panics
///
/// Panics if `data.len()` is odd
pub fn gen_random_signal<T>(data: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        data.len() % 2,
        0,
        "Interleaved buffers must hold a real and an imaginary part per sample"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for x in data.iter_mut() {
        *x = uniform_dist.sample(&mut rng);
    }
}

/// Direct `O(n²)` DFT of an interleaved buffer with exponent sign `sign`, for
/// cross-checking small transforms
pub fn naive_dft(data: &[f64], sign: f64) -> Vec<f64> {
    let n = data.len() / 2;
    let mut out = vec![0.0; data.len()];

    for (l, out_z) in out.chunks_exact_mut(2).enumerate() {
        for (k, z) in data.chunks_exact(2).enumerate() {
            let angle = sign * 2.0 * std::f64::consts::PI * ((k * l) % n) as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            out_z[0] += z[0] * cos - z[1] * sin;
            out_z[1] += z[0] * sin + z[1] * cos;
        }
    }

    out
}
