//! Danielson-Lanczos butterfly kernels
//!
//! Operates on a buffer that has already been put in bit-reversed order. Each stage
//! combines pairs of half-size transforms into a transform twice as large, starting
//! from single samples (`mmax = 2` reals) until the whole buffer (`mmax = 2n`) has
//! been merged. The kernels are selected at runtime based on available CPU features.
use num_traits::{Float, FloatConst};

use crate::options::Direction;
use crate::twiddles::Twiddles;

/// Runs all `log2(n)` butterfly stages over `data`, whose length must have been
/// validated by [`crate::utils::check_len`].
pub(crate) fn fft_stages<T: Float + FloatConst>(
    data: &mut [T],
    direction: Direction,
    twiddle_refresh: usize,
) {
    let nn = data.len();
    let mut mmax = 2;

    // executed log2(n) times
    while nn > mmax {
        let twiddles = Twiddles::new(mmax, direction, twiddle_refresh);
        fft_stage(data, mmax, twiddles);
        mmax <<= 1;
    }
}

/// One butterfly stage over blocks of `2 * mmax` reals.
///
/// For each rotation factor `w`, every block combines its first-half sample `a` with
/// the matching second-half sample `b` into `a + w⋅b` and `a - w⋅b`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
fn fft_stage<T: Float>(data: &mut [T], mmax: usize, twiddles: Twiddles<T>) {
    let nn = data.len();
    let istep = mmax << 1;

    for (m, (wr, wi)) in (0..mmax).step_by(2).zip(twiddles) {
        for i in (m..nn).step_by(istep) {
            let j = i + mmax;

            let tempr = wr * data[j] - wi * data[j + 1];
            let tempi = wr * data[j + 1] + wi * data[j];

            data[j] = data[i] - tempr;
            data[j + 1] = data[i + 1] - tempi;
            data[i] = data[i] + tempr;
            data[i + 1] = data[i + 1] + tempi;
        }
    }
}

/// Multiplies every real in `data` by `factor`.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub(crate) fn scale<T: Float>(data: &mut [T], factor: T) {
    data.iter_mut().for_each(|x| *x = *x * factor);
}
