//! Size checks and small helpers shared by the transform stages

#[cfg(feature = "complex-nums")]
use bytemuck::{cast_slice_mut, Pod};
#[cfg(feature = "complex-nums")]
use num_complex::Complex;
use num_traits::Float;

use crate::error::FftError;

/// Checks if `n` is a power of 2, i.e. 2⁰, 2¹, 2², 2³, 2⁴, ...
pub fn is_power_of_two(n: usize) -> bool {
    if n < 1 {
        return false;
    }
    n & (n - 1) == 0
}

/// Swaps the values behind two mutable references.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

/// Validates the length of an interleaved buffer and returns the number of complex
/// samples `n = len / 2`.
///
/// Only the length is inspected, so the buffer is untouched on error.
pub(crate) fn check_len(len: usize) -> Result<usize, FftError> {
    if len < 4 || len % 2 != 0 {
        return Err(FftError::InvalidLength { len });
    }

    let n = len / 2;
    if n < 2 || !is_power_of_two(n) {
        return Err(FftError::NotPowerOfTwo { n });
    }

    Ok(n)
}

/// `2^-log_n`, computed by repeated halving so the result is exact.
pub(crate) fn pow2_recip<T: Float>(log_n: u32) -> T {
    let half = T::one() / (T::one() + T::one());
    (0..log_n).fold(T::one(), |acc, _| acc * half)
}

/// Views a slice of complex numbers as its interleaved `[re, im, re, im, ...]` reals.
#[cfg(feature = "complex-nums")]
pub(crate) fn as_interleaved_mut<T: Float + Pod>(signal: &mut [Complex<T>]) -> &mut [T] {
    cast_slice_mut(signal)
}
