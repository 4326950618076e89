//! In-place, iterative radix-2 FFT over interleaved buffers.
//!
//! A sequence of `n` complex samples is stored as `2n` reals,
//! `[re₀, im₀, re₁, im₁, ...]`, and transformed in place without allocating.
//! `n` must be a power of two and at least 2.
//!
//! The forward transform computes
//!
//! ```text
//!          n-1          -i 2π k l / n
//!   X[l] =  Σ  x[k] ⋅ e
//!          k=0
//! ```
//!
//! i.e. its exponent sign is `-1`, the opposite of the convention in Numerical Recipes.
//! The inverse transform uses sign `+1` and, by default, scales its output by `1/n`
//! (see [`Normalization`]), so that an inverse transform undoes a forward one.
//!
//! ```
//! use interleaved_fft::{fft_64, Direction};
//!
//! let mut data = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! fft_64(&mut data, Direction::Forward).unwrap();
//! assert_eq!(data, [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
//! ```
use num_traits::{Float, FloatConst};

#[cfg(feature = "complex-nums")]
use bytemuck::Pod;
#[cfg(feature = "complex-nums")]
use num_complex::Complex;

use crate::bit_reverse::bit_reverse_permutation;
use crate::kernels::{fft_stages, scale};
use crate::utils::{check_len, pow2_recip};

pub use crate::error::FftError;
pub use crate::options::{Direction, Normalization, Options};

mod bit_reverse;
mod error;
mod kernels;
pub mod options;
mod twiddles;
pub mod utils;

/// FFT of an interleaved buffer, in place.
///
/// `data` holds `n` complex samples as `[re₀, im₀, re₁, im₁, ...]`. On success it is
/// replaced by the transform of its contents, in natural order, interleaved the same
/// way. [`Direction::Forward`] uses exponent sign `-1`; [`Direction::Inverse`] uses
/// `+1` and scales the result by `1/n`.
///
/// Options are picked with [`Options::guess_options`]; use [`fft_with_opts`] to
/// choose them yourself.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `data.len()` is odd or smaller than 4, and
/// [`FftError::NotPowerOfTwo`] if `n = data.len() / 2` is not a power of two.
/// `data` is left unmodified in both cases.
pub fn fft<T: Float + FloatConst>(data: &mut [T], direction: Direction) -> Result<(), FftError> {
    let opts = Options::guess_options(data.len() / 2);
    fft_with_opts(data, direction, &opts)
}

/// Same as [`fft`], but with explicit [`Options`].
///
/// # Errors
///
/// See [`fft`].
pub fn fft_with_opts<T: Float + FloatConst>(
    data: &mut [T],
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    let n = check_len(data.len())?;

    bit_reverse_permutation(data);
    fft_stages(data, direction, opts.twiddle_refresh);

    if direction == Direction::Inverse && opts.normalization == Normalization::Backward {
        scale(data, pow2_recip(n.trailing_zeros()));
    }

    Ok(())
}

/// Replaces `data` by its discrete Fourier transform if `inverse == false`, or by its
/// inverse discrete Fourier transform (scaled by `1/n`) if `inverse == true`.
///
/// This is [`fft`] with the direction given as a flag.
///
/// # Errors
///
/// See [`fft`].
pub fn transform<T: Float + FloatConst>(data: &mut [T], inverse: bool) -> Result<(), FftError> {
    fft(data, Direction::from_inverse(inverse))
}

macro_rules! impl_fft_for {
    ($func_name:ident, $precision:ty) => {
        #[doc = concat!("FFT of an interleaved `", stringify!($precision), "` buffer, in place.")]
        ///
        /// See [`fft`] for the layout, sign convention and scaling.
        ///
        /// # Errors
        ///
        /// See [`fft`].
        pub fn $func_name(data: &mut [$precision], direction: Direction) -> Result<(), FftError> {
            fft(data, direction)
        }
    };
}

impl_fft_for!(fft_64, f64);
impl_fft_for!(fft_32, f32);

/// FFT of a slice of complex numbers, in place.
///
/// The slice is reinterpreted as its interleaved reals, so this is equivalent to
/// calling [`fft`] on `[z₀.re, z₀.im, z₁.re, z₁.im, ...]`.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `signal` holds fewer than 2 samples and
/// [`FftError::NotPowerOfTwo`] if its length is not a power of two.
#[cfg(feature = "complex-nums")]
pub fn fft_complex<T: Float + FloatConst + Pod>(
    signal: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    fft(utils::as_interleaved_mut(signal), direction)
}
