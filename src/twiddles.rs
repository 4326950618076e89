use num_traits::{Float, FloatConst};

use crate::options::Direction;
use crate::utils::pow2_recip;

/// Rotation factors `(wr, wi) = (cos(k θ), sin(k θ))`, `k = 0, 1, 2, ...`, for one
/// butterfly stage of width `mmax` reals, where `θ = ±2π / mmax`.
///
/// Only two `sin` calls are made per stage. Every following factor is obtained from
/// the previous one with the trigonometric recurrence
///
/// ```text
/// wr' = wr⋅wpr - wi⋅wpi + wr
/// wi' = wi⋅wpr + wr⋅wpi + wi
/// ```
///
/// with `wpr = -2 sin²(θ/2) = cos θ - 1` and `wpi = sin θ`. Each step adds a
/// rounding error of a few ulps; the accumulated drift is accepted as part of the
/// approximation. If `refresh > 0`, every `refresh`-th factor is recomputed directly
/// with `sin_cos` instead, which bounds the drift on very long stages.
pub(crate) struct Twiddles<T> {
    wr: T,
    wi: T,
    wpr: T,
    wpi: T,
    theta: T,
    /// `k` as a float, for direct recomputation
    step: T,
    count: usize,
    refresh: usize,
}

impl<T: Float + FloatConst> Twiddles<T> {
    /// `mmax` is the stage width in reals and must be a power of two `>= 2`.
    pub fn new(mmax: usize, direction: Direction, refresh: usize) -> Self {
        debug_assert!(mmax >= 2 && mmax.is_power_of_two());

        let two = T::one() + T::one();
        // 2π / mmax, built from exact powers of two
        let theta = direction.sign::<T>() * two * T::PI() * pow2_recip(mmax.trailing_zeros());
        let wtemp = (theta / two).sin();

        Self {
            wr: T::one(),
            wi: T::zero(),
            wpr: -two * wtemp * wtemp,
            wpi: theta.sin(),
            theta,
            step: T::zero(),
            count: 0,
            refresh,
        }
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let current = (self.wr, self.wi);

        self.count += 1;
        self.step = self.step + T::one();

        if self.refresh != 0 && self.count % self.refresh == 0 {
            let (sin, cos) = (self.theta * self.step).sin_cos();
            self.wr = cos;
            self.wi = sin;
        } else {
            let wtemp = self.wr;
            self.wr = self.wr * self.wpr - self.wi * self.wpi + self.wr;
            self.wi = self.wi * self.wpr + wtemp * self.wpi + self.wi;
        }

        Some(current)
    }
}
