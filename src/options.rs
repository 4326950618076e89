use num_traits::Float;

/// Interval, in twiddle steps, used by [`Options::guess_options`] once the
/// transform is large enough for recurrence drift to matter.
const DEFAULT_TWIDDLE_REFRESH: usize = 4096;

/// `log2(n)` from which [`Options::guess_options`] turns on twiddle refresh.
const REFRESH_THRESHOLD_LOG_N: u32 = 20;

/// Direction of the transform.
///
/// The exponent sign of the forward transform is `-1`:
///
/// ```text
///          n-1          -i 2π k l / n
///   X[l] =  Σ  x[k] ⋅ e
///          k=0
/// ```
///
/// This is the opposite sign from the one used in Numerical Recipes and must be kept
/// as-is for compatibility with existing consumers of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// DFT with exponent sign `-1`, never scaled
    #[default]
    Forward,
    /// DFT with exponent sign `+1`, scaled according to [`Normalization`]
    Inverse,
}

impl Direction {
    /// Maps the `inverse` flag of [`crate::transform`] onto a direction.
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Self::Inverse
        } else {
            Self::Forward
        }
    }

    /// The sign of the exponent term in the twiddle factors.
    pub(crate) fn sign<T: Float>(self) -> T {
        match self {
            Self::Forward => -T::one(),
            Self::Inverse => T::one(),
        }
    }
}

impl From<bool> for Direction {
    fn from(inverse: bool) -> Self {
        Self::from_inverse(inverse)
    }
}

/// Scaling applied after an inverse transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Multiply every output of an inverse transform by `1/n`,
    /// so that `Inverse(Forward(x)) == x`.
    #[default]
    Backward,
    /// Leave the inverse output unscaled, so that `Inverse(Forward(x)) == n * x`.
    None,
}

/// Options to tune accuracy and output scaling.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Scaling applied to the output of [`Direction::Inverse`] transforms.
    pub normalization: Normalization,
    /// Every `twiddle_refresh` steps within a stage, the rotation factor is recomputed
    /// with `sin_cos` instead of advanced by the recurrence. `0` never refreshes.
    pub twiddle_refresh: usize,
}

impl Options {
    /// Picks defaults for a transform of `num_points` complex samples.
    ///
    /// Small and medium sizes rely on the recurrence alone. Past `2^20` samples the
    /// rotation factor is refreshed periodically to bound accumulated drift.
    pub fn guess_options(num_points: usize) -> Options {
        let mut options = Options::default();
        if num_points >= 1 << REFRESH_THRESHOLD_LOG_N {
            options.twiddle_refresh = DEFAULT_TWIDDLE_REFRESH;
        }
        options
    }

    /// Returns these options with the given inverse normalization.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Returns these options with the given twiddle refresh interval.
    pub fn with_twiddle_refresh(mut self, twiddle_refresh: usize) -> Self {
        self.twiddle_refresh = twiddle_refresh;
        self
    }
}
