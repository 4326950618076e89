//! Errors reported by the transform entry points.

/// Reasons a buffer is rejected before the transform touches it.
///
/// Validation always runs before any element is read or written, so a buffer
/// returned with one of these errors is exactly as the caller passed it in.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub enum FftError {
    /// The interleaved buffer is shorter than 4 reals or has an odd length.
    InvalidLength {
        /// Length of the rejected buffer, in reals.
        len: usize,
    },
    /// The number of complex samples `n = len / 2` is not a power of two.
    NotPowerOfTwo {
        /// Number of complex samples derived from the buffer length.
        n: usize,
    },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(
                f,
                "len(data) = 2*n must be at least 4 and even, {len} is invalid"
            ),
            Self::NotPowerOfTwo { n } => {
                write!(f, "n = len(data)/2 must be a power of 2, n = {n} is invalid")
            }
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}
