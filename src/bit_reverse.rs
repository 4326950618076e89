//! Bit-reversal permutation of an interleaved complex buffer
//!
//! The iterative butterfly schedule in [`crate::kernels`] expects its input in
//! bit-reversed order: complex sample `k` must sit at index `rev(k)`, where `rev`
//! reverses the lowest `log2(n)` bits of `k`.
use crate::utils::swap;

/// Reorders the `n = data.len() / 2` complex samples of `data` into bit-reversed
/// order, in place, using only pairwise swaps.
///
/// `i` scans the samples while `j` is kept equal to the bit-reversal of `i`. Going
/// from one value of `i` to the next is a binary increment, so `j` gets the mirrored
/// operation: clear its leading ones from the top down, then set the first zero.
/// Both indices are 1-based offsets into the reals, counted in steps of 2.
///
/// The length must have been validated by [`crate::utils::check_len`].
pub(crate) fn bit_reverse_permutation<T>(data: &mut [T]) {
    let nn = data.len();
    let n = nn >> 1;

    let mut j = 1;
    for i in (1..nn).step_by(2) {
        if j > i {
            swap_samples(data, i - 1, j - 1);
        }
        let mut m = n;
        while m >= 2 && j > m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Exchanges the (re, im) pair starting at `lo` with the one starting at `hi`.
#[inline]
fn swap_samples<T>(data: &mut [T], lo: usize, hi: usize) {
    debug_assert!(lo + 2 <= hi);
    let (head, tail) = data.split_at_mut(hi);
    let (a_re, a_im) = head[lo..].split_at_mut(1);
    let (b_re, b_im) = tail.split_at_mut(1);
    swap(&mut a_re[0], &mut b_re[0]);
    swap(&mut a_im[0], &mut b_im[0]);
}
