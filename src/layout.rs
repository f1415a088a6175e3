//! Size normalization and bit-reversal ordering.
//!
//! The butterfly network requires a power-of-two length and expects its input
//! in bit-reversed order. These helpers prepare a buffer for it using integer
//! arithmetic only, so lengths 0 and 1 need no special floating-point care.

use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Returns `true` when `n` needs no padding before transforming.
///
/// Zero is accepted: an empty sequence transforms to an empty sequence.
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n == 0 || n.is_power_of_two()
}

/// The length a sequence of `n` samples occupies after zero padding.
///
/// This is the smallest power of two `>= n`, and `0` for `n == 0`.
#[inline]
pub fn padded_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.next_power_of_two()
    }
}

/// Number of index bits addressed by a padded length: `log2(padded_len(n))`.
///
/// Returns `0` for `n <= 1`.
#[inline]
pub fn significant_bits(n: usize) -> u32 {
    match padded_len(n) {
        0 => 0,
        len => len.trailing_zeros(),
    }
}

/// Zero-pad `buffer` up to the next power of two in place.
///
/// Samples past the original length are complex zero. Returns the new length.
pub fn pad_to_power_of_two<T: Float>(buffer: &mut Vec<Complex<T>>) -> usize {
    let len = padded_len(buffer.len());
    buffer.resize(len, Complex::zero());
    len
}

/// Reverse the low `bits` bits of `index`.
///
/// Bits above `bits` are discarded. `bit_reverse(bit_reverse(i, k), k) == i`
/// for every `i < 1 << k`. `bits` must not exceed `usize::BITS`.
#[inline]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    debug_assert!(bits <= usize::BITS, "bit width {bits} exceeds usize");
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Write `input` into `output` in bit-reversed order:
/// `output[i] = input[bit_reverse(i, k)]`.
///
/// `output` is cleared and refilled, reusing its allocation. `input` must
/// already have a power-of-two (or zero) length.
pub fn bit_reverse_permute<T: Float>(input: &[Complex<T>], output: &mut Vec<Complex<T>>) {
    debug_assert!(is_power_of_two(input.len()));
    let bits = significant_bits(input.len());
    output.clear();
    output.extend((0..input.len()).map(|i| input[bit_reverse(i, bits)]));
}

/// Reorder a power-of-two buffer into bit-reversed order in place.
pub fn bit_reverse_in_place<T>(buffer: &mut [T]) {
    debug_assert!(is_power_of_two(buffer.len()));
    let bits = significant_bits(buffer.len());
    for i in 0..buffer.len() {
        let j = bit_reverse(i, bits);
        if i < j {
            buffer.swap(i, j);
        }
    }
}
