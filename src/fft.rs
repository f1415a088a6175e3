//! Radix-2 Cooley-Tukey FFT.
//!
//! Decimation in time: the input is placed in bit-reversed order, then
//! `log2(N)` levels of butterflies merge pairs of half-size transforms into
//! full-size ones, in place. Forward and inverse transforms share the same
//! network and differ only in the sign of the twiddle exponent. Neither
//! direction scales its output; `ifft(fft(x)) == N·x`.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;

use crate::layout::{
    bit_reverse_in_place, bit_reverse_permute, is_power_of_two, pad_to_power_of_two,
    significant_bits,
};
use crate::num::{Complex, Float};

pub use crate::num::{Complex32, Complex64};

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Time to frequency, twiddles `exp(-2πi/m)`.
    Forward,
    /// Frequency to time, twiddles `exp(+2πi/m)`.
    Inverse,
}

impl Direction {
    /// Sign of the twiddle exponent.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => -1,
            Direction::Inverse => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Inverse => "inverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the in-place transform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The buffer length is not a power of two and cannot be padded in place.
    NonPowerOfTwo { len: usize },
    /// Input and output buffers of an out-of-place call differ in length.
    MismatchedLengths { expected: usize, actual: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NonPowerOfTwo { len } => {
                write!(f, "buffer length {len} is not a power of two")
            }
            FftError::MismatchedLengths { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Caches the twiddle bases used by each butterfly level.
///
/// For a transform of `2^bits` points the table holds one base per level:
/// entry `s` is `exp(∓2πi / 2^(s+1))`. Powers of each base are accumulated
/// inside the butterfly loop, so only `bits` trigonometric evaluations are
/// needed per (size, direction) pair and they are done once.
pub struct FftPlanner<T: Float> {
    cache: HashMap<(u32, Direction), Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Level bases for a `2^bits`-point transform in `direction`.
    pub fn get_bases(&mut self, bits: u32, direction: Direction) -> Arc<[Complex<T>]> {
        let table = self.cache.entry((bits, direction)).or_insert_with(|| {
            log::trace!("planner: building {direction} twiddle bases for 2^{bits} points");
            let sign = T::from_f32(f32::from(direction.sign()));
            let two_pi = T::from_f32(2.0) * T::pi();
            let bases: Vec<Complex<T>> = (1..=bits)
                .map(|level| {
                    let m = T::from_f32((1u64 << level) as f32);
                    Complex::expi(sign * two_pi / m)
                })
                .collect();
            Arc::from(bases)
        });
        Arc::clone(table)
    }

    /// Number of cached (size, direction) tables.
    pub fn cached_plans(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Run every butterfly level over a buffer already in bit-reversed order.
///
/// `bases[s]` is the twiddle base for blocks of size `2^(s+1)`; its length
/// must equal `log2(buffer.len())`.
fn butterflies<T: Float>(buffer: &mut [Complex<T>], bases: &[Complex<T>]) {
    debug_assert_eq!(1usize << bases.len(), buffer.len().max(1));
    let mut m = 2;
    for &wm in bases {
        let half = m / 2;
        #[cfg(feature = "verbose-logging")]
        log::trace!(
            "butterfly level m={m}: {} blocks of {half} pairs",
            buffer.len() / m
        );
        for block in buffer.chunks_exact_mut(m) {
            let (lo, hi) = block.split_at_mut(half);
            let mut w = Complex::one();
            for (even_slot, odd_slot) in lo.iter_mut().zip(hi.iter_mut()) {
                let even = *even_slot;
                let odd = w.mul(*odd_slot);
                *even_slot = even.add(odd);
                *odd_slot = even.sub(odd);
                w *= wm;
            }
        }
        m <<= 1;
    }
}

pub trait FftImpl<T: Float> {
    /// In-place forward transform. The length must be zero or a power of two.
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    /// In-place inverse transform, unscaled.
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;

    fn transform(&self, input: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        match direction {
            Direction::Forward => self.fft(input),
            Direction::Inverse => self.ifft(input),
        }
    }

    fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths {
                expected: input.len(),
                actual: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.fft(output)
    }

    fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths {
                expected: input.len(),
                actual: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.ifft(output)
    }
}

/// The iterative radix-2 transform.
///
/// Holds a [`FftPlanner`] behind a `RefCell` so repeated transforms of one
/// size reuse their twiddle bases. Not `Sync`; use one instance per thread.
pub struct Radix2Fft<T: Float> {
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for Radix2Fft<T> {
    fn default() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }
}

impl<T: Float> Radix2Fft<T> {
    pub fn with_planner(planner: FftPlanner<T>) -> Self {
        Self {
            planner: RefCell::new(planner),
        }
    }

    pub fn into_planner(self) -> FftPlanner<T> {
        self.planner.into_inner()
    }

    fn bases(&self, len: usize, direction: Direction) -> Arc<[Complex<T>]> {
        self.planner
            .borrow_mut()
            .get_bases(significant_bits(len), direction)
    }

    /// Transform a power-of-two buffer in place. Callers guarantee the length.
    fn process(&self, buffer: &mut [Complex<T>], direction: Direction) {
        if buffer.len() <= 1 {
            return;
        }
        bit_reverse_in_place(buffer);
        let bases = self.bases(buffer.len(), direction);
        butterflies(buffer, &bases);
    }

    /// Transform `input` into `output` without touching `input`.
    ///
    /// `input` must already be zero-padded to a power of two. `output` is
    /// cleared and refilled, so its allocation is reused across calls.
    pub fn transform_into(
        &self,
        input: &[Complex<T>],
        output: &mut Vec<Complex<T>>,
        direction: Direction,
    ) -> Result<(), FftError> {
        if !is_power_of_two(input.len()) {
            return Err(FftError::NonPowerOfTwo { len: input.len() });
        }
        self.transform_padded(input, output, direction);
        Ok(())
    }

    /// [`Self::transform_into`] for an input the caller has already padded.
    pub(crate) fn transform_padded(
        &self,
        input: &[Complex<T>],
        output: &mut Vec<Complex<T>>,
        direction: Direction,
    ) {
        bit_reverse_permute(input, output);
        if output.len() > 1 {
            let bases = self.bases(output.len(), direction);
            butterflies(output, &bases);
        }
    }

    /// Forward transform of an owned sequence of any length.
    ///
    /// The sequence is zero-padded to the next power of two first, so the
    /// result may be longer than the input.
    pub fn fft_vec(&self, mut input: Vec<Complex<T>>) -> Vec<Complex<T>> {
        pad_to_power_of_two(&mut input);
        self.process(&mut input, Direction::Forward);
        input
    }

    /// Inverse transform of an owned sequence of any length, unscaled.
    pub fn ifft_vec(&self, mut input: Vec<Complex<T>>) -> Vec<Complex<T>> {
        pad_to_power_of_two(&mut input);
        self.process(&mut input, Direction::Inverse);
        input
    }
}

impl<T: Float> FftImpl<T> for Radix2Fft<T> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        if !is_power_of_two(input.len()) {
            return Err(FftError::NonPowerOfTwo { len: input.len() });
        }
        self.process(input, Direction::Forward);
        Ok(())
    }

    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        if !is_power_of_two(input.len()) {
            return Err(FftError::NonPowerOfTwo { len: input.len() });
        }
        self.process(input, Direction::Inverse);
        Ok(())
    }
}

/// Forward transform of an owned sequence, padding it to a power of two.
pub fn fft_vec<T: Float>(input: Vec<Complex<T>>) -> Vec<Complex<T>> {
    Radix2Fft::default().fft_vec(input)
}

/// Inverse transform of an owned sequence, padding it to a power of two.
///
/// The result is not divided by the length.
pub fn ifft_vec<T: Float>(input: Vec<Complex<T>>) -> Vec<Complex<T>> {
    Radix2Fft::default().ifft_vec(input)
}
