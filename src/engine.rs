//! Stateful transform engine.
//!
//! [`TransformEngine`] keeps an input and an output buffer for each
//! [`Direction`] and tracks whether each output is valid for its current
//! input. Callers set an input, compute, then read:
//!
//! ```
//! use ctfft::engine::{OutputMode, TransformEngine};
//! use ctfft::Complex64;
//!
//! let mut engine = TransformEngine::<f64>::new();
//! engine.set_forward_input(&[Complex64::new(1.0, 0.0), Complex64::zero()]);
//! engine.compute_forward().unwrap();
//! let spectrum = engine.read_forward_output(OutputMode::Complex).unwrap();
//! assert_eq!(spectrum.len(), 2);
//! ```
//!
//! Misuse (computing with no input, reading a stale or missing output) is
//! reported as an [`EngineError`] and logged; it never changes engine state.

use alloc::vec::Vec;
use core::fmt;

use crate::fft::{Direction, Radix2Fft};
use crate::layout::pad_to_power_of_two;
use crate::num::{Complex, Float};

/// How an output buffer is returned by the read calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Raw transformed values, never scaled.
    #[default]
    Complex,
    /// `|value| / len` for each value, with `len` the padded output length.
    /// Returned as complex values with a zero imaginary part.
    Absolute,
}

/// Lifecycle of one direction's buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionState {
    #[default]
    NoInput,
    InputSet,
    OutputComputed,
}

/// Errors reported by [`TransformEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Compute was requested before any input was set for the direction.
    InputNotSet(Direction),
    /// The output for the direction was read before a compute completed
    /// against its current input.
    OutputNotReady(Direction),
}

impl EngineError {
    pub fn direction(&self) -> Direction {
        match *self {
            EngineError::InputNotSet(d) | EngineError::OutputNotReady(d) => d,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InputNotSet(d) => write!(f, "{d} input vector is not defined"),
            EngineError::OutputNotReady(d) => {
                write!(f, "{d} output requested before the {d} transform was calculated")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

struct Channel<T: Float> {
    input: Vec<Complex<T>>,
    output: Vec<Complex<T>>,
    state: DirectionState,
}

impl<T: Float> Default for Channel<T> {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            output: Vec::new(),
            state: DirectionState::NoInput,
        }
    }
}

/// Forward and inverse FFT buffers with validity tracking.
///
/// All mutation goes through `&mut self`; share an engine across threads by
/// wrapping it in a `Mutex`, or keep one per thread.
pub struct TransformEngine<T: Float> {
    forward: Channel<T>,
    inverse: Channel<T>,
    fft: Radix2Fft<T>,
}

impl<T: Float> Default for TransformEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TransformEngine<T> {
    pub fn new() -> Self {
        Self {
            forward: Channel::default(),
            inverse: Channel::default(),
            fft: Radix2Fft::default(),
        }
    }

    /// Build an engine around an existing transform (and its twiddle cache).
    pub fn with_fft(fft: Radix2Fft<T>) -> Self {
        Self {
            forward: Channel::default(),
            inverse: Channel::default(),
            fft,
        }
    }

    /// Give back the transform and its twiddle cache.
    pub fn into_fft(self) -> Radix2Fft<T> {
        self.fft
    }

    fn channel(&self, direction: Direction) -> &Channel<T> {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        }
    }

    fn channel_mut(&mut self, direction: Direction) -> &mut Channel<T> {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Inverse => &mut self.inverse,
        }
    }

    pub fn state(&self, direction: Direction) -> DirectionState {
        self.channel(direction).state
    }

    pub fn is_input_defined(&self, direction: Direction) -> bool {
        self.state(direction) != DirectionState::NoInput
    }

    pub fn is_output_defined(&self, direction: Direction) -> bool {
        self.state(direction) == DirectionState::OutputComputed
    }

    /// Copy `input` into the direction's input buffer and invalidate its output.
    pub fn set_input(&mut self, direction: Direction, input: &[Complex<T>]) {
        let channel = self.channel_mut(direction);
        channel.input.clear();
        channel.input.extend_from_slice(input);
        channel.state = DirectionState::InputSet;
    }

    pub fn set_forward_input(&mut self, input: &[Complex<T>]) {
        self.set_input(Direction::Forward, input);
    }

    pub fn set_inverse_input(&mut self, input: &[Complex<T>]) {
        self.set_input(Direction::Inverse, input);
    }

    /// Transform the stored input for `direction`.
    ///
    /// The input buffer is zero-padded to a power of two in place before the
    /// transform runs.
    ///
    /// # Errors
    ///
    /// [`EngineError::InputNotSet`] if no input was set for `direction`.
    pub fn compute(&mut self, direction: Direction) -> Result<(), EngineError> {
        if !self.is_input_defined(direction) {
            let err = EngineError::InputNotSet(direction);
            log::error!("{err}");
            return Err(err);
        }
        self.run(direction);
        Ok(())
    }

    /// Pad the stored input, transform it and mark the output computed.
    fn run(&mut self, direction: Direction) {
        let Self {
            forward,
            inverse,
            fft,
        } = self;
        let channel = match direction {
            Direction::Forward => forward,
            Direction::Inverse => inverse,
        };
        let original_len = channel.input.len();
        let padded = pad_to_power_of_two(&mut channel.input);
        log::debug!("{direction} transform: {original_len} samples, padded to {padded}");
        fft.transform_padded(&channel.input, &mut channel.output, direction);
        channel.state = DirectionState::OutputComputed;
    }

    pub fn compute_forward(&mut self) -> Result<(), EngineError> {
        self.compute(Direction::Forward)
    }

    pub fn compute_inverse(&mut self) -> Result<(), EngineError> {
        self.compute(Direction::Inverse)
    }

    /// Set `input` and transform it. Always leaves the output defined.
    pub fn compute_with(&mut self, direction: Direction, input: &[Complex<T>]) {
        self.set_input(direction, input);
        self.run(direction);
    }

    pub fn compute_forward_with(&mut self, input: &[Complex<T>]) {
        self.compute_with(Direction::Forward, input);
    }

    pub fn compute_inverse_with(&mut self, input: &[Complex<T>]) {
        self.compute_with(Direction::Inverse, input);
    }

    /// Borrow the output for `direction` without copying.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutputNotReady`] unless a compute has completed since the
    /// input was last set.
    pub fn output(&self, direction: Direction) -> Result<&[Complex<T>], EngineError> {
        if !self.is_output_defined(direction) {
            let err = EngineError::OutputNotReady(direction);
            log::error!("{err}");
            return Err(err);
        }
        Ok(&self.channel(direction).output)
    }

    pub fn forward_output(&self) -> Result<&[Complex<T>], EngineError> {
        self.output(Direction::Forward)
    }

    pub fn inverse_output(&self) -> Result<&[Complex<T>], EngineError> {
        self.output(Direction::Inverse)
    }

    /// Copy out the output for `direction` in the requested mode.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutputNotReady`] unless a compute has completed since the
    /// input was last set.
    pub fn read_output(
        &self,
        direction: Direction,
        mode: OutputMode,
    ) -> Result<Vec<Complex<T>>, EngineError> {
        let output = self.output(direction)?;
        Ok(match mode {
            OutputMode::Complex => output.to_vec(),
            OutputMode::Absolute => absolute(output),
        })
    }

    pub fn read_forward_output(&self, mode: OutputMode) -> Result<Vec<Complex<T>>, EngineError> {
        self.read_output(Direction::Forward, mode)
    }

    pub fn read_inverse_output(&self, mode: OutputMode) -> Result<Vec<Complex<T>>, EngineError> {
        self.read_output(Direction::Inverse, mode)
    }

    /// Padded length of the stored input, `None` if no input is set.
    ///
    /// Before the first compute on an input this is the length as given.
    pub fn input_len(&self, direction: Direction) -> Option<usize> {
        let channel = self.channel(direction);
        (channel.state != DirectionState::NoInput).then_some(channel.input.len())
    }

    /// Return both directions to [`DirectionState::NoInput`].
    ///
    /// Buffer capacity is kept for reuse.
    pub fn reset(&mut self) {
        for channel in [&mut self.forward, &mut self.inverse] {
            channel.input.clear();
            channel.output.clear();
            channel.state = DirectionState::NoInput;
        }
    }
}

/// Normalized magnitudes: `|z| / len` for each element.
fn absolute<T: Float>(values: &[Complex<T>]) -> Vec<Complex<T>> {
    let len = T::from_usize(values.len()).unwrap_or_else(|| T::from_f32(values.len() as f32));
    values
        .iter()
        .map(|z| Complex::new(z.norm() / len, T::zero()))
        .collect()
}
