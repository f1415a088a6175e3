//! # ctfft - radix-2 Cooley-Tukey FFT engine
//!
//! Forward and inverse discrete Fourier transforms over complex sample
//! buffers, computed with the iterative decimation-in-time radix-2 algorithm.
//!
//! ## Features
//!
//! - **Any input length**: sequences are zero-padded to the next power of two
//! - **Stateful engine**: [`TransformEngine`] keeps forward/inverse buffers and
//!   refuses to hand out outputs that are stale or were never computed
//! - **Value API**: [`fft::fft_vec`] / [`fft::ifft_vec`] take ownership of a
//!   sequence and return its transform
//! - **Twiddle cache**: [`fft::FftPlanner`] computes each level's twiddle base
//!   once per size and direction
//! - **`no_std` + `alloc`**, `f32` and `f64`
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls for the error types
//! - `verbose-logging`: per-level `trace!` output from the butterfly network
//!
//! ## Scaling
//!
//! Neither direction divides by the length. `ifft(fft(x))` yields `N·x`;
//! reading an engine output with [`OutputMode::Absolute`] divides each
//! magnitude by the (padded) length.
//!
//! ```
//! use ctfft::{Complex64, OutputMode, TransformEngine};
//!
//! let mut engine = TransformEngine::<f64>::new();
//! engine.compute_forward_with(&[Complex64::new(1.0, 0.0); 4]);
//! let spectrum = engine.read_forward_output(OutputMode::Complex).unwrap();
//! assert!((spectrum[0].re - 4.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Radix-2 FFT: twiddle planner, butterfly network and the [`fft::FftImpl`] trait.
pub mod fft;

/// Power-of-two padding and bit-reversal ordering.
pub mod layout;

/// Complex numbers and the float abstraction the transforms are generic over.
pub mod num;

/// Stateful set / compute / read wrapper around the transform.
pub mod engine;

pub use engine::{DirectionState, EngineError, OutputMode, TransformEngine};
pub use fft::{Direction, FftError, FftImpl, FftPlanner, Radix2Fft};
pub use num::{Complex, Complex32, Complex64, Float};
