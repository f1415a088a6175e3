//! Basic usage of the ctfft engine and value API.

use ctfft::fft::{fft_vec, ifft_vec};
use ctfft::{Complex64, Direction, OutputMode, TransformEngine};

fn main() {
    println!("=== ctfft Basic Usage ===\n");

    // 1. Value API: take a sequence, get its transform back
    let signal: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .collect();
    let spectrum = fft_vec(signal.clone());
    println!("1. fft_vec (5 samples, padded to {})", spectrum.len());
    for (k, z) in spectrum.iter().enumerate() {
        println!("   X[{k}] = {:.3}{:+.3}i", z.re, z.im);
    }
    let back = ifft_vec(spectrum.clone());
    let n = back.len() as f64;
    println!(
        "   ifft_vec / N: {:?}\n",
        back.iter().map(|z| format!("{:.3}", z.re / n)).collect::<Vec<_>>()
    );

    // 2. Stateful engine: set, compute, read
    let mut engine = TransformEngine::<f64>::new();
    engine.set_forward_input(&signal);
    engine.compute_forward().expect("input was set");
    let magnitudes = engine
        .read_forward_output(OutputMode::Absolute)
        .expect("output was computed");
    println!("2. normalized magnitude spectrum:");
    for (k, z) in magnitudes.iter().enumerate() {
        println!("   |X[{k}]|/N = {:.4}", z.re);
    }

    // 3. Misuse is reported, not fatal
    match engine.read_inverse_output(OutputMode::Complex) {
        Ok(_) => println!("\n3. unexpected inverse output"),
        Err(err) => println!("\n3. reading inverse output early: {err}"),
    }
    println!(
        "   inverse output defined: {}",
        engine.is_output_defined(Direction::Inverse)
    );
}
