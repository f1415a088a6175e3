//! Demonstrates enabling verbose logging for ctfft.
use ctfft::{Complex64, OutputMode, TransformEngine};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut engine = TransformEngine::<f64>::new();

    // Logged at error level: nothing to compute yet
    let _ = engine.compute_forward();

    let signal: Vec<Complex64> = (0..12).map(|i| Complex64::new(i as f64, 0.0)).collect();
    engine.compute_forward_with(&signal);
    let _ = engine.read_forward_output(OutputMode::Complex);

    // Logged at error level: stale output after new input
    engine.set_forward_input(&signal[..5]);
    let _ = engine.read_forward_output(OutputMode::Complex);
}
