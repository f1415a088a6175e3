// Test intent: verifies twiddle base caching and values.
use ctfft::fft::{Complex64, Direction, FftPlanner};

#[test]
fn twiddle_generation_and_cache() {
    let mut planner = FftPlanner::<f64>::new();
    let t1 = planner.get_bases(10, Direction::Forward);
    let ptr1 = t1.as_ptr();
    let t2 = planner.get_bases(10, Direction::Forward);
    assert_eq!(ptr1, t2.as_ptr());
    assert_eq!(planner.cached_plans(), 1);
}

#[test]
fn twiddle_bases_per_level() {
    let mut planner = FftPlanner::<f64>::new();
    let bases = planner.get_bases(3, Direction::Forward);
    assert_eq!(bases.len(), 3);
    for (s, base) in bases.iter().enumerate() {
        let m = (1u32 << (s + 1)) as f64;
        let expected = Complex64::expi(-2.0 * std::f64::consts::PI / m);
        assert!((base.re - expected.re).abs() < 1e-15);
        assert!((base.im - expected.im).abs() < 1e-15);
    }
    // m = 2 → -1, m = 4 → -i
    assert!((bases[0].re + 1.0).abs() < 1e-15);
    assert!((bases[1].im + 1.0).abs() < 1e-15);
}

#[test]
fn inverse_bases_are_conjugates() {
    let mut planner = FftPlanner::<f64>::new();
    let fwd = planner.get_bases(6, Direction::Forward);
    let inv = planner.get_bases(6, Direction::Inverse);
    assert_ne!(fwd.as_ptr(), inv.as_ptr());
    for (f, i) in fwd.iter().zip(inv.iter()) {
        assert!((f.conj().re - i.re).abs() < 1e-15);
        assert!((f.conj().im - i.im).abs() < 1e-15);
    }
    assert_eq!(planner.cached_plans(), 2);
    planner.clear();
    assert_eq!(planner.cached_plans(), 0);
}

#[test]
fn zero_bits_has_no_levels() {
    let mut planner = FftPlanner::<f32>::new();
    assert!(planner.get_bases(0, Direction::Inverse).is_empty());
}
