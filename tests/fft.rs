use ctfft::fft::{fft_vec, ifft_vec, Complex32, Complex64, FftError, FftImpl, Radix2Fft};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// O(N²) reference transform.
fn naive_dft(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex64::zero(), |acc, (j, x)| {
                    let angle = sign * 2.0 * std::f64::consts::PI * (j * k) as f64 / n as f64;
                    acc + *x * Complex64::new(angle.cos(), angle.sin())
                })
        })
        .collect()
}

fn random_signal(rng: &mut StdRng, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

fn assert_close(a: &[Complex64], b: &[Complex64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x.re - y.re).abs() < tol && (x.im - y.im).abs() < tol,
            "index {i}: {x:?} vs {y:?}"
        );
    }
}

#[test]
fn impulse_and_constant() {
    let impulse = vec![
        Complex64::new(1.0, 0.0),
        Complex64::zero(),
        Complex64::zero(),
        Complex64::zero(),
    ];
    assert_close(&fft_vec(impulse), &[Complex64::new(1.0, 0.0); 4], 1e-12);

    let constant = vec![Complex64::new(1.0, 0.0); 4];
    assert_close(
        &fft_vec(constant),
        &[
            Complex64::new(4.0, 0.0),
            Complex64::zero(),
            Complex64::zero(),
            Complex64::zero(),
        ],
        1e-12,
    );
}

#[test]
fn matches_naive_dft_forward_and_inverse() {
    let mut rng = StdRng::seed_from_u64(42);
    let fft = Radix2Fft::<f64>::default();
    for bits in 0..=9 {
        let n = 1 << bits;
        let x = random_signal(&mut rng, n);

        let mut fwd = x.clone();
        fft.fft(&mut fwd).unwrap();
        assert_close(&fwd, &naive_dft(&x, -1.0), 1e-8 * n as f64);

        let mut inv = x.clone();
        fft.ifft(&mut inv).unwrap();
        assert_close(&inv, &naive_dft(&x, 1.0), 1e-8 * n as f64);
    }
}

#[test]
fn padded_input_matches_naive_dft_of_padded_signal() {
    let mut rng = StdRng::seed_from_u64(7);
    let x = random_signal(&mut rng, 11);
    let mut padded = x.clone();
    padded.resize(16, Complex64::zero());
    assert_close(&fft_vec(x), &naive_dft(&padded, -1.0), 1e-9);
}

#[test]
fn cosine_peaks_at_its_frequency() {
    let n = 64;
    let x: Vec<Complex64> = (0..n)
        .map(|i| {
            let t = 2.0 * std::f64::consts::PI * 5.0 * i as f64 / n as f64;
            Complex64::new(t.cos(), 0.0)
        })
        .collect();
    let spectrum = fft_vec(x);
    for (k, z) in spectrum.iter().enumerate() {
        if k == 5 || k == n - 5 {
            assert!((z.norm() - n as f64 / 2.0).abs() < 1e-9);
        } else {
            assert!(z.norm() < 1e-9, "bin {k}: {z:?}");
        }
    }
}

#[test]
fn unscaled_roundtrip_is_n_times_input() {
    let mut rng = StdRng::seed_from_u64(1234);
    let x = random_signal(&mut rng, 256);
    let y = ifft_vec(fft_vec(x.clone()));
    let expected: Vec<Complex64> = x.iter().map(|c| c.scale(256.0)).collect();
    assert_close(&y, &expected, 1e-8);
}

#[test]
fn single_precision_roundtrip() {
    let x: Vec<Complex32> = (0..32)
        .map(|i| Complex32::new(i as f32, (i % 3) as f32))
        .collect();
    let fft = Radix2Fft::<f32>::default();
    let y = fft.ifft_vec(fft.fft_vec(x.clone()));
    for (a, b) in x.iter().zip(y.iter()) {
        assert!((a.re - b.re / 32.0).abs() < 1e-3, "{a:?} vs {b:?}");
        assert!((a.im - b.im / 32.0).abs() < 1e-3, "{a:?} vs {b:?}");
    }
}

#[test]
fn in_place_rejects_non_power_of_two() {
    let fft = Radix2Fft::<f64>::default();
    let mut data = vec![Complex64::zero(); 6];
    assert!(matches!(
        fft.fft(&mut data),
        Err(FftError::NonPowerOfTwo { len: 6 })
    ));
    let msg = FftError::NonPowerOfTwo { len: 6 }.to_string();
    assert!(msg.contains('6'));
}
