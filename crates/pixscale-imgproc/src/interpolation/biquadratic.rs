use super::interpolate::KernelWeights;

/// Kernel for biquadratic interpolation
///
/// Quadratic Lagrange basis through the taps `x0 - 1`, `x0` and `x0 + 1`.
/// The weights sum to one but are not all positive, so the result can leave
/// the range of its taps near sharp edges.
///
/// # Arguments
///
/// * `t` - The fractional offset in `[0, 1)` of the source coordinate from `x0`.
///
/// # Returns
///
/// The weights of the three taps, the last slot is zero.
pub(crate) fn biquadratic_weights(t: f64) -> KernelWeights {
    [
        0.5 * t * (t - 1.0),
        -(t + 1.0) * (t - 1.0),
        0.5 * t * (t + 1.0),
        0.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn biquadratic_partition_of_unity() {
        for i in 0..100 {
            let t = i as f64 / 100.0;
            let w = biquadratic_weights(t);
            assert_abs_diff_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn biquadratic_interpolates_samples() {
        assert_eq!(biquadratic_weights(0.0), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn biquadratic_has_negative_lobe() {
        let w = biquadratic_weights(0.5);
        assert_abs_diff_eq!(w[0], -0.125, epsilon = 1e-15);
        assert_abs_diff_eq!(w[1], 0.75, epsilon = 1e-15);
        assert_abs_diff_eq!(w[2], 0.375, epsilon = 1e-15);
    }

    #[test]
    fn biquadratic_reproduces_parabola() {
        // f(x) = x^2 sampled at x0 - 1, x0, x0 + 1 with x0 = 3
        let taps = [4.0, 9.0, 16.0];
        for i in 0..10 {
            let t = i as f64 / 10.0;
            let w = biquadratic_weights(t);
            let value: f64 = taps.iter().zip(w.iter()).map(|(p, w)| p * w).sum();
            assert_abs_diff_eq!(value, (3.0 + t).powi(2), epsilon = 1e-12);
        }
    }
}
