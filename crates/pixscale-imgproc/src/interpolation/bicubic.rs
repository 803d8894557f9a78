use super::interpolate::KernelWeights;

/// Kernel for bicubic interpolation
///
/// Four taps `x0 - 1 ..= x0 + 2` weighted by the cubic Lagrange basis
///
/// ```text
/// w0 = -t (t - 1) (t - 2) / 6
/// w1 = (t + 1) (t - 1) (t - 2) / 2
/// w2 = -(t + 1) t (t - 2) / 2
/// w3 = (t + 1) t (t - 1) / 6
/// ```
///
/// These reproduce any cubic polynomial exactly.
///
/// NOTE: this is not the Catmull-Rom kernel (cubic convolution with `a = -0.5`)
/// that most image libraries call bicubic:
///
/// ```text
/// w0 = -t^3 / 2 + t^2 - t / 2
/// w1 = 3 t^3 / 2 - 5 t^2 / 2 + 1
/// w2 = -3 t^3 / 2 + 2 t^2 + t / 2
/// w3 = t^3 / 2 - t^2 / 2
/// ```
///
/// The two only agree at `t = 0`, `t = 1/2` and `t = 1`, so results differ
/// from Catmull-Rom resizers everywhere else.
pub(crate) fn bicubic_weights(t: f64) -> KernelWeights {
    let tp1 = t + 1.0;
    let tm1 = t - 1.0;
    let tm2 = t - 2.0;
    [
        -t * tm1 * tm2 / 6.0,
        tp1 * tm1 * tm2 / 2.0,
        -tp1 * t * tm2 / 2.0,
        tp1 * t * tm1 / 6.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn catmull_rom(t: f64) -> KernelWeights {
        let t2 = t * t;
        let t3 = t2 * t;
        [
            -0.5 * t3 + t2 - 0.5 * t,
            1.5 * t3 - 2.5 * t2 + 1.0,
            -1.5 * t3 + 2.0 * t2 + 0.5 * t,
            0.5 * t3 - 0.5 * t2,
        ]
    }

    #[test]
    fn bicubic_partition_of_unity() {
        for i in 0..100 {
            let t = i as f64 / 100.0;
            let w = bicubic_weights(t);
            assert_abs_diff_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn bicubic_interpolates_samples() {
        let w = bicubic_weights(0.0);
        assert_abs_diff_eq!(w[0], 0.0);
        assert_abs_diff_eq!(w[1], 1.0);
        assert_abs_diff_eq!(w[2], 0.0);
        assert_abs_diff_eq!(w[3], 0.0);
    }

    #[test]
    fn bicubic_matches_catmull_rom_at_midpoint() {
        let w = bicubic_weights(0.5);
        let cr = catmull_rom(0.5);
        for k in 0..4 {
            assert_abs_diff_eq!(w[k], cr[k], epsilon = 1e-15);
        }
        assert_abs_diff_eq!(w[0], -0.0625, epsilon = 1e-15);
        assert_abs_diff_eq!(w[1], 0.5625, epsilon = 1e-15);
    }

    #[test]
    fn bicubic_differs_from_catmull_rom_off_midpoint() {
        let w = bicubic_weights(0.25);
        let cr = catmull_rom(0.25);
        assert!((w[0] - cr[0]).abs() > 1e-3);
    }

    #[test]
    fn bicubic_reproduces_cubic() {
        // f(x) = x^3 - 2x sampled at x0 - 1 ..= x0 + 2 with x0 = 1
        let f = |x: f64| x.powi(3) - 2.0 * x;
        let taps = [f(0.0), f(1.0), f(2.0), f(3.0)];
        for i in 0..10 {
            let t = i as f64 / 10.0;
            let w = bicubic_weights(t);
            let value: f64 = taps.iter().zip(w.iter()).map(|(p, w)| p * w).sum();
            assert_abs_diff_eq!(value, f(1.0 + t), epsilon = 1e-12);
        }
    }
}
