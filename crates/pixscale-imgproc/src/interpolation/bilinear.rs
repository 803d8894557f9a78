use super::interpolate::KernelWeights;

/// Kernel for bilinear interpolation
///
/// Taps `x0` and `x0 + 1`, weighted `1 - t` and `t`.
///
/// # Arguments
///
/// * `t` - The fractional offset in `[0, 1)` of the source coordinate from `x0`.
///
/// # Returns
///
/// The weights of the two taps, the remaining slots are zero.
pub(crate) fn bilinear_weights(t: f64) -> KernelWeights {
    [1.0 - t, t, 0.0, 0.0]
}
