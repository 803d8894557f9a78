use super::interpolate::KernelWeights;

/// Source coordinate decomposition for nearest neighbor.
///
/// The tap is the closest source sample, ties rounding up.
pub(crate) fn nearest_decompose(u: f64) -> (isize, f64) {
    ((u + 0.5).floor() as isize, 0.0)
}

/// Kernel for nearest neighbor interpolation: the tap value is copied as is.
pub(crate) fn nearest_weights(_t: f64) -> KernelWeights {
    [1.0, 0.0, 0.0, 0.0]
}
