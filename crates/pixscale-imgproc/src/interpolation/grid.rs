/// Create `n` evenly spaced samples over `[start, end]`.
///
/// The first sample is exactly `start` and the last exactly `end`. A single
/// sample sits at `start`.
///
/// # Example
///
/// ```
/// use pixscale_imgproc::interpolation::grid::linspace;
///
/// assert_eq!(linspace(0.0, 4.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(linspace(0.0, 4.0, 1), vec![0.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (n - 1) as f64;
            (0..n).map(|i| start + span * i as f64 / last).collect()
        }
    }
}

/// Source coordinates sampled by each destination index along one axis.
///
/// Uses the align-corners convention: destination index `0` maps to source
/// index `0` and destination index `dst_len - 1` maps to `src_len - 1`.
///
/// # Arguments
///
/// * `src_len` - The length of the source axis.
/// * `dst_len` - The length of the destination axis.
///
/// # Returns
///
/// A vector of `dst_len` source coordinates.
pub fn align_corners_coords(src_len: usize, dst_len: usize) -> Vec<f64> {
    linspace(0.0, src_len.saturating_sub(1) as f64, dst_len)
}
