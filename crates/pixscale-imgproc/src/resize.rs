use pixscale_image::{Image, ImageDtype, ImageError, ImageSize};

use crate::interpolation::{grid::align_corners_coords, InterpolationMode};

/// The spatial axis a resampling pass runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the rows, changes the width.
    Horizontal,
    /// Along the columns, changes the height.
    Vertical,
}

/// Precomputed taps of one resampling pass.
///
/// For every destination index this stores the edge-clamped source indices
/// the kernel reads and their weights, so the inner loops only multiply and add.
#[derive(Debug, Clone)]
pub struct AxisWeights {
    num_taps: usize,
    indices: Vec<usize>,
    weights: Vec<f64>,
}

impl AxisWeights {
    /// Compute the taps to resample an axis of length `src_len` to `dst_len`.
    ///
    /// # Arguments
    ///
    /// * `src_len` - The length of the source axis.
    /// * `dst_len` - The length of the destination axis.
    /// * `mode` - The interpolation kernel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidInput`] if either length is zero.
    pub fn new(
        src_len: usize,
        dst_len: usize,
        mode: InterpolationMode,
    ) -> Result<Self, ImageError> {
        if src_len == 0 || dst_len == 0 {
            return Err(ImageError::InvalidInput(format!(
                "cannot resample an axis of length {src_len} to {dst_len}"
            )));
        }

        let num_taps = mode.num_taps();
        let offset = mode.first_tap_offset();
        let last = (src_len - 1) as isize;

        let mut indices = Vec::with_capacity(dst_len * num_taps);
        let mut weights = Vec::with_capacity(dst_len * num_taps);

        for u in align_corners_coords(src_len, dst_len) {
            let (x0, t) = mode.decompose(u);
            let w = mode.weights(t);
            for (k, &wk) in w.iter().enumerate().take(num_taps) {
                let idx = (x0 + offset + k as isize).clamp(0, last);
                indices.push(idx as usize);
                weights.push(wk);
            }
        }

        Ok(Self {
            num_taps,
            indices,
            weights,
        })
    }

    /// Number of destination samples.
    pub fn len(&self) -> usize {
        self.indices.len() / self.num_taps
    }

    /// Whether there is no destination sample.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of taps per destination sample.
    pub fn num_taps(&self) -> usize {
        self.num_taps
    }

    /// The source indices and weights contributing to destination index `i`.
    pub fn taps(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = i * self.num_taps..(i + 1) * self.num_taps;
        self.indices[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }
}

/// Resample one spatial axis of an image.
///
/// The other spatial axis and the channels are left untouched. The output is
/// always `f64`, no quantization happens between passes.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C), any channel count.
/// * `new_len` - The new length of the resampled axis.
/// * `axis` - The axis to resample.
/// * `mode` - The interpolation kernel.
///
/// # Returns
///
/// The resampled image, with shape (H, new_len, C) for [`Axis::Horizontal`]
/// or (new_len, W, C) for [`Axis::Vertical`].
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if the source image or `new_len` is empty.
///
/// # Example
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_imgproc::interpolation::InterpolationMode;
/// use pixscale_imgproc::resize::{resize_axis, Axis};
///
/// let row = Image::<u8>::new([2, 1].into(), 1, vec![0, 100]).unwrap();
/// let wide = resize_axis(&row, 5, Axis::Horizontal, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(wide.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
pub fn resize_axis<T: ImageDtype>(
    src: &Image<T>,
    new_len: usize,
    axis: Axis,
    mode: InterpolationMode,
) -> Result<Image<f64>, ImageError> {
    if src.is_empty() {
        return Err(ImageError::InvalidInput(format!(
            "cannot resample the {axis:?} axis of an empty image of {}",
            src.size()
        )));
    }

    let (cols, rows, channels) = (src.cols(), src.rows(), src.num_channels());
    let data = src.as_slice();

    match axis {
        Axis::Horizontal => {
            let taps = AxisWeights::new(cols, new_len, mode)?;
            let mut dst = vec![0.0f64; rows * new_len * channels];

            for (src_row, dst_row) in data
                .chunks_exact(cols * channels)
                .zip(dst.chunks_exact_mut(new_len * channels))
            {
                for (x, dst_px) in dst_row.chunks_exact_mut(channels).enumerate() {
                    for (idx, w) in taps.taps(x) {
                        let src_px = &src_row[idx * channels..(idx + 1) * channels];
                        for (out, &p) in dst_px.iter_mut().zip(src_px) {
                            *out += w * p.to_f64();
                        }
                    }
                }
            }

            Image::new(
                ImageSize {
                    width: new_len,
                    height: rows,
                },
                channels,
                dst,
            )
        }
        Axis::Vertical => {
            let taps = AxisWeights::new(rows, new_len, mode)?;
            let stride = cols * channels;
            let mut dst = vec![0.0f64; new_len * stride];

            for (y, dst_row) in dst.chunks_exact_mut(stride).enumerate() {
                for (idx, w) in taps.taps(y) {
                    let src_row = &data[idx * stride..(idx + 1) * stride];
                    for (out, &p) in dst_row.iter_mut().zip(src_row) {
                        *out += w * p.to_f64();
                    }
                }
            }

            Image::new(
                ImageSize {
                    width: cols,
                    height: new_len,
                },
                channels,
                dst,
            )
        }
    }
}

/// Resize an image with two separable passes, horizontal then vertical.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C), any channel count.
/// * `new_size` - The size of the output image.
/// * `mode` - The interpolation kernel.
///
/// # Returns
///
/// The resized image as raw, unclipped `f64` samples.
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if the source or the target size is empty.
///
/// # Example
///
/// ```
/// use pixscale_image::{Image, ImageSize};
/// use pixscale_imgproc::interpolation::InterpolationMode;
/// use pixscale_imgproc::resize::resize_separable;
///
/// let image = Image::<f64>::from_size_val([10, 10].into(), 1, 123.45).unwrap();
/// let resized = resize_separable(&image, [30, 30].into(), InterpolationMode::Bicubic).unwrap();
///
/// assert_eq!(resized.size(), ImageSize { width: 30, height: 30 });
/// assert!(resized.as_slice().iter().all(|v| (v - 123.45).abs() < 1e-9));
/// ```
pub fn resize_separable<T: ImageDtype>(
    src: &Image<T>,
    new_size: ImageSize,
    mode: InterpolationMode,
) -> Result<Image<f64>, ImageError> {
    if src.is_empty() {
        return Err(ImageError::InvalidInput("source image is empty".to_string()));
    }

    if new_size.is_empty() {
        return Err(ImageError::InvalidInput(format!(
            "target size {new_size} is empty"
        )));
    }

    log::debug!(
        "resampling {} -> {} with {mode} ({} channels)",
        src.size(),
        new_size,
        src.num_channels()
    );

    let horizontal = resize_axis(src, new_size.width, Axis::Horizontal, mode)?;
    resize_axis(&horizontal, new_size.height, Axis::Vertical, mode)
}
