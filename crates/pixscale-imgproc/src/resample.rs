use pixscale_image::{ops::strip_alpha, Image, ImageDtype, ImageError, ImageSize};

use crate::interpolation::InterpolationMode;
use crate::resize::resize_separable;

/// Target sizes with a side below this many pixels leave the image untouched.
pub const MIN_TARGET_SIZE: usize = 5;

/// A resampling request: the source, the target size and the kernel to use.
///
/// # Example
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_imgproc::interpolation::InterpolationMode;
/// use pixscale_imgproc::resample::ResampleRequest;
///
/// let image = Image::<u8>::from_size_val([8, 8].into(), 3, 42).unwrap();
/// let request = ResampleRequest::new(&image, [16, 12].into(), InterpolationMode::Bicubic);
///
/// let resized = request.resample().unwrap();
/// assert_eq!(resized.width(), 16);
/// assert_eq!(resized.height(), 12);
/// assert!(resized.as_slice().iter().all(|&v| v == 42));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResampleRequest<'a, T> {
    /// The image to resample.
    pub image: &'a Image<T>,
    /// The size of the output image.
    pub size: ImageSize,
    /// The interpolation kernel.
    pub mode: InterpolationMode,
}

impl<'a, T: ImageDtype> ResampleRequest<'a, T> {
    /// Create a new request.
    pub fn new(image: &'a Image<T>, size: ImageSize, mode: InterpolationMode) -> Self {
        Self { image, size, mode }
    }

    /// Run the request without quantization, see [`resample_raw`].
    pub fn resample_raw(&self) -> Result<Image<f64>, ImageError> {
        resample_raw(self.image, self.size, self.mode)
    }
}

impl ResampleRequest<'_, u8> {
    /// Run the request and quantize to 8 bits, see [`resample`].
    pub fn resample(&self) -> Result<Image<u8>, ImageError> {
        resample(self.image, self.size, self.mode)
    }
}

fn validate<T>(image: &Image<T>) -> Result<(), ImageError> {
    if image.is_empty() {
        return Err(ImageError::InvalidInput(format!(
            "cannot resample an empty image of {}",
            image.size()
        )));
    }

    match image.num_channels() {
        3 | 4 => Ok(()),
        n => Err(ImageError::UnsupportedFormat(n)),
    }
}

fn below_min_size(size: ImageSize) -> bool {
    let below = size.width < MIN_TARGET_SIZE || size.height < MIN_TARGET_SIZE;
    if below {
        log::trace!("target {size} below {MIN_TARGET_SIZE}px, leaving the image unchanged");
    }
    below
}

fn resample_unchecked<T: ImageDtype>(
    image: &Image<T>,
    new_size: ImageSize,
    mode: InterpolationMode,
) -> Result<Image<f64>, ImageError> {
    let rgb = strip_alpha(image)?;
    resize_separable(&rgb, new_size, mode)
}

/// Resample an RGB or RGBA image to a new size.
///
/// The alpha channel of RGBA input is dropped, the output always has three
/// channels. The result is clipped to `[0, 255]` and rounded.
///
/// # Arguments
///
/// * `image` - The input image with 3 or 4 channels.
/// * `new_size` - The size of the output image.
/// * `mode` - The interpolation kernel.
///
/// # Returns
///
/// The resampled image. If either side of `new_size` is below
/// [`MIN_TARGET_SIZE`] the input is returned unchanged instead.
///
/// # Errors
///
/// * [`ImageError::InvalidInput`] if the image is empty.
/// * [`ImageError::UnsupportedFormat`] if the image has neither 3 nor 4 channels.
///
/// # Example
///
/// ```
/// use pixscale_image::{Image, ImageSize};
/// use pixscale_imgproc::interpolation::InterpolationMode;
/// use pixscale_imgproc::resample::resample;
///
/// let image = Image::<u8>::from_fn([4, 5].into(), 4, |x, y, c| (x * 40 + y * 10 + c) as u8).unwrap();
///
/// let resized = resample(&image, [8, 10].into(), InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.size(), ImageSize { width: 8, height: 10 });
/// assert_eq!(resized.pixel(7, 9), Some(&[160u8, 161, 162][..]));
/// ```
pub fn resample(
    image: &Image<u8>,
    new_size: ImageSize,
    mode: InterpolationMode,
) -> Result<Image<u8>, ImageError> {
    validate(image)?;

    if below_min_size(new_size) {
        return Ok(image.clone());
    }

    let raw = resample_unchecked(image, new_size, mode)?;
    Ok(quantize(&raw))
}

/// Resample an RGB or RGBA image to a new size, keeping raw `f64` samples.
///
/// Same contract as [`resample`] without clipping or rounding: kernels that
/// overshoot report values outside of the input range. Used to measure
/// reconstruction error against analytic ground truth.
///
/// When either side of `new_size` is below [`MIN_TARGET_SIZE`] the input is
/// returned unchanged, widened to `f64`, with all its channels.
///
/// # Errors
///
/// * [`ImageError::InvalidInput`] if the image is empty.
/// * [`ImageError::UnsupportedFormat`] if the image has neither 3 nor 4 channels.
pub fn resample_raw<T: ImageDtype>(
    image: &Image<T>,
    new_size: ImageSize,
    mode: InterpolationMode,
) -> Result<Image<f64>, ImageError> {
    validate(image)?;

    if below_min_size(new_size) {
        return Ok(image.map(|&v| v.to_f64()));
    }

    resample_unchecked(image, new_size, mode)
}

/// Clip raw samples to `[0, 255]` and round them to 8 bits.
///
/// # Example
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_imgproc::resample::quantize;
///
/// let raw = Image::<f64>::new([4, 1].into(), 1, vec![-3.2, 12.5, 254.49, 261.0]).unwrap();
/// assert_eq!(quantize(&raw).as_slice(), &[0, 13, 254, 255]);
/// ```
pub fn quantize(image: &Image<f64>) -> Image<u8> {
    image.map(|&v| u8::from_f64(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(size: ImageSize, channels: usize) -> Result<Image<u8>, ImageError> {
        Image::from_fn(size, channels, |x, y, c| ((x * 13 + y * 7 + c * 50) % 256) as u8)
    }

    #[test]
    fn resample_smoke_ch3() -> Result<(), ImageError> {
        let image = gradient([12, 9].into(), 3)?;
        for mode in InterpolationMode::ALL {
            let out = resample(&image, [20, 6].into(), mode)?;
            assert_eq!(out.size(), ImageSize { width: 20, height: 6 });
            assert_eq!(out.num_channels(), 3);
        }
        Ok(())
    }

    #[test]
    fn resample_drops_alpha() -> Result<(), ImageError> {
        let rgba = gradient([6, 6].into(), 4)?;
        let rgb = strip_alpha(&rgba)?;
        for mode in InterpolationMode::ALL {
            let from_rgba = resample(&rgba, [9, 7].into(), mode)?;
            let from_rgb = resample(&rgb, [9, 7].into(), mode)?;
            assert_eq!(from_rgba.num_channels(), 3);
            assert_eq!(from_rgba, from_rgb);
        }
        Ok(())
    }

    #[test]
    fn resample_min_size_guard() -> Result<(), ImageError> {
        let image = gradient([8, 8].into(), 4)?;
        for mode in InterpolationMode::ALL {
            for size in [[4, 20], [20, 4], [1, 1]] {
                let out = resample(&image, size.into(), mode)?;
                assert_eq!(out, image);

                let raw = resample_raw(&image, size.into(), mode)?;
                assert_eq!(raw.num_channels(), 4);
                assert_eq!(raw.size(), image.size());
                assert!(raw
                    .as_slice()
                    .iter()
                    .zip(image.as_slice())
                    .all(|(&r, &p)| r == p as f64));
            }
        }
        Ok(())
    }

    #[test]
    fn resample_rejects_empty() -> Result<(), ImageError> {
        let empty = Image::<u8>::new([0, 0].into(), 3, vec![])?;
        let res = resample(&empty, [10, 10].into(), InterpolationMode::Bilinear);
        assert!(matches!(res, Err(ImageError::InvalidInput(_))));
        Ok(())
    }

    #[test]
    fn resample_rejects_unsupported_channels() -> Result<(), ImageError> {
        for channels in [1, 2, 5] {
            let image = gradient([6, 6].into(), channels)?;
            let res = resample(&image, [10, 10].into(), InterpolationMode::Bicubic);
            assert_eq!(res, Err(ImageError::UnsupportedFormat(channels)));

            // the format check runs before the size guard
            let res = resample_raw(&image, [2, 2].into(), InterpolationMode::Bicubic);
            assert_eq!(res, Err(ImageError::UnsupportedFormat(channels)));
        }
        Ok(())
    }

    #[test]
    fn resample_raw_accepts_float_input() -> Result<(), ImageError> {
        let image = Image::<f32>::from_size_val([6, 6].into(), 3, 0.5)?;
        let out = resample_raw(&image, [12, 12].into(), InterpolationMode::Biquadratic)?;
        assert!(out.as_slice().iter().all(|&v| (v - 0.5).abs() < 1e-12));
        Ok(())
    }

    #[test]
    fn resample_does_not_mutate_input() -> Result<(), ImageError> {
        let image = gradient([7, 7].into(), 3)?;
        let copy = image.clone();
        let _ = resample(&image, [14, 14].into(), InterpolationMode::Bicubic)?;
        assert_eq!(image, copy);
        Ok(())
    }

    #[test]
    fn request_matches_free_functions() -> Result<(), ImageError> {
        let image = gradient([10, 8].into(), 3)?;
        let request = ResampleRequest::new(&image, [15, 13].into(), InterpolationMode::Bicubic);
        assert_eq!(
            request.resample()?,
            resample(&image, [15, 13].into(), InterpolationMode::Bicubic)?
        );
        assert_eq!(
            request.resample_raw()?,
            resample_raw(&image, [15, 13].into(), InterpolationMode::Bicubic)?
        );
        Ok(())
    }

    #[test]
    fn quantize_clips_overshoot() -> Result<(), ImageError> {
        // a hard 0 -> 255 edge overshoots with the bicubic kernel
        let image = Image::from_fn([8, 8].into(), 3, |x, _, _| if x < 4 { 0u8 } else { 255 })?;
        let raw = resample_raw(&image, [40, 8].into(), InterpolationMode::Bicubic)?;
        let (min, max) = raw
            .as_slice()
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        assert!(min < 0.0);
        assert!(max > 255.0);

        let quantized = resample(&image, [40, 8].into(), InterpolationMode::Bicubic)?;
        assert_eq!(quantized, quantize(&raw));
        assert!(quantized.as_slice().contains(&0));
        assert!(quantized.as_slice().contains(&255));
        Ok(())
    }
}
