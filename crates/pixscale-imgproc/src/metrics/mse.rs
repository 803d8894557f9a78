use pixscale_image::{Image, ImageError};

use super::check_same_shape;

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of samples.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The mean squared error between the two images.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different shapes.
///
/// # Example
///
/// ```
/// use pixscale_image::{Image, ImageSize};
/// use pixscale_imgproc::metrics::mse;
///
/// let image1 = Image::<f64>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    1,
///    vec![0.0, 1.0, 2.0, 3.0],
/// )
/// .unwrap();
///
/// let image2 = Image::<f64>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    1,
///    vec![0.0, 3.0, 2.0, 3.0],
/// )
/// .unwrap();
///
/// assert_eq!(mse(&image1, &image2).unwrap(), 1.0);
/// ```
pub fn mse(image1: &Image<f64>, image2: &Image<f64>) -> Result<f64, ImageError> {
    check_same_shape(image1, image2)?;

    if image1.numel() == 0 {
        return Ok(0.0);
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>();

    Ok(sum / image1.numel() as f64)
}

/// Compute the root mean squared error (RMSE) between two images.
///
/// Same units as the pixel values, see [`mse`].
pub fn rmse(image1: &Image<f64>, image2: &Image<f64>) -> Result<f64, ImageError> {
    Ok(mse(image1, image2)?.sqrt())
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 20 \log_{10} \left( \frac{MAX}{\sqrt{MSE}} \right) $
///
/// where `MAX` is the maximum possible pixel value and `MSE` is the mean squared error.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `max_value` - The maximum possible pixel value, 255 for 8-bit data.
///
/// # Returns
///
/// The PSNR in decibels, infinite for identical images.
///
/// # Example
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_imgproc::metrics::psnr;
///
/// let image1 = Image::<f64>::new([2, 1].into(), 1, vec![0.0, 10.0]).unwrap();
/// let image2 = Image::<f64>::new([2, 1].into(), 1, vec![1.0, 9.0]).unwrap();
///
/// // MSE = 1, so PSNR = 20 * log10(255)
/// let value = psnr(&image1, &image2, 255.0).unwrap();
/// assert!((value - 48.1308).abs() < 1e-4);
/// ```
pub fn psnr(image1: &Image<f64>, image2: &Image<f64>, max_value: f64) -> Result<f64, ImageError> {
    let mse = mse(image1, image2)?;

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(20.0 * (max_value / mse.sqrt()).log10())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pixscale_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_equal() -> Result<(), ImageError> {
        let image1 = Image::<f64>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            1,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;
        let image2 = image1.clone();
        assert_eq!(crate::metrics::mse(&image1, &image2)?, 0.0);
        assert_eq!(crate::metrics::psnr(&image1, &image2, 255.0)?, f64::INFINITY);

        Ok(())
    }

    #[test]
    fn test_rmse() -> Result<(), ImageError> {
        let image1 = Image::<f64>::from_size_val([3, 3].into(), 3, 10.0)?;
        let image2 = Image::<f64>::from_size_val([3, 3].into(), 3, 13.0)?;
        assert_abs_diff_eq!(crate::metrics::rmse(&image1, &image2)?, 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_psnr() -> Result<(), ImageError> {
        let image1 = Image::<f64>::from_size_val([4, 4].into(), 3, 100.0)?;
        let image2 = Image::<f64>::from_size_val([4, 4].into(), 3, 110.0)?;
        // MSE = 100, PSNR = 20 * log10(255 / 10)
        let psnr = crate::metrics::psnr(&image1, &image2, 255.0)?;
        assert_abs_diff_eq!(psnr, 28.130803608679106, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() -> Result<(), ImageError> {
        let image1 = Image::<f64>::from_size_val([4, 4].into(), 3, 0.0)?;
        let image2 = Image::<f64>::from_size_val([4, 4].into(), 1, 0.0)?;
        assert_eq!(
            crate::metrics::mse(&image1, &image2),
            Err(ImageError::InvalidImageSize(4, 4, 4, 4))
        );
        Ok(())
    }
}
