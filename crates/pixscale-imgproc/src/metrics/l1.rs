use pixscale_image::{Image, ImageError};

use super::check_same_shape;

/// Compute the L1 loss between two images.
///
/// The L1 loss is defined as:
///
/// $ L1(a, b) = \frac{1}{N} \sum_{i=1}^{N} |a_i - b_i| $
///
/// where `a` and `b` are the two images and `N` is the number of samples.
///
/// # Example
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_imgproc::metrics::l1_loss;
///
/// let image1 = Image::<f64>::new([3, 2].into(), 1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let image2 = Image::<f64>::new([3, 2].into(), 1, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]).unwrap();
///
/// assert_eq!(l1_loss(&image1, &image2).unwrap(), 3.0);
/// ```
pub fn l1_loss(image1: &Image<f64>, image2: &Image<f64>) -> Result<f64, ImageError> {
    check_same_shape(image1, image2)?;

    if image1.numel() == 0 {
        return Ok(0.0);
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice())
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>();

    Ok(sum / image1.numel() as f64)
}

/// Compute the largest absolute difference between two images.
pub fn max_abs_error(image1: &Image<f64>, image2: &Image<f64>) -> Result<f64, ImageError> {
    check_same_shape(image1, image2)?;

    Ok(image1
        .as_slice()
        .iter()
        .zip(image2.as_slice())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max))
}
