//! Image quality and similarity metrics.
//!
//! Used to score a resampled image against a reference, typically the
//! analytic function the source was sampled from.
//!
//! # Available Metrics
//!
//! - **MSE** (Mean Squared Error) and its square root **RMSE**
//! - **PSNR** (Peak Signal-to-Noise Ratio): Quality metric in dB scale
//! - **L1 Loss**: Mean absolute difference
//! - **Max absolute error**: Worst single-sample deviation

mod l1;
mod mse;

pub use l1::{l1_loss, max_abs_error};
pub use mse::{mse, psnr, rmse};

use pixscale_image::{Image, ImageError};

pub(crate) fn check_same_shape(image1: &Image<f64>, image2: &Image<f64>) -> Result<(), ImageError> {
    if image1.size() != image2.size() || image1.num_channels() != image2.num_channels() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }
    Ok(())
}
