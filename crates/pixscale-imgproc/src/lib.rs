#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// interpolation kernels and coordinate grids.
pub mod interpolation;

/// image quality metrics module.
pub mod metrics;

/// resampling engine entry points.
pub mod resample;

/// separable axis resampling.
pub mod resize;

pub use interpolation::InterpolationMode;
pub use resample::{resample, resample_raw, ResampleRequest, MIN_TARGET_SIZE};
