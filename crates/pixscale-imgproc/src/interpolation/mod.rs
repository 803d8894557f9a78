//! Interpolation kernels used when resampling images.
//!
//! Every kernel is separable: a 1-D weight function evaluated at the
//! fractional offset `t` of a source coordinate, applied once per axis.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: single tap, no blending
//! - **Bilinear**: two taps, convex combination
//! - **Biquadratic**: three taps, quadratic Lagrange basis (may overshoot)
//! - **Bicubic**: four taps, cubic Lagrange basis (may overshoot)
//!
//! Source indices outside the image are clamped to the border (edge replication).

mod bicubic;
mod bilinear;
mod biquadratic;

/// Coordinate grids mapping destination samples to source coordinates.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use interpolate::{InterpolationMode, KernelWeights, MAX_TAPS};
