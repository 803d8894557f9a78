use pixscale_image::ImageError;

use super::bicubic::bicubic_weights;
use super::bilinear::bilinear_weights;
use super::biquadratic::biquadratic_weights;
use super::nearest::{nearest_decompose, nearest_weights};

/// The maximum number of taps any kernel reads along one axis.
pub const MAX_TAPS: usize = 4;

/// Per-tap weights of a kernel along one axis. Slots past `num_taps` are zero.
pub type KernelWeights = [f64; MAX_TAPS];

/// Interpolation mode for the resize operation
///
/// The mode is passed explicitly on every call; the engine keeps no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Biquadratic interpolation
    Biquadratic,
    /// Bicubic interpolation, cubic Lagrange weights rather than Catmull-Rom
    Bicubic,
}

impl InterpolationMode {
    /// All the supported modes, from the cheapest to the smoothest.
    pub const ALL: [InterpolationMode; 4] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Biquadratic,
        InterpolationMode::Bicubic,
    ];

    /// The lowercase name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Biquadratic => "biquadratic",
            InterpolationMode::Bicubic => "bicubic",
        }
    }

    /// Parse a mode name, falling back to [`InterpolationMode::Bilinear`] for
    /// anything unrecognized.
    ///
    /// # Example
    ///
    /// ```
    /// use pixscale_imgproc::interpolation::InterpolationMode;
    ///
    /// assert_eq!(InterpolationMode::from_name_lenient("bicubic"), InterpolationMode::Bicubic);
    /// assert_eq!(InterpolationMode::from_name_lenient("lanczos"), InterpolationMode::Bilinear);
    /// ```
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown interpolation mode {name:?}, using bilinear");
            InterpolationMode::Bilinear
        })
    }

    /// Number of source samples read per destination sample along one axis.
    pub fn num_taps(&self) -> usize {
        match self {
            InterpolationMode::Nearest => 1,
            InterpolationMode::Bilinear => 2,
            InterpolationMode::Biquadratic => 3,
            InterpolationMode::Bicubic => 4,
        }
    }

    /// Offset of the first tap relative to the base index `x0`.
    pub fn first_tap_offset(&self) -> isize {
        match self {
            InterpolationMode::Nearest | InterpolationMode::Bilinear => 0,
            InterpolationMode::Biquadratic | InterpolationMode::Bicubic => -1,
        }
    }

    /// Split a source coordinate into the base index `x0` and the fractional
    /// offset `t` the weights are evaluated at.
    ///
    /// # Arguments
    ///
    /// * `u` - The source coordinate along one axis.
    ///
    /// # Returns
    ///
    /// The tuple `(x0, t)`, with `t` in `[0, 1)`. Nearest neighbor rounds to
    /// the closest sample and always reports `t = 0`.
    pub fn decompose(&self, u: f64) -> (isize, f64) {
        match self {
            InterpolationMode::Nearest => nearest_decompose(u),
            _ => {
                let x0 = u.floor();
                (x0 as isize, u - x0)
            }
        }
    }

    /// Evaluate the kernel weights at the fractional offset `t`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixscale_imgproc::interpolation::InterpolationMode;
    ///
    /// let w = InterpolationMode::Bilinear.weights(0.25);
    /// assert_eq!(w, [0.75, 0.25, 0.0, 0.0]);
    /// ```
    pub fn weights(&self, t: f64) -> KernelWeights {
        match self {
            InterpolationMode::Nearest => nearest_weights(t),
            InterpolationMode::Bilinear => bilinear_weights(t),
            InterpolationMode::Biquadratic => biquadratic_weights(t),
            InterpolationMode::Bicubic => bicubic_weights(t),
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for InterpolationMode {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterpolationMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImageError::InvalidInput(format!("unknown interpolation mode {s:?}")))
    }
}
