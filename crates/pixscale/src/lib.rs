#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixscale_image as image;

#[doc(inline)]
pub use pixscale_imgproc as imgproc;
