use crate::{Image, ImageError};

/// Cast the pixel data of an image to a different type.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `scale` - The scale to multiply the pixel data with.
///
/// Example:
///
/// ```
/// use pixscale_image::{Image, ImageSize};
/// use pixscale_image::ops::cast_and_scale;
///
/// let image = Image::<u8>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     1,
///     vec![0u8, 128],
/// ).unwrap();
///
/// let mut image_f32 = Image::from_size_val(image.size(), 1, 0.0f32).unwrap();
///
/// cast_and_scale(&image, &mut image_f32, 0.5).unwrap();
///
/// assert_eq!(image_f32.get_pixel(0, 0, 0).unwrap(), 0.0f32);
/// assert_eq!(image_f32.get_pixel(1, 0, 0).unwrap(), 64.0f32);
/// ```
pub fn cast_and_scale<T, U>(src: &Image<T>, dst: &mut Image<U>, scale: U) -> Result<(), ImageError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    if src.size() != dst.size() || src.num_channels() != dst.num_channels() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .try_for_each(|(out, &inp)| {
            let x = U::from(inp).ok_or(ImageError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            *out = x * scale;
            Ok::<(), ImageError>(())
        })?;

    Ok(())
}

/// Drop the alpha channel of an RGBA image.
///
/// Images with any channel count other than 4 are returned as an unchanged copy.
///
/// Example:
///
/// ```
/// use pixscale_image::Image;
/// use pixscale_image::ops::strip_alpha;
///
/// let rgba = Image::<u8>::new([2, 1].into(), 4, vec![1, 2, 3, 255, 4, 5, 6, 0]).unwrap();
/// let rgb = strip_alpha(&rgba).unwrap();
///
/// assert_eq!(rgb.num_channels(), 3);
/// assert_eq!(rgb.as_slice(), &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn strip_alpha<T: Copy>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    if src.num_channels() != 4 {
        return Ok(src.clone());
    }

    let rgb = src
        .as_slice()
        .chunks_exact(4)
        .flat_map(|px| px[..3].iter().copied())
        .collect();

    Image::new(src.size(), 3, rgb)
}
