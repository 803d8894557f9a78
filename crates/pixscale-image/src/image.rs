use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixscale_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Whether the size covers no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Sizes handed to codecs are 32-bit, larger sides are rejected.
impl TryFrom<ImageSize> for [u32; 2] {
    type Error = ImageError;

    fn try_from(size: ImageSize) -> Result<Self, Self::Error> {
        match (u32::try_from(size.width), u32::try_from(size.height)) {
            (Ok(width), Ok(height)) => Ok([width, height]),
            _ => Err(ImageError::InvalidInput(format!(
                "{size} does not fit in 32-bit dimensions"
            ))),
        }
    }
}

/// Trait for image data types.
///
/// Pixel values are widened to `f64` for every interpolation pass and narrowed
/// back with saturation, so `from_f64` is where quantization happens.
pub trait ImageDtype: Copy + Default + Send + Sync + 'static {
    /// Convert the pixel value to f64 without loss.
    fn to_f64(self) -> f64;

    /// Convert a f64 value to the image data type.
    fn from_f64(x: f64) -> Self;
}

impl ImageDtype for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(x: f64) -> Self {
        x
    }
}

impl ImageDtype for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl ImageDtype for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(x: f64) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

impl ImageDtype for u16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(x: f64) -> Self {
        x.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with shape (H, W, C), where H is the height
/// of the image, W the width and C the number of channels. The channel count
/// is a runtime property so that RGB and RGBA sources can share one engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    num_channels: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `num_channels` - The number of channels per pixel.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the
    /// image has no channels, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixscale_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    3,
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, num_channels: usize, data: Vec<T>) -> Result<Self, ImageError> {
        if num_channels == 0 {
            return Err(ImageError::InvalidInput(
                "image must have at least one channel".to_string(),
            ));
        }

        // check if the data length matches the image size
        let expected = size.width * size.height * num_channels;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            num_channels,
            data,
        })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixscale_image::{Image, ImageSize};
    ///
    /// let image = Image::<f64>::from_size_val([4, 2].into(), 1, 123.45).unwrap();
    ///
    /// assert_eq!(image.numel(), 8);
    /// assert!(image.as_slice().iter().all(|&v| v == 123.45));
    /// ```
    pub fn from_size_val(size: ImageSize, num_channels: usize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * num_channels];
        Image::new(size, num_channels, data)
    }

    /// Create a new image by evaluating `f(x, y, channel)` at every sample.
    ///
    /// Handy to sample analytic functions on the pixel grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixscale_image::{Image, ImageSize};
    ///
    /// let plane = Image::from_fn([3, 2].into(), 1, |x, y, _| (2 * x + 3 * y) as f64).unwrap();
    ///
    /// assert_eq!(plane.get([1, 2, 0]), Some(&7.0));
    /// ```
    pub fn from_fn(
        size: ImageSize,
        num_channels: usize,
        mut f: impl FnMut(usize, usize, usize) -> T,
    ) -> Result<Self, ImageError> {
        let mut data = Vec::with_capacity(size.width * size.height * num_channels);
        for y in 0..size.height {
            for x in 0..size.width {
                for c in 0..num_channels {
                    data.push(f(x, y, c));
                }
            }
        }

        Image::new(size, num_channels, data)
    }

    /// Apply `f` to every sample, keeping the image shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixscale_image::Image;
    ///
    /// let image = Image::<u8>::new([2, 1].into(), 1, vec![10, 20]).unwrap();
    /// let halved = image.map(|&v| v as f64 / 2.0);
    ///
    /// assert_eq!(halved.as_slice(), &[5.0, 10.0]);
    /// ```
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Image<U> {
        Image {
            size: self.size,
            num_channels: self.num_channels,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Get the total number of samples (H * W * C).
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no pixel.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to a sample given its `[row, col, channel]` index.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= self.num_channels {
            return None;
        }
        self.data.get((y * self.width() + x) * self.num_channels + c)
    }

    /// Get all the channels of a pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let base = (y * self.width() + x) * self.num_channels;
        self.data.get(base..base + self.num_channels)
    }

    /// Get the pixel data of the image.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    ///
    /// # Returns
    ///
    /// The pixel value at the given coordinates.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= self.num_channels {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, self.num_channels));
        }

        Ok(self.data[(y * self.width() + x) * self.num_channels + ch])
    }

    /// Get a channel of the image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T>, ImageError>
    where
        T: Copy,
    {
        if channel >= self.num_channels {
            return Err(ImageError::ChannelIndexOutOfBounds(
                channel,
                self.num_channels,
            ));
        }

        let channel_data = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.num_channels)
            .copied()
            .collect();

        Image::new(self.size, 1, channel_data)
    }

    /// Split the image into its channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixscale_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   },
    ///   2,
    ///   0.0f32,
    /// ).unwrap();
    ///
    /// let channels = image.split_channels().unwrap();
    /// assert_eq!(channels.len(), 2);
    /// ```
    pub fn split_channels(&self) -> Result<Vec<Image<T>>, ImageError>
    where
        T: Copy,
    {
        (0..self.num_channels).map(|i| self.channel(i)).collect()
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a value cannot be represented in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        T: Copy + num_traits::NumCast,
        U: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| {
                U::from(x).ok_or_else(|| ImageError::CastError(std::any::type_name::<U>().into()))
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, self.num_channels, casted_data)
    }
}
