use argh::FromArgs;
use std::path::PathBuf;

use pixscale::{
    image::{Image, ImageSize},
    imgproc::{self, interpolation::InterpolationMode},
};

#[derive(FromArgs)]
/// Resample an image file with one of the separable kernels
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to write the resampled image to
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// width of the output image
    #[argh(option, short = 'w')]
    width: usize,

    /// height of the output image
    #[argh(option)]
    height: usize,

    /// interpolation kernel: nearest, bilinear, biquadratic or bicubic
    #[argh(option, short = 'm', default = "String::from(\"bilinear\")")]
    mode: String,

    /// keep the alpha channel of the input when reading it
    #[argh(switch)]
    rgba: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mode = InterpolationMode::from_name_lenient(&args.mode);

    // read the image, optionally with its alpha channel
    let decoded = image::open(&args.image_path)?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    let image = if args.rgba {
        Image::new([width, height].into(), 4, decoded.into_rgba8().into_raw())?
    } else {
        Image::new([width, height].into(), 3, decoded.into_rgb8().into_raw())?
    };

    let new_size = ImageSize {
        width: args.width,
        height: args.height,
    };

    log::info!(
        "resampling {:?} from {} to {} with {mode}",
        args.image_path,
        image.size(),
        new_size
    );

    let resized = imgproc::resample(&image, new_size, mode)?;

    // below the minimum size the input comes back untouched, alpha included
    let [out_width, out_height]: [u32; 2] = resized.size().try_into()?;
    match resized.num_channels() {
        4 => image::RgbaImage::from_raw(out_width, out_height, resized.into_vec())
            .ok_or("failed to build the output buffer")?
            .save(&args.output_path)?,
        _ => image::RgbImage::from_raw(out_width, out_height, resized.into_vec())
            .ok_or("failed to build the output buffer")?
            .save(&args.output_path)?,
    }

    log::info!("wrote {:?}", args.output_path);

    Ok(())
}
