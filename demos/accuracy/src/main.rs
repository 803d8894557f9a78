use argh::FromArgs;

use pixscale::{
    image::{ops, Image, ImageError, ImageSize},
    imgproc::{
        self,
        interpolation::{grid::align_corners_coords, InterpolationMode},
        metrics,
    },
};

#[derive(FromArgs)]
/// Compare the reconstruction error of the resampling kernels on synthetic images
struct Args {
    /// side of the low resolution source grid
    #[argh(option, default = "8")]
    source: usize,

    /// upsampling factor
    #[argh(option, default = "8")]
    factor: usize,

    /// standard deviation of the gaussian blob, in source pixels
    #[argh(option, default = "1.5")]
    sigma: f64,
}

/// Sample `f` on the integer source grid.
fn sampled(size: ImageSize, f: impl Fn(f64, f64) -> f64) -> Result<Image<f64>, ImageError> {
    Image::from_fn(size, 3, |x, y, _| f(x as f64, y as f64))
}

/// Evaluate `f` at the source coordinates each destination pixel samples.
fn ground_truth(
    src: ImageSize,
    dst: ImageSize,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Image<f64>, ImageError> {
    let xs = align_corners_coords(src.width, dst.width);
    let ys = align_corners_coords(src.height, dst.height);
    Image::from_fn(dst, 3, |x, y, _| f(xs[x], ys[y]))
}

fn overshoot(values: &[f64], lo: f64, hi: f64) -> f64 {
    let (min, max) = values
        .iter()
        .fold((f64::MAX, f64::MIN), |(a, b), &v| (a.min(v), b.max(v)));
    (max - hi).max(lo - min).max(0.0) / (hi - lo)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src_size = ImageSize {
        width: args.source,
        height: args.source,
    };
    let dst_size = ImageSize {
        width: args.source * args.factor,
        height: args.source * args.factor,
    };
    log::info!("upsampling {src_size} to {dst_size}");

    let center = (args.source as f64 - 1.0) / 2.0;
    let sigma = args.sigma;
    let gaussian = move |x: f64, y: f64| {
        100.0 * (-((x - center).powi(2) + (y - center).powi(2)) / (2.0 * sigma * sigma)).exp()
    };
    let plane = |x: f64, y: f64| 2.0 * x + 3.0 * y + 10.0;

    let constant = Image::<f64>::from_size_val(src_size, 3, 123.45)?;
    let constant_truth = Image::<f64>::from_size_val(dst_size, 3, 123.45)?;
    let plane_src = sampled(src_size, plane)?;
    let plane_truth = ground_truth(src_size, dst_size, plane)?;
    let gaussian_src = sampled(src_size, gaussian)?;
    let gaussian_truth = ground_truth(src_size, dst_size, gaussian)?;

    // a 50 -> 200 step, upsampled along x only
    let edge = Image::from_fn([20, 5].into(), 3, |x, _, _| if x < 10 { 50.0 } else { 200.0 })?;

    // a smooth u8 texture, halved and brought back
    let texture = Image::from_fn([64, 48].into(), 3, |x, y, _| {
        (128.0 + 60.0 * (x as f64 / 5.0).sin() * (y as f64 / 7.0).cos()).round() as u8
    })?;
    let small = imgproc::resample(&texture, [32, 24].into(), InterpolationMode::Bilinear)?;
    let mut texture_unit = Image::from_size_val(texture.size(), 3, 0.0)?;
    ops::cast_and_scale(&texture, &mut texture_unit, 1.0 / 255.0)?;

    println!(
        "{:<12} {:>14} {:>14} {:>14} {:>14} {:>12} {:>12}",
        "method",
        "constant max",
        "plane rmse",
        "gaussian rmse",
        "gaussian mae",
        "overshoot",
        "psnr (dB)"
    );

    for mode in InterpolationMode::ALL {
        let constant_err = metrics::max_abs_error(
            &imgproc::resample_raw(&constant, dst_size, mode)?,
            &constant_truth,
        )?;
        let plane_err = metrics::rmse(
            &imgproc::resample_raw(&plane_src, dst_size, mode)?,
            &plane_truth,
        )?;
        let gaussian_out = imgproc::resample_raw(&gaussian_src, dst_size, mode)?;
        let gaussian_err = metrics::rmse(&gaussian_out, &gaussian_truth)?;
        let gaussian_mae = metrics::l1_loss(&gaussian_out, &gaussian_truth)?;

        let step = imgproc::resample_raw(&edge, [400, 5].into(), mode)?;
        let ringing = overshoot(step.as_slice(), 50.0, 200.0);

        let restored = imgproc::resample(&small, texture.size(), mode)?;
        let mut restored_unit = Image::from_size_val(restored.size(), 3, 0.0)?;
        ops::cast_and_scale(&restored, &mut restored_unit, 1.0 / 255.0)?;
        let psnr = metrics::psnr(&texture_unit, &restored_unit, 1.0)?;

        println!(
            "{:<12} {:>14.3e} {:>14.3e} {:>14.4} {:>14.4} {:>11.2}% {:>12.2}",
            mode.name(),
            constant_err,
            plane_err,
            gaussian_err,
            gaussian_mae,
            ringing * 100.0,
            psnr
        );
    }

    Ok(())
}
