use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixscale_image::{Image, ImageSize};
use pixscale_imgproc::{
    interpolation::InterpolationMode,
    resample,
    resize::{resize_axis, Axis},
};

fn resize_image_crate(image: &Image<u8>, new_size: ImageSize) -> Option<Vec<u8>> {
    let rgb = image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_slice().to_vec(),
    )?;
    let resized = image::imageops::resize(
        &rgb,
        new_size.width as u32,
        new_size.height as u32,
        image::imageops::FilterType::CatmullRom,
    );
    Some(resized.into_raw())
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resample");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let image = Image::<u8>::from_fn([*width, *height].into(), 3, |x, y, c| {
            ((x * 3 + y * 5 + c * 7) % 256) as u8
        })
        .unwrap();

        for (label, new_size) in [
            ("down", ImageSize {
                width: width / 2,
                height: height / 2,
            }),
            ("up", ImageSize {
                width: width * 2,
                height: height * 2,
            }),
        ] {
            let parameter_string = format!("{width}x{height}_{label}");

            for mode in InterpolationMode::ALL {
                group.bench_with_input(
                    BenchmarkId::new(mode.name(), &parameter_string),
                    &image,
                    |b, i| {
                        b.iter(|| {
                            resample(black_box(i), black_box(new_size), black_box(mode))
                        })
                    },
                );
            }

            group.bench_with_input(
                BenchmarkId::new("image_rs_catmull_rom", &parameter_string),
                &image,
                |b, i| b.iter(|| resize_image_crate(black_box(i), black_box(new_size))),
            );
        }
    }
    group.finish();
}

fn bench_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("ResampleAxis");

    let image = Image::<f64>::from_size_val([640, 480].into(), 3, 0.5).unwrap();

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let new_len = match axis {
            Axis::Horizontal => 1280,
            Axis::Vertical => 960,
        };
        group.bench_with_input(
            BenchmarkId::new("bicubic", format!("{axis:?}")),
            &image,
            |b, i| {
                b.iter(|| {
                    resize_axis(
                        black_box(i),
                        black_box(new_len),
                        black_box(axis),
                        black_box(InterpolationMode::Bicubic),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resample, bench_axis);
criterion_main!(benches);
