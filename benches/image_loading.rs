// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_zoom::media::{decode_raster, decode_svg};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

const SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256">
<circle cx="128" cy="128" r="100" fill="teal"/></svg>"#;

fn sample_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(512, 512, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode sample png");
    bytes.into_inner()
}

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");
    let png = sample_png();

    group.bench_function("decode_png_512", |b| {
        b.iter(|| {
            let _ = black_box(decode_raster(black_box(&png)).expect("decode png"));
        });
    });

    group.bench_function("rasterize_svg_256", |b| {
        b.iter(|| {
            let _ = black_box(decode_svg(black_box(SVG)).expect("rasterize svg"));
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
