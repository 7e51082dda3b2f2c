use std::cmp::Ordering;
use std::path::Path;

use image::{imageops, DynamicImage, ImageReader, RgbaImage};

pub mod error;

use crate::epd::image::MonoImage;
use error::PrepError;

/// The panel's two tones; the quantizer dithers everything onto these.
const MONO_PALETTE: &[[u8; 4]] = &[
    [0, 0, 0, 255],       // Black
    [255, 255, 255, 255], // White
];

/** Load an image file and render it as a 1-bit bitmap sized for the panel. */
pub fn load_mono(
    path: &Path,
    width: u32,
    height: u32,
    no_crop: bool,
) -> Result<MonoImage, PrepError> {
    let original = ImageReader::open(path)?.decode()?;
    let resized = if no_crop {
        fit_resize(width, height, &original)
    } else {
        crop_resize(width, height, &original)
    };
    let indexed = quantize_mono(width as usize, height as usize, resized.into_rgba8())?;

    let mut mono = MonoImage::new(width, height);
    let row = width as usize;
    for (ix, px) in indexed.iter().enumerate() {
        mono.set_pixel((ix % row) as u32, (ix / row) as u32, *px == 1);
    }
    return Ok(mono);
}

/** Resize into the given frame, padding with black bars where the aspect
ratios differ. */
fn fit_resize(width: u32, height: u32, image: &DynamicImage) -> DynamicImage {
    let image_aspect_ratio = image.width() as f64 / image.height() as f64;
    let target_aspect_ratio = width as f64 / height as f64;
    let resized = image.resize(width, height, imageops::FilterType::Lanczos3);

    let (overlay_x, overlay_y) = match image_aspect_ratio.total_cmp(&target_aspect_ratio) {
        Ordering::Less => ((width - resized.width()) / 2, 0),
        Ordering::Equal => (0, 0),
        Ordering::Greater => (0, (height - resized.height()) / 2),
    };

    let mut framed = RgbaImage::new(width, height);
    imageops::overlay(&mut framed, &resized, overlay_x as i64, overlay_y as i64);

    return framed.into();
}

/** Resize into the given frame by cropping the longer axis around the
center, without distortion. */
fn crop_resize(width: u32, height: u32, image: &DynamicImage) -> DynamicImage {
    let image_width = image.width() as f64;
    let image_height = image.height() as f64;
    let image_aspect_ratio = image_width / image_height;
    let target_aspect_ratio = width as f64 / height as f64;

    let (crop_width, crop_height) = match image_aspect_ratio.total_cmp(&target_aspect_ratio) {
        Ordering::Less => (image.width(), (image_width / target_aspect_ratio) as u32),
        Ordering::Equal => (image.width(), image.height()),
        Ordering::Greater => ((image_height * target_aspect_ratio) as u32, image.height()),
    };

    let crop_x = (image.width() - crop_width) / 2;
    let crop_y = (image.height() - crop_height) / 2;

    return image
        .crop_imm(crop_x, crop_y, crop_width, crop_height)
        .resize_exact(width, height, imageops::FilterType::Lanczos3);
}

/** Dither an RGBA buffer down to palette indices (0 = black, 1 = white). */
fn quantize_mono(
    width: usize,
    height: usize,
    image: RgbaImage,
) -> Result<Vec<u8>, imagequant::Error> {
    let palette: Vec<imagequant::RGBA> = MONO_PALETTE
        .iter()
        .map(|&[r, g, b, a]| rgb::Rgba::new(r, g, b, a))
        .collect();
    let buffer: Vec<imagequant::RGBA> = bytemuck::allocation::cast_vec(image.into_raw());

    let mut quantizer = imagequant::new();
    quantizer.set_max_colors(palette.len() as u32)?;
    quantizer.set_speed(1)?;

    let mut img = quantizer.new_image(buffer.into_boxed_slice(), width, height, 0.0)?;
    for color in &palette {
        img.add_fixed_color(*color)?;
    }

    let mut quantization = quantizer.quantize(&mut img)?;
    quantization.set_dithering_level(1.0)?;
    let (out_palette, mut outbuf) = quantization.remapped(&mut img)?;

    // The quantizer does not keep the palette order, so remap its indices
    // back onto ours.
    let palette_remap: Vec<u8> = out_palette
        .iter()
        .map(|x| palette.iter().position(|y| x == y).unwrap_or(0) as u8)
        .collect();
    for x in outbuf.iter_mut() {
        *x = palette_remap[*x as usize];
    }

    return Ok(outbuf);
}
