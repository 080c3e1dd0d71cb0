use anyhow::Context;

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::ScratchResult;

/// A decoded hidden artifact, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub rgba8_premul: Vec<u8>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> ScratchResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul,
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Scale-and-center-crop `src` to fill `target` (cover fit).
///
/// Nearest-neighbor sampling; the overscanning axis is cropped symmetrically
/// so the image covers the card with its aspect ratio intact. A degenerate
/// source or target yields an empty image of the target size.
pub fn cover_fit(src: &PreparedImage, target: SurfaceSize) -> PreparedImage {
    let mut out = PreparedImage {
        width: target.width,
        height: target.height,
        rgba8_premul: vec![0; target.area() * 4],
    };
    if target.is_empty() || src.width == 0 || src.height == 0 {
        return out;
    }

    let scale = (f64::from(target.width) / f64::from(src.width))
        .max(f64::from(target.height) / f64::from(src.height));
    let crop_x = (f64::from(src.width) - f64::from(target.width) / scale) / 2.0;
    let crop_y = (f64::from(src.height) - f64::from(target.height) / scale) / 2.0;

    let sw = src.width as usize;
    for y in 0..target.height {
        let sy = ((crop_y + (f64::from(y) + 0.5) / scale) as u32).min(src.height - 1) as usize;
        for x in 0..target.width {
            let sx = ((crop_x + (f64::from(x) + 0.5) / scale) as u32).min(src.width - 1) as usize;
            let s = (sy * sw + sx) * 4;
            let d = (y as usize * target.width as usize + x as usize) * 4;
            out.rgba8_premul[d..d + 4].copy_from_slice(&src.rgba8_premul[s..s + 4]);
        }
    }
    out
}
