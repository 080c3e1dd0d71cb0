use crate::assets::decode::PreparedImage;
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::foundation::math::{mul_div255_u16, mul_div255_u8};
use crate::surface::overlay::OverlaySurface;

/// A displayable frame: premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

/// Composite the faded overlay over the hidden image (source-over).
///
/// `overlay_opacity` scales the whole overlay layer: 1.0 shows it fully,
/// 0.0 shows only the hidden image (the post-reveal fade). The image must
/// already be fitted to the overlay's dimensions.
pub fn compose_frame(
    image: &PreparedImage,
    overlay: &OverlaySurface,
    overlay_opacity: f64,
) -> ScratchResult<FrameRGBA> {
    let size = overlay.size();
    if image.width != size.width || image.height != size.height {
        return Err(ScratchError::validation(format!(
            "image {}x{} does not match overlay {}x{}",
            image.width, image.height, size.width, size.height
        )));
    }

    let mut rgba8 = image.rgba8_premul.clone();
    let opacity = (overlay_opacity.clamp(0.0, 1.0) * 255.0).round() as u16;
    if opacity > 0 {
        for (dst, src) in rgba8
            .chunks_exact_mut(4)
            .zip(overlay.pixels().chunks_exact(4))
        {
            let src_a = mul_div255_u16(u16::from(src[3]), opacity);
            let inv = 255 - src_a;
            for c in 0..4 {
                let s = mul_div255_u8(u16::from(src[c]), opacity);
                dst[c] = s.saturating_add(mul_div255_u8(u16::from(dst[c]), inv));
            }
        }
    }

    Ok(FrameRGBA {
        width: size.width,
        height: size.height,
        rgba8,
    })
}
