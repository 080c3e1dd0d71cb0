use crate::foundation::core::{Point, Rgba8Premul, SurfaceSize};
use crate::surface::label;

/// Neutral fill the card is covered with before any scratching.
const OVERLAY_FILL: Rgba8Premul = Rgba8Premul {
    r: 0xCC,
    g: 0xCC,
    b: 0xCC,
    a: 0xFF,
};

/// Color of the instructional label baked into the fill.
const LABEL_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0x99,
    g: 0x99,
    b: 0x99,
    a: 0xFF,
};

const LABEL_TEXT: &str = "SCRATCH HERE!";

/// The erasable opaque layer covering the hidden artifact.
///
/// A premultiplied RGBA8 raster sized to the card's layout dimensions.
/// Erasure only subtracts alpha (destination-out); the hidden image lives on
/// a separate layer below and is never repainted here. A pixel counts as
/// erased exactly when its alpha is zero.
#[derive(Clone, Debug)]
pub struct OverlaySurface {
    size: SurfaceSize,
    stroke_width: f64,
    /// Row-major RGBA8, premultiplied.
    pixels: Vec<u8>,
}

impl OverlaySurface {
    /// Allocate an opaque overlay at the given layout size.
    ///
    /// A zero-area size is accepted and yields a degraded surface on which
    /// every operation is a no-op, rather than a failed view.
    pub fn new(size: SurfaceSize, stroke_width: f64) -> Self {
        let mut s = Self {
            size,
            stroke_width,
            pixels: vec![0; size.area() * 4],
        };
        s.reset();
        s
    }

    /// Reallocate at a new layout size and reset to fully opaque.
    ///
    /// Must be called on every detected resize of the hosting container.
    /// All prior erasure progress is discarded; this is documented behavior
    /// (resizing mid-scratch is rare in the intended flow).
    pub fn resize(&mut self, size: SurfaceSize) {
        tracing::debug!(?size, "overlay resize, progress reset");
        self.size = size;
        self.pixels = vec![0; size.area() * 4];
        self.reset();
    }

    fn reset(&mut self) {
        if self.size.is_empty() {
            return;
        }
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = OVERLAY_FILL.r;
            px[1] = OVERLAY_FILL.g;
            px[2] = OVERLAY_FILL.b;
            px[3] = OVERLAY_FILL.a;
        }

        let scale = (self.size.height / 100).max(1);
        let tw = i64::from(label::text_width(LABEL_TEXT, scale));
        let th = i64::from(7 * scale);
        label::draw_text(
            &mut self.pixels,
            self.size,
            (i64::from(self.size.width) - tw) / 2,
            (i64::from(self.size.height) - th) / 2,
            LABEL_TEXT,
            LABEL_COLOR,
            scale,
        );
    }

    /// Current raster dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Configured stroke thickness in surface pixels.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Raw premultiplied RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Alpha of the pixel at (x, y); `None` outside the surface.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        Some(self.pixels[idx + 3])
    }

    /// Erase along the stroke path (destination-out).
    ///
    /// With `from` present, clears a thick round-capped segment from `from`
    /// to `to`; without it, clears a filled dab circle of half the stroke
    /// width centered at `to` (so a tap alone erases something). Coordinates
    /// are in surface space; anything outside the raster clips silently.
    pub fn erase(&mut self, from: Option<Point>, to: Point) {
        if self.size.is_empty() {
            return;
        }
        let r = self.stroke_width / 2.0;
        match from {
            Some(a) => self.clear_capsule(a, to, r),
            None => self.clear_capsule(to, to, r),
        }
    }

    /// Clear every pixel whose center lies within `r` of the segment a..b.
    /// Round caps fall out of the distance metric; a == b degenerates to a
    /// filled circle.
    fn clear_capsule(&mut self, a: Point, b: Point, r: f64) {
        let min_x = (a.x.min(b.x) - r).floor().max(0.0) as u32;
        let max_x = (a.x.max(b.x) + r).ceil().min(f64::from(self.size.width)) as u32;
        let min_y = (a.y.min(b.y) - r).floor().max(0.0) as u32;
        let max_y = (a.y.max(b.y) + r).ceil().min(f64::from(self.size.height)) as u32;
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let r2 = r * r;
        let w = self.size.width as usize;
        for y in min_y..max_y {
            let row = y as usize * w;
            for x in min_x..max_x {
                let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if dist_sq_to_segment(p, a, b) <= r2 {
                    let idx = (row + x as usize) * 4;
                    self.pixels[idx..idx + 4].fill(0);
                }
            }
        }
    }

    /// Estimate the erased fraction by a strided scan of the alpha channel.
    ///
    /// Samples every `stride`-th pixel and counts fully transparent ones;
    /// the result is (transparent samples) / (total samples). A statistical
    /// estimate by design: reading back every pixel of a large surface per
    /// check would dominate the interaction cost.
    pub fn erased_fraction(&self, stride: usize) -> f64 {
        let stride = stride.max(1);
        let total = self.size.area();
        if total == 0 {
            return 0.0;
        }
        let mut transparent = 0usize;
        let mut samples = 0usize;
        let mut i = 3;
        while i < self.pixels.len() {
            if self.pixels[i] == 0 {
                transparent += 1;
            }
            samples += 1;
            i += 4 * stride;
        }
        transparent as f64 / samples as f64
    }
}

fn dist_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot2();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot2()
}

#[cfg(test)]
#[path = "../../tests/unit/surface/overlay.rs"]
mod tests;
