pub use kurbo::{Point, Rect, Vec2};

/// Monotonic timestamp in milliseconds.
///
/// The crate never reads a clock; the host supplies `TimeMs` with every
/// time-sensitive call. Any monotonic origin works as long as it is
/// consistent within one engine instance.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// The zero timestamp.
    pub const ZERO: TimeMs = TimeMs(0);

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    pub fn since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This timestamp advanced by `ms` milliseconds.
    pub fn plus(self, ms: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(ms))
    }
}

/// Raster dimensions of the overlay surface, in surface pixels.
///
/// These track the hosting container's *layout* size, not any transform
/// scale applied on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Build a size value.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when the surface has no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel count.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// The displayed element's on-screen bounding box, in viewport coordinates.
///
/// Viewport input positions are mapped through this into surface space, so
/// erasure stays geometrically correct under responsive scaling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClientRect {
    /// Left edge in viewport coordinates.
    pub x: f64,
    /// Top edge in viewport coordinates.
    pub y: f64,
    /// Displayed width.
    pub width: f64,
    /// Displayed height.
    pub height: f64,
}

impl ClientRect {
    /// Build a rect value.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect at the origin matching a surface 1:1 (no scaling).
    pub fn from_size(size: SurfaceSize) -> Self {
        Self::new(0.0, 0.0, f64::from(size.width), f64::from(size.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}
