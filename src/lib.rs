//! Scratchcard is an interactive "scratch-off" reveal engine.
//!
//! An opaque raster overlay covers a hidden image. Pointer or touch strokes
//! erase the overlay along a continuous path; a throttled estimator samples
//! the overlay's alpha channel to estimate the erased fraction; once a
//! threshold is crossed a one-shot latch fires the completion side effects
//! (confetti burst schedule, completion callback) exactly once, and the
//! downstream effects (overlay fade, typewriter message) follow.
//!
//! # Control flow
//!
//! 1. **Input**: host delivers [`InputEvent`]s (mouse or touch, viewport
//!    coordinates) plus a monotonic [`TimeMs`] timestamp.
//! 2. **Stroke**: [`StrokeTracker`] turns events into erase segments; the
//!    [`OverlaySurface`] clears alpha along thick round-capped paths.
//! 3. **Estimate**: [`RevealEstimator`] runs a strided alpha scan, at most
//!    once per throttle interval.
//! 4. **Latch**: on the first threshold crossing [`CompletionLatch`] fires
//!    once; [`ConfettiRun`] and the overlay fade begin.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Caller-supplied time**: no internal clocks or threads. Every timer is
//!   owned state polled with the caller's `TimeMs`, so dropping the engine
//!   cancels everything and tests drive time deterministically.
//! - **Best-effort input**: malformed events (empty touch lists, degenerate
//!   layout rects) are dropped silently; nothing on the event path panics.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod engine;
mod foundation;
mod input;
mod render;
mod reveal;
mod surface;

pub use assets::decode::{PreparedImage, cover_fit, decode_image};
pub use config::{ConfettiConfig, ScratchConfig};
pub use effects::confetti::{Burst, ConfettiRun, Particle};
pub use effects::typewriter::Typewriter;
pub use engine::ScratchEngine;
pub use foundation::clock::{Throttle, Ticker};
pub use foundation::core::{ClientRect, Point, Rect, Rgba8Premul, SurfaceSize, TimeMs, Vec2};
pub use foundation::error::{ScratchError, ScratchResult};
pub use foundation::math::Rng64;
pub use input::pointer::{InputEvent, TouchPoint, map_to_surface};
pub use input::stroke::{Segment, StrokeTracker};
pub use render::composite::{FrameRGBA, compose_frame};
pub use reveal::estimator::{Estimate, RevealEstimator};
pub use reveal::latch::CompletionLatch;
pub use surface::label::{draw_text, text_width};
pub use surface::overlay::OverlaySurface;
