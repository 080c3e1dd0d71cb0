use crate::assets::decode::{PreparedImage, cover_fit};
use crate::config::ScratchConfig;
use crate::effects::confetti::{Burst, ConfettiRun};
use crate::foundation::core::{ClientRect, SurfaceSize, TimeMs};
use crate::foundation::error::ScratchResult;
use crate::input::pointer::{InputEvent, Phase, map_to_surface};
use crate::input::stroke::StrokeTracker;
use crate::render::composite::{FrameRGBA, compose_frame};
use crate::reveal::estimator::{Estimate, RevealEstimator};
use crate::reveal::latch::CompletionLatch;
use crate::surface::overlay::OverlaySurface;

/// The scratch-reveal engine: one instance per card.
///
/// Owns all scratch-session state (overlay raster, active stroke, estimator
/// throttle, reveal latch, confetti run). A new card means a new engine, not
/// an in-place reset, so no timer or stroke state can leak between sessions.
///
/// The host feeds [`InputEvent`]s and monotonic timestamps in, and observes
/// the revealed flag, overlay opacity, confetti bursts and composed frames
/// coming out. All event-path methods are infallible: malformed input is
/// dropped silently.
pub struct ScratchEngine {
    config: ScratchConfig,
    /// Unfitted artifact, kept for re-fitting on resize.
    source: PreparedImage,
    /// Artifact cover-fitted to the current surface size.
    fitted: PreparedImage,
    overlay: OverlaySurface,
    stroke: StrokeTracker,
    estimator: RevealEstimator,
    latch: CompletionLatch,
    confetti: Option<ConfettiRun>,
    revealed_at: Option<TimeMs>,
    rect: ClientRect,
    seed: u64,
}

impl std::fmt::Debug for ScratchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchEngine")
            .field("size", &self.overlay.size())
            .field("revealed", &self.latch.is_revealed())
            .finish()
    }
}

impl ScratchEngine {
    /// Build an engine over the hidden artifact at the given layout size.
    pub fn new(
        image: PreparedImage,
        size: SurfaceSize,
        config: ScratchConfig,
    ) -> ScratchResult<Self> {
        config.validate()?;
        let fitted = cover_fit(&image, size);
        let overlay = OverlaySurface::new(size, config.stroke_width);
        let estimator = RevealEstimator::new(
            config.reveal_threshold,
            config.sample_stride,
            config.check_interval_ms,
        );
        Ok(Self {
            config,
            source: image,
            fitted,
            overlay,
            stroke: StrokeTracker::new(),
            estimator,
            latch: CompletionLatch::new(),
            confetti: None,
            revealed_at: None,
            rect: ClientRect::from_size(size),
            seed: 0x5C7A_7C4D,
        })
    }

    /// Register the completion callback; invoked exactly once when the
    /// reveal threshold is first crossed.
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.latch.set_on_complete(callback);
    }

    /// Seed the confetti randomness (defaults to a fixed seed).
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Update the displayed bounding box used to map viewport input into
    /// surface coordinates. Call when the element moves or is scaled on
    /// screen without a layout resize.
    pub fn set_client_rect(&mut self, rect: ClientRect) {
        self.rect = rect;
    }

    /// Whether the reveal has latched. Monotonic: never goes back to false.
    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    /// Current estimated erased fraction (unthrottled; test/diagnostic aid).
    pub fn erased_fraction(&self) -> f64 {
        self.overlay.erased_fraction(self.config.sample_stride)
    }

    /// Dispatch one input event.
    ///
    /// Start events begin a stroke and erase the initial dab; move events
    /// erase the connecting segment and run the throttled reveal check; end
    /// events close the stroke so separate strokes stay disconnected.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn handle_event(&mut self, event: &InputEvent, now: TimeMs) {
        match event.phase() {
            Phase::Start => {
                let Some(pos) = event
                    .position()
                    .and_then(|p| map_to_surface(p, self.rect, self.overlay.size()))
                else {
                    return;
                };
                self.stroke.start(pos);
                if !self.latch.is_revealed() {
                    self.overlay.erase(None, pos);
                }
            }
            Phase::Move => {
                if self.latch.is_revealed() {
                    return;
                }
                let Some(pos) = event
                    .position()
                    .and_then(|p| map_to_surface(p, self.rect, self.overlay.size()))
                else {
                    return;
                };
                let Some(segment) = self.stroke.move_to(pos) else {
                    return;
                };
                self.overlay.erase(segment.from, segment.to);
                if let Estimate::Revealed(fraction) = self.estimator.check(&self.overlay, now) {
                    tracing::info!(fraction, "reveal threshold crossed");
                    self.fire(now);
                }
            }
            Phase::End => self.stroke.end(),
        }
    }

    /// Resynchronize the overlay with a new container layout size.
    ///
    /// Resets the overlay to fully opaque (erased fraction back to 0) and
    /// re-fits the hidden artifact. A reveal that already latched is never
    /// undone.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.overlay.resize(size);
        self.fitted = cover_fit(&self.source, size);
        self.rect = ClientRect::from_size(size);
    }

    /// Advance timed effects to `now`, returning confetti bursts that have
    /// become due. The finished run is dropped, so nothing fires past the
    /// emission window.
    pub fn tick(&mut self, now: TimeMs) -> Vec<Burst> {
        let Some(run) = self.confetti.as_mut() else {
            return Vec::new();
        };
        let bursts = run.poll(now);
        if run.is_done(now) {
            self.confetti = None;
        }
        bursts
    }

    /// Overlay layer opacity at `now`: 1.0 before the reveal, then a linear
    /// fade to 0.0 over the configured fade duration.
    pub fn overlay_opacity(&self, now: TimeMs) -> f64 {
        match self.revealed_at {
            None => 1.0,
            Some(at) => {
                let elapsed = now.since(at) as f64;
                (1.0 - elapsed / self.config.fade_duration_ms.max(1) as f64).clamp(0.0, 1.0)
            }
        }
    }

    /// Per-character delay configured for the downstream message reveal.
    pub fn typewriter_delay_ms(&self) -> u64 {
        self.config.typewriter_delay_ms
    }

    /// Compose the current card frame: hidden image under the (possibly
    /// fading) overlay.
    pub fn frame(&self, now: TimeMs) -> ScratchResult<FrameRGBA> {
        compose_frame(&self.fitted, &self.overlay, self.overlay_opacity(now))
    }

    /// Direct access to the overlay raster.
    pub fn overlay(&self) -> &OverlaySurface {
        &self.overlay
    }

    fn fire(&mut self, now: TimeMs) {
        if self.latch.fire() {
            self.revealed_at = Some(now);
            self.confetti = Some(ConfettiRun::new(self.config.confetti.clone(), now, self.seed));
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
