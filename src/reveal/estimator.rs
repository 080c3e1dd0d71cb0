use crate::foundation::clock::Throttle;
use crate::foundation::core::TimeMs;
use crate::surface::overlay::OverlaySurface;

/// Outcome of one estimator call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Estimate {
    /// The throttle window has not elapsed; no sampling was performed.
    Skipped,
    /// Sampled fraction below the threshold.
    Below(f64),
    /// Sampled fraction crossed the threshold: declare the surface revealed.
    Revealed(f64),
}

/// Decides when "enough" of the overlay has been erased.
///
/// Driven from every move, but a real check runs at most once per throttle
/// interval; reading back raster contents is the expensive part of the
/// interaction and the stride/interval pair is an explicit cost/accuracy
/// trade-off. The caller must stop invoking this once revealed (the latch
/// invariant); the estimator itself performs no latching.
#[derive(Clone, Copy, Debug)]
pub struct RevealEstimator {
    threshold: f64,
    stride: usize,
    throttle: Throttle,
}

impl RevealEstimator {
    /// Estimator with the given threshold, sampling stride, and minimum
    /// interval between real checks.
    pub fn new(threshold: f64, stride: usize, check_interval_ms: u64) -> Self {
        Self {
            threshold,
            stride,
            throttle: Throttle::new(check_interval_ms),
        }
    }

    /// Run a throttled check against the overlay.
    pub fn check(&mut self, surface: &OverlaySurface, now: TimeMs) -> Estimate {
        if !self.throttle.ready(now) {
            return Estimate::Skipped;
        }
        let fraction = surface.erased_fraction(self.stride);
        tracing::debug!(fraction, threshold = self.threshold, "reveal estimate");
        if fraction > self.threshold {
            Estimate::Revealed(fraction)
        } else {
            Estimate::Below(fraction)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/estimator.rs"]
mod tests;
