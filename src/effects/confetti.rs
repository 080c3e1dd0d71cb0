use crate::config::ConfettiConfig;
use crate::foundation::clock::Ticker;
use crate::foundation::core::{Point, TimeMs, Vec2};
use crate::foundation::math::Rng64;

/// One launched confetti particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Launch velocity, normalized viewport units per second. Hosts animate
    /// ballistically from the burst origin (gravity is the host's choice).
    pub velocity: Vec2,
}

/// One emission burst.
#[derive(Clone, Debug)]
pub struct Burst {
    /// Emission origin in normalized viewport coordinates; x is in one of
    /// the two side bands, y may start slightly above the viewport.
    pub origin: Point,
    /// Particles launched by this burst.
    pub particles: Vec<Particle>,
}

/// Time-boxed celebratory burst schedule.
///
/// Emits a pair of bursts (left band, right band) per tick for the
/// configured duration, with a particle count that decays linearly as the
/// remaining time shrinks. Plain owned state: dropping the run cancels it,
/// and a new reveal gets a fresh run.
#[derive(Clone, Debug)]
pub struct ConfettiRun {
    cfg: ConfettiConfig,
    ticker: Ticker,
    rng: Rng64,
}

impl ConfettiRun {
    /// Start a run at `started`, seeding the visual randomness.
    pub fn new(cfg: ConfettiConfig, started: TimeMs, seed: u64) -> Self {
        let ticker = Ticker::time_boxed(started, cfg.tick_interval_ms, cfg.duration_ms);
        Self {
            cfg,
            ticker,
            rng: Rng64::new(seed),
        }
    }

    /// Collect every burst that has become due since the previous poll.
    pub fn poll(&mut self, now: TimeMs) -> Vec<Burst> {
        let fresh = self.ticker.poll(now);
        if fresh == 0 {
            return Vec::new();
        }
        let first = self.ticker.fired() - fresh + 1;
        let mut bursts = Vec::with_capacity(fresh as usize * 2);
        for k in first..=self.ticker.fired() {
            let time_left = self
                .cfg
                .duration_ms
                .saturating_sub(self.ticker.elapsed_at(k));
            let count = (f64::from(self.cfg.base_particle_count) * time_left as f64
                / self.cfg.duration_ms.max(1) as f64)
                .round() as usize;
            bursts.push(self.burst(0.1, 0.3, count));
            bursts.push(self.burst(0.7, 0.9, count));
        }
        bursts
    }

    /// True once the emission window has fully elapsed.
    pub fn is_done(&self, now: TimeMs) -> bool {
        self.ticker.is_done(now)
    }

    fn burst(&mut self, band_min: f64, band_max: f64, count: usize) -> Burst {
        let origin = Point::new(
            self.rng.next_in_range(band_min, band_max),
            self.rng.next_f64_01() - 0.2,
        );
        let spread_rad = self.cfg.spread_deg.to_radians();
        let particles = (0..count)
            .map(|_| {
                let angle = self.rng.next_in_range(0.0, spread_rad) - spread_rad / 2.0
                    - std::f64::consts::FRAC_PI_2;
                let speed = self.cfg.start_velocity * self.rng.next_in_range(0.5, 1.0);
                Particle {
                    velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                }
            })
            .collect();
        Burst { origin, particles }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/confetti.rs"]
mod tests;
