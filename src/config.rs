use crate::foundation::error::{ScratchError, ScratchResult};

/// Tunables for one scratch session.
///
/// The defaults are empirically tuned; they are configuration rather than
/// hard constants so hosts can adapt them to surface size and input device.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Erase stroke thickness in surface pixels.
    pub stroke_width: f64,
    /// The estimator samples every Nth pixel's alpha.
    pub sample_stride: usize,
    /// Estimated erased fraction above which the surface counts as revealed.
    pub reveal_threshold: f64,
    /// Minimum milliseconds between two real estimator checks.
    pub check_interval_ms: u64,
    /// Overlay fade-out length after reveal, milliseconds.
    pub fade_duration_ms: u64,
    /// Per-character delay of the message typewriter, milliseconds.
    pub typewriter_delay_ms: u64,
    /// Celebration burst schedule.
    pub confetti: ConfettiConfig,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            stroke_width: 60.0,
            sample_stride: 20,
            reveal_threshold: 0.7,
            check_interval_ms: 200,
            fade_duration_ms: 1000,
            typewriter_delay_ms: 100,
            confetti: ConfettiConfig::default(),
        }
    }
}

impl ScratchConfig {
    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> ScratchResult<()> {
        if !(self.stroke_width > 0.0) {
            return Err(ScratchError::validation("stroke_width must be > 0"));
        }
        if self.sample_stride == 0 {
            return Err(ScratchError::validation("sample_stride must be >= 1"));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ScratchError::validation(
                "reveal_threshold must be in (0, 1]",
            ));
        }
        if self.check_interval_ms == 0 {
            return Err(ScratchError::validation("check_interval_ms must be > 0"));
        }
        self.confetti.validate()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ScratchResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ScratchError::serde(format!("parse scratch config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Parameters of the time-boxed celebration burst schedule.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Total emission window, milliseconds.
    pub duration_ms: u64,
    /// Interval between burst pairs, milliseconds.
    pub tick_interval_ms: u64,
    /// Particle count per burst at the start of the window; decays linearly
    /// with remaining time.
    pub base_particle_count: u32,
    /// Launch speed scale for emitted particles.
    pub start_velocity: f64,
    /// Angular spread of emission, degrees.
    pub spread_deg: f64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            tick_interval_ms: 250,
            base_particle_count: 50,
            start_velocity: 30.0,
            spread_deg: 360.0,
        }
    }
}

impl ConfettiConfig {
    fn validate(&self) -> ScratchResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(ScratchError::validation(
                "confetti.tick_interval_ms must be > 0",
            ));
        }
        if !(self.start_velocity > 0.0) {
            return Err(ScratchError::validation(
                "confetti.start_velocity must be > 0",
            ));
        }
        if !(self.spread_deg > 0.0 && self.spread_deg <= 360.0) {
            return Err(ScratchError::validation(
                "confetti.spread_deg must be in (0, 360]",
            ));
        }
        Ok(())
    }
}
