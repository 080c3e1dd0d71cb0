use super::*;
use crate::config::ConfettiConfig;

fn run_at_zero() -> ConfettiRun {
    ConfettiRun::new(ConfettiConfig::default(), TimeMs(0), 42)
}

#[test]
fn emits_burst_pairs_until_the_window_closes() {
    // 3000ms window at 250ms ticks: 11 ticks, two bursts each, none at the
    // deadline itself.
    let mut run = run_at_zero();
    let bursts = run.poll(TimeMs(10_000));
    assert_eq!(bursts.len(), 22);
    assert!(run.is_done(TimeMs(3000)));
    assert!(run.poll(TimeMs(20_000)).is_empty());
}

#[test]
fn incremental_polls_deliver_each_tick_once() {
    let mut run = run_at_zero();
    assert!(run.poll(TimeMs(249)).is_empty());
    assert_eq!(run.poll(TimeMs(250)).len(), 2);
    assert!(run.poll(TimeMs(250)).is_empty());
    assert_eq!(run.poll(TimeMs(600)).len(), 2);
    assert!(!run.is_done(TimeMs(600)));
}

#[test]
fn particle_counts_decay_with_remaining_time() {
    let mut run = run_at_zero();
    let bursts = run.poll(TimeMs(10_000));
    let per_tick: Vec<usize> = bursts
        .chunks_exact(2)
        .map(|pair| pair[0].particles.len())
        .collect();

    // First tick is near the base count, the last is near zero, and the
    // sequence never grows.
    assert!(per_tick[0] >= 40);
    assert!(*per_tick.last().unwrap() <= 10);
    assert!(per_tick.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn randomized_parameters_stay_in_their_bands() {
    let mut run = run_at_zero();
    let cfg = ConfettiConfig::default();
    for (i, burst) in run.poll(TimeMs(10_000)).iter().enumerate() {
        let (band_min, band_max) = if i % 2 == 0 { (0.1, 0.3) } else { (0.7, 0.9) };
        assert!(
            burst.origin.x >= band_min && burst.origin.x < band_max,
            "origin.x={} outside [{band_min},{band_max})",
            burst.origin.x
        );
        assert!(burst.origin.y >= -0.2 && burst.origin.y < 0.8);

        for p in &burst.particles {
            let speed = p.velocity.hypot();
            assert!(speed >= cfg.start_velocity * 0.5 - 1e-9);
            assert!(speed <= cfg.start_velocity + 1e-9);
        }
    }
}

#[test]
fn runs_are_deterministic_per_seed() {
    let a = ConfettiRun::new(ConfettiConfig::default(), TimeMs(0), 7).poll(TimeMs(10_000));
    let b = ConfettiRun::new(ConfettiConfig::default(), TimeMs(0), 7).poll(TimeMs(10_000));
    let c = ConfettiRun::new(ConfettiConfig::default(), TimeMs(0), 8).poll(TimeMs(10_000));
    assert_eq!(a.len(), b.len());
    assert_eq!(a[0].origin, b[0].origin);
    assert_ne!(a[0].origin, c[0].origin);
}
