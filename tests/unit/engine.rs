use super::*;
use crate::input::pointer::TouchPoint;
use std::cell::Cell;
use std::rc::Rc;

fn solid_image(size: SurfaceSize) -> PreparedImage {
    let mut rgba8_premul = vec![0u8; size.area() * 4];
    for px in rgba8_premul.chunks_exact_mut(4) {
        px.copy_from_slice(&[200, 0, 0, 255]);
    }
    PreparedImage {
        width: size.width,
        height: size.height,
        rgba8_premul,
    }
}

fn engine_100() -> ScratchEngine {
    let size = SurfaceSize::new(100, 100);
    ScratchEngine::new(solid_image(size), size, ScratchConfig::default()).unwrap()
}

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        client_x: x,
        client_y: y,
    }
}

fn mv(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        client_x: x,
        client_y: y,
    }
}

/// Erase three full-width bands covering every row, leaving the last move
/// for the caller so it can control when the throttled check runs.
fn scratch_everything(engine: &mut ScratchEngine, base: TimeMs) {
    for (i, y) in [20.0, 60.0, 95.0].into_iter().enumerate() {
        let t = base.plus(i as u64);
        engine.handle_event(&down(-100.0, y), t);
        engine.handle_event(&mv(200.0, y), t);
        engine.handle_event(&InputEvent::PointerUp, t);
    }
}

#[test]
fn tap_alone_erases_a_dab() {
    let mut engine = engine_100();
    engine.handle_event(&down(50.0, 50.0), TimeMs(0));
    assert_eq!(engine.overlay().alpha_at(50, 50), Some(0));
}

#[test]
fn strokes_do_not_bleed_across_each_other() {
    let mut engine = engine_100();
    engine.handle_event(&down(10.0, 10.0), TimeMs(0));
    engine.handle_event(&InputEvent::PointerUp, TimeMs(1));
    engine.handle_event(&down(90.0, 90.0), TimeMs(2));
    engine.handle_event(&mv(90.0, 10.0), TimeMs(3));

    // A phantom segment (10,10)->(90,90) would pass through the center; the
    // real strokes leave it opaque.
    assert_eq!(engine.overlay().alpha_at(50, 50), Some(255));
}

#[test]
fn reveal_latches_once_and_calls_back_once() {
    let mut engine = engine_100();
    let count = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&count);
    engine.on_complete(move || seen.set(seen.get() + 1));

    scratch_everything(&mut engine, TimeMs(1000));
    // Everything is erased, but the threshold check was throttled after the
    // first move; it has not re-run yet.
    assert!(!engine.is_revealed());

    engine.handle_event(&down(-100.0, 96.0), TimeMs(1300));
    engine.handle_event(&mv(200.0, 96.0), TimeMs(1300));
    assert!(engine.is_revealed());
    assert_eq!(count.get(), 1);

    // Re-satisfying the threshold over and over never re-fires.
    for t in [1600u64, 1900, 2200] {
        engine.handle_event(&down(50.0, 50.0), TimeMs(t));
        engine.handle_event(&mv(60.0, 60.0), TimeMs(t));
        engine.handle_event(&InputEvent::PointerUp, TimeMs(t));
    }
    assert!(engine.is_revealed());
    assert_eq!(count.get(), 1);
}

#[test]
fn resize_resets_progress_but_never_a_latched_reveal() {
    let mut engine = engine_100();
    engine.handle_event(&down(50.0, 50.0), TimeMs(0));
    assert!(engine.erased_fraction() > 0.0);

    engine.resize(SurfaceSize::new(100, 100));
    assert_eq!(engine.erased_fraction(), 0.0);
    assert!(!engine.is_revealed());

    scratch_everything(&mut engine, TimeMs(1000));
    engine.handle_event(&down(-100.0, 96.0), TimeMs(1300));
    engine.handle_event(&mv(200.0, 96.0), TimeMs(1300));
    assert!(engine.is_revealed());

    engine.resize(SurfaceSize::new(80, 80));
    assert_eq!(engine.erased_fraction(), 0.0);
    assert!(engine.is_revealed());
}

#[test]
fn malformed_touch_events_are_dropped() {
    let mut engine = engine_100();
    engine.handle_event(
        &InputEvent::TouchStart {
            touches: vec![TouchPoint {
                client_x: 50.0,
                client_y: 50.0,
            }],
        },
        TimeMs(0),
    );
    let after_dab = engine.erased_fraction();
    assert!(after_dab > 0.0);

    engine.handle_event(&InputEvent::TouchMove { touches: vec![] }, TimeMs(10));
    assert_eq!(engine.erased_fraction(), after_dab);
}

#[test]
fn client_rect_scaling_maps_input_into_surface_space() {
    let mut engine = engine_100();
    // Card displayed at double size, offset by (100, 100).
    engine.set_client_rect(ClientRect::new(100.0, 100.0, 200.0, 200.0));
    engine.handle_event(&down(200.0, 200.0), TimeMs(0));
    assert_eq!(engine.overlay().alpha_at(50, 50), Some(0));
}

#[test]
fn overlay_fades_out_after_reveal() {
    let mut engine = engine_100();
    assert_eq!(engine.overlay_opacity(TimeMs(999_999)), 1.0);

    scratch_everything(&mut engine, TimeMs(1000));
    engine.handle_event(&down(-100.0, 96.0), TimeMs(1300));
    engine.handle_event(&mv(200.0, 96.0), TimeMs(1300));

    assert_eq!(engine.overlay_opacity(TimeMs(1300)), 1.0);
    let half = engine.overlay_opacity(TimeMs(1800));
    assert!((half - 0.5).abs() < 1e-9);
    assert_eq!(engine.overlay_opacity(TimeMs(2300)), 0.0);
    assert_eq!(engine.overlay_opacity(TimeMs(99_999)), 0.0);

    // Once fully faded, the frame is the hidden image alone.
    let frame = engine.frame(TimeMs(99_999)).unwrap();
    assert_eq!(&frame.rgba8[0..4], &[200, 0, 0, 255]);
}

#[test]
fn confetti_runs_only_within_its_window() {
    let mut engine = engine_100();
    assert!(engine.tick(TimeMs(500)).is_empty());

    scratch_everything(&mut engine, TimeMs(1000));
    engine.handle_event(&down(-100.0, 96.0), TimeMs(1300));
    engine.handle_event(&mv(200.0, 96.0), TimeMs(1300));

    assert_eq!(engine.tick(TimeMs(1550)).len(), 2);
    let rest = engine.tick(TimeMs(50_000));
    assert_eq!(rest.len(), 20);
    assert!(engine.tick(TimeMs(60_000)).is_empty());
    assert!(engine.tick(TimeMs(70_000)).is_empty());
}
