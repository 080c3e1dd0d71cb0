use super::*;
use crate::foundation::core::SurfaceSize;

fn surface_100() -> OverlaySurface {
    OverlaySurface::new(SurfaceSize::new(100, 100), 60.0)
}

/// Clear the full width of every row whose pixel center sits within 30px of
/// the given segment y. Used to erase exact row bands.
fn clear_band(s: &mut OverlaySurface, y: f64) {
    s.erase(Some(Point::new(-100.0, y)), Point::new(200.0, y));
}

#[test]
fn starts_fully_opaque_with_label() {
    let s = surface_100();
    assert_eq!(s.erased_fraction(20), 0.0);
    assert_eq!(s.alpha_at(0, 0), Some(255));
    // The instructional label is baked into the fill.
    let has_label = s
        .pixels()
        .chunks_exact(4)
        .any(|px| px[0] == 0x99 && px[3] == 0xFF);
    assert!(has_label);
}

#[test]
fn tap_dab_erases_a_circle() {
    let mut s = surface_100();
    s.erase(None, Point::new(50.0, 50.0));

    assert_eq!(s.alpha_at(50, 50), Some(0));
    // 35px from the center: outside the 30px dab radius.
    assert_eq!(s.alpha_at(50, 15), Some(255));

    // A radius-30 circle is ~2827px^2 of 10000 (~28%); the 20-stride
    // estimate lands near that, well below the 0.7 cutoff.
    let fraction = s.erased_fraction(20);
    assert!(fraction > 0.15 && fraction < 0.40, "fraction={fraction}");
}

#[test]
fn segment_erase_is_gap_free_and_round_capped() {
    let mut s = surface_100();
    s.erase(Some(Point::new(10.0, 50.0)), Point::new(90.0, 50.0));

    // Midpoint and points within half the stroke width are erased.
    assert_eq!(s.alpha_at(50, 50), Some(0));
    assert_eq!(s.alpha_at(50, 75), Some(0));
    // Beyond the stroke radius stays opaque.
    assert_eq!(s.alpha_at(50, 85), Some(255));
    // Round cap extends past the segment end.
    assert_eq!(s.alpha_at(95, 50), Some(0));
}

#[test]
fn erase_clips_outside_the_surface() {
    let mut s = surface_100();
    s.erase(None, Point::new(-200.0, -200.0));
    s.erase(Some(Point::new(500.0, 500.0)), Point::new(600.0, 600.0));
    assert_eq!(s.erased_fraction(1), 0.0);
}

#[test]
fn zero_area_surface_is_a_no_op() {
    let mut s = OverlaySurface::new(SurfaceSize::new(0, 0), 60.0);
    s.erase(None, Point::new(10.0, 10.0));
    assert_eq!(s.erased_fraction(20), 0.0);
    assert_eq!(s.alpha_at(0, 0), None);
}

#[test]
fn resize_resets_all_progress() {
    let mut s = surface_100();
    s.erase(None, Point::new(50.0, 50.0));
    assert!(s.erased_fraction(20) > 0.0);

    s.resize(SurfaceSize::new(100, 100));
    assert_eq!(s.erased_fraction(20), 0.0);
    assert_eq!(s.alpha_at(50, 50), Some(255));

    s.erase(None, Point::new(50.0, 50.0));
    s.resize(SurfaceSize::new(64, 32));
    assert_eq!(s.size(), SurfaceSize::new(64, 32));
    assert_eq!(s.erased_fraction(20), 0.0);
}

#[test]
fn strided_fraction_counts_exact_row_bands() {
    // Rows 0..=74 cleared: exactly 75% of 20-stride samples.
    let mut s = surface_100();
    clear_band(&mut s, 45.0); // rows 15..=74
    clear_band(&mut s, 15.0); // rows 0..=44
    let f = s.erased_fraction(20);
    assert!((f - 0.75).abs() < 1e-9, "fraction={f}");

    // Rows 0..=64: exactly 65%.
    let mut s = surface_100();
    clear_band(&mut s, 35.0); // rows 5..=64
    clear_band(&mut s, 15.0); // rows 0..=44
    let f = s.erased_fraction(20);
    assert!((f - 0.65).abs() < 1e-9, "fraction={f}");
}
