use astral_chart::angle::{arc_contains, forward_end, midpoint, normalize_angle, sign_index};

#[test]
fn test_normalize_is_idempotent_and_in_range() {
    let samples = [
        -1e-14, -720.5, -360.0, -90.0, -0.0, 0.0, 1.5, 359.999, 360.0, 725.25, 1e9, -1e9,
    ];
    for angle in samples {
        let once = normalize_angle(angle);
        assert!((0.0..360.0).contains(&once), "{} -> {}", angle, once);
        assert_eq!(normalize_angle(once), once, "not idempotent for {}", angle);
    }
}

#[test]
fn test_normalize_non_finite() {
    assert!(normalize_angle(f64::NAN).is_nan());
    assert!(normalize_angle(f64::INFINITY).is_nan());
    assert!(normalize_angle(f64::NEG_INFINITY).is_nan());
}

#[test]
fn test_midpoint_across_zero() {
    assert_eq!(midpoint(350.0, 370.0), 0.0);
    assert_eq!(midpoint(350.0, forward_end(350.0, 10.0)), 0.0);
    assert_eq!(midpoint(100.0, 130.0), 115.0);
}

#[test]
fn test_arc_contains_wraps() {
    assert!(arc_contains(340.0, 10.0, 355.0));
    assert!(arc_contains(340.0, 10.0, 5.0));
    assert!(!arc_contains(340.0, 10.0, 10.0));
    assert!(!arc_contains(340.0, 10.0, 180.0));
}

#[test]
fn test_sign_index_boundaries() {
    assert_eq!(sign_index(0.0), 0);
    assert_eq!(sign_index(29.999), 0);
    assert_eq!(sign_index(30.0), 1);
    assert_eq!(sign_index(359.9), 11);
    assert_eq!(sign_index(-1.0), 11);
}
