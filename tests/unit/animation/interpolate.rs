use super::*;

fn fade() -> InterpolationCurve {
    InterpolationCurve::new(
        [0.0, 20.0, 40.0, 60.0],
        [0.0, 1.0, 1.0, 0.0],
        InterpolateOptions::default(),
    )
    .unwrap()
}

#[test]
fn midpoint_of_clamped_segment() {
    let v = interpolate(10.0, &[0.0, 20.0], &[0.0, 1.0], InterpolateOptions::clamped()).unwrap();
    assert_eq!(v, 0.5);
}

#[test]
fn control_points_are_hit_exactly() {
    let c = fade();
    for (p, v) in c.control_points().iter().zip(c.output_range()) {
        assert_eq!(c.sample(*p), *v);
    }

    let c = InterpolationCurve::new(
        [3.0, 7.0, 11.0],
        [0.1, 0.7, 0.3],
        InterpolateOptions::default().with_ease(Ease::InOutCubic),
    )
    .unwrap();
    assert_eq!(c.sample(3.0), 0.1);
    assert_eq!(c.sample(7.0), 0.7);
    assert_eq!(c.sample(11.0), 0.3);
}

#[test]
fn piecewise_segments_interpolate_independently() {
    let c = fade();
    assert_eq!(c.sample(5.0), 0.25);
    assert_eq!(c.sample(30.0), 1.0);
    assert_eq!(c.sample(50.0), 0.5);
}

#[test]
fn clamp_holds_boundary_values() {
    let c = InterpolationCurve::new([10.0, 30.0], [50.0, 0.0], InterpolateOptions::clamped())
        .unwrap();
    assert_eq!(c.sample(-100.0), 50.0);
    assert_eq!(c.sample(0.0), 50.0);
    assert_eq!(c.sample(1_000.0), 0.0);
}

#[test]
fn extend_continues_boundary_slopes() {
    let c = InterpolationCurve::new([0.0, 20.0], [0.8, 1.0], InterpolateOptions::default())
        .unwrap();
    assert!((c.sample(40.0) - 1.2).abs() < 1e-12);
    assert!((c.sample(-20.0) - 0.6).abs() < 1e-12);

    let c = fade();
    assert_eq!(c.sample(80.0), -1.0);
    assert_eq!(c.sample(-10.0), -0.5);
}

#[test]
fn mixed_clamping_per_end() {
    let c = InterpolationCurve::new([0.0, 20.0], [0.8, 1.0], InterpolateOptions::clamp_right())
        .unwrap();
    assert_eq!(c.sample(500.0), 1.0);
    assert!(c.sample(-20.0) < 0.8);
}

#[test]
fn clamped_samples_stay_within_value_bounds() {
    let c = InterpolationCurve::new(
        [0.0, 15.0, 45.0, 60.0],
        [0.0, 1.0, 1.0, 0.0],
        InterpolateOptions::clamped().with_ease(Ease::OutCubic),
    )
    .unwrap();
    for f in -50..150 {
        let v = c.sample(f64::from(f) * 0.75);
        assert!((0.0..=1.0).contains(&v), "frame {f} gave {v}");
    }
}

#[test]
fn sampling_is_repeatable() {
    let c = fade();
    for f in 0..60 {
        let x = f64::from(f) + 0.3;
        assert_eq!(c.sample(x).to_bits(), c.sample(x).to_bits());
    }
}

#[test]
fn easing_reshapes_interior_progress() {
    let c = InterpolationCurve::new(
        [0.0, 10.0],
        [0.0, 1.0],
        InterpolateOptions::clamped().with_ease(Ease::InQuad),
    )
    .unwrap();
    assert_eq!(c.sample(5.0), 0.25);
}

#[test]
fn rejects_non_increasing_points() {
    let err = interpolate(0.0, &[0.0, 20.0, 20.0], &[0.0, 1.0, 0.0], Default::default())
        .unwrap_err();
    assert!(matches!(err, ShortformError::InvalidCurve(_)));

    let err =
        interpolate(0.0, &[10.0, 5.0], &[0.0, 1.0], Default::default()).unwrap_err();
    assert!(matches!(err, ShortformError::InvalidCurve(_)));
}

#[test]
fn rejects_length_mismatch_and_degenerate_curves() {
    assert!(matches!(
        interpolate(0.0, &[0.0, 1.0], &[0.0], Default::default()),
        Err(ShortformError::InvalidCurve(_))
    ));
    assert!(matches!(
        interpolate(0.0, &[0.0], &[1.0], Default::default()),
        Err(ShortformError::InvalidCurve(_))
    ));
    assert!(matches!(
        interpolate(0.0, &[0.0, f64::NAN], &[0.0, 1.0], Default::default()),
        Err(ShortformError::InvalidCurve(_))
    ));
}
