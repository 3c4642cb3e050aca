use super::*;

#[test]
fn first_point_has_zero_velocity() {
    let p = with_velocity(RawPoint::new(4.0, 7.0, 123.0), None);
    assert_eq!(p.v, 0.0);
    assert_eq!((p.x, p.y, p.t), (4.0, 7.0, 123.0));
}

#[test]
fn velocity_is_distance_over_elapsed_ms() {
    let first = with_velocity(RawPoint::new(0.0, 0.0, 0.0), None);
    let second = with_velocity(RawPoint::new(10.0, 0.0, 10.0), Some(&first));
    assert_eq!(second.v, 1.0);

    let diag = with_velocity(RawPoint::new(3.0, 4.0, 5.0), Some(&first));
    assert_eq!(diag.v, 1.0);
}

#[test]
fn elapsed_time_is_floored_at_one_ms() {
    let first = with_velocity(RawPoint::new(0.0, 0.0, 50.0), None);
    let same_tick = with_velocity(RawPoint::new(6.0, 8.0, 50.0), Some(&first));
    assert_eq!(same_tick.v, 10.0);

    let backwards = with_velocity(RawPoint::new(6.0, 8.0, 40.0), Some(&first));
    assert_eq!(backwards.v, 10.0);
}

#[test]
fn sampler_rejects_points_inside_the_gate() {
    let sampler = PointSampler::new(0.35);
    let first = sampler.sample(RawPoint::new(1.0, 1.0, 0.0), None).unwrap();
    assert!(
        sampler
            .sample(RawPoint::new(1.2, 1.1, 16.0), Some(&first))
            .is_none()
    );
    let far = sampler
        .sample(RawPoint::new(1.0, 1.5, 16.0), Some(&first))
        .unwrap();
    assert!((far.v - 0.5 / 16.0).abs() < 1e-12);
}

#[test]
fn sampler_accepts_points_exactly_on_the_gate() {
    let sampler = PointSampler::new(1.0);
    let first = sampler.sample(RawPoint::new(0.0, 0.0, 0.0), None).unwrap();
    assert!(
        sampler
            .sample(RawPoint::new(1.0, 0.0, 1.0), Some(&first))
            .is_some()
    );
}
