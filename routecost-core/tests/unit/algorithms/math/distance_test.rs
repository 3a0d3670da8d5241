use super::*;

#[test]
fn can_compute_plane_distance() {
    assert!((plane_distance((0., 0.), (3., 4.)) - 5.).abs() < f64::EPSILON);
}

#[test]
fn can_handle_identical_points() {
    assert_eq!(plane_distance((48.137, 11.576), (48.137, 11.576)), 0.);
}

#[test]
fn can_compute_symmetric_distance() {
    let a = (48.14, 11.58);
    let b = (48.137, 11.576);

    assert_eq!(plane_distance(a, b), plane_distance(b, a));
}
