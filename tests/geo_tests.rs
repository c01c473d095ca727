// Host-side tests for destination-point projection.

use apps_core::{normalize_longitude, project, project_on_sphere, GeoFix, EARTH_RADIUS_M};

// One degree of arc on the mean-radius sphere, in metres.
const ONE_DEGREE_M: f64 = 111_194.93;

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn one_degree_north_from_equator() {
    let origin = GeoFix::new(0.0, 0.0, 5.0);
    let p = project(&origin, 0.0, ONE_DEGREE_M);
    assert!(close(p.latitude, 1.0, 1e-4), "lat {}", p.latitude);
    assert!(close(p.longitude, 0.0, 1e-9));
}

#[test]
fn one_degree_east_from_equator() {
    let origin = GeoFix::new(0.0, 0.0, 5.0);
    let p = project(&origin, 90.0, ONE_DEGREE_M);
    assert!(close(p.latitude, 0.0, 1e-9));
    assert!(close(p.longitude, 1.0, 1e-4), "lon {}", p.longitude);
}

#[test]
fn zero_distance_is_identity() {
    let origin = GeoFix::new(51.165691, 10.451526, 12.0);
    for heading in [0.0, 45.0, 180.0, 359.0] {
        let p = project(&origin, heading, 0.0);
        assert!(close(p.latitude, origin.latitude, 1e-9));
        assert!(close(p.longitude, origin.longitude, 1e-9));
    }
}

#[test]
fn projection_keeps_origin_accuracy() {
    let origin = GeoFix::new(48.0, 11.0, 7.5);
    assert_eq!(project(&origin, 30.0, 100.0).accuracy_m, 7.5);
}

#[test]
fn hundred_metres_south_moves_latitude_down() {
    let origin = GeoFix::simulated();
    let p = project(&origin, 180.0, 100.0);
    let expected = origin.latitude - (100.0 / EARTH_RADIUS_M).to_degrees();
    assert!(close(p.latitude, expected, 1e-9));
    assert!(close(p.longitude, origin.longitude, 1e-9));
}

#[test]
fn latitude_stays_in_range_over_the_pole() {
    let origin = GeoFix::new(89.9, 0.0, 1.0);
    let p = project(&origin, 0.0, 50_000.0);
    assert!((-90.0..=90.0).contains(&p.latitude));
}

#[test]
fn radius_is_a_parameter() {
    let origin = GeoFix::new(0.0, 0.0, 1.0);
    let p = project_on_sphere(&origin, 0.0, 1.0, 180.0 / std::f64::consts::PI);
    assert!(close(p.latitude, 1.0, 1e-9));
}

#[test]
fn longitude_is_not_wrapped_but_can_be_normalized() {
    let origin = GeoFix::new(0.0, 179.9, 1.0);
    let p = project(&origin, 90.0, 2.0 * ONE_DEGREE_M * 0.1);
    assert!(p.longitude > 180.0);
    let wrapped = normalize_longitude(p.longitude);
    assert!(close(wrapped, -179.9, 1e-4), "wrapped {}", wrapped);
    assert_eq!(normalize_longitude(180.0), -180.0);
    assert_eq!(normalize_longitude(-190.0), 170.0);
}

#[test]
fn coords_format_with_six_decimals() {
    assert_eq!(GeoFix::simulated().format_coords(), "51.165691, 10.451526");
    assert_eq!(GeoFix::new(-1.5, 2.0, 0.0).format_coords(), "-1.500000, 2.000000");
}
