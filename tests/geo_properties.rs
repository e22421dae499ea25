use proptest::prelude::*;
use universle::{bearing, distance_miles, Compass, Coordinate, EARTH_RADIUS_MILES};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = distance_miles(a, b);
        let ba = distance_miles(b, a);
        prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance_miles(a, a), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = distance_miles(a, b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        prop_assert!(d <= EARTH_RADIUS_MILES * std::f64::consts::PI + 1e-6);
    }

    #[test]
    fn bearing_is_a_compass_label(a in coordinate(), b in coordinate()) {
        prop_assert!(Compass::ALL.contains(&bearing(a, b)));
    }

    #[test]
    fn sector_centres_map_to_their_label(k in -100i32..100) {
        let expected = Compass::ALL[k.rem_euclid(16) as usize];
        prop_assert_eq!(Compass::from_degrees(f64::from(k) * 22.5), expected);
    }
}

#[test]
fn chicago_to_stanford() {
    let chicago = Coordinate::new(41.7897, -87.5997);
    let stanford = Coordinate::new(37.4275, -122.1697);
    let miles = distance_miles(chicago, stanford);
    assert!((1850.0..=1860.0).contains(&miles), "got {miles}");
    // Initial great-circle heading is about 272 degrees.
    assert_eq!(bearing(chicago, stanford), Compass::W);
    assert_eq!(bearing(stanford, chicago), Compass::ENE);
}
