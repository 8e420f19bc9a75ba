use approx::assert_relative_eq;
use geo::{point, Geometry, LineString, MultiLineString, MultiPoint, Point, Polygon};
use geo_proximity::{
    distance_to_feature, distance_to_geometry, nearest_point_on_feature, DistanceEngine,
    DistanceResult, Feature, LonLat, ProximityError, Units,
};
use wkt::TryFromWkt;

fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

fn polygon(wkt: &str) -> Polygon<f64> {
    Polygon::try_from_wkt_str(wkt).unwrap()
}

fn square() -> Polygon<f64> {
    polygon("POLYGON((1 1,1 2,2 2,2 1,1 1))")
}

// a few points around and about the square
fn probes() -> Vec<Point<f64>> {
    let mut probes = Vec::new();
    for lon in [-3.0, -0.5, 0.0, 1.5, 2.25, 4.0, 30.0] {
        for lat in [-10.0, 0.0, 0.75, 2.5, 45.0] {
            probes.push(point!(x: lon, y: lat));
        }
    }
    probes
}

#[test]
fn inside_points_are_contained() {
    init_logging();
    let feature = Feature::new(square());
    for (lon, lat) in [(1.5, 1.5), (1.1, 1.9), (1.9, 1.1), (1.01, 1.01)] {
        assert_eq!(
            distance_to_feature(LonLat::new(lon, lat), &feature),
            Some(DistanceResult::containing())
        );
    }
}

#[test]
fn outside_points_have_positive_distance() {
    init_logging();
    let feature = Feature::new(square());
    for probe in probes() {
        let result = distance_to_feature(probe, &feature).unwrap();
        assert!(!result.is_containing, "{probe:?}");
        assert!(result.distance > 0.0, "{probe:?}");
    }
}

#[test]
fn point_distance_is_symmetric() {
    for p in probes() {
        for q in probes() {
            assert_relative_eq!(
                distance_to_geometry(p, &Geometry::Point(q)).unwrap(),
                distance_to_geometry(q, &Geometry::Point(p)).unwrap()
            );
        }
    }
}

#[test]
fn multi_point_is_the_minimum_of_its_points() {
    let (a, b, c) = (
        point!(x: 10.0, y: 10.0),
        point!(x: -4.0, y: 2.0),
        point!(x: 0.5, y: -7.0),
    );
    let multi = Geometry::MultiPoint(MultiPoint::new(vec![a, b, c]));
    for p in probes() {
        let expected = [a, b, c]
            .into_iter()
            .map(|q| distance_to_geometry(p, &Geometry::Point(q)).unwrap())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(distance_to_geometry(p, &multi).unwrap(), expected);
    }
}

#[test]
fn degenerate_lines_do_not_count() {
    let line = LineString::<f64>::try_from_wkt_str("LINESTRING(0 1,1 2)").unwrap();
    let multi = Geometry::MultiLineString(MultiLineString::new(vec![
        LineString::new(vec![]),
        line.clone(),
    ]));
    let single = Geometry::LineString(line);
    for p in probes() {
        assert_eq!(
            distance_to_geometry(p, &multi).unwrap(),
            distance_to_geometry(p, &single).unwrap()
        );
    }
}

#[test]
fn polygon_distance_is_exterior_ring_distance() {
    let area = Geometry::Polygon(square());
    let ring = Geometry::LineString(square().exterior().clone());
    for p in probes() {
        assert_eq!(
            distance_to_geometry(p, &area).unwrap(),
            distance_to_geometry(p, &ring).unwrap()
        );
    }
}

#[test]
fn nearest_corner_from_the_origin() {
    init_logging();
    let feature = Feature::new(square());
    let result = distance_to_feature(LonLat::new(0.0, 0.0), &feature).unwrap();
    let corner = distance_to_geometry((0.0, 0.0), &Geometry::Point(point!(x: 1.0, y: 1.0))).unwrap();
    assert!(!result.is_containing);
    assert_relative_eq!(result.distance, corner, epsilon = 1e-6);

    let nearest = nearest_point_on_feature(LonLat::new(0.0, 0.0), &feature).unwrap();
    assert_relative_eq!(nearest.point.x(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(nearest.point.y(), 1.0, epsilon = 1e-6);
}

#[test]
fn equidistant_multi_point() {
    let points = Geometry::MultiPoint(MultiPoint::new(vec![
        point!(x: 0.0, y: 1.0),
        point!(x: 1.0, y: 0.0),
        point!(x: 5.0, y: 5.0),
    ]));
    let feature = Feature::new(points.clone());
    let nearest = nearest_point_on_feature((0.0, 0.0), &feature).unwrap();
    assert!(nearest.point == point!(x: 0.0, y: 1.0) || nearest.point == point!(x: 1.0, y: 0.0));
    assert_eq!(
        distance_to_geometry((0.0, 0.0), &points).unwrap(),
        distance_to_geometry((0.0, 0.0), &Geometry::Point(nearest.point)).unwrap()
    );
}

#[test]
fn geometry_collection_is_unsupported() {
    init_logging();
    let collection = Geometry::<f64>::try_from_wkt_str("GEOMETRYCOLLECTION(POINT(1 2))").unwrap();
    assert_eq!(
        distance_to_geometry((0.0, 0.0), &collection),
        Err(ProximityError::UnsupportedGeometry("GeometryCollection"))
    );
    let feature = Feature::new(collection).with_properties("ignored");
    assert_eq!(distance_to_feature((0.0, 0.0), &feature), None);
    assert_eq!(nearest_point_on_feature((0.0, 0.0), &feature), None);
}

#[test]
fn missing_geometry_is_absent() {
    let feature: Feature<&str> = Feature {
        geometry: None,
        properties: "name",
    };
    assert_eq!(distance_to_feature((0.0, 0.0), &feature), None);
    assert_eq!(nearest_point_on_feature((0.0, 0.0), &feature), None);
}

#[test]
fn multi_polygon_distance_is_the_nearest_polygon() {
    let multi = Geometry::<f64>::try_from_wkt_str(
        "MULTIPOLYGON(((1 1,1 2,2 2,2 1,1 1)),((20 20,20 21,21 21,21 20,20 20)))",
    )
    .unwrap();
    for p in probes() {
        let near = distance_to_geometry(p, &Geometry::Polygon(square())).unwrap();
        let far = distance_to_geometry(
            p,
            &Geometry::Polygon(polygon("POLYGON((20 20,20 21,21 21,21 20,20 20))")),
        )
        .unwrap();
        assert_eq!(distance_to_geometry(p, &multi).unwrap(), near.min(far));
    }
}

#[test]
fn non_finite_query_is_absent() {
    init_logging();
    let line = Feature::new(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(distance_to_feature(LonLat::new(f64::NAN, 0.0), &line), None);
    assert_eq!(nearest_point_on_feature(LonLat::new(f64::NAN, 0.0), &line), None);
}

#[test]
fn engine_is_shareable_between_threads() {
    let engine = DistanceEngine::new().with_units(Units::Miles);
    let feature = Feature::new(square());
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = probes()
            .into_iter()
            .map(|p| {
                let feature = &feature;
                scope.spawn(move || engine.distance_to_feature(p, feature))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for (p, result) in probes().into_iter().zip(results) {
        assert_eq!(result, engine.distance_to_feature(p, &feature));
    }
}
