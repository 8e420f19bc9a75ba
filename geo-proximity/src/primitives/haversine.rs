use super::Primitives;
use crate::{Boundary, NearestPoint, PrimitiveError, Units};
use geo::{Closest, Distance, Haversine, HaversineClosestPoint, Intersects};
use geo::{Geometry, LineString, Point, Polygon};

/// [`Primitives`] on a sphere, backed by `geo`.
///
/// Distances are great-circle distances on a sphere of the mean Earth radius
/// (6 371 008.8 m), see [`Haversine`]. Nearest points are found segment by
/// segment with [`HaversineClosestPoint`].
///
/// ```
/// use geo::{line_string, point};
/// use geo_proximity::{HaversinePrimitives, Primitives, Units};
///
/// let equator = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
/// let north = point!(x: 5.0, y: 1.0);
/// let km = HaversinePrimitives
///     .point_to_line_distance(&north, &equator, Units::Kilometers)
///     .unwrap();
/// assert!((km - 111.19).abs() < 0.01);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HaversinePrimitives;

fn ensure_finite(point: &Point<f64>) -> Result<(), PrimitiveError> {
    if point.x().is_finite() && point.y().is_finite() {
        Ok(())
    } else {
        Err(PrimitiveError::NonFiniteCoordinate)
    }
}

impl Primitives for HaversinePrimitives {
    fn point_in_polygon(
        &self,
        point: &Point<f64>,
        polygon: &Polygon<f64>,
    ) -> Result<bool, PrimitiveError> {
        ensure_finite(point)?;
        if polygon.exterior().0.is_empty() {
            return Ok(false);
        }
        if std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .flat_map(|ring| ring.coords())
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(PrimitiveError::NonFiniteCoordinate);
        }
        Ok(polygon.intersects(point))
    }

    fn polygon_to_boundary(&self, polygon: &Polygon<f64>) -> Geometry<f64> {
        polygon.boundary()
    }

    fn point_to_line_distance(
        &self,
        point: &Point<f64>,
        line: &LineString<f64>,
        units: Units,
    ) -> Result<f64, PrimitiveError> {
        self.nearest_point_on_line(line, point, units)
            .map(|nearest| nearest.distance)
    }

    fn point_to_point_distance(&self, a: &Point<f64>, b: &Point<f64>, units: Units) -> f64 {
        units.convert_meters(Haversine.distance(*a, *b))
    }

    fn nearest_point_on_line(
        &self,
        line: &LineString<f64>,
        point: &Point<f64>,
        units: Units,
    ) -> Result<NearestPoint, PrimitiveError> {
        ensure_finite(point)?;
        if line.0.len() < 2 {
            return Err(PrimitiveError::DegenerateLine {
                points: line.0.len(),
            });
        }

        // meters along the line to the start of the current segment
        let mut travelled = 0.0;
        let mut nearest: Option<(f64, NearestPoint)> = None;
        for (index, segment) in line.lines().enumerate() {
            let start = segment.start_point();
            ensure_finite(&start)?;
            ensure_finite(&segment.end_point())?;

            let candidate = match segment.haversine_closest_point(point) {
                Closest::Intersection(p) | Closest::SinglePoint(p) => p,
                Closest::Indeterminate => return Err(PrimitiveError::Indeterminate),
            };
            let meters = Haversine.distance(*point, candidate);
            if nearest.as_ref().map_or(true, |(best, _)| meters < *best) {
                let location = travelled + Haversine.distance(start, candidate);
                nearest = Some((
                    meters,
                    NearestPoint {
                        point: candidate,
                        distance: units.convert_meters(meters),
                        location: Some(units.convert_meters(location)),
                        segment: Some(index),
                    },
                ));
            }
            travelled += Haversine.distance(start, segment.end_point());
        }

        nearest
            .map(|(_, nearest)| nearest)
            .ok_or(PrimitiveError::Indeterminate)
    }
}
