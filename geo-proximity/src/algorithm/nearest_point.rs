use super::distance::{geometry_kind, minimum_by_key, skip_invalid_boundary, BoundaryLines};
use crate::{DistanceEngine, Feature, PrimitiveError, Primitives, ProximityError};
use geo::{Geometry, LineString, Point};
use log::warn;

/// A point on a geometry nearest to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestPoint {
    pub point: Point<f64>,
    /// Distance from the query point, in the engine's units.
    pub distance: f64,
    /// Distance along the line from its first point to `point`, when the
    /// point lies on a line.
    pub location: Option<f64>,
    /// Index of the line segment `point` lies on.
    pub segment: Option<usize>,
}

impl NearestPoint {
    /// A witness that is one of the geometry's own points.
    pub const fn vertex(point: Point<f64>, distance: f64) -> Self {
        NearestPoint {
            point,
            distance,
            location: None,
            segment: None,
        }
    }
}

impl<P: Primitives> DistanceEngine<P> {
    /// The point on the geometry of `feature` nearest to `point`.
    ///
    /// - Point: the point itself.
    /// - MultiPoint: the closest of its points.
    /// - LineString: the nearest point on the line.
    /// - MultiLineString: the nearest of the nearest points on each line.
    /// - Polygon, MultiPolygon: the nearest point on the boundary rings, even
    ///   when `point` is inside.
    ///
    /// `None` when the feature has no geometry, the geometry is unsupported or
    /// empty, or the computation failed. Failures are logged, never raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::{point, MultiPoint};
    /// use geo_proximity::{DistanceEngine, Feature};
    ///
    /// let stops = Feature::new(MultiPoint::new(vec![
    ///     point!(x: 0.0, y: 1.0),
    ///     point!(x: 1.0, y: 0.0),
    ///     point!(x: 5.0, y: 5.0),
    /// ]));
    /// let nearest = DistanceEngine::new()
    ///     .nearest_point_on_feature((0.0, 0.0), &stops)
    ///     .unwrap();
    /// assert_eq!(nearest.point, point!(x: 0.0, y: 1.0));
    /// ```
    pub fn nearest_point_on_feature<T>(
        &self,
        point: impl Into<Point<f64>>,
        feature: &Feature<T>,
    ) -> Option<NearestPoint> {
        let geometry = feature.geometry()?;
        match self.nearest_point_on_geometry(point, geometry) {
            Ok(nearest) => Some(nearest),
            Err(err) => {
                warn!("error getting nearest point on feature: {err}");
                None
            }
        }
    }

    /// The point on `geometry` nearest to `point`, or why there is none.
    ///
    /// Lines of a multi-part geometry whose nearest point can't be found are
    /// logged and skipped. A geometry with nothing left to pick from is
    /// [`PrimitiveError::Indeterminate`].
    pub fn nearest_point_on_geometry(
        &self,
        point: impl Into<Point<f64>>,
        geometry: &Geometry<f64>,
    ) -> Result<NearestPoint, ProximityError> {
        let point = point.into();
        match geometry {
            Geometry::Point(target) => Ok(NearestPoint::vertex(
                *target,
                self.point_distance(&point, target),
            )),
            Geometry::MultiPoint(targets) => determinate(minimum_by_key(
                targets.iter().map(|target| {
                    Ok(NearestPoint::vertex(
                        *target,
                        self.point_distance(&point, target),
                    ))
                }),
                |nearest| nearest.distance,
            )?),
            Geometry::LineString(line) => Ok(self.primitives().nearest_point_on_line(
                line,
                &point,
                self.units(),
            )?),
            Geometry::MultiLineString(lines) => self.nearest_point_on_lines(&point, lines),
            Geometry::Polygon(polygon) => match self.boundary_lines(polygon)? {
                BoundaryLines::Single(ring) => Ok(self.primitives().nearest_point_on_line(
                    &ring,
                    &point,
                    self.units(),
                )?),
                BoundaryLines::Multi(rings) => self.nearest_point_on_lines(&point, &rings),
            },
            Geometry::MultiPolygon(polygons) => {
                let mut rings = Vec::new();
                let boundaries = polygons
                    .iter()
                    .map(|polygon| self.boundary_lines(polygon))
                    .filter_map(skip_invalid_boundary);
                for boundary in boundaries {
                    match boundary? {
                        BoundaryLines::Single(ring) => rings.push(ring),
                        BoundaryLines::Multi(more) => rings.extend(more),
                    }
                }
                self.nearest_point_on_lines(&point, &rings)
            }
            other => Err(ProximityError::UnsupportedGeometry(geometry_kind(other))),
        }
    }

    fn nearest_point_on_lines<'a>(
        &self,
        point: &Point<f64>,
        lines: impl IntoIterator<Item = &'a LineString<f64>>,
    ) -> Result<NearestPoint, ProximityError> {
        let candidates = lines.into_iter().map(|line| {
            let mut nearest = self
                .primitives()
                .nearest_point_on_line(line, point, self.units())?;
            nearest.distance = self.point_distance(point, &nearest.point);
            Ok(nearest)
        });
        determinate(minimum_by_key(candidates, |nearest| nearest.distance)?)
    }
}

fn determinate(nearest: Option<NearestPoint>) -> Result<NearestPoint, ProximityError> {
    nearest.ok_or(ProximityError::Primitive(PrimitiveError::Indeterminate))
}
