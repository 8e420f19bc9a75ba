//! The low-level measurements the [`DistanceEngine`](crate::DistanceEngine)
//! is built from.
//!
//! The engine only dispatches and reduces; every actual measurement goes
//! through a [`Primitives`] implementation. [`HaversinePrimitives`] is the
//! default one.

use crate::{NearestPoint, PrimitiveError, Units};
use geo::{Geometry, LineString, Point, Polygon};

mod haversine;
pub use haversine::HaversinePrimitives;

/// Point-level geometry operations on lon/lat coordinates.
///
/// Distances are returned in the requested [`Units`]. Implementations are
/// expected to be pure: the engine may call them from many threads at once.
pub trait Primitives {
    /// Whether `point` lies inside `polygon`. Points on the boundary count
    /// as inside.
    fn point_in_polygon(
        &self,
        point: &Point<f64>,
        polygon: &Polygon<f64>,
    ) -> Result<bool, PrimitiveError>;

    /// The boundary of `polygon`, normally a `LineString` for a polygon
    /// without holes and a `MultiLineString` otherwise.
    fn polygon_to_boundary(&self, polygon: &Polygon<f64>) -> Geometry<f64>;

    /// Distance from `point` to the nearest point on any segment of `line`.
    fn point_to_line_distance(
        &self,
        point: &Point<f64>,
        line: &LineString<f64>,
        units: Units,
    ) -> Result<f64, PrimitiveError>;

    /// Distance between two points.
    fn point_to_point_distance(&self, a: &Point<f64>, b: &Point<f64>, units: Units) -> f64;

    /// The point on `line` nearest to `point`, with its position along the
    /// line.
    fn nearest_point_on_line(
        &self,
        line: &LineString<f64>,
        point: &Point<f64>,
        units: Units,
    ) -> Result<NearestPoint, PrimitiveError>;
}

impl<T: Primitives + ?Sized> Primitives for &T {
    fn point_in_polygon(
        &self,
        point: &Point<f64>,
        polygon: &Polygon<f64>,
    ) -> Result<bool, PrimitiveError> {
        (**self).point_in_polygon(point, polygon)
    }

    fn polygon_to_boundary(&self, polygon: &Polygon<f64>) -> Geometry<f64> {
        (**self).polygon_to_boundary(polygon)
    }

    fn point_to_line_distance(
        &self,
        point: &Point<f64>,
        line: &LineString<f64>,
        units: Units,
    ) -> Result<f64, PrimitiveError> {
        (**self).point_to_line_distance(point, line, units)
    }

    fn point_to_point_distance(&self, a: &Point<f64>, b: &Point<f64>, units: Units) -> f64 {
        (**self).point_to_point_distance(a, b, units)
    }

    fn nearest_point_on_line(
        &self,
        line: &LineString<f64>,
        point: &Point<f64>,
        units: Units,
    ) -> Result<NearestPoint, PrimitiveError> {
        (**self).nearest_point_on_line(line, point, units)
    }
}
