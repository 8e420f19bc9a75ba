use crate::{Feature, HaversinePrimitives, Primitives, ProximityError, Units};
use geo::{Geometry, LineString, MultiLineString, Point, Polygon};
use log::{debug, warn};

/// The outcome of [`DistanceEngine::distance_to_feature`].
///
/// When `is_containing` is true, `distance` is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "camelCase"))]
pub struct DistanceResult {
    /// Minimum distance in the engine's [`Units`]. `f64::INFINITY` when the
    /// geometry has nothing to measure against (e.g. an empty MultiPoint).
    pub distance: f64,
    pub is_containing: bool,
}

impl DistanceResult {
    /// The query point lies inside the area geometry.
    pub const fn containing() -> Self {
        DistanceResult {
            distance: 0.0,
            is_containing: true,
        }
    }

    /// The query point lies outside (or the geometry has no area).
    pub const fn measured(distance: f64) -> Self {
        DistanceResult {
            distance,
            is_containing: false,
        }
    }

    /// Whether any finite distance was measured.
    pub fn is_finite(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Measures how far a lon/lat point is from a geometry, and where the
/// nearest point on that geometry lies.
///
/// The engine holds no state beyond its configuration: the [`Primitives`]
/// backend doing the actual measurements and the [`Units`] distances are
/// reported in. It can be shared freely between threads.
///
/// Supported geometries are Point, MultiPoint, LineString, MultiLineString,
/// Polygon and MultiPolygon. Anything else is
/// [`ProximityError::UnsupportedGeometry`].
///
/// # Examples
///
/// ```
/// use geo::{line_string, Geometry};
/// use geo_proximity::{DistanceEngine, Units};
///
/// let equator = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]);
/// let engine = DistanceEngine::new().with_units(Units::Meters);
///
/// let meters = engine.distance_to_geometry((5.0, 1.0), &equator).unwrap();
/// assert!((meters - 111_195.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEngine<P = HaversinePrimitives> {
    primitives: P,
    units: Units,
}

impl DistanceEngine {
    /// Haversine measurements in kilometers.
    pub fn new() -> Self {
        DistanceEngine {
            primitives: HaversinePrimitives,
            units: Units::Kilometers,
        }
    }
}

impl Default for DistanceEngine {
    fn default() -> Self {
        DistanceEngine::new()
    }
}

impl<P> DistanceEngine<P> {
    pub fn with_units(self, units: Units) -> Self {
        DistanceEngine { units, ..self }
    }

    pub fn with_primitives<Q: Primitives>(self, primitives: Q) -> DistanceEngine<Q> {
        DistanceEngine {
            primitives,
            units: self.units,
        }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }
}

/// The boundary of one polygon, as returned by the primitives.
pub(crate) enum BoundaryLines {
    Single(LineString<f64>),
    Multi(MultiLineString<f64>),
}

impl<P: Primitives> DistanceEngine<P> {
    /// Distance from `point` to the geometry of `feature`, or `None` if it
    /// can't be measured.
    ///
    /// A point inside a Polygon or MultiPolygon (boundary included) is at
    /// distance zero and `is_containing` is set; the boundary is not measured
    /// at all in that case. A failing containment test is logged and treated
    /// as "not contained".
    ///
    /// `None` is returned when the feature has no geometry, the geometry is
    /// unsupported, or the measurement failed. Nothing here panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::{Geometry, GeometryCollection};
    /// use geo_proximity::{DistanceEngine, Feature};
    ///
    /// let engine = DistanceEngine::new();
    /// assert_eq!(engine.distance_to_feature((0.0, 0.0), &Feature::empty()), None);
    ///
    /// let collection = Feature::new(Geometry::GeometryCollection(GeometryCollection(vec![])));
    /// assert_eq!(engine.distance_to_feature((0.0, 0.0), &collection), None);
    /// ```
    pub fn distance_to_feature<T>(
        &self,
        point: impl Into<Point<f64>>,
        feature: &Feature<T>,
    ) -> Option<DistanceResult> {
        let point = point.into();
        let Some(geometry) = feature.geometry() else {
            debug!("{}", ProximityError::MissingGeometry);
            return None;
        };

        if self.contains(point, geometry) {
            debug!("{point:?} is contained, skipping boundary distance");
            return Some(DistanceResult::containing());
        }

        match self.distance_to_geometry(point, geometry) {
            Ok(distance) => Some(DistanceResult::measured(distance)),
            Err(err) => {
                warn!("error calculating distance for feature: {err}");
                None
            }
        }
    }

    /// Whether `point` lies inside `geometry`.
    ///
    /// Only Polygon and MultiPolygon can contain a point; a MultiPolygon
    /// contains it when any of its polygons does. A failing containment test
    /// is logged and counts as "not contained".
    pub fn contains(&self, point: impl Into<Point<f64>>, geometry: &Geometry<f64>) -> bool {
        let point = point.into();
        let polygons: &[Polygon<f64>] = match geometry {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(multi_polygon) => &multi_polygon.0,
            _ => return false,
        };
        polygons
            .iter()
            .any(|polygon| match self.primitives.point_in_polygon(&point, polygon) {
                Ok(inside) => inside,
                Err(err) => {
                    warn!("error checking point containment: {err}");
                    false
                }
            })
    }

    /// Minimum distance from `point` to `geometry`, in the engine's units.
    ///
    /// - Point: the distance between the two points.
    /// - MultiPoint: the minimum over its points.
    /// - LineString: the distance to the nearest point on any segment.
    /// - MultiLineString: the minimum over its lines; lines with fewer than
    ///   two points are skipped.
    /// - Polygon: the distance to its boundary (exterior and interior rings).
    ///   Containment is not considered here, see
    ///   [`distance_to_feature`](Self::distance_to_feature).
    /// - MultiPolygon: the minimum over its polygons' boundaries.
    ///
    /// A part of a multi-part geometry whose measurement fails is logged and
    /// left out of the minimum; so is a polygon of a MultiPolygon whose
    /// boundary is not line geometry. An empty multi-part geometry measures
    /// `f64::INFINITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::{point, Geometry, MultiPoint};
    /// use geo_proximity::DistanceEngine;
    ///
    /// let engine = DistanceEngine::new();
    /// let points = Geometry::MultiPoint(MultiPoint::new(vec![
    ///     point!(x: 0.0, y: 1.0),
    ///     point!(x: 5.0, y: 5.0),
    /// ]));
    /// let nearest = engine
    ///     .distance_to_geometry((0.0, 0.0), &Geometry::Point(point!(x: 0.0, y: 1.0)))
    ///     .unwrap();
    /// assert_eq!(engine.distance_to_geometry((0.0, 0.0), &points), Ok(nearest));
    /// ```
    pub fn distance_to_geometry(
        &self,
        point: impl Into<Point<f64>>,
        geometry: &Geometry<f64>,
    ) -> Result<f64, ProximityError> {
        let point = point.into();
        match geometry {
            Geometry::Point(target) => Ok(self.point_distance(&point, target)),
            Geometry::MultiPoint(targets) => minimum_distance(
                targets
                    .iter()
                    .map(|target| Ok(self.point_distance(&point, target))),
            ),
            Geometry::LineString(line) => self.line_distance(&point, line),
            Geometry::MultiLineString(lines) => minimum_distance(
                lines
                    .iter()
                    .filter(|line| line.0.len() > 1)
                    .map(|line| self.line_distance(&point, line)),
            ),
            Geometry::Polygon(polygon) => self.polygon_distance(&point, polygon),
            Geometry::MultiPolygon(polygons) => minimum_distance(
                polygons
                    .iter()
                    .map(|polygon| self.polygon_distance(&point, polygon))
                    .filter_map(skip_invalid_boundary),
            ),
            other => Err(ProximityError::UnsupportedGeometry(geometry_kind(other))),
        }
    }

    pub(crate) fn point_distance(&self, point: &Point<f64>, target: &Point<f64>) -> f64 {
        self.primitives
            .point_to_point_distance(point, target, self.units)
    }

    fn line_distance(&self, point: &Point<f64>, line: &LineString<f64>) -> Result<f64, ProximityError> {
        Ok(self
            .primitives
            .point_to_line_distance(point, line, self.units)?)
    }

    fn polygon_distance(
        &self,
        point: &Point<f64>,
        polygon: &Polygon<f64>,
    ) -> Result<f64, ProximityError> {
        match self.boundary_lines(polygon)? {
            BoundaryLines::Single(ring) => self.line_distance(point, &ring),
            BoundaryLines::Multi(rings) => {
                minimum_distance(rings.iter().map(|ring| self.line_distance(point, ring)))
            }
        }
    }

    /// The boundary of `polygon`, which must come back as line geometry.
    pub(crate) fn boundary_lines(
        &self,
        polygon: &Polygon<f64>,
    ) -> Result<BoundaryLines, ProximityError> {
        match self.primitives.polygon_to_boundary(polygon) {
            Geometry::LineString(ring) => Ok(BoundaryLines::Single(ring)),
            Geometry::MultiLineString(rings) => Ok(BoundaryLines::Multi(rings)),
            other => Err(ProximityError::InvalidPolygonBoundary(geometry_kind(&other))),
        }
    }
}

/// Keep the part with the smallest `key`, the first one winning a tie.
///
/// Parts that failed in a primitive are logged and left out; any other error
/// ends the reduction. `None` when no part has a key below infinity.
pub(crate) fn minimum_by_key<T, I, K>(parts: I, key: K) -> Result<Option<T>, ProximityError>
where
    I: IntoIterator<Item = Result<T, ProximityError>>,
    K: Fn(&T) -> f64,
{
    let mut min_key = f64::INFINITY;
    let mut min = None;
    for part in parts {
        match part {
            Ok(value) => {
                let k = key(&value);
                if k < min_key {
                    min_key = k;
                    min = Some(value);
                }
            }
            Err(ProximityError::Primitive(err)) => warn!("skipping part: {err}"),
            Err(err) => return Err(err),
        }
    }
    Ok(min)
}

/// Leave a polygon with an unusable boundary out of a MultiPolygon.
pub(crate) fn skip_invalid_boundary<T>(
    part: Result<T, ProximityError>,
) -> Option<Result<T, ProximityError>> {
    match part {
        Err(err @ ProximityError::InvalidPolygonBoundary(_)) => {
            warn!("skipping polygon: {err}");
            None
        }
        part => Some(part),
    }
}

fn minimum_distance<I>(parts: I) -> Result<f64, ProximityError>
where
    I: IntoIterator<Item = Result<f64, ProximityError>>,
{
    minimum_by_key(parts, |distance| *distance).map(|min| min.unwrap_or(f64::INFINITY))
}

pub(crate) fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
