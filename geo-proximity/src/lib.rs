//! The `geo-proximity` crate answers "how far, and where" for one lon/lat
//! query point against one geometry at a time.
//!
//! Given a query point and a [`Feature`] (an optional [`Geometry`] plus opaque
//! properties), the [`DistanceEngine`] reports:
//!
//! - the minimum great-circle distance to the geometry, with a containment
//!   short-circuit for area geometries ([`DistanceEngine::distance_to_feature`]),
//! - the raw, fallible distance dispatch ([`DistanceEngine::distance_to_geometry`]),
//! - the point on the geometry nearest to the query point
//!   ([`DistanceEngine::nearest_point_on_feature`]).
//!
//! Coordinates follow the `geo` convention: `x` is longitude and `y` is
//! latitude, in degrees. [`LonLat`] spells the order out for callers that
//! would rather not rely on it.
//!
//! The low-level measurements (point-to-point and point-to-line distance,
//! point-in-polygon, boundary extraction, nearest point on a line) are
//! delegated to a [`Primitives`] backend. The default, [`HaversinePrimitives`],
//! is built on the [`geo`] crate.
//!
//! # Example
//!
//! ```
//! use geo_proximity::{DistanceEngine, Feature, LonLat};
//! use geo::polygon;
//!
//! let square = Feature::new(polygon![
//!     (x: 1.0, y: 1.0),
//!     (x: 1.0, y: 2.0),
//!     (x: 2.0, y: 2.0),
//!     (x: 2.0, y: 1.0),
//!     (x: 1.0, y: 1.0),
//! ]);
//! let engine = DistanceEngine::new();
//!
//! let inside = engine
//!     .distance_to_feature(LonLat::new(1.5, 1.5), &square)
//!     .unwrap();
//! assert!(inside.is_containing);
//! assert_eq!(inside.distance, 0.0);
//!
//! let outside = engine
//!     .distance_to_feature(LonLat::new(0.0, 0.0), &square)
//!     .unwrap();
//! assert!(!outside.is_containing);
//! assert!((outside.distance - 157.25).abs() < 0.1);
//! ```
//!
//! # Optional features
//!
//! - `use-serde`: serialize and deserialize results, [`Units`], [`LonLat`]
//!   and [`Feature`] with [`serde`].
//!
//! [`serde`]: https://serde.rs

pub use geo::{Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

pub mod algorithm;
pub use crate::algorithm::*;

mod error;
pub use crate::error::{PrimitiveError, ProximityError};

mod feature;
pub use crate::feature::Feature;

mod lon_lat;
pub use crate::lon_lat::LonLat;

pub mod primitives;
pub use crate::primitives::{HaversinePrimitives, Primitives};

mod units;
pub use crate::units::Units;

/// Distance from `point` to `feature` in kilometers, using the default
/// [`DistanceEngine`].
///
/// See [`DistanceEngine::distance_to_feature`].
pub fn distance_to_feature<P>(
    point: impl Into<Point<f64>>,
    feature: &Feature<P>,
) -> Option<DistanceResult> {
    DistanceEngine::new().distance_to_feature(point, feature)
}

/// Distance from `point` to `geometry` in kilometers, using the default
/// [`DistanceEngine`].
///
/// See [`DistanceEngine::distance_to_geometry`].
pub fn distance_to_geometry(
    point: impl Into<Point<f64>>,
    geometry: &Geometry<f64>,
) -> Result<f64, ProximityError> {
    DistanceEngine::new().distance_to_geometry(point, geometry)
}

/// The point on `feature` nearest to `point`, using the default
/// [`DistanceEngine`].
///
/// See [`DistanceEngine::nearest_point_on_feature`].
pub fn nearest_point_on_feature<P>(
    point: impl Into<Point<f64>>,
    feature: &Feature<P>,
) -> Option<NearestPoint> {
    DistanceEngine::new().nearest_point_on_feature(point, feature)
}
