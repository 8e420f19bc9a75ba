/// Polygon boundaries as line geometry.
pub mod boundary;
pub use boundary::Boundary;

/// Distance from a point to a geometry or feature, with containment.
pub mod distance;
pub use distance::{DistanceEngine, DistanceResult};

/// The point on a geometry nearest to a query point.
pub mod nearest_point;
pub use nearest_point::NearestPoint;
