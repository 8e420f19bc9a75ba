use core::fmt;

/// A failure reported by a [`Primitives`](crate::Primitives) backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveError {
    /// A coordinate was `NaN` or infinite.
    NonFiniteCoordinate,
    /// A line needs at least two points to be measured.
    DegenerateLine { points: usize },
    /// No single nearest point could be determined.
    Indeterminate,
}

impl fmt::Display for PrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveError::NonFiniteCoordinate => write!(f, "coordinate is not finite"),
            PrimitiveError::DegenerateLine { points } => {
                write!(f, "line has {points} point(s), at least 2 are required")
            }
            PrimitiveError::Indeterminate => write!(f, "nearest point is indeterminate"),
        }
    }
}

impl std::error::Error for PrimitiveError {}

/// Why a distance or nearest point could not be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProximityError {
    /// The feature carries no geometry.
    MissingGeometry,
    /// The geometry is not one of Point, MultiPoint, LineString,
    /// MultiLineString, Polygon or MultiPolygon.
    UnsupportedGeometry(&'static str),
    /// Boundary extraction produced something other than a LineString or a
    /// MultiLineString.
    InvalidPolygonBoundary(&'static str),
    /// A primitive measurement failed.
    Primitive(PrimitiveError),
}

impl fmt::Display for ProximityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProximityError::MissingGeometry => write!(f, "feature has no geometry"),
            ProximityError::UnsupportedGeometry(kind) => {
                write!(f, "unsupported geometry type: {kind}")
            }
            ProximityError::InvalidPolygonBoundary(kind) => {
                write!(f, "invalid polygon boundary geometry: {kind}")
            }
            ProximityError::Primitive(err) => write!(f, "primitive failed: {err}"),
        }
    }
}

impl std::error::Error for ProximityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProximityError::Primitive(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for ProximityError {
    fn from(err: PrimitiveError) -> Self {
        ProximityError::Primitive(err)
    }
}
