use geo::{coord, Coord, Point};

/// A position given as longitude then latitude, in degrees.
///
/// `geo` stores longitude in `x` and latitude in `y`. `LonLat` names the two
/// axes so a swapped pair shows up at the call site rather than as a wrong
/// distance.
///
/// Longitude is expected in `[-180, 180]` and latitude in `[-90, 90]`; the
/// range is not enforced.
///
/// ```
/// use geo_proximity::LonLat;
/// use geo::Point;
///
/// let paris = LonLat::new(2.3522, 48.8566);
/// let point: Point = paris.into();
/// assert_eq!(point.x(), 2.3522);
/// assert_eq!(point.y(), 48.8566);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both axes are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<LonLat> for Coord<f64> {
    fn from(lon_lat: LonLat) -> Self {
        coord! { x: lon_lat.lon, y: lon_lat.lat }
    }
}

impl From<LonLat> for Point<f64> {
    fn from(lon_lat: LonLat) -> Self {
        Point::from(Coord::from(lon_lat))
    }
}

impl From<Point<f64>> for LonLat {
    fn from(point: Point<f64>) -> Self {
        LonLat::new(point.x(), point.y())
    }
}

impl From<(f64, f64)> for LonLat {
    /// `(longitude, latitude)`
    fn from((lon, lat): (f64, f64)) -> Self {
        LonLat::new(lon, lat)
    }
}
