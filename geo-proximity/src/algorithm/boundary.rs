use geo::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon};

/// The boundary of an area geometry as line geometry.
///
/// A polygon's boundary is its exterior ring followed by its interior rings.
/// A polygon without holes has a single ring and yields a [`LineString`];
/// anything with more than one ring yields a [`MultiLineString`].
///
/// The rings are copied as they are: closure and orientation are the
/// caller's business.
///
/// # Examples
///
/// ```
/// use geo::{line_string, polygon, Geometry};
/// use geo_proximity::Boundary;
///
/// let square = polygon![
///     (x: 0.0, y: 0.0),
///     (x: 1.0, y: 0.0),
///     (x: 1.0, y: 1.0),
///     (x: 0.0, y: 0.0),
/// ];
/// assert_eq!(
///     square.boundary(),
///     Geometry::LineString(line_string![
///         (x: 0.0, y: 0.0),
///         (x: 1.0, y: 0.0),
///         (x: 1.0, y: 1.0),
///         (x: 0.0, y: 0.0),
///     ])
/// );
/// ```
pub trait Boundary {
    /// The exterior and interior rings of the geometry, exterior first.
    fn rings(&self) -> impl Iterator<Item = &LineString<f64>>;

    /// Every ring of the geometry as an owned line.
    fn boundary_lines(&self) -> MultiLineString<f64> {
        MultiLineString::new(self.rings().cloned().collect())
    }

    /// A single ring becomes a `LineString`, several a `MultiLineString`.
    fn boundary(&self) -> Geometry<f64> {
        let mut lines = self.boundary_lines();
        if lines.0.len() == 1 {
            if let Some(ring) = lines.0.pop() {
                return Geometry::LineString(ring);
            }
        }
        Geometry::MultiLineString(lines)
    }
}

impl Boundary for Polygon<f64> {
    fn rings(&self) -> impl Iterator<Item = &LineString<f64>> {
        std::iter::once(self.exterior()).chain(self.interiors().iter())
    }
}

impl Boundary for MultiPolygon<f64> {
    fn rings(&self) -> impl Iterator<Item = &LineString<f64>> {
        self.0.iter().flat_map(|p| p.rings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, polygon};

    fn donut() -> Polygon<f64> {
        polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 10.0, y: 0.0),
                (x: 10.0, y: 10.0),
                (x: 0.0, y: 10.0),
                (x: 0.0, y: 0.0),
            ],
            interiors: [
                [
                    (x: 4.0, y: 4.0),
                    (x: 6.0, y: 4.0),
                    (x: 6.0, y: 6.0),
                    (x: 4.0, y: 6.0),
                    (x: 4.0, y: 4.0),
                ],
            ],
        )
    }

    #[test]
    fn holes_make_a_multi_line_string() {
        let boundary = donut().boundary();
        let Geometry::MultiLineString(lines) = boundary else {
            panic!("expected a MultiLineString, got {boundary:?}");
        };
        assert_eq!(lines.0.len(), 2);
        assert_eq!(&lines.0[0], donut().exterior());
        assert_eq!(&lines.0[1], &donut().interiors()[0]);
    }

    #[test]
    fn multi_polygon_rings_in_order() {
        let tri = polygon![(x: 20.0, y: 20.0), (x: 21.0, y: 20.0), (x: 21.0, y: 21.0)];
        let multi = MultiPolygon::new(vec![donut(), tri.clone()]);
        let rings: Vec<_> = multi.rings().collect();
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[2], tri.exterior());
    }

    #[test]
    fn empty_polygon_is_an_empty_line() {
        let empty = Polygon::new(line_string![], vec![]);
        assert_eq!(empty.boundary(), Geometry::LineString(line_string![]));
    }
}
