use geo::Geometry;

/// A geometry plus opaque properties.
///
/// The properties are carried along untouched; only the geometry is measured.
/// A feature without a geometry is valid but can't be measured.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature<P = ()> {
    pub geometry: Option<Geometry<f64>>,
    pub properties: P,
}

impl Feature<()> {
    /// A feature with a geometry and no properties.
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Feature {
            geometry: Some(geometry.into()),
            properties: (),
        }
    }

    /// A feature with neither geometry nor properties.
    pub fn empty() -> Self {
        Feature {
            geometry: None,
            properties: (),
        }
    }
}

impl<P> Feature<P> {
    /// Replace the properties, keeping the geometry.
    pub fn with_properties<Q>(self, properties: Q) -> Feature<Q> {
        Feature {
            geometry: self.geometry,
            properties,
        }
    }

    /// The geometry, if there is one.
    pub fn geometry(&self) -> Option<&Geometry<f64>> {
        self.geometry.as_ref()
    }
}

impl Default for Feature<()> {
    fn default() -> Self {
        Feature::empty()
    }
}

impl From<Geometry<f64>> for Feature<()> {
    fn from(geometry: Geometry<f64>) -> Self {
        Feature::new(geometry)
    }
}
