/// Length unit in which distances are reported.
///
/// Measurements are taken in meters and converted on the way out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "lowercase"))]
pub enum Units {
    Meters,
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl Units {
    /// Meters in one of `self`.
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Units::Meters => 1.0,
            Units::Kilometers => 1_000.0,
            Units::Miles => 1_609.344,
            Units::NauticalMiles => 1_852.0,
        }
    }

    /// Convert a length in meters into `self`.
    pub fn convert_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }
}
