//! District entity model

use geo::MultiPolygon;

/// One administrative district from the VG250 shape dataset
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Amtlicher Regionalschlüssel, kept as text so leading zeros survive
    pub ars: String,
    /// Geofaktor, selects the granularity a record represents
    pub gf: i64,
    /// District area, `None` when the feature carries no geometry
    pub geometry: Option<MultiPolygon<f64>>,
}

impl District {
    #[must_use]
    pub fn new(ars: impl Into<String>, gf: i64, geometry: Option<MultiPolygon<f64>>) -> Self {
        Self {
            ars: ars.into(),
            gf,
            geometry,
        }
    }
}
