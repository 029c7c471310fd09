use geo::AffineTransform;
use shrinkwraprs::Shrinkwrap;
use std::fmt::Display;

/// EPSG authority code of a reference system.
#[derive(
    Shrinkwrap, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize,
)]
pub struct EpsgCode(pub u32);

impl EpsgCode {
    /// Global longitude/latitude, the fixed output reference system.
    pub const WGS84: EpsgCode = EpsgCode(4326);
}

impl Display for EpsgCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Pixel (col, row) to world (x, y) transform of a raster.
#[derive(Shrinkwrap, Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform(AffineTransform);

impl GeoTransform {
    pub fn new(a: f64, b: f64, xoff: f64, d: f64, e: f64, yoff: f64) -> Self {
        Self(AffineTransform::new(a, b, xoff, d, e, yoff))
    }

    /// From gdal coefficient order `[xoff, a, b, yoff, d, e]`.
    pub fn from_gdal(gdal_transform: [f64; 6]) -> Self {
        Self::new(
            gdal_transform[1],
            gdal_transform[2],
            gdal_transform[0],
            gdal_transform[4],
            gdal_transform[5],
            gdal_transform[3],
        )
    }

    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.xoff(),
            self.a(),
            self.b(),
            self.yoff(),
            self.d(),
            self.e(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gdal_coefficients_survive() {
        let gdal = [500_000., 10., 0., 4_600_000., 0., -10.];
        assert_eq!(GeoTransform::from_gdal(gdal).to_gdal(), gdal);
    }

    #[test]
    fn epsg_display() {
        assert_eq!(EpsgCode::WGS84.to_string(), "EPSG:4326");
    }
}
