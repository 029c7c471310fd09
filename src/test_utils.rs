use gdal::{raster::Buffer, spatial_ref::SpatialRef, DriverManager};
use std::path::Path;

use crate::components::EpsgCode;

pub const SCENE_BANDS: usize = 8;
/// UTM zone 33N
pub const SCENE_CRS: EpsgCode = EpsgCode(32633);
pub const SCENE_TRANSFORM: [f64; 6] = [500_000., 10., 0., 4_600_000., 0., -10.];

/// Writes an 8 band u16 GeoTIFF, `value(band, row, col)` with 1-based band.
pub fn write_scene(
    path: &Path,
    width: usize,
    height: usize,
    value: impl Fn(usize, usize, usize) -> u16,
) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut dataset = driver
        .create_with_band_type::<u16, _>(path, width, height, SCENE_BANDS)
        .unwrap();
    dataset
        .set_spatial_ref(&SpatialRef::from_epsg(SCENE_CRS.0).unwrap())
        .unwrap();
    dataset.set_geo_transform(&SCENE_TRANSFORM).unwrap();
    for band in 1..=SCENE_BANDS {
        let data = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| value(band, row, col))
            .collect();
        let mut buffer = Buffer::new((width, height), data);
        dataset
            .rasterband(band)
            .unwrap()
            .write((0, 0), (width, height), &mut buffer)
            .unwrap();
    }
}
