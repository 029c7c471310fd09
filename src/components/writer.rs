use gdal::{
    raster::{Buffer, ColorInterpretation, RasterBand, RasterCreationOptions},
    spatial_ref::SpatialRef,
    Dataset, DriverManager,
};
use log::{debug, info};
use std::path::Path;

use crate::{
    components::{
        warp, ClassCounts, ClassifiedArray, EpsgCode, IndexArray, PixelEncoding, RasterMetadata,
    },
    errors::{NdviError, Result},
};

const DRIVER_NAME: &str = "GTiff";

/// Writes a classified index as a single band palette GeoTIFF in a fixed
/// target reference system.
///
/// The destination goes through `absent -> source crs -> target crs`. The last
/// step overwrites the file in place, so a failure there leaves a file that
/// must not be trusted.
#[derive(Debug, Clone)]
pub struct ClassifiedRasterWriter {
    encoding: PixelEncoding,
    target: EpsgCode,
}

impl Default for ClassifiedRasterWriter {
    fn default() -> Self {
        Self::new(PixelEncoding::default())
    }
}

impl ClassifiedRasterWriter {
    pub fn new(encoding: PixelEncoding) -> Self {
        Self {
            encoding,
            target: EpsgCode::WGS84,
        }
    }

    pub fn write(
        &self,
        index: &IndexArray,
        threshold: f64,
        source: &RasterMetadata,
        destination: impl AsRef<Path>,
    ) -> Result<ClassCounts> {
        let destination = destination.as_ref();
        if index.dim() != source.array_shape() {
            return Err(NdviError::ShapeMismatch {
                left: index.dim(),
                right: source.array_shape(),
            });
        }
        let source_srs = SpatialRef::from_epsg(source.crs.0).map_err(|source_err| {
            NdviError::UnknownCrs {
                code: source.crs,
                source: source_err,
            }
        })?;

        debug!("index {:?}", index.stats());
        let classified = ClassifiedArray::classify(index, threshold);
        let counts = classified.counts();
        info!("classified at threshold {threshold}: {counts:?}");
        let codes = classified.encode(self.encoding);

        let driver = DriverManager::get_driver_by_name(DRIVER_NAME)?;
        let (width, height) = source.size;
        let reprojected = {
            let mut dataset =
                driver.create_with_band_type::<u16, _>(destination, width, height, 1)?;
            dataset.set_projection(&source_srs.to_wkt()?)?;
            dataset.set_geo_transform(&source.transform.to_gdal())?;
            {
                let mut band = dataset.rasterband(1)?;
                let mut buffer = Buffer::new((width, height), codes.iter().copied().collect());
                band.write((0, 0), (width, height), &mut buffer)?;
                self.stamp_band(&mut band)?;
            }
            dataset.flush_cache()?;
            info!(
                "wrote {} in {}, reprojecting to {}",
                destination.display(),
                source.crs,
                self.target
            );
            warp::reproject(&dataset, self.target, source.size)?
        };

        self.replace(reprojected, &driver, destination)?;
        info!("wrote {} in {}", destination.display(), self.target);
        Ok(counts)
    }

    /// Declares no-data and the class palette on `band`.
    fn stamp_band(&self, band: &mut RasterBand) -> Result<()> {
        band.set_no_data_value(Some(f64::from(self.encoding.no_data())))?;
        band.set_color_table(&self.encoding.color_table());
        band.set_color_interpretation(ColorInterpretation::PaletteIndex)?;
        Ok(())
    }

    fn replace(
        &self,
        reprojected: Dataset,
        driver: &gdal::Driver,
        destination: &Path,
    ) -> Result<()> {
        self.stamp_band(&mut reprojected.rasterband(1)?)?;
        reprojected.create_copy(driver, destination, &RasterCreationOptions::new())?;
        Ok(())
    }
}
