use ndarray::Array2;
use std::path::Path;

use crate::{
    components::{DataType, EpsgCode, File, GeoTransform},
    errors::{NdviError, Result},
};

/// Implementations for gdal
pub mod gdal_backend {
    use super::*;
    use gdal::Dataset as GdalDataset;

    #[derive(Debug)]
    pub struct GdalFile {
        dataset: GdalDataset,
    }

    impl File for GdalFile {
        fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
            Ok(GdalFile {
                dataset: GdalDataset::open(path)?,
            })
        }
        fn size(&self) -> (usize, usize) {
            self.dataset.raster_size()
        }
        fn crs(&self) -> Result<EpsgCode> {
            let spatial_ref = self.dataset.spatial_ref()?;
            let code = spatial_ref
                .auth_code()
                .map_err(|_| NdviError::MissingAuthority)?;
            u32::try_from(code)
                .map(EpsgCode)
                .map_err(|_| NdviError::MissingAuthority)
        }
        fn transform(&self) -> Result<GeoTransform> {
            Ok(GeoTransform::from_gdal(self.dataset.geo_transform()?))
        }
        fn num_bands(&self) -> usize {
            self.dataset.raster_count()
        }
        fn read_band<T: DataType>(&self, index: usize) -> Result<Array2<T>> {
            let rasterband = self.dataset.rasterband(index)?;
            let size = rasterband.size();
            let buffer = rasterband.read_as::<T>((0, 0), size, size, None)?;
            let ((width, height), data) = buffer.into_shape_and_vec();
            Ok(Array2::from_shape_vec((height, width), data)?)
        }
    }
}
