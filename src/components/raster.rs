use log::info;
use std::{fmt::Debug, path::Path};

use crate::{
    components::{BandPair, DataType, EpsgCode, File, GeoTransform},
    errors::Result,
    BandIndexes,
};

/// Georeferencing shared by every band of a raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterMetadata {
    /// (width, height)
    pub size: (usize, usize),
    pub crs: EpsgCode,
    pub transform: GeoTransform,
}

impl RasterMetadata {
    /// Array shape (H, W)
    pub fn array_shape(&self) -> (usize, usize) {
        (self.size.1, self.size.0)
    }
}

/// Opened raster whose bands share size and georeferencing.
pub struct Raster<F: File> {
    file: F,
    metadata: RasterMetadata,
}

impl<F: File> Debug for Raster<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("size", &self.metadata.size)
            .field("crs", &self.metadata.crs)
            .field("num_bands", &self.file.num_bands())
            .finish()
    }
}

impl<F: File> Raster<F> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = F::open(path)?;
        let metadata = RasterMetadata {
            size: file.size(),
            crs: file.crs()?,
            transform: file.transform()?,
        };
        let raster = Self { file, metadata };
        info!("new {raster:?}");
        Ok(raster)
    }

    pub fn metadata(&self) -> &RasterMetadata {
        &self.metadata
    }

    pub fn num_bands(&self) -> usize {
        self.file.num_bands()
    }

    /// Reads the (red, nir) bands named by `bands`.
    pub fn band_pair<T: DataType>(&self, bands: &BandIndexes) -> Result<BandPair<T>> {
        let (red, nir) = bands.red_nir()?;
        bands.check_within(self.num_bands())?;
        info!("reading red band {red} and nir band {nir}");
        BandPair::new(self.file.read_band(red)?, self.file.read_band(nir)?)
    }
}
