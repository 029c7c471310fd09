use ndarray::Array2;
use std::{fmt::Debug, path::Path};

use crate::{
    components::{transforms::GeoTransform, DataType, EpsgCode},
    errors::Result,
};

/// Read access to a multi-band raster on disk.
pub trait File: Debug + Sized {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;
    /// (width, height)
    fn size(&self) -> (usize, usize);
    fn crs(&self) -> Result<EpsgCode>;
    fn transform(&self) -> Result<GeoTransform>;
    fn num_bands(&self) -> usize;
    /// Reads the full band with 1-based `index` as a (height, width) array.
    fn read_band<T: DataType>(&self, index: usize) -> Result<Array2<T>>;
}
