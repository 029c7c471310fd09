pub mod backends;
pub mod band;
pub mod classify;
pub mod file;
pub mod ndvi;
pub mod raster;
pub mod transforms;
pub mod warp;
pub mod writer;

pub use band::BandPair;
pub use classify::{ClassCounts, ClassifiedArray, PixelClass, PixelEncoding};
pub use file::File;
pub use ndvi::{compute_ndvi, IndexArray, IndexStats};
pub use raster::{Raster, RasterMetadata};
pub use transforms::{EpsgCode, GeoTransform};
pub use writer::ClassifiedRasterWriter;

use gdal::raster::GdalType;
use num::{traits::AsPrimitive, Num};
use std::fmt::Debug;

/// Pixel types bands can be read as.
pub trait DataType: Num + AsPrimitive<f64> + Copy + Send + Sync + Debug + GdalType {}

impl<T: Num + AsPrimitive<f64> + Copy + Send + Sync + Debug + GdalType> DataType for T {}
