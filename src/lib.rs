//! NDVI field detection on multi-band rasters.
//!
//! Reads a red and a near-infrared band, computes the normalized difference
//! index, splits it at a threshold and writes the classes as a black/white
//! palette GeoTIFF reprojected to EPSG:4326.

mod components;
mod errors;
mod indexes;
mod pipeline;
#[cfg(test)]
mod test_utils;

pub use components::{
    backends::gdal_backend::GdalFile, compute_ndvi, BandPair, ClassCounts, ClassifiedArray,
    ClassifiedRasterWriter, DataType, EpsgCode, File, GeoTransform, IndexArray, IndexStats,
    PixelClass, PixelEncoding, Raster, RasterMetadata,
};
pub use errors::{NdviError, Result};
pub use indexes::BandIndexes;
pub use pipeline::{
    destination_path, process_raster, ProcessOptions, ProcessReport, EXTENSION_LEN, OUTPUT_SUFFIX,
};
