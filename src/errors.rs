use crate::components::EpsgCode;

pub type Result<T> = std::result::Result<T, NdviError>;

#[derive(thiserror::Error, Debug)]
pub enum NdviError {
    #[error(transparent)]
    GdalError(#[from] gdal::errors::GdalError),
    #[error(transparent)]
    NdarrayError(#[from] ndarray::ShapeError),
    #[error(transparent)]
    InvalidCString(#[from] std::ffi::NulError),
    #[error("Band selection must hold exactly two bands (red, nir), got {0}")]
    InvalidBandSelection(usize),
    #[error("Band {index} is out of range, raster has {count} bands")]
    BandOutOfRange { index: usize, count: usize },
    #[error("Shapes do not match: {left:?} and {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("{code} does not resolve to a known reference system")]
    UnknownCrs {
        code: EpsgCode,
        #[source]
        source: gdal::errors::GdalError,
    },
    #[error("Raster reference system has no EPSG authority code")]
    MissingAuthority,
    #[error("Reprojection failed: {0}")]
    Reprojection(String),
    #[error("Unknown pixel encoding '{0}'")]
    UnknownEncoding(String),
    #[error("Path {0:?} is not valid UTF-8")]
    NonUtf8Path(std::path::PathBuf),
}
