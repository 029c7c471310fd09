use log::{error, info};
use std::path::{Path, PathBuf};

use crate::{
    components::{ClassCounts, ClassifiedRasterWriter, File, PixelEncoding, Raster},
    errors::{NdviError, Result},
    BandIndexes,
};

/// Characters stripped from the input path before [`OUTPUT_SUFFIX`] is added.
pub const EXTENSION_LEN: usize = 4;
pub const OUTPUT_SUFFIX: &str = "_ndvi_in_4326.tif";

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ProcessOptions {
    pub bands: BandIndexes,
    pub encoding: PixelEncoding,
}

/// Output of a [`process_raster`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub destination: PathBuf,
    pub counts: ClassCounts,
}

/// `scene.tif` becomes `scene_ndvi_in_4326.tif` next to it.
pub fn destination_path(source: impl AsRef<Path>) -> Result<PathBuf> {
    let source = source.as_ref();
    let source = source
        .to_str()
        .ok_or_else(|| NdviError::NonUtf8Path(source.to_path_buf()))?;
    let stem_end = source
        .char_indices()
        .rev()
        .nth(EXTENSION_LEN - 1)
        .map_or(0, |(idx, _)| idx);
    Ok(PathBuf::from(format!("{}{OUTPUT_SUFFIX}", &source[..stem_end])))
}

/// Classifies the NDVI of the raster at `path` into its destination file.
///
/// Returns `Ok(None)` without touching the filesystem when `options.bands`
/// is not a (red, nir) pair.
pub fn process_raster<F: File>(
    path: impl AsRef<Path>,
    threshold: f64,
    options: &ProcessOptions,
) -> Result<Option<ProcessReport>> {
    let path = path.as_ref();
    if let Err(err) = options.bands.red_nir() {
        error!("{err}, nothing written for {}", path.display());
        return Ok(None);
    }
    let destination = destination_path(path)?;

    let raster = Raster::<F>::new(path)?;
    let index = raster.band_pair::<f64>(&options.bands)?.ndvi()?;
    let counts = ClassifiedRasterWriter::new(options.encoding).write(
        &index,
        threshold,
        raster.metadata(),
        &destination,
    )?;
    info!("{} -> {}", path.display(), destination.display());
    Ok(Some(ProcessReport {
        destination,
        counts,
    }))
}
