use ndarray::{Array2, ArrayView2, Zip};
use num::traits::AsPrimitive;
use shrinkwraprs::Shrinkwrap;

use crate::{
    components::DataType,
    errors::{NdviError, Result},
};

/// Pixels at or below this value are sensor fill, not measurements.
const MIN_VALID_REFLECTANCE: f64 = 1.;

/// Per pixel normalized difference values.
///
/// Excluded pixels hold [`IndexArray::INVALID`] (NaN). Valid values are not
/// clamped to `[-1, 1]`.
#[derive(Shrinkwrap, Debug, Clone, PartialEq)]
pub struct IndexArray(Array2<f64>);

impl IndexArray {
    pub const INVALID: f64 = f64::NAN;

    pub fn is_invalid(value: f64) -> bool {
        value.is_nan()
    }

    pub fn stats(&self) -> IndexStats {
        self.0
            .iter()
            .copied()
            .filter(|value| !Self::is_invalid(*value))
            .fold(IndexStats::default(), |mut stats, value| {
                stats.min = Some(stats.min.map_or(value, |min| min.min(value)));
                stats.max = Some(stats.max.map_or(value, |max| max.max(value)));
                stats.valid += 1;
                stats
            })
    }
}

impl From<Array2<f64>> for IndexArray {
    fn from(value: Array2<f64>) -> Self {
        Self(value)
    }
}

/// Summary over the valid pixels of an [`IndexArray`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IndexStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub valid: usize,
}

fn pixel_ndvi(red: f64, nir: f64) -> f64 {
    if red <= MIN_VALID_REFLECTANCE || nir <= MIN_VALID_REFLECTANCE {
        return IndexArray::INVALID;
    }
    let ndvi = (nir - red) / (nir + red);
    if !ndvi.is_finite() {
        IndexArray::INVALID
    } else {
        ndvi
    }
}

/// `(nir - red) / (nir + red)` over equally shaped bands.
///
/// A pixel is only computed when both `red > 1` and `nir > 1`.
pub fn compute_ndvi<T: DataType>(red: ArrayView2<T>, nir: ArrayView2<T>) -> Result<IndexArray> {
    if red.dim() != nir.dim() {
        return Err(NdviError::ShapeMismatch {
            left: red.dim(),
            right: nir.dim(),
        });
    }
    let index = Zip::from(red)
        .and(nir)
        .map_collect(|&red, &nir| pixel_ndvi(red.as_(), nir.as_()));
    Ok(IndexArray(index))
}
