use ndarray::{Array2, ArrayView2};

use crate::{
    components::{ndvi::compute_ndvi, DataType, IndexArray},
    errors::{NdviError, Result},
};

/// Red and near-infrared bands of identical shape.
#[derive(Debug, Clone)]
pub struct BandPair<T: DataType> {
    red: Array2<T>,
    nir: Array2<T>,
}

impl<T: DataType> BandPair<T> {
    pub fn new(red: Array2<T>, nir: Array2<T>) -> Result<Self> {
        if red.dim() != nir.dim() {
            return Err(NdviError::ShapeMismatch {
                left: red.dim(),
                right: nir.dim(),
            });
        }
        Ok(Self { red, nir })
    }

    pub fn red(&self) -> ArrayView2<T> {
        self.red.view()
    }

    pub fn nir(&self) -> ArrayView2<T> {
        self.nir.view()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.red.dim()
    }

    pub fn ndvi(&self) -> Result<IndexArray> {
        compute_ndvi(self.red(), self.nir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rejects_mismatched_bands() {
        let result = BandPair::new(array![[2u16, 2], [0, 5]], array![[8u16, 2]]);
        assert!(matches!(
            result,
            Err(NdviError::ShapeMismatch {
                left: (2, 2),
                right: (1, 2)
            })
        ));
    }
}
