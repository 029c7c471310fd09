use itertools::Itertools;

use crate::errors::{NdviError, Result};

/// 1-based band numbers, ordered as (red, nir).
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BandIndexes {
    selection: Box<[usize]>,
}

impl<const N: usize> From<[usize; N]> for BandIndexes {
    fn from(value: [usize; N]) -> Self {
        let selection = Box::from(value);
        BandIndexes { selection }
    }
}

impl From<Vec<usize>> for BandIndexes {
    fn from(value: Vec<usize>) -> Self {
        let selection = value.into_boxed_slice();
        BandIndexes { selection }
    }
}

impl Default for BandIndexes {
    /// Red is band 6, nir band 8 on 8-band imagery.
    fn default() -> Self {
        Self::from([6, 8])
    }
}

impl BandIndexes {
    /// Splits the selection into its (red, nir) pair.
    pub fn red_nir(&self) -> Result<(usize, usize)> {
        self.selection
            .iter()
            .copied()
            .collect_tuple()
            .ok_or(NdviError::InvalidBandSelection(self.selection.len()))
    }

    /// Checks every band number lies in `1..=band_count`.
    pub fn check_within(&self, band_count: usize) -> Result<()> {
        match self
            .selection
            .iter()
            .find(|idx| !(1..=band_count).contains(*idx))
        {
            Some(&index) => Err(NdviError::BandOutOfRange {
                index,
                count: band_count,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_red_six_nir_eight() {
        assert_eq!(BandIndexes::default().red_nir().unwrap(), (6, 8));
    }

    #[test]
    fn defaults_do_not_alias() {
        let mut first = Vec::from(BandIndexes::default().selection);
        first.push(9);
        assert_eq!(BandIndexes::default().selection.len(), 2);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![6])]
    #[case(vec![1, 2, 3])]
    fn rejects_selection_not_of_two(#[case] selection: Vec<usize>) {
        let len = selection.len();
        let result = BandIndexes::from(selection).red_nir();
        assert!(matches!(result, Err(NdviError::InvalidBandSelection(l)) if l == len));
    }

    #[rstest]
    #[case([6, 8], 8, None)]
    #[case([0, 8], 8, Some(0))]
    #[case([6, 9], 8, Some(9))]
    fn checks_band_range(
        #[case] selection: [usize; 2],
        #[case] band_count: usize,
        #[case] offending: Option<usize>,
    ) {
        let result = BandIndexes::from(selection).check_within(band_count);
        match offending {
            None => assert!(result.is_ok()),
            Some(expected) => assert!(
                matches!(result, Err(NdviError::BandOutOfRange { index, count }) if index == expected && count == band_count)
            ),
        }
    }
}
