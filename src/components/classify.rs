use gdal::raster::{ColorEntry, ColorTable, PaletteInterpretation};
use ndarray::Array2;
use shrinkwraprs::Shrinkwrap;
use std::{fmt::Display, str::FromStr};

use crate::{
    components::IndexArray,
    errors::{NdviError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    BelowThreshold,
    AtOrAboveThreshold,
    NoData,
}

impl PixelClass {
    /// Ties go to [`PixelClass::AtOrAboveThreshold`].
    pub fn from_index(value: f64, threshold: f64) -> Self {
        if IndexArray::is_invalid(value) {
            PixelClass::NoData
        } else if value < threshold {
            PixelClass::BelowThreshold
        } else {
            PixelClass::AtOrAboveThreshold
        }
    }
}

/// Integer codes written for each [`PixelClass`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PixelEncoding {
    /// Below 0, at or above 255, no-data 100.
    #[default]
    DistinctNoData,
    /// Below 1, at or above 255, no-data 0.
    ZeroNoData,
}

impl PixelEncoding {
    pub fn code(&self, class: PixelClass) -> u16 {
        match (self, class) {
            (PixelEncoding::DistinctNoData, PixelClass::BelowThreshold) => 0,
            (PixelEncoding::ZeroNoData, PixelClass::BelowThreshold) => 1,
            (_, PixelClass::AtOrAboveThreshold) => 255,
            (PixelEncoding::DistinctNoData, PixelClass::NoData) => 100,
            (PixelEncoding::ZeroNoData, PixelClass::NoData) => 0,
        }
    }

    pub fn no_data(&self) -> u16 {
        self.code(PixelClass::NoData)
    }

    /// Below threshold renders black, at or above renders white.
    pub fn color_table(&self) -> ColorTable<'static> {
        let mut table = ColorTable::new(PaletteInterpretation::Rgba);
        table.set_color_entry(
            self.code(PixelClass::BelowThreshold),
            &ColorEntry::rgba(0, 0, 0, 255),
        );
        table.set_color_entry(
            self.code(PixelClass::AtOrAboveThreshold),
            &ColorEntry::rgba(255, 255, 255, 255),
        );
        table
    }
}

impl Display for PixelEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelEncoding::DistinctNoData => f.write_str("distinct-nodata"),
            PixelEncoding::ZeroNoData => f.write_str("zero-nodata"),
        }
    }
}

impl FromStr for PixelEncoding {
    type Err = NdviError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "distinct-nodata" => Ok(PixelEncoding::DistinctNoData),
            "zero-nodata" => Ok(PixelEncoding::ZeroNoData),
            other => Err(NdviError::UnknownEncoding(other.into())),
        }
    }
}

/// Number of pixels in each class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ClassCounts {
    pub below: usize,
    pub at_or_above: usize,
    pub no_data: usize,
}

#[derive(Shrinkwrap, Debug, Clone, PartialEq)]
pub struct ClassifiedArray(Array2<PixelClass>);

impl ClassifiedArray {
    pub fn classify(index: &IndexArray, threshold: f64) -> Self {
        Self(index.mapv(|value| PixelClass::from_index(value, threshold)))
    }

    /// Codes in row-major order.
    pub fn encode(&self, encoding: PixelEncoding) -> Array2<u16> {
        self.0.mapv(|class| encoding.code(class))
    }

    pub fn counts(&self) -> ClassCounts {
        self.0
            .iter()
            .fold(ClassCounts::default(), |mut counts, class| {
                match class {
                    PixelClass::BelowThreshold => counts.below += 1,
                    PixelClass::AtOrAboveThreshold => counts.at_or_above += 1,
                    PixelClass::NoData => counts.no_data += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rstest::rstest;

    #[rstest]
    #[case(0.6, 0.5, PixelClass::AtOrAboveThreshold)]
    #[case(0.5, 0.5, PixelClass::AtOrAboveThreshold)]
    #[case(0., 0., PixelClass::AtOrAboveThreshold)]
    #[case(0.49, 0.5, PixelClass::BelowThreshold)]
    #[case(-1.2, 0.5, PixelClass::BelowThreshold)]
    #[case(1.7, 0.5, PixelClass::AtOrAboveThreshold)]
    #[case(IndexArray::INVALID, 0.5, PixelClass::NoData)]
    #[case(IndexArray::INVALID, f64::NEG_INFINITY, PixelClass::NoData)]
    fn classifies_pixel(#[case] value: f64, #[case] threshold: f64, #[case] expected: PixelClass) {
        assert_eq!(PixelClass::from_index(value, threshold), expected);
    }

    #[rstest]
    #[case(PixelEncoding::DistinctNoData, [0, 255, 100])]
    #[case(PixelEncoding::ZeroNoData, [1, 255, 0])]
    fn encodes_classes(#[case] encoding: PixelEncoding, #[case] codes: [u16; 3]) {
        let classes = [
            PixelClass::BelowThreshold,
            PixelClass::AtOrAboveThreshold,
            PixelClass::NoData,
        ];
        assert_eq!(classes.map(|class| encoding.code(class)), codes);
        assert_eq!(encoding.no_data(), codes[2]);
    }

    #[test]
    fn no_data_never_collides_with_a_class() {
        for encoding in [PixelEncoding::DistinctNoData, PixelEncoding::ZeroNoData] {
            assert_ne!(encoding.no_data(), encoding.code(PixelClass::BelowThreshold));
            assert_ne!(
                encoding.no_data(),
                encoding.code(PixelClass::AtOrAboveThreshold)
            );
        }
    }

    #[test]
    fn encoding_names_parse_back() {
        for encoding in [PixelEncoding::DistinctNoData, PixelEncoding::ZeroNoData] {
            assert_eq!(encoding.to_string().parse::<PixelEncoding>().unwrap(), encoding);
        }
        assert!(matches!(
            "palette".parse::<PixelEncoding>(),
            Err(NdviError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn classifies_and_counts_array() {
        let index = IndexArray::from(array![[0.6, IndexArray::INVALID], [0.5, -0.1]]);
        let classified = ClassifiedArray::classify(&index, 0.5);
        assert_eq!(
            classified.encode(PixelEncoding::DistinctNoData),
            array![[255u16, 100], [255, 0]]
        );
        assert_eq!(
            classified.encode(PixelEncoding::ZeroNoData),
            array![[255u16, 0], [255, 1]]
        );
        assert_eq!(
            classified.counts(),
            ClassCounts {
                below: 1,
                at_or_above: 2,
                no_data: 1
            }
        );
    }

    #[test]
    fn palette_maps_classes_to_black_and_white() {
        let encoding = PixelEncoding::ZeroNoData;
        let table = encoding.color_table();
        let black = table.entry_as_rgb(1).unwrap();
        let white = table.entry_as_rgb(255).unwrap();
        assert_eq!((black.r, black.g, black.b), (0, 0, 0));
        assert_eq!((white.r, white.g, white.b), (255, 255, 255));
    }
}
