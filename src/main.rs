use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};
use std::path::PathBuf;

use ndvi_fields::{process_raster, BandIndexes, GdalFile, PixelEncoding, ProcessOptions};

/// Classify the NDVI of a multi-band raster into `<path>_ndvi_in_4326.tif`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input raster, extension assumed to be 4 characters (`.tif`)
    path: PathBuf,
    /// Pixels with NDVI >= threshold are white, below are black
    #[arg(allow_negative_numbers = true)]
    threshold: f64,
    /// 1-based (red, nir) band numbers
    #[arg(long, value_delimiter = ',', default_values_t = [6, 8])]
    bands: Vec<usize>,
    /// Pixel codes: distinct-nodata (0/255, no-data 100) or zero-nodata (1/255, no-data 0)
    #[arg(long, default_value_t = PixelEncoding::default())]
    encoding: PixelEncoding,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = ProcessOptions {
        bands: BandIndexes::from(args.bands),
        encoding: args.encoding,
    };
    match process_raster::<GdalFile>(&args.path, args.threshold, &options)? {
        Some(report) => info!(
            "done: {} ({} below, {} at or above, {} no data)",
            report.destination.display(),
            report.counts.below,
            report.counts.at_or_above,
            report.counts.no_data
        ),
        None => warn!("no output written"),
    }
    Ok(())
}
