use gdal::Dataset;
use log::debug;
use std::{
    ffi::{c_char, c_int, CStr, CString},
    ptr,
};

use crate::{
    components::EpsgCode,
    errors::{NdviError, Result},
};

struct WarpAppOptions {
    options: *mut gdal_sys::GDALWarpAppOptions,
}

impl WarpAppOptions {
    fn new(args: &[String]) -> Result<Self> {
        let args = args
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut argv: Vec<*mut c_char> = args
            .iter()
            .map(|arg| arg.as_ptr() as *mut c_char)
            .chain(std::iter::once(ptr::null_mut()))
            .collect();
        // Arguments are copied by gdal.
        let options = unsafe { gdal_sys::GDALWarpAppOptionsNew(argv.as_mut_ptr(), ptr::null_mut()) };
        if options.is_null() {
            return Err(NdviError::Reprojection(last_gdal_error()));
        }
        Ok(Self { options })
    }
}

impl Drop for WarpAppOptions {
    fn drop(&mut self) {
        unsafe {
            gdal_sys::GDALWarpAppOptionsFree(self.options);
        }
    }
}

fn last_gdal_error() -> String {
    unsafe {
        let msg = gdal_sys::CPLGetLastErrorMsg();
        if msg.is_null() {
            String::from("unknown gdal error")
        } else {
            CStr::from_ptr(msg).to_string_lossy().into_owned()
        }
    }
}

/// Warps `source` into `target` as an in-memory dataset.
///
/// Output keeps `size` (width, height) and uses nearest neighbour
/// resampling, as pixel values are class codes.
pub fn reproject(source: &Dataset, target: EpsgCode, size: (usize, usize)) -> Result<Dataset> {
    let args = [
        "-of".to_string(),
        "MEM".to_string(),
        "-t_srs".to_string(),
        target.to_string(),
        "-ts".to_string(),
        size.0.to_string(),
        size.1.to_string(),
        "-r".to_string(),
        "near".to_string(),
    ];
    debug!("gdalwarp {}", args.join(" "));
    let options = WarpAppOptions::new(&args)?;
    let destination = CString::new("")?;
    let mut sources = [unsafe { source.c_dataset() }];
    let mut usage_error: c_int = 0;
    let warped = unsafe {
        gdal_sys::GDALWarp(
            destination.as_ptr(),
            ptr::null_mut(),
            1,
            sources.as_mut_ptr(),
            options.options,
            &mut usage_error,
        )
    };
    if warped.is_null() {
        return Err(NdviError::Reprojection(last_gdal_error()));
    }
    let warped = unsafe { Dataset::from_c_dataset(warped) };
    if usage_error != 0 {
        return Err(NdviError::Reprojection(last_gdal_error()));
    }
    Ok(warped)
}
