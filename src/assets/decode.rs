use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{CutinError, CutinResult};

/// Read and decode an image file into straight RGBA8.
///
/// Images without an alpha channel gain a fully opaque one. A missing or unreadable file
/// is reported as [`CutinError::Decode`] together with the path.
pub fn load_rgba(path: &Path) -> CutinResult<RgbaImage> {
    let dyn_img = image::open(path).map_err(|source| CutinError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(
        path = %path.display(),
        width = dyn_img.width(),
        height = dyn_img.height(),
        "decoded image"
    );
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
