//! PNG import and export through HSLA rasters

use crate::color::Hsla;
use crate::io::error::{Result, TreeError};
use crate::raster::HslaImage;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Convert an 8-bit RGBA buffer into an HSLA raster
pub fn hsla_from_rgba(rgba: &RgbaImage) -> HslaImage {
    HslaImage::from_fn(rgba.width() as usize, rgba.height() as usize, |x, y| {
        rgba.get_pixel_checked(x as u32, y as u32)
            .map_or_else(Hsla::default, |pixel| Hsla::from_rgba8(pixel.0))
    })
}

/// Convert an HSLA raster into an 8-bit RGBA buffer
pub fn rgba_from_hsla(hsla: &HslaImage) -> RgbaImage {
    let mut rgba = ImageBuffer::new(hsla.width() as u32, hsla.height() as u32);
    for (x, y, color) in hsla.enumerate_pixels() {
        rgba.put_pixel(x as u32, y as u32, Rgba(color.to_rgba8()));
    }
    rgba
}

/// Load any format supported by `image` as an HSLA raster
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_hsla(path: &Path) -> Result<HslaImage> {
    let img = image::open(path).map_err(|e| TreeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(hsla_from_rgba(&img.to_rgba8()))
}

/// Save an HSLA raster, with the format chosen by the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_hsla(hsla: &HslaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TreeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    rgba_from_hsla(hsla)
        .save(path)
        .map_err(|e| TreeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
