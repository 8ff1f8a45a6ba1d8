use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::{QrError, Result};

/// Side length of the logo for a code of the given dimensions: a fifth of the shorter side.
pub fn logo_size(width: u32, height: u32) -> u32 {
    width.min(height) / 5
}

/// Top-left corner that centers a `size` × `size` square on a `width` × `height` canvas.
pub fn logo_position(width: u32, height: u32, size: u32) -> (u32, u32) {
    (
        width.saturating_sub(size) / 2,
        height.saturating_sub(size) / 2,
    )
}

/// Loads the logo at `path` and resizes it to a `size` × `size` square with Lanczos
/// resampling. Any alpha channel is discarded.
pub fn load_logo(path: &Path, size: u32) -> Result<RgbImage> {
    if size == 0 {
        return Err(QrError::InvalidOptions(
            "code is too small to hold a logo".into(),
        ));
    }
    let logo = image::open(path).map_err(|source| QrError::Logo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(logo
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgb8())
}

/// Pastes `logo` opaquely at the center of `base`.
pub fn paste_centered(base: &mut RgbImage, logo: &RgbImage) {
    let (x, y) = logo_position(base.width(), base.height(), logo.width());
    imageops::replace(base, logo, i64::from(x), i64::from(y));
}
