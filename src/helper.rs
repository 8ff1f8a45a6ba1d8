use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, Pixel, RgbImage};
use tracing::{info, warn};

use crate::color::parse_color;
use crate::error::{QrError, Result};
use crate::logo::{load_logo, logo_size, paste_centered};
use crate::render::{render, QrOptions, DEFAULT_BORDER, DEFAULT_MODULE_SIZE};
use crate::symbol::{EccLevel, EncodingRequest};

/// Encodes `content` with the settings in `options` and renders it in full color.
///
/// This is the building block the `generate_*` functions share; it never touches the
/// filesystem.
///
/// # Example
///
/// ```rust
/// use qrstamp::{helper::generate, QrOptions};
///
/// let img = generate("Hello, World!", &QrOptions::default()).unwrap();
/// assert_eq!(img.dimensions(), (290, 290));
/// ```
pub fn generate(content: &str, options: &QrOptions) -> Result<RgbImage> {
    encode_and_render(content, options, options.dark, options.light)
}

fn encode_and_render<P: Pixel>(
    content: &str,
    options: &QrOptions,
    dark: P,
    light: P,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    options.validate()?;
    let symbol = EncodingRequest::new(content, options.ecc).encode()?;
    render(&symbol, options, dark, light)
}

/// Saves an image, inferring the format from the file extension.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`QrError::Save`] if the extension is not a supported image format or the file
/// cannot be written.
pub fn save_image(img: &DynamicImage, filename: &str) -> Result<()> {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    img.save(path).map_err(|source| QrError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Generates a black-on-white QR code at error correction level Low.
///
/// # Arguments
///
/// * `content` - The text or URL to encode.
/// * `filename` - Optional. Where to save the image; the extension picks the format.
/// * `size` - Optional. Pixel size of one module. Defaults to 10.
/// * `border` - Optional. Quiet zone width in modules. Defaults to 4.
///
/// # Returns
///
/// A grayscale image of `(modules + 2 * border) * size` pixels per side.
///
/// # Example
///
/// ```rust
/// use qrstamp::helper::generate_basic;
///
/// let img = generate_basic("Hello, World!", None, Some(8), None).unwrap();
/// assert_eq!(img.width(), (21 + 8) * 8);
/// ```
pub fn generate_basic(
    content: &str,
    filename: Option<&str>,
    size: Option<u32>,
    border: Option<u32>,
) -> Result<DynamicImage> {
    let options = QrOptions {
        module_size: size.unwrap_or(DEFAULT_MODULE_SIZE),
        border: border.unwrap_or(DEFAULT_BORDER),
        ..QrOptions::default()
    };
    let img = DynamicImage::ImageLuma8(encode_and_render(
        content,
        &options,
        Luma([0u8]),
        Luma([255u8]),
    )?);

    if let Some(filename) = filename {
        save_image(&img, filename)?;
        info!("QR code saved to {filename}");
    }
    Ok(img)
}

/// Generates a QR code with custom fill and background colors.
///
/// Colors are CSS names or hex values (see [`parse_color`]). They default to black on
/// white. Nothing checks that the pair has enough contrast to scan.
///
/// # Example
///
/// ```rust
/// use qrstamp::helper::generate_colored;
///
/// let img = generate_colored("Hello", None, Some("blue"), Some("yellow")).unwrap();
/// assert_eq!(img.to_rgb8().get_pixel(0, 0).0, [255, 255, 0]);
/// ```
pub fn generate_colored(
    content: &str,
    filename: Option<&str>,
    fill_color: Option<&str>,
    back_color: Option<&str>,
) -> Result<DynamicImage> {
    let defaults = QrOptions::default();
    let options = QrOptions {
        dark: fill_color.map(parse_color).transpose()?.unwrap_or(defaults.dark),
        light: back_color.map(parse_color).transpose()?.unwrap_or(defaults.light),
        ..defaults
    };

    let img = DynamicImage::ImageRgb8(generate(content, &options)?);

    if let Some(filename) = filename {
        save_image(&img, filename)?;
        info!("colored QR code saved to {filename}");
    }
    Ok(img)
}

/// Generates a QR code at error correction level High with a logo pasted over its center.
///
/// The logo is resized to a fifth of the code's shorter side. If it cannot be loaded, a
/// warning is logged and the plain code is returned without being saved; only encoding
/// and save errors are returned as `Err`.
///
/// # Example
///
/// ```no_run
/// use qrstamp::helper::generate_with_logo;
///
/// let img = generate_with_logo("Logo QR Code", "logo.png", Some("logo_qr.png")).unwrap();
/// ```
pub fn generate_with_logo(
    content: &str,
    logo_path: &str,
    filename: Option<&str>,
) -> Result<DynamicImage> {
    let options = QrOptions {
        ecc: EccLevel::High,
        ..QrOptions::default()
    };
    let mut img = generate(content, &options)?;

    let size = logo_size(img.width(), img.height());
    let logo = match load_logo(Path::new(logo_path), size) {
        Ok(logo) => logo,
        Err(err) => {
            warn!("could not load logo: {err}");
            return Ok(DynamicImage::ImageRgb8(img));
        }
    };
    paste_centered(&mut img, &logo);

    let img = DynamicImage::ImageRgb8(img);
    if let Some(filename) = filename {
        save_image(&img, filename)?;
        info!("QR code with logo saved to {filename}");
    }
    Ok(img)
}
