use image::{ImageBuffer, Pixel, Rgb};

use crate::error::{QrError, Result};
use crate::symbol::{EccLevel, Symbol};

/// Default pixel size of one module.
pub const DEFAULT_MODULE_SIZE: u32 = 10;
/// Default quiet zone width, in modules.
pub const DEFAULT_BORDER: u32 = 4;

/// Per-call rendering configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QrOptions {
    pub ecc: EccLevel,
    /// Side length of one module in pixels.
    pub module_size: u32,
    /// Width of the quiet zone in modules.
    pub border: u32,
    pub dark: Rgb<u8>,
    pub light: Rgb<u8>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ecc: EccLevel::Low,
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            dark: Rgb([0, 0, 0]),
            light: Rgb([255, 255, 255]),
        }
    }
}

impl QrOptions {
    pub fn validate(&self) -> Result<()> {
        if self.module_size == 0 {
            return Err(QrError::InvalidOptions(
                "module size must be at least one pixel".into(),
            ));
        }
        Ok(())
    }

    /// Side length in pixels of the image rendered for `symbol`.
    ///
    /// Fails with [`QrError::InvalidOptions`] when the side does not fit in a `u32`.
    pub fn image_size(&self, symbol: &Symbol) -> Result<u32> {
        self.border
            .checked_mul(2)
            .and_then(|border| border.checked_add(symbol.size()))
            .and_then(|modules| modules.checked_mul(self.module_size))
            .ok_or_else(|| {
                QrError::InvalidOptions(format!(
                    "image too large: {} modules with a border of {} at {} px per module",
                    symbol.size(),
                    self.border,
                    self.module_size
                ))
            })
    }
}

/// Rasterises `symbol` into a square image, painting each module as a
/// `module_size` × `module_size` block and surrounding it with `border` light modules.
/// Only the geometry of `options` is used; the colors come from `dark` and `light`.
pub fn render<P: Pixel>(
    symbol: &Symbol,
    options: &QrOptions,
    dark: P,
    light: P,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    options.validate()?;
    let size = options.image_size(symbol)?;

    // ImageBuffer::new panics when the buffer length overflows usize.
    let fits = u64::from(size)
        .checked_mul(u64::from(size))
        .and_then(|px| px.checked_mul(u64::from(P::CHANNEL_COUNT)))
        .is_some_and(|len| usize::try_from(len).is_ok());
    if !fits {
        return Err(QrError::InvalidOptions(format!(
            "image too large: {size}x{size} pixels"
        )));
    }

    let mut img = ImageBuffer::new(size, size);
    let module_size = options.module_size;
    let border = i64::from(options.border);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = i64::from(x / module_size) - border;
        let qr_y = i64::from(y / module_size) - border;
        *pixel = if symbol.is_dark(qr_x, qr_y) { dark } else { light };
    }

    Ok(img)
}

/// Returns the symbol as block-character art, two columns per module, with a quiet zone of
/// `border` modules.
pub fn to_console_string(symbol: &Symbol, border: u32) -> String {
    let border = i64::from(border);
    let size = i64::from(symbol.size());
    let mut out = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            let c = if symbol.is_dark(x, y) { '█' } else { ' ' };
            out.push(c);
            out.push(c);
        }
        out.push('\n');
    }
    out
}
