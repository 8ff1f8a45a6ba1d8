//! Encoding of a payload into a QR symbol.
//!
//! Symbol construction (segmentation, Reed-Solomon coding, masking) is delegated to the
//! [`qrcode`] crate. This module only fixes the parameters of a request and exposes the
//! resulting module grid in a form the renderer can walk.

use qrcode::{Color, EcLevel, QrCode, Version};
use tracing::debug;

use crate::error::Result;

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum EccLevel {
    /// Tolerates ~7% erroneous codewords.
    #[default]
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

/// A payload together with the error correction level it should be encoded at.
///
/// The version is never chosen by the caller: the smallest version that holds the payload
/// is selected, growing up to version 40.
#[derive(Clone, Copy, Debug)]
pub struct EncodingRequest<'a> {
    pub data: &'a str,
    pub ecc: EccLevel,
}

impl<'a> EncodingRequest<'a> {
    pub fn new(data: &'a str, ecc: EccLevel) -> Self {
        Self { data, ecc }
    }

    /// Builds the symbol, failing with [`QrError::Encoding`](crate::QrError::Encoding) when
    /// the payload exceeds the capacity of version 40.
    pub fn encode(&self) -> Result<Symbol> {
        let code = QrCode::with_error_correction_level(self.data.as_bytes(), self.ecc.into())?;
        let symbol = Symbol { code };
        debug!(
            version = symbol.version(),
            modules = symbol.size(),
            ecc = ?self.ecc,
            "encoded {} bytes",
            self.data.len()
        );
        Ok(symbol)
    }
}

/// An encoded QR symbol: a square grid of dark and light modules.
pub struct Symbol {
    code: QrCode,
}

impl Symbol {
    /// Number of modules along one side, excluding any border.
    pub fn size(&self) -> u32 {
        self.code.width() as u32
    }

    /// The version number, 1 to 40.
    pub fn version(&self) -> i16 {
        match self.code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        }
    }

    /// Returns `true` for dark modules. Coordinates outside the grid are light, which is
    /// what lets the renderer treat the quiet zone as part of the symbol.
    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        let range = 0..i64::from(self.size());
        range.contains(&x)
            && range.contains(&y)
            && self.code[(x as usize, y as usize)] == Color::Dark
    }
}
