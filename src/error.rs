use std::path::PathBuf;

/// Errors produced while encoding, rendering or writing a QR code.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// The payload does not fit in any QR version at the requested error correction level.
    #[error("cannot encode payload: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("failed to save image to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load logo {}: {source}", path.display())]
    Logo {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, QrError>;
