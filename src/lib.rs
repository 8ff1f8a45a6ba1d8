//! # qrstamp
//!
//! Generate QR code images from text or URLs.
//!
//! Encoding is done by the [`qrcode`] crate and pixel work by [`image`]; `qrstamp` wires the
//! two together and adds the pieces a caller usually wants on top: a configurable module size
//! and quiet zone, custom fill and background colors, a logo pasted over the center of the
//! code, and saving to any format `image` can write.
//!
//! ## Example
//!
//! A plain black-on-white code:
//!
//! ```rust
//! use qrstamp::helper::generate_basic;
//!
//! let img = generate_basic("https://example.com", None, None, None).unwrap();
//! assert_eq!(img.width(), img.height());
//! ```
//!
//! Blue on yellow, saved as PNG:
//!
//! ```no_run
//! use qrstamp::helper::generate_colored;
//!
//! generate_colored("Hello", Some("output/colored.png"), Some("blue"), Some("yellow")).unwrap();
//! ```
//!
//! With a logo. A logo that cannot be loaded is logged and the plain code is returned:
//!
//! ```no_run
//! use qrstamp::helper::generate_with_logo;
//!
//! let img = generate_with_logo("https://example.com", "logo.png", None).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`helper`]: The generator functions.
//! - [`symbol`]: Encoding requests and error correction levels.
//! - [`render`]: Rasterising a symbol into pixels or console text.
//! - [`logo`]: Logo sizing, placement and compositing.
//! - [`color`]: Color name and hex parsing.

pub mod color;
pub mod error;
pub mod helper;
pub mod logo;
pub mod render;
pub mod symbol;

pub use error::{QrError, Result};
pub use render::QrOptions;
pub use symbol::{EccLevel, EncodingRequest, Symbol};
