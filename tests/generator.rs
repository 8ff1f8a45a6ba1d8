use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use qrstamp::helper::{generate, generate_basic, generate_colored, generate_with_logo};
use qrstamp::{EccLevel, EncodingRequest, QrError, QrOptions};
use tempfile::tempdir;

fn decode(img: &DynamicImage) -> String {
    let gray = img.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        gray.width() as usize,
        gray.height() as usize,
        |x, y| gray.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");
    let (_meta, content) = grids[0].decode().expect("decodable QR code");
    content
}

fn write_logo(dir: &std::path::Path) -> String {
    let logo = RgbImage::from_pixel(64, 64, Rgb([255, 0, 0]));
    let path = dir.join("logo.png");
    logo.save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn basic_round_trips() {
    for data in [
        "Hello, World!",
        "https://www.ikea.com.tw/zh/store/hsin-chuang/repair",
        "0123456789",
    ] {
        let img = generate_basic(data, None, None, None).unwrap();
        assert_eq!(decode(&img), data);
    }
}

#[test]
fn basic_dimensions_follow_module_count() {
    for (size, border) in [(10, 4), (8, 4), (3, 1), (1, 0)] {
        let data = "https://example.com/some/longer/path?with=query";
        let symbol = EncodingRequest::new(data, EccLevel::Low).encode().unwrap();
        let img = generate_basic(data, None, Some(size), Some(border)).unwrap();
        let expected = (symbol.size() + 2 * border) * size;
        assert_eq!(img.dimensions(), (expected, expected));
    }
}

#[test]
fn colored_round_trips() {
    let data = "彩色 QR Code 測試";
    let img = generate_colored(data, None, Some("blue"), Some("yellow")).unwrap();
    assert_eq!(decode(&img), data);
}

#[test]
fn swapped_colors_invert_pixels() {
    let normal = generate_colored("invert me", None, Some("black"), Some("white"))
        .unwrap()
        .to_rgb8();
    let swapped = generate_colored("invert me", None, Some("white"), Some("black"))
        .unwrap()
        .to_rgb8();
    assert_eq!(normal.dimensions(), swapped.dimensions());
    for (a, b) in normal.pixels().zip(swapped.pixels()) {
        for c in 0..3 {
            assert_eq!(a[c], 255 - b[c]);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    let first = generate_basic("same input", a.to_str(), None, None).unwrap();
    let second = generate_basic("same input", b.to_str(), None, None).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn saves_to_nested_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("qr.png");
    let img = generate_basic("save me", path.to_str(), Some(4), None).unwrap();
    let reopened = image::open(&path).unwrap();
    assert_eq!(reopened.dimensions(), img.dimensions());
    assert_eq!(decode(&reopened), "save me");
}

#[test]
fn format_follows_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qr.bmp");
    generate_colored("bitmap", path.to_str(), None, None).unwrap();
    assert_eq!(
        image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format(),
        Some(image::ImageFormat::Bmp)
    );
}

#[test]
fn unsupported_extension_is_a_save_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qr.not-an-image");
    let err = generate_basic("x", path.to_str(), None, None).unwrap_err();
    assert!(matches!(err, QrError::Save { .. }));
}

#[test]
fn oversized_payload_is_an_encoding_error() {
    let data = "a".repeat(3000);
    let err = generate_basic(&data, None, None, None).unwrap_err();
    assert!(matches!(err, QrError::Encoding(_)));
}

#[test]
fn logo_is_centered_and_canvas_unchanged() {
    let dir = tempdir().unwrap();
    let logo = write_logo(dir.path());
    let out = dir.path().join("logo_qr.png");

    let img = generate_with_logo("Logo QR Code", &logo, out.to_str()).unwrap();
    let plain = generate(
        "Logo QR Code",
        &QrOptions {
            ecc: EccLevel::High,
            ..QrOptions::default()
        },
    )
    .unwrap();
    assert_eq!(img.dimensions(), plain.dimensions());

    let (w, h) = img.dimensions();
    let s = w.min(h) / 5;
    let (x0, y0) = ((w - s) / 2, (h - s) / 2);
    let rgb = img.to_rgb8();
    for (x, y) in [(x0 + 2, y0 + 2), (w / 2, h / 2), (x0 + s - 3, y0 + s - 3)] {
        let p = rgb.get_pixel(x, y);
        assert!(p[0] > 200 && p[1] < 50 && p[2] < 50, "pixel {x},{y} is {p:?}");
    }
    // Corners stay untouched.
    assert_eq!(rgb.get_pixel(0, 0), plain.get_pixel(0, 0));

    assert!(out.exists());
    assert_eq!(decode(&img), "Logo QR Code");
}

#[test]
fn missing_logo_returns_plain_code() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("logo_qr.png");
    let missing = dir.path().join("missing.png");

    let img =
        generate_with_logo("Logo QR Code", missing.to_str().unwrap(), out.to_str()).unwrap();
    let plain = generate(
        "Logo QR Code",
        &QrOptions {
            ecc: EccLevel::High,
            ..QrOptions::default()
        },
    )
    .unwrap();
    assert_eq!(img.to_rgb8(), plain);
    assert!(!out.exists());
}

#[test]
fn unreadable_logo_returns_plain_code() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("logo.png");
    std::fs::write(&bogus, b"definitely not a png").unwrap();

    let img = generate_with_logo("Logo QR Code", bogus.to_str().unwrap(), None).unwrap();
    assert_eq!(decode(&img), "Logo QR Code");
}
