// SPDX-License-Identifier: MPL-2.0
//! Image sources and asynchronous decoding (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the widget reads its image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A local file.
    Path(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl ImageSource {
    /// Parses a user-supplied source string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] when the input is empty or whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingSource);
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Url(trimmed.to_string()));
        }

        let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        if path.is_empty() {
            return Err(Error::MissingSource);
        }
        Ok(Self::Path(PathBuf::from(path)))
    }

    /// Parses an optional source, treating `None` like an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] when the source is absent or empty.
    pub fn from_option(raw: Option<&str>) -> Result<Self> {
        raw.map_or(Err(Error::MissingSource), Self::parse)
    }

    fn has_svg_extension(&self) -> bool {
        let ext = match self {
            Self::Path(path) => path.extension().and_then(|s| s.to_str()).map(str::to_string),
            Self::Url(url) => {
                let without_query = url.split(['?', '#']).next().unwrap_or(url);
                Path::new(without_query)
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            }
        };
        ext.is_some_and(|e| e.eq_ignore_ascii_case("svg"))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// A decoded image ready to be displayed.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Height divided by width, or `1.0` for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.height as f32 / self.width as f32;
        ratio
    }
}

/// Reads and decodes the image behind `source`.
///
/// Bytes are fetched asynchronously (filesystem or HTTP) and decoded on the
/// blocking thread pool so the UI thread never stalls on large images.
///
/// # Errors
///
/// - [`Error::Io`] when the file cannot be read
/// - [`Error::Network`] when the download fails or returns a non-success status
/// - [`Error::Decode`] / [`Error::Svg`] when the bytes are not a supported image
pub async fn load_image(source: &ImageSource) -> Result<ImageData> {
    let bytes = match source {
        ImageSource::Path(path) => tokio::fs::read(path).await?,
        ImageSource::Url(url) => fetch(url).await?,
    };

    let svg = source.has_svg_extension() || looks_like_svg(&bytes);
    tokio::task::spawn_blocking(move || {
        if svg {
            decode_svg(&bytes)
        } else {
            decode_raster(&bytes)
        }
    })
    .await
    .map_err(|e| Error::Decode(e.to_string()))?
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedZoom/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Decodes raster bytes (PNG, JPEG, ...) into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the format is unknown or the data corrupt.
pub fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Rasterizes SVG bytes at their intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Svg`] when parsing fails or the document has no area.
pub fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_rejects_empty_sources() {
        assert_eq!(ImageSource::parse(""), Err(Error::MissingSource));
        assert_eq!(ImageSource::parse("   "), Err(Error::MissingSource));
        assert_eq!(ImageSource::parse("file://"), Err(Error::MissingSource));
        assert_eq!(ImageSource::from_option(None), Err(Error::MissingSource));
    }

    #[test]
    fn parse_distinguishes_urls_and_paths() {
        assert_eq!(
            ImageSource::parse("HTTPS://example.com/cat.png"),
            Ok(ImageSource::Url("HTTPS://example.com/cat.png".into()))
        );
        assert_eq!(
            ImageSource::parse("file:///tmp/cat.png"),
            Ok(ImageSource::Path(PathBuf::from("/tmp/cat.png")))
        );
        assert_eq!(
            ImageSource::parse(" photos/cat.jpg "),
            Ok(ImageSource::Path(PathBuf::from("photos/cat.jpg")))
        );
    }

    #[test]
    fn svg_extension_ignores_query_string() {
        let source = ImageSource::parse("https://example.com/logo.SVG?v=3").unwrap();
        assert!(source.has_svg_extension());
        let source = ImageSource::parse("https://example.com/logo.png#svg").unwrap();
        assert!(!source.has_svg_extension());
    }

    #[test]
    fn sniffs_svg_documents() {
        assert!(looks_like_svg(b"  <svg xmlns='http://www.w3.org/2000/svg'/>"));
        assert!(looks_like_svg(b"<?xml version=\"1.0\"?>\n<svg></svg>"));
        assert!(!looks_like_svg(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn aspect_ratio_handles_degenerate_sizes() {
        let data = ImageData::from_rgba(4, 2, vec![0; 32]);
        assert_eq!(data.aspect_ratio(), 0.5);
        let empty = ImageData::from_rgba(0, 0, Vec::new());
        assert_eq!(empty.aspect_ratio(), 1.0);
    }

    #[tokio::test]
    async fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&ImageSource::Path(image_path))
            .await
            .expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[tokio::test]
    async fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&ImageSource::Path(svg_path))
            .await
            .expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[tokio::test]
    async fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&ImageSource::Path(missing_path)).await {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&ImageSource::Path(bad_path)).await {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_svg_returns_svg_error() {
        match decode_svg(b"<svg>oops") {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }
}
