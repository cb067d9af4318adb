//! Rendered Image Entry
//!
//! The value stored in the image cache and returned to the HTTP edge: a byte
//! buffer plus the MIME type it was rendered as.

/// MIME type of a rendered badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    /// Vector markup (`image/svg+xml`)
    Svg,
    /// Rasterized bytes (`image/png`)
    Png,
}

impl ImageMime {
    /// Returns the `Content-Type` header value for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Svg => "image/svg+xml",
            ImageMime::Png => "image/png",
        }
    }
}

// == Rendered Image ==
/// A rendered badge: image bytes plus their format.
///
/// The format travels with the buffer so a cache hit replays exactly what the
/// first render produced, including a degraded-to-vector rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    /// Format the bytes were encoded as
    pub mime: ImageMime,
}

impl RenderedImage {
    /// Wraps vector markup as a rendered image.
    pub fn svg(markup: String) -> Self {
        Self {
            bytes: markup.into_bytes(),
            mime: ImageMime::Svg,
        }
    }

    /// Wraps rasterized bytes as a rendered image.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: ImageMime::Png,
        }
    }
}
