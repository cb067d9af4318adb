//! Rasterization Strategy Module
//!
//! Converts badge SVG into PNG bytes. The strategy is a trait so the
//! composition root decides what gets wired in and the engine can fall back
//! to vector output on any failure.

use thiserror::Error;

// == Raster Error ==
/// Failure modes of a rasterization attempt.
///
/// All of these are recoverable: the engine degrades to vector output
/// instead of failing the request.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The intermediate vector markup could not be parsed
    #[error("failed to parse vector markup: {0}")]
    Parse(String),

    /// The pixel buffer for the target size could not be allocated
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocate { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

// == Rasterizer Strategy ==
/// Strategy for converting SVG markup into raster bytes.
pub trait Rasterizer: Send + Sync {
    /// Rasterizes an SVG document into encoded PNG bytes.
    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, RasterError>;
}

#[cfg(feature = "raster")]
mod resvg_rasterizer {
    use std::sync::Arc;

    use resvg::{tiny_skia, usvg};

    use super::{RasterError, Rasterizer};

    // == Resvg Rasterizer ==
    /// resvg-backed rasterization strategy.
    ///
    /// System fonts are loaded once at construction; text elements render
    /// with whatever the host provides.
    pub struct ResvgRasterizer {
        fontdb: Arc<usvg::fontdb::Database>,
    }

    impl ResvgRasterizer {
        /// Creates a rasterizer with the system font collection loaded.
        pub fn new() -> Self {
            let mut fontdb = usvg::fontdb::Database::new();
            fontdb.load_system_fonts();
            Self {
                fontdb: Arc::new(fontdb),
            }
        }
    }

    impl Default for ResvgRasterizer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn rasterize(&self, svg: &str) -> Result<Vec<u8>, RasterError> {
            let mut options = usvg::Options::default();
            options.fontdb = Arc::clone(&self.fontdb);

            let tree = usvg::Tree::from_str(svg, &options)
                .map_err(|err| RasterError::Parse(err.to_string()))?;

            let size = tree.size().to_int_size();
            let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
                RasterError::Allocate {
                    width: size.width(),
                    height: size.height(),
                },
            )?;

            resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

            pixmap
                .encode_png()
                .map_err(|err| RasterError::Encode(err.to_string()))
        }
    }
}

#[cfg(feature = "raster")]
pub use resvg_rasterizer::ResvgRasterizer;
