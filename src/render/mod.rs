//! Image Rendering Module
//!
//! Turns repository metadata and an optional note into a badge image with a
//! bounded in-memory cache. Output is PNG when a rasterizer is wired in and
//! rasterization succeeds, SVG otherwise.

mod cache;
mod engine;
mod format;
mod image;
mod layout;
mod raster;
mod stats;
mod svg;


// Re-export public types
pub use cache::ImageCache;
pub use engine::ImageRenderer;
pub use format::format_stars;
pub use image::{ImageMime, RenderedImage};
pub use layout::{scatter_starfield, BackgroundStar, Layout};
pub use raster::{RasterError, Rasterizer};
pub use stats::CacheStats;
pub use svg::{escape_xml, VectorRenderer};

#[cfg(feature = "raster")]
pub use raster::ResvgRasterizer;

use std::sync::Arc;

// == Public Constants ==
/// Badge canvas width in pixels (social-card proportions)
pub const CANVAS_WIDTH: u32 = 800;

/// Badge canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 418;

/// Number of decorative background stars scattered per render
pub const STARFIELD_SIZE: usize = 40;

/// Returns the rasterization strategy chosen at compile time.
///
/// With the `raster` feature this is the resvg-backed strategy; without it
/// the renderer is wired vector-only and every badge is served as SVG.
#[cfg(feature = "raster")]
pub fn default_rasterizer() -> Option<Arc<dyn Rasterizer>> {
    Some(Arc::new(ResvgRasterizer::new()))
}

/// Returns the rasterization strategy chosen at compile time.
///
/// Compiled without the `raster` feature: vector-only, every badge is SVG.
#[cfg(not(feature = "raster"))]
pub fn default_rasterizer() -> Option<Arc<dyn Rasterizer>> {
    None
}
