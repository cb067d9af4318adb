//! Render Engine Module
//!
//! Orchestrates a render request: cache lookup, vector rendering, optional
//! rasterization with graceful degradation, and cache insertion.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::RepositoryMetadata;
use crate::render::cache::ImageCache;
use crate::render::image::RenderedImage;
use crate::render::raster::Rasterizer;
use crate::render::stats::CacheStats;
use crate::render::svg::VectorRenderer;

// == Image Renderer ==
/// Renders badge images with a bounded FIFO cache.
///
/// Rendering is deterministic for a given `(full_name, stars, note)` apart
/// from the decorative starfield, which is rolled on each cache miss and
/// frozen by the cache: repeated requests for the same key return the
/// first-rendered buffer byte for byte.
pub struct ImageRenderer {
    vector: VectorRenderer,
    rasterizer: Option<Arc<dyn Rasterizer>>,
    cache: RwLock<ImageCache>,
}

impl ImageRenderer {
    // == Constructor ==
    /// Creates a renderer with the given cache capacity and rasterization
    /// strategy.
    ///
    /// Passing `None` for the strategy yields a vector-only renderer; every
    /// badge is served as SVG.
    pub fn new(cache_capacity: usize, rasterizer: Option<Arc<dyn Rasterizer>>) -> Self {
        Self {
            vector: VectorRenderer::default(),
            rasterizer,
            cache: RwLock::new(ImageCache::new(cache_capacity)),
        }
    }

    // == Cache Key ==
    /// Derives the cache key from the values the image content depends on.
    ///
    /// Identical `(full_name, stars, note)` triples always collide; the
    /// decorative starfield is deliberately not part of the key.
    pub fn cache_key(full_name: &str, stars: u64, note: &str) -> String {
        if note.is_empty() {
            format!("{full_name}_{stars}")
        } else {
            format!("{full_name}_{stars}_{note}")
        }
    }

    // == Render ==
    /// Renders a badge for the repository, serving from the cache when
    /// possible.
    ///
    /// When a rasterizer is wired in its output is preferred; any raster
    /// failure is logged and the vector buffer is served instead. Rendering
    /// itself never fails.
    pub async fn render(&self, metadata: &RepositoryMetadata, note: &str) -> RenderedImage {
        let key = Self::cache_key(&metadata.full_name, metadata.stars, note);

        // Write lock even for the lookup: hits and misses mutate the stats
        if let Some(image) = self.cache.write().await.get(&key) {
            debug!(%key, "serving badge from cache");
            return image;
        }

        let markup = self.vector.render(metadata, note);

        let image = match &self.rasterizer {
            Some(rasterizer) => match rasterizer.rasterize(&markup) {
                Ok(png) => RenderedImage::png(png),
                Err(err) => {
                    warn!(%key, %err, "rasterization failed, serving vector output");
                    RenderedImage::svg(markup)
                }
            },
            None => RenderedImage::svg(markup),
        };

        // Concurrent misses for the same key may both land here; last-writer-wins
        self.cache.write().await.insert(key, image.clone());

        image
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::image::ImageMime;
    use crate::render::raster::RasterError;

    fn metadata(full_name: &str, stars: u64) -> RepositoryMetadata {
        RepositoryMetadata {
            name: full_name.split('/').next_back().unwrap_or_default().to_string(),
            full_name: full_name.to_string(),
            stars,
            url: format!("https://github.com/{full_name}"),
            description: None,
        }
    }

    /// Strategy double that always fails, simulating an unavailable
    /// rasterizer.
    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(&self, _svg: &str) -> Result<Vec<u8>, RasterError> {
            Err(RasterError::Parse("simulated failure".to_string()))
        }
    }

    #[test]
    fn test_cache_key_shape() {
        assert_eq!(ImageRenderer::cache_key("foo/bar", 1500, ""), "foo/bar_1500");
        assert_eq!(
            ImageRenderer::cache_key("foo/bar", 1500, "Thanks!"),
            "foo/bar_1500_Thanks!"
        );
    }

    #[tokio::test]
    async fn test_render_returns_svg_without_rasterizer() {
        let renderer = ImageRenderer::new(100, None);

        let image = renderer.render(&metadata("foo/bar", 1500), "").await;

        assert_eq!(image.mime, ImageMime::Svg);
        let markup = String::from_utf8(image.bytes).unwrap();
        assert!(markup.contains(">1.5K</text>"));
    }

    #[tokio::test]
    async fn test_render_is_idempotent_via_cache() {
        let renderer = ImageRenderer::new(100, None);
        let meta = metadata("foo/bar", 1500);

        // The starfield is random per miss, so byte-identical output proves
        // the second call was a cache hit
        let first = renderer.render(&meta, "Thanks!").await;
        let second = renderer.render(&meta, "Thanks!").await;

        assert_eq!(first, second);

        let stats = renderer.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_render_distinct_notes_are_distinct_entries() {
        let renderer = ImageRenderer::new(100, None);
        let meta = metadata("foo/bar", 1500);

        renderer.render(&meta, "").await;
        renderer.render(&meta, "Thanks!").await;

        let stats = renderer.stats().await;
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 2);
    }

    #[tokio::test]
    async fn test_render_degrades_to_vector_on_raster_failure() {
        let renderer = ImageRenderer::new(100, Some(Arc::new(FailingRasterizer)));

        let image = renderer.render(&metadata("foo/bar", 42), "").await;

        assert_eq!(image.mime, ImageMime::Svg);
        let markup = String::from_utf8(image.bytes).unwrap();
        assert!(markup.starts_with("<?xml"));
        assert!(markup.trim_end().ends_with("</svg>"));
    }

    #[tokio::test]
    async fn test_degraded_render_stays_stable_on_later_hits() {
        let renderer = ImageRenderer::new(100, Some(Arc::new(FailingRasterizer)));
        let meta = metadata("foo/bar", 42);

        let first = renderer.render(&meta, "").await;
        let second = renderer.render(&meta, "").await;

        assert_eq!(first, second);
        assert_eq!(renderer.stats().await.hits, 1);
    }

    #[cfg(feature = "raster")]
    #[tokio::test]
    async fn test_render_produces_png_with_rasterizer() {
        use crate::render::raster::ResvgRasterizer;

        let renderer = ImageRenderer::new(100, Some(Arc::new(ResvgRasterizer::new())));

        let image = renderer.render(&metadata("foo/bar", 1500), "").await;

        assert_eq!(image.mime, ImageMime::Png);
        assert_eq!(&image.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_render_fifo_bound() {
        let renderer = ImageRenderer::new(100, None);

        for stars in 0..101u64 {
            renderer.render(&metadata("foo/bar", stars), "").await;
        }

        let stats = renderer.stats().await;
        assert_eq!(stats.total_entries, 100);
        assert_eq!(stats.evictions, 1);

        // The first-inserted key was evicted: rendering it again is a miss
        renderer.render(&metadata("foo/bar", 0), "").await;
        assert_eq!(renderer.stats().await.misses, 102);
    }
}
