//! Vector Renderer Module
//!
//! Assembles the badge as SVG markup. All user-supplied text goes through
//! [`escape_xml`] before interpolation.

use std::borrow::Cow;

use crate::models::RepositoryMetadata;
use crate::render::format::format_stars;
use crate::render::layout::{scatter_starfield, Layout};
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH, STARFIELD_SIZE};

// == Palette ==
const BACKGROUND: &str = "#2B3137";
const CARD: &str = "#1B2025";
const STAR_GOLD: &str = "#FFD700";
const BRAND_GREY: &str = "#bbbbbb";
const FONT_FAMILY: &str = "Arial, sans-serif";

// == Vector Renderer ==
/// Builds badge SVG markup for repository metadata and an optional note.
#[derive(Debug, Clone)]
pub struct VectorRenderer {
    width: u32,
    height: u32,
    starfield: usize,
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, STARFIELD_SIZE)
    }
}

impl VectorRenderer {
    /// Creates a renderer for the given canvas and starfield density.
    pub fn new(width: u32, height: u32, starfield: usize) -> Self {
        Self {
            width,
            height,
            starfield,
        }
    }

    /// Renders the badge as an SVG document.
    ///
    /// An empty `note` renders the compact layout; a non-empty one adds the
    /// caption band and shifts the star count downward.
    pub fn render(&self, metadata: &RepositoryMetadata, note: &str) -> String {
        use std::fmt::Write as _;

        let layout = Layout::compute(self.width, self.height, !note.is_empty());
        let starfield = scatter_starfield(self.starfield, self.width, self.height);
        let count = format_stars(metadata.stars);
        let repo = escape_xml(&metadata.full_name);

        let mut buffer = String::with_capacity(4096);

        let _ = writeln!(
            buffer,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">",
            layout.width, layout.height
        );

        // Background
        let _ = writeln!(
            buffer,
            "  <rect width=\"{}\" height=\"{}\" fill=\"{BACKGROUND}\"/>",
            layout.width, layout.height
        );

        // Decorative starfield
        for star in &starfield {
            let _ = writeln!(
                buffer,
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.2}\" fill=\"#ffffff\" opacity=\"{:.2}\"/>",
                star.x, star.y, star.radius, star.opacity
            );
        }

        // Center content card
        let _ = writeln!(
            buffer,
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"10\" fill=\"{CARD}\" stroke=\"#ffffff10\" stroke-width=\"1\"/>",
            layout.card_x, layout.card_y, layout.card_width, layout.card_height
        );

        // Custom note
        if let Some(note_y) = layout.note_y {
            let _ = writeln!(
                buffer,
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{FONT_FAMILY}\" font-size=\"24\" font-weight=\"bold\" fill=\"white\" text-anchor=\"middle\">{}</text>",
                layout.center_x,
                note_y,
                escape_xml(note)
            );
        }

        // Star count
        let _ = writeln!(
            buffer,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{FONT_FAMILY}\" font-size=\"72\" font-weight=\"bold\" fill=\"{STAR_GOLD}\" text-anchor=\"middle\">{count}</text>",
            layout.center_x, layout.count_y
        );

        // Star label
        let _ = writeln!(
            buffer,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{FONT_FAMILY}\" font-size=\"36\" fill=\"white\" text-anchor=\"middle\">&#9733; STARS</text>",
            layout.center_x, layout.label_y
        );

        // Repository name
        let _ = writeln!(
            buffer,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{FONT_FAMILY}\" font-size=\"20\" fill=\"white\" text-anchor=\"middle\">{repo}</text>",
            layout.center_x, layout.repo_y
        );

        // Brand mark
        let _ = writeln!(
            buffer,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"{FONT_FAMILY}\" font-size=\"12\" fill=\"{BRAND_GREY}\" text-anchor=\"end\">mkstar</text>",
            layout.brand_x, layout.brand_y
        );

        buffer.push_str("</svg>\n");
        buffer
    }
}

// == XML Escaping ==
/// Escapes markup-significant characters for safe interpolation into SVG
/// text content and attribute values.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(full_name: &str, stars: u64) -> RepositoryMetadata {
        RepositoryMetadata {
            name: full_name.split('/').next_back().unwrap_or_default().to_string(),
            full_name: full_name.to_string(),
            stars,
            url: format!("https://github.com/{full_name}"),
            description: None,
        }
    }

    #[test]
    fn test_escape_xml_passthrough() {
        assert_eq!(escape_xml("hello world"), "hello world");
        assert!(matches!(escape_xml("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_xml_markup_characters() {
        assert_eq!(
            escape_xml(r#"<script>"x" & 'y'</script>"#),
            "&lt;script&gt;&quot;x&quot; &amp; &apos;y&apos;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_contains_formatted_count() {
        let svg = VectorRenderer::default().render(&metadata("foo/bar", 1500), "");
        assert!(svg.contains(">1.5K</text>"));
        assert!(svg.contains(">foo/bar</text>"));
    }

    #[test]
    fn test_render_without_note_omits_caption() {
        let svg = VectorRenderer::default().render(&metadata("foo/bar", 10), "");
        assert!(!svg.contains("font-size=\"24\""));
    }

    #[test]
    fn test_render_note_shifts_count_down() {
        let renderer = VectorRenderer::default();
        let meta = metadata("foo/bar", 42);

        let plain = renderer.render(&meta, "");
        let noted = renderer.render(&meta, "Thanks!");

        // 0.45 vs 0.50 of the 418px canvas
        assert!(plain.contains("y=\"188.1\" font-family=\"Arial, sans-serif\" font-size=\"72\""));
        assert!(noted.contains("y=\"209.0\" font-family=\"Arial, sans-serif\" font-size=\"72\""));
        assert!(noted.contains(">Thanks!</text>"));
    }

    #[test]
    fn test_render_escapes_untrusted_note() {
        let svg = VectorRenderer::default()
            .render(&metadata("foo/bar", 1), "<img src=x onerror=alert(1)>");
        assert!(!svg.contains("<img"));
        assert!(svg.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_render_escapes_repository_name() {
        let svg = VectorRenderer::default().render(&metadata("a&b/c<d", 1), "");
        assert!(svg.contains("a&amp;b/c&lt;d"));
    }

    #[test]
    fn test_render_is_well_formed_enough_to_close() {
        let svg = VectorRenderer::default().render(&metadata("foo/bar", 999_999), "note");
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<text").count(), svg.matches("</text>").count());
    }

    #[test]
    fn test_render_draws_starfield() {
        let svg = VectorRenderer::default().render(&metadata("foo/bar", 7), "");
        assert_eq!(svg.matches("<circle").count(), STARFIELD_SIZE);
    }
}
