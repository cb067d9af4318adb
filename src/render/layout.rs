//! Badge Layout Module
//!
//! Computes element positions for the badge canvas and scatters the
//! decorative background starfield.
//!
//! All anchors are fractions of the canvas so the composition is
//! resolution-independent. A non-empty note occupies the upper band and
//! pushes the star count and its label downward.

// == Layout ==
/// Resolved element positions for one badge, in absolute pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Inner card rectangle
    pub card_x: f64,
    pub card_y: f64,
    pub card_width: f64,
    pub card_height: f64,
    /// Horizontal center of the canvas; all text is anchored here
    pub center_x: f64,
    /// Baseline of the note text; None when no note is rendered
    pub note_y: Option<f64>,
    /// Baseline of the star count
    pub count_y: f64,
    /// Baseline of the "STARS" label
    pub label_y: f64,
    /// Baseline of the repository name
    pub repo_y: f64,
    /// Anchor of the brand mark, bottom-right corner
    pub brand_x: f64,
    pub brand_y: f64,
}

impl Layout {
    /// Computes the layout for a canvas, shifting the vertical anchors when a
    /// note is present.
    pub fn compute(width: u32, height: u32, has_note: bool) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);

        Self {
            width,
            height,
            card_x: w * 0.1,
            card_y: h * 0.1,
            card_width: w * 0.8,
            card_height: h * 0.8,
            center_x: w * 0.5,
            note_y: has_note.then_some(h * 0.30),
            count_y: if has_note { h * 0.50 } else { h * 0.45 },
            label_y: if has_note { h * 0.65 } else { h * 0.60 },
            repo_y: h * 0.80,
            brand_x: w - 20.0,
            brand_y: h - 10.0,
        }
    }
}

// == Background Starfield ==
/// One decorative background star.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

/// Scatters `count` background stars across the canvas with random position,
/// radius, and opacity.
///
/// The jitter is purely decorative and is not part of the cache key; it is
/// rolled once per cache miss and frozen by the cache thereafter.
pub fn scatter_starfield(count: usize, width: u32, height: u32) -> Vec<BackgroundStar> {
    (0..count)
        .map(|_| BackgroundStar {
            x: fastrand::f64() * f64::from(width),
            y: fastrand::f64() * f64::from(height),
            radius: 0.5 + fastrand::f64() * 2.0,
            opacity: 0.1 + fastrand::f64() * 0.7,
        })
        .collect()
}
