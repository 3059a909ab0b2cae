//! Configuration for the segment generator.
//!
//! Holds the canvas size and segment-count range that drive how finely each
//! route is subdivided.

use crate::geometry::LinearScale;

/// Configuration for the bundling pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    /// Drawing canvas width in projected screen units.
    pub width: f64,
    /// Drawing canvas height in projected screen units.
    pub height: f64,
    /// Fewest interior control points a non-degenerate route receives.
    pub min_segments: u32,
    /// Most interior control points any route receives.
    pub max_segments: u32,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 510.0,
            min_segments: 1,
            max_segments: 10,
        }
    }
}

impl BundleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas diagonal; the longest route that can be drawn on screen.
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Linear scale from route length `[0, diagonal]` to the segment range.
    pub fn segment_scale(&self) -> LinearScale {
        LinearScale::new(
            (0.0, self.diagonal()),
            (f64::from(self.min_segments), f64::from(self.max_segments)),
        )
        .clamped()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("canvas width must be positive, got {}", self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(format!(
                "canvas height must be positive, got {}",
                self.height
            ));
        }
        if self.min_segments > self.max_segments {
            return Err(format!(
                "min segments ({}) exceeds max segments ({})",
                self.min_segments, self.max_segments
            ));
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
