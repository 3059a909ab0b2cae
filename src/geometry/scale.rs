//! Linear scale and the route-length → control-point count mapping.

use crate::config::BundleConfig;

// ─── LinearScale ─────────────────────────────────────────────────────────────

/// Continuous linear map from a domain interval onto a range interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    /// When set, outputs are restricted to the range interval.
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // A collapsed domain maps everything to the middle of the range.
        let mut t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + (r1 - r0) * t
    }
}

// ─── Rounding ────────────────────────────────────────────────────────────────

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ─── Segment count ───────────────────────────────────────────────────────────

/// Number of interior control points for a route of the given length.
///
/// Zero-length and non-finite lengths get no control points; everything else
/// is mapped through [`BundleConfig::segment_scale`], rounded, and kept within
/// `[min_segments, max_segments]`.
pub fn segment_count(length: f64, config: &BundleConfig) -> usize {
    if !length.is_finite() || length <= 0.0 {
        return 0;
    }
    let scaled = round_half_up(config.segment_scale().apply(length));
    let lo = f64::from(config.min_segments);
    let hi = f64::from(config.max_segments);
    scaled.max(lo).min(hi) as usize
}

// ─── Tests ───────────────────────────────────────────────────────────────────
