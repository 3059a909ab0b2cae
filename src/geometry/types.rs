//! Position type in projected screen space.

// ─── Position ────────────────────────────────────────────────────────────────

/// A point in projected screen space.
///
/// Coordinates may be non-finite when the upstream projection could not place
/// a record; such positions flow through untouched and are filtered at draw
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A position the projection could not produce.
    pub fn unplaced() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at parameter `t` on the segment from `self` to `other`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        Position::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
