//! Screen-space geometry used by the segment generator.

pub mod scale;
pub mod types;

pub use scale::{LinearScale, round_half_up, segment_count};
pub use types::Position;
