//! # planeseg-algorithms
//!
//! RANSAC plane extraction for colored point clouds: candidate planes are
//! fitted to random point triples, scored by inlier count against a
//! distance threshold, and the winning plane's points are recolored and
//! moved to the output until the plane budget or the cloud runs out.

pub mod palette;
pub mod plane;
pub mod segmentation;
pub mod trials;

// Re-export commonly used items
pub use palette::*;
pub use plane::*;
pub use segmentation::*;
pub use trials::*;
