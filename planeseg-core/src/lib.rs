//! Core data structures for planeseg
//!
//! This crate provides the fundamental types shared by the planeseg
//! workspace: colored 3D points, the point cloud container, and the common
//! error type.

pub mod error;
pub mod point;
pub mod point_cloud;

pub use error::*;
pub use point::*;
pub use point_cloud::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
