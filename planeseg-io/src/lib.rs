//! I/O operations for colored point clouds
//!
//! This crate reads and writes point clouds with per-point color. PLY is
//! the only supported format; the entry points dispatch on the file
//! extension so further formats can slot in later.

pub mod ply;

use planeseg_core::{ColoredPoint3f, Error, PointCloud, Result};
use std::path::Path;

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>>;
}

/// Trait for writing point clouds to files
pub trait PointCloudWriter {
    fn write_point_cloud<P: AsRef<Path>>(
        cloud: &PointCloud<ColoredPoint3f>,
        path: P,
    ) -> Result<()>;
}

/// Auto-detect format and read a point cloud
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("ply") => ply::PlyReader::read_point_cloud(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported point cloud format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write a point cloud
pub fn write_point_cloud<P: AsRef<Path>>(
    cloud: &PointCloud<ColoredPoint3f>,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("ply") => ply::PlyWriter::write_point_cloud(cloud, path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported point cloud format: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planeseg_core::Point3f;
    use std::fs;

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = read_point_cloud("cloud.xyz");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_ply_roundtrip_preserves_positions_and_colors() {
        let temp_file = "test_roundtrip_cloud.ply";

        let mut cloud = PointCloud::new();
        cloud.push(ColoredPoint3f::new(Point3f::new(0.0, 0.0, 0.0), [255, 0, 0]));
        cloud.push(ColoredPoint3f::new(Point3f::new(1.5, -2.0, 3.25), [0, 255, 0]));
        cloud.push(ColoredPoint3f::new(Point3f::new(-4.0, 0.5, 2.0), [127, 0, 127]));

        write_point_cloud(&cloud, temp_file).unwrap();
        let loaded = read_point_cloud(temp_file).unwrap();

        assert_eq!(cloud.len(), loaded.len());
        for (original, loaded) in cloud.iter().zip(loaded.iter()) {
            assert!((original.position.x - loaded.position.x).abs() < 1e-6);
            assert!((original.position.y - loaded.position.y).abs() < 1e-6);
            assert!((original.position.z - loaded.position.z).abs() < 1e-6);
            assert_eq!(original.color, loaded.color);
        }

        let _ = fs::remove_file(temp_file);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_point_cloud("does_not_exist.ply");
        assert!(result.is_err());
    }
}
