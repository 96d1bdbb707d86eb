//! PLY format support

use crate::{PointCloudReader, PointCloudWriter};
use planeseg_core::{ColoredPoint3f, Error, Point3f, PointCloud, Result};
use ply_rs::{
    parser::Parser,
    ply::{
        Addable, DefaultElement, ElementDef, Ply, Property, PropertyDef, PropertyType, ScalarType,
    },
    writer::Writer,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub struct PlyReader;
pub struct PlyWriter;

impl PointCloudReader for PlyReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let mut points = Vec::new();

        if let Some(vertex_element) = ply.payload.get("vertex") {
            for vertex in vertex_element {
                let x = extract_coordinate(vertex, "x")?;
                let y = extract_coordinate(vertex, "y")?;
                let z = extract_coordinate(vertex, "z")?;

                // Vertices without color properties default to white
                let color = match (
                    extract_channel(vertex, "red"),
                    extract_channel(vertex, "green"),
                    extract_channel(vertex, "blue"),
                ) {
                    (Some(r), Some(g), Some(b)) => [r, g, b],
                    _ => [255, 255, 255],
                };

                points.push(ColoredPoint3f::new(Point3f::new(x, y, z), color));
            }
        }

        Ok(PointCloud::from_points(points))
    }
}

impl PointCloudWriter for PlyWriter {
    fn write_point_cloud<P: AsRef<Path>>(
        cloud: &PointCloud<ColoredPoint3f>,
        path: P,
    ) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let mut ply = Ply::<DefaultElement>::new();

        let mut vertex_element = ElementDef::new("vertex".to_string());
        vertex_element.count = cloud.len();
        for name in ["x", "y", "z"] {
            vertex_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::Float),
            ));
        }
        for name in ["red", "green", "blue"] {
            vertex_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::UChar),
            ));
        }
        ply.header.elements.add(vertex_element);

        let mut vertices = Vec::new();
        for point in &cloud.points {
            let mut vertex = DefaultElement::new();
            vertex.insert("x".to_string(), Property::Float(point.position.x));
            vertex.insert("y".to_string(), Property::Float(point.position.y));
            vertex.insert("z".to_string(), Property::Float(point.position.z));
            vertex.insert("red".to_string(), Property::UChar(point.color[0]));
            vertex.insert("green".to_string(), Property::UChar(point.color[1]));
            vertex.insert("blue".to_string(), Property::UChar(point.color[2]));
            vertices.push(vertex);
        }
        ply.payload.insert("vertex".to_string(), vertices);

        let writer_instance = Writer::new();
        writer_instance.write_ply(&mut writer, &mut ply)?;

        Ok(())
    }
}

/// Extract a coordinate property as f32 from a PLY vertex
fn extract_coordinate(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract a color channel as u8 from a PLY vertex, if present
fn extract_channel(element: &DefaultElement, name: &str) -> Option<u8> {
    match element.get(name) {
        Some(Property::UChar(val)) => Some(*val),
        Some(Property::Char(val)) => Some(*val as u8),
        Some(Property::UShort(val)) => Some((*val).min(255) as u8),
        Some(Property::Int(val)) => Some((*val).clamp(0, 255) as u8),
        _ => None,
    }
}
