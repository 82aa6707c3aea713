//! Mesh extents from Wavefront OBJ files.
//!
//! Only `v x y z [w]` lines are read; everything else (faces, normals,
//! texture coordinates, materials) is ignored. The bounds are the
//! component-wise min/max of all vertex positions.

use std::fs;
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::types::Aabb;

#[derive(Debug, Error)]
pub enum MeshBoundsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed vertex `{text}`")]
    MalformedVertex { line: usize, text: String },
    #[error("mesh has no vertices")]
    Empty,
}

/// Parse OBJ text and return the extents of its vertex positions.
pub fn parse_obj_bounds(source: &str) -> Result<Aabb, MeshBoundsError> {
    let mut vertices = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let mut fields = line.split_whitespace();
        if fields.next() != Some("v") {
            continue;
        }

        let coords: Vec<f32> = fields
            .take(3)
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| malformed(index, line))?;
        if coords.len() != 3 {
            return Err(malformed(index, line));
        }
        vertices.push(Vec3::new(coords[0], coords[1], coords[2]));
    }

    Aabb::from_points(vertices).ok_or(MeshBoundsError::Empty)
}

/// Read an OBJ file from disk and return its extents.
pub fn load_obj_bounds(path: impl AsRef<Path>) -> Result<Aabb, MeshBoundsError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| MeshBoundsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_obj_bounds(&source)
}

fn malformed(index: usize, line: &str) -> MeshBoundsError {
    MeshBoundsError::MalformedVertex {
        line: index + 1,
        text: line.to_string(),
    }
}
