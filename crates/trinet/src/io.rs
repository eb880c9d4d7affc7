//! Triangle soup I/O for JSON, STL and OBJ files.
//!
//! Every format is read as a flat list of points, three per triangle. 3-D
//! formats are projected onto the XY plane.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point2;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{NetError, NetResult};
use crate::TriangleNet;

/// Supported triangle file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleFormat {
    Json,
    Stl,
    Obj,
}

impl TriangleFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .and_then(|ext| match ext.as_str() {
                "json" => Some(TriangleFormat::Json),
                "stl" => Some(TriangleFormat::Stl),
                "obj" => Some(TriangleFormat::Obj),
                _ => None,
            })
    }
}

/// Accepted JSON layouts: a bare point list or an object holding one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTriangles {
    Points(Vec<[f64; 2]>),
    Object { triangles: Vec<[f64; 2]> },
}

/// Load a flat triangle list from file, auto-detecting format from extension.
pub fn load_triangles(path: &Path) -> NetResult<Vec<Point2<f64>>> {
    let format = TriangleFormat::from_path(path).ok_or_else(|| NetError::UnsupportedFormat {
        extension: path.extension().and_then(|e| e.to_str()).map(String::from),
    })?;

    info!("Loading triangles from {:?} (format: {:?})", path, format);

    let points = match format {
        TriangleFormat::Json => load_json(path)?,
        TriangleFormat::Stl => load_stl(path)?,
        TriangleFormat::Obj => load_obj(path)?,
    };

    if points.is_empty() {
        return Err(NetError::EmptyInput {
            details: format!("{} contains no triangles", path.display()),
        });
    }

    info!("Loaded {} triangles", points.len() / 3);

    Ok(points)
}

/// Load a file straight into a fresh net merging to `precision` decimals.
pub fn load_net(path: &Path, precision: u32) -> NetResult<TriangleNet> {
    let points = load_triangles(path)?;
    let mut net = TriangleNet::with_precision(precision);
    net.add_triangles(&points)?;
    debug!(
        "Net from {:?}: {} vertices, {} triangles",
        path,
        net.vertex_count(),
        net.triangle_count()
    );
    Ok(net)
}

fn load_json(path: &Path) -> NetResult<Vec<Point2<f64>>> {
    let file = File::open(path).map_err(|e| NetError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: JsonTriangles =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| NetError::ParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let raw = match parsed {
        JsonTriangles::Points(points) => points,
        JsonTriangles::Object { triangles } => triangles,
    };

    if raw.len() % 3 != 0 {
        return Err(NetError::InvalidInput { len: raw.len() });
    }

    Ok(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
}

/// Load triangles from STL file (binary or ASCII).
fn load_stl(path: &Path) -> NetResult<Vec<Point2<f64>>> {
    let file = File::open(path).map_err(|e| NetError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let stl = stl_io::read_stl(&mut reader).map_err(|e| NetError::ParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    debug!(
        "STL contains {} vertices, {} triangles",
        stl.vertices.len(),
        stl.faces.len()
    );

    let mut points = Vec::with_capacity(stl.faces.len() * 3);
    let mut dropped_z = false;
    for face in &stl.faces {
        for &i in &face.vertices {
            let v = stl.vertices[i];
            dropped_z |= v.0[2] != 0.0;
            points.push(Point2::new(v.0[0] as f64, v.0[1] as f64));
        }
    }

    if dropped_z {
        warn!("STL has non-zero Z coordinates; projecting onto the XY plane");
    }

    Ok(points)
}

/// Load triangles from OBJ file, triangulating polygons.
fn load_obj(path: &Path) -> NetResult<Vec<Point2<f64>>> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| NetError::ParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let mut points = Vec::new();
    let mut dropped_z = false;

    for model in &models {
        debug!("OBJ model '{}': loading", model.name);

        let positions = &model.mesh.positions;
        for &i in &model.mesh.indices {
            let base = i as usize * 3;
            let Some(xyz) = positions.get(base..base + 3) else {
                return Err(NetError::ParseError {
                    path: path.to_path_buf(),
                    details: format!("face index {} out of range in model '{}'", i, model.name),
                });
            };
            dropped_z |= xyz[2] != 0.0;
            points.push(Point2::new(xyz[0] as f64, xyz[1] as f64));
        }
    }

    if dropped_z {
        warn!("OBJ has non-zero Z coordinates; projecting onto the XY plane");
    }

    debug!(
        "OBJ loaded: {} triangles from {} models",
        points.len() / 3,
        models.len()
    );

    Ok(points)
}

/// Save a polygon as a JSON array of `[x, y]` pairs.
pub fn save_polygon(points: &[Point2<f64>], path: &Path) -> NetResult<()> {
    info!("Saving polygon to {:?}", path);

    let file = File::create(path).map_err(|e| NetError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let raw: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    serde_json::to_writer_pretty(&mut writer, &raw).map_err(|e| NetError::IoWrite {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    writer.flush().map_err(|e| NetError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Saved {} polygon vertices to {:?}", points.len(), path);

    Ok(())
}
