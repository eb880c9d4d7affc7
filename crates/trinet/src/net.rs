//! Triangle nets: merged vertices, edge counts and boundary tracing.

use hashbrown::{HashMap, HashSet};
use nalgebra::Point2;
use tracing::{debug, warn};

use crate::adjacency::EdgeCounts;
use crate::boundary::BoundaryLoop;
use crate::error::{NetError, NetResult};
use crate::types::{bounds_of, Triangle, VertexKey, DEFAULT_KEY_PRECISION, MAX_KEY_PRECISION};

/// An indexed net built from an unordered soup of triangles.
///
/// Points that agree to `precision` decimal places merge into one vertex.
/// Vertex indices follow first-insertion order and never change until
/// [`TriangleNet::clear`].
#[derive(Debug, Clone)]
pub struct TriangleNet {
    vertices: Vec<Point2<f64>>,
    triangles: Vec<[u32; 3]>,
    vertex_to_index: HashMap<VertexKey, u32>,
    edges: EdgeCounts,
    precision: u32,
}

impl TriangleNet {
    /// Create an empty net merging vertices to 3 decimal places.
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_KEY_PRECISION)
    }

    /// Create an empty net merging vertices to `precision` decimal places.
    ///
    /// Precision is capped at [`MAX_KEY_PRECISION`].
    pub fn with_precision(precision: u32) -> Self {
        if precision > MAX_KEY_PRECISION {
            warn!(
                "Precision {} exceeds maximum of {}; clamping",
                precision, MAX_KEY_PRECISION
            );
        }
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            vertex_to_index: HashMap::new(),
            edges: EdgeCounts::new(),
            precision: precision.min(MAX_KEY_PRECISION),
        }
    }

    /// Decimal places used for vertex merging.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Reset to an empty net.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.vertex_to_index.clear();
        self.edges.clear();
    }

    /// Add triangles from a flat point list, three points per triangle.
    ///
    /// The whole list is validated before the net is touched: a length that
    /// is not a multiple of 3, a non-finite coordinate or one too large to key
    /// leaves it unchanged.
    pub fn add_triangles(&mut self, points: &[Point2<f64>]) -> NetResult<()> {
        if points.len() % 3 != 0 {
            return Err(NetError::InvalidInput { len: points.len() });
        }

        let keys = points
            .iter()
            .enumerate()
            .map(|(position, p)| {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(NetError::NonFiniteCoordinate { position });
                }
                VertexKey::new(p, self.precision).ok_or(NetError::CoordinateOutOfRange {
                    position,
                    precision: self.precision,
                })
            })
            .collect::<NetResult<Vec<_>>>()?;

        let vertices_before = self.vertices.len();
        let mut collapsed = 0usize;

        for (tri_points, tri_keys) in points.chunks_exact(3).zip(keys.chunks_exact(3)) {
            let mut face = [0u32; 3];
            for (slot, (point, key)) in face.iter_mut().zip(tri_points.iter().zip(tri_keys)) {
                *slot = self.intern(*key, *point);
            }

            if !self.edges.record_triangle(face) {
                collapsed += 1;
            }
            self.triangles.push(face);
        }

        if collapsed > 0 {
            warn!("Added {} collapsed triangles (repeated vertices)", collapsed);
        }

        debug!(
            "Added {} triangles: {} new vertices, {} total",
            points.len() / 3,
            self.vertices.len() - vertices_before,
            self.vertices.len()
        );

        Ok(())
    }

    /// Add a single triangle.
    pub fn add_triangle(&mut self, triangle: [Point2<f64>; 3]) -> NetResult<()> {
        self.add_triangles(&triangle)
    }

    fn intern(&mut self, key: VertexKey, point: Point2<f64>) -> u32 {
        let vertices = &mut self.vertices;
        *self.vertex_to_index.entry(key).or_insert_with(|| {
            vertices.push(point);
            (vertices.len() - 1) as u32
        })
    }

    fn check_index(&self, index: u32) -> NetResult<()> {
        if (index as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(NetError::IndexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }

    /// Whether edge `u -> v` is shared (or unused) rather than on the boundary.
    pub fn is_edge_internal(&self, u: u32, v: u32) -> NetResult<bool> {
        self.check_index(u)?;
        self.check_index(v)?;
        Ok(self.edges.is_edge_internal(u, v))
    }

    /// Whether every edge at vertex `u` is shared by at least two triangles.
    pub fn is_vertex_internal(&self, u: u32) -> NetResult<bool> {
        self.check_index(u)?;
        Ok(self.edges.is_vertex_internal(u))
    }

    /// Number of triangles traversing `u -> v`.
    pub fn edge_count(&self, u: u32, v: u32) -> NetResult<u32> {
        self.check_index(u)?;
        self.check_index(v)?;
        Ok(self.edges.count(u, v))
    }

    /// Trace the boundary and return its vertex positions in walk order.
    pub fn polygon(&self) -> Vec<Point2<f64>> {
        self.boundary_loop().into_points()
    }

    /// Trace the boundary starting at the first boundary vertex.
    ///
    /// Each step moves to the lowest-index unvisited neighbor across a
    /// boundary edge. If every vertex is internal the walk starts (and ends)
    /// at vertex 0. An empty net yields an empty loop.
    pub fn boundary_loop(&self) -> BoundaryLoop {
        if self.vertices.is_empty() {
            return BoundaryLoop::default();
        }

        let start = (0..self.vertices.len() as u32)
            .find(|&u| !self.edges.is_vertex_internal(u))
            .unwrap_or(0);

        let mut seen: HashSet<u32> = HashSet::new();
        let mut indices = Vec::new();
        let mut current = start;

        for _ in 0..self.vertices.len() {
            seen.insert(current);
            indices.push(current);

            match self
                .edges
                .boundary_neighbors(current)
                .find(|v| !seen.contains(v))
            {
                Some(next) => current = next,
                None => break,
            }
        }

        let closed = match (indices.first(), indices.last()) {
            (Some(&first), Some(&last)) => {
                indices.len() >= 3 && self.edges.count(last, first) == 1
            }
            _ => false,
        };

        let points = indices
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect();

        debug!(
            "Traced boundary from vertex {}: {} vertices, closed = {}",
            start,
            indices.len(),
            closed
        );

        BoundaryLoop::new(indices, points, closed)
    }

    /// Snap `query` to the closest vertex strictly within `max_distance`.
    ///
    /// Returns `query` unchanged when no vertex is close enough.
    pub fn nearest_vertex(&self, query: Point2<f64>, max_distance: f64) -> Point2<f64> {
        self.nearest_vertex_index(query, max_distance)
            .map(|i| self.vertices[i as usize])
            .unwrap_or(query)
    }

    /// Index of the closest vertex strictly within `max_distance`.
    ///
    /// Ties keep the earliest vertex.
    pub fn nearest_vertex_index(&self, query: Point2<f64>, max_distance: f64) -> Option<u32> {
        let mut best: Option<(u32, f64)> = None;
        for (i, vertex) in self.vertices.iter().enumerate() {
            let dist = (vertex - query).norm();
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((i as u32, dist));
            }
        }
        best.filter(|&(_, d)| d < max_distance).map(|(i, _)| i)
    }

    /// Merged vertex positions in index order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Position of vertex `index`.
    pub fn vertex(&self, index: u32) -> NetResult<Point2<f64>> {
        self.check_index(index)?;
        Ok(self.vertices[index as usize])
    }

    /// Triangles as vertex index triples, in insertion order.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Iterate over triangles with concrete positions.
    pub fn triangle_shapes(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.iter().map(|&[i0, i1, i2]| {
            Triangle::new(
                self.vertices[i0 as usize],
                self.vertices[i1 as usize],
                self.vertices[i2 as usize],
            )
        })
    }

    /// Each triangle's three directed edges in winding order.
    ///
    /// Shared edges appear once per triangle.
    pub fn triangle_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.triangles
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
    }

    /// Every recorded directed vertex pair with its traversal count.
    pub fn edge_counts(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.edges.directed_pairs()
    }

    /// The underlying edge count table.
    #[inline]
    pub fn adjacency(&self) -> &EdgeCounts {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the net has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds of all vertices.
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        bounds_of(&self.vertices)
    }
}

impl Default for TriangleNet {
    fn default() -> Self {
        Self::new()
    }
}
