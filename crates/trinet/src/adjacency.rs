//! Edge traversal counts between vertex pairs.

use std::collections::BTreeMap;

/// Per-vertex table of how many triangles connect it to each neighbor.
///
/// Every triangle records all six ordered pairs of its corners, so the count
/// for `(u, v)` always equals the count for `(v, u)` and is the number of
/// triangles containing both vertices. An edge with count 1 lies on the
/// boundary; anything else is internal.
///
/// Neighbors are kept in an ordered map so walks visit them by ascending index.
#[derive(Debug, Clone, Default)]
pub struct EdgeCounts {
    neighbors: Vec<BTreeMap<u32, u32>>,
}

impl EdgeCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every ordered corner pair of a triangle.
    ///
    /// Pairs whose two corners share an index are skipped. Returns false if
    /// the triangle collapsed to fewer than three distinct vertices.
    pub fn record_triangle(&mut self, face: [u32; 3]) -> bool {
        for j in 0..3 {
            for k in 0..3 {
                if j == k || face[j] == face[k] {
                    continue;
                }
                *self.row_mut(face[j]).entry(face[k]).or_insert(0) += 1;
            }
        }
        face[0] != face[1] && face[1] != face[2] && face[0] != face[2]
    }

    fn row_mut(&mut self, u: u32) -> &mut BTreeMap<u32, u32> {
        let idx = u as usize;
        if idx >= self.neighbors.len() {
            self.neighbors.resize_with(idx + 1, BTreeMap::new);
        }
        &mut self.neighbors[idx]
    }

    /// Number of triangles traversing `u -> v`; 0 for pairs never recorded.
    pub fn count(&self, u: u32, v: u32) -> u32 {
        self.neighbors
            .get(u as usize)
            .and_then(|row| row.get(&v))
            .copied()
            .unwrap_or(0)
    }

    /// Neighbors of `u` with their counts, by ascending neighbor index.
    pub fn neighbors(&self, u: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.neighbors
            .get(u as usize)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&v, &c)| (v, c)))
    }

    /// Neighbors of `u` reachable through a boundary edge.
    pub fn boundary_neighbors(&self, u: u32) -> impl Iterator<Item = u32> + '_ {
        self.neighbors(u).filter(|&(_, c)| c == 1).map(|(v, _)| v)
    }

    /// An edge is internal unless exactly one triangle traverses it.
    pub fn is_edge_internal(&self, u: u32, v: u32) -> bool {
        self.count(u, v) != 1
    }

    /// A vertex is internal when every edge leaving it is shared.
    ///
    /// Vertices without recorded neighbors are vacuously internal.
    pub fn is_vertex_internal(&self, u: u32) -> bool {
        self.neighbors(u).all(|(_, c)| c >= 2)
    }

    /// Every recorded directed pair with its count.
    pub fn directed_pairs(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(u, row)| {
            row.iter().map(move |(&v, &c)| (u as u32, v, c))
        })
    }

    /// Undirected edges (u < v) with their counts.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.directed_pairs().filter(|&(u, v, _)| u < v)
    }

    /// Count undirected boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.edges().filter(|&(_, _, c)| c == 1).count()
    }

    /// Count undirected edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edges().filter(|&(_, _, c)| c > 2).count()
    }

    /// Drop every recorded count.
    pub fn clear(&mut self) {
        self.neighbors.clear();
    }

    /// True when no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.neighbors.iter().all(BTreeMap::is_empty)
    }
}
