//! Merge triangle soups into an indexed net and trace the boundary polygon.
//!
//! This crate takes an unordered list of 2-D triangles, merges vertices that
//! coincide to a fixed decimal precision, counts how many triangles share each
//! edge, and walks the edges used by exactly one triangle to recover the
//! outline.
//!
//! - **Net**: vertex merging, edge counts, boundary/internal classification
//! - **Boundary**: ordered polygon tracing and snapping to vertices
//! - **Validation**: edge and vertex statistics, closure check
//! - **Display**: view transform, painters for any [`Canvas`], SVG output
//! - **Interaction**: triangle picking and timed polygon tracing
//! - **Loading**: JSON, STL and OBJ triangle soups
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use trinet::TriangleNet;
//!
//! let mut net = TriangleNet::new();
//! net.add_triangles(&[
//!     Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(0.0, 1.0),
//! ]).unwrap();
//!
//! // The shared diagonal is internal; the outline is the unit square.
//! assert!(net.is_edge_internal(0, 2).unwrap());
//! assert_eq!(net.polygon().len(), 4);
//! ```

mod error;
mod types;

pub mod adjacency;
pub mod boundary;
pub mod config;
pub mod draw;
pub mod io;
pub mod net;
pub mod picker;
pub mod svg;
pub mod trace;
pub mod validate;
pub mod view;

// Re-export core types at crate root
pub use error::{NetError, NetResult};
pub use types::{bounds_of, Triangle, VertexKey, DEFAULT_KEY_PRECISION, MAX_KEY_PRECISION};

pub use adjacency::EdgeCounts;
pub use boundary::BoundaryLoop;
pub use config::NetConfig;
pub use draw::{draw_cursor, draw_labels, draw_net, draw_polygon, Canvas, Role};
pub use io::{load_net, load_triangles, save_polygon, TriangleFormat};
pub use net::TriangleNet;
pub use picker::{PickOutcome, TrianglePicker};
pub use svg::SvgCanvas;
pub use trace::TraceAnimator;
pub use validate::{log_validation, validate_net, NetReport};
pub use view::ViewTransform;

// Convenience methods on TriangleNet
impl TriangleNet {
    /// Load a triangle file, auto-detecting format from extension.
    pub fn load(path: impl AsRef<std::path::Path>) -> NetResult<Self> {
        io::load_net(path.as_ref(), DEFAULT_KEY_PRECISION)
    }

    /// Validate the net and return a report.
    pub fn validate(&self) -> NetReport {
        validate::validate_net(self)
    }

    /// Render the net, its labels and its boundary polygon as SVG.
    pub fn to_svg(&self, view: &ViewTransform, width: f64, height: f64, label_size: Option<f64>) -> String {
        let mut canvas = SvgCanvas::new(width, height);
        draw_net(self, view, &mut canvas);
        if let Some(size) = label_size {
            draw_labels(self, size, view, &mut canvas);
        }
        draw_polygon(&self.polygon(), None, Role::Polygon, view, &mut canvas);
        canvas.finish()
    }
}
