//! Painting nets onto an external drawing surface.
//!
//! The net never owns a surface. Painters borrow anything implementing
//! [`Canvas`] and emit screen-space primitives tagged with a [`Role`]; the
//! surface picks the actual colours.

use nalgebra::Point2;

use crate::view::ViewTransform;
use crate::TriangleNet;

/// Screen radius of net vertex markers.
pub const VERTEX_RADIUS: f64 = 3.0;

/// Screen radius of polygon vertex markers.
pub const POLYGON_VERTEX_RADIUS: f64 = 4.0;

/// Screen radius of the snapped-vertex marker.
pub const SNAP_MARKER_RADIUS: f64 = 5.0;

/// Fraction along an edge where its count label is placed.
const EDGE_LABEL_OFFSET: f64 = 0.3;

/// What a primitive represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Edge or vertex on the boundary.
    Boundary,
    /// Shared edge or fully surrounded vertex.
    Internal,
    /// Traced boundary polygon.
    Polygon,
    /// Points picked but not yet made into a triangle.
    Selection,
    /// Snap indicators around the cursor.
    Cursor,
    /// Index and count labels.
    Label,
}

/// A surface that can draw lines, circles and text in screen coordinates.
pub trait Canvas {
    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, role: Role);

    /// Circle outline or disc centred at `center`.
    fn circle(&mut self, center: Point2<f64>, radius: f64, role: Role);

    fn text(&mut self, at: Point2<f64>, size: f64, text: &str, role: Role);
}

fn role_for(internal: bool) -> Role {
    if internal {
        Role::Internal
    } else {
        Role::Boundary
    }
}

/// Draw every triangle edge and every vertex, coloured by classification.
pub fn draw_net<C: Canvas + ?Sized>(net: &TriangleNet, view: &ViewTransform, canvas: &mut C) {
    let vertices = net.vertices();
    let adjacency = net.adjacency();

    for (u, v) in net.triangle_edges() {
        canvas.line(
            view.to_screen(vertices[u as usize]),
            view.to_screen(vertices[v as usize]),
            role_for(adjacency.is_edge_internal(u, v)),
        );
    }

    for (u, vertex) in vertices.iter().enumerate() {
        canvas.circle(
            view.to_screen(*vertex),
            VERTEX_RADIUS,
            role_for(adjacency.is_vertex_internal(u as u32)),
        );
    }
}

/// Draw a polygon outline, optionally only up to vertex `until`.
///
/// Vertices `0..=until` get markers and edges `i -> i + 1` are drawn for
/// `i < until`, wrapping back to the first vertex. `None` draws the whole
/// closed outline.
pub fn draw_polygon<C: Canvas + ?Sized>(
    points: &[Point2<f64>],
    until: Option<usize>,
    role: Role,
    view: &ViewTransform,
    canvas: &mut C,
) {
    let n = points.len();
    if n == 0 {
        return;
    }
    let until = until.unwrap_or(n);

    for point in points.iter().take(until.saturating_add(1)) {
        canvas.circle(view.to_screen(*point), POLYGON_VERTEX_RADIUS, role);
    }

    for i in 0..until.min(n) {
        canvas.line(
            view.to_screen(points[i]),
            view.to_screen(points[(i + 1) % n]),
            role,
        );
    }
}

/// Label each vertex with its index and each recorded edge with its count.
pub fn draw_labels<C: Canvas + ?Sized>(
    net: &TriangleNet,
    size: f64,
    view: &ViewTransform,
    canvas: &mut C,
) {
    let vertices = net.vertices();

    for (i, vertex) in vertices.iter().enumerate() {
        canvas.text(view.to_screen(*vertex), size, &i.to_string(), Role::Label);
    }

    for (u, v, count) in net.edge_counts() {
        if count == 0 {
            continue;
        }
        let from = vertices[u as usize];
        let to = vertices[v as usize];
        let at = from + (to - from) * EDGE_LABEL_OFFSET;
        canvas.text(view.to_screen(at), size * 0.5, &count.to_string(), Role::Label);
    }
}

/// Mark the snapped vertex and the snap radius around the cursor.
pub fn draw_cursor<C: Canvas + ?Sized>(
    cursor: Point2<f64>,
    snapped: Point2<f64>,
    snap_distance: f64,
    view: &ViewTransform,
    canvas: &mut C,
) {
    canvas.circle(view.to_screen(snapped), SNAP_MARKER_RADIUS, Role::Cursor);
    canvas.circle(
        view.to_screen(cursor),
        view.scale_length(snap_distance),
        Role::Cursor,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    /// Primitive emitted to a [`Recorder`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum Shape {
        Line(Point2<f64>, Point2<f64>, Role),
        Circle(Point2<f64>, f64, Role),
        Text(Point2<f64>, f64, String, Role),
    }

    /// Canvas that remembers everything drawn on it.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub shapes: Vec<Shape>,
    }

    impl Canvas for Recorder {
        fn line(&mut self, from: Point2<f64>, to: Point2<f64>, role: Role) {
            self.shapes.push(Shape::Line(from, to, role));
        }

        fn circle(&mut self, center: Point2<f64>, radius: f64, role: Role) {
            self.shapes.push(Shape::Circle(center, radius, role));
        }

        fn text(&mut self, at: Point2<f64>, size: f64, text: &str, role: Role) {
            self.shapes.push(Shape::Text(at, size, text.to_string(), role));
        }
    }

    impl Recorder {
        fn lines(&self) -> Vec<&Shape> {
            self.shapes
                .iter()
                .filter(|s| matches!(s, Shape::Line(..)))
                .collect()
        }

        fn circles(&self) -> Vec<&Shape> {
            self.shapes
                .iter()
                .filter(|s| matches!(s, Shape::Circle(..)))
                .collect()
        }
    }

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn split_square() -> TriangleNet {
        let mut net = TriangleNet::new();
        net.add_triangles(&[
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ])
        .unwrap();
        net
    }

    #[test]
    fn test_draw_net_roles() {
        let net = split_square();
        let mut canvas = Recorder::default();
        draw_net(&net, &ViewTransform::default(), &mut canvas);

        let lines = canvas.lines();
        assert_eq!(lines.len(), 6);
        let internal = lines
            .iter()
            .filter(|s| matches!(s, Shape::Line(_, _, Role::Internal)))
            .count();
        // The shared diagonal is drawn once per triangle.
        assert_eq!(internal, 2);

        let circles = canvas.circles();
        assert_eq!(circles.len(), 4);
        assert!(circles
            .iter()
            .all(|s| matches!(s, Shape::Circle(_, r, Role::Boundary) if *r == VERTEX_RADIUS)));
    }

    #[test]
    fn test_draw_net_uses_view() {
        let mut net = TriangleNet::new();
        net.add_triangles(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)])
            .unwrap();
        let view = ViewTransform::new(Vector2::new(400.0, 400.0), 100.0);
        let mut canvas = Recorder::default();
        draw_net(&net, &view, &mut canvas);

        assert_eq!(
            canvas.shapes[0],
            Shape::Line(p(400.0, 400.0), p(500.0, 400.0), Role::Boundary)
        );
    }

    #[test]
    fn test_draw_polygon_until() {
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let view = ViewTransform::new(Vector2::zeros(), 1.0);

        let mut canvas = Recorder::default();
        draw_polygon(&square, Some(0), Role::Polygon, &view, &mut canvas);
        assert_eq!(canvas.circles().len(), 1);
        assert!(canvas.lines().is_empty());

        let mut canvas = Recorder::default();
        draw_polygon(&square, Some(2), Role::Polygon, &view, &mut canvas);
        assert_eq!(canvas.circles().len(), 3);
        assert_eq!(canvas.lines().len(), 2);

        let mut canvas = Recorder::default();
        draw_polygon(&square, None, Role::Polygon, &view, &mut canvas);
        assert_eq!(canvas.circles().len(), 4);
        let lines = canvas.lines();
        assert_eq!(lines.len(), 4);
        // Closing edge wraps to the first vertex (Y flipped on screen).
        assert_eq!(
            *lines[3],
            Shape::Line(p(0.0, -1.0), p(0.0, 0.0), Role::Polygon)
        );
    }

    #[test]
    fn test_draw_polygon_empty() {
        let mut canvas = Recorder::default();
        draw_polygon(&[], None, Role::Polygon, &ViewTransform::default(), &mut canvas);
        assert!(canvas.shapes.is_empty());
    }

    #[test]
    fn test_draw_labels() {
        let mut net = TriangleNet::new();
        net.add_triangles(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)])
            .unwrap();
        let view = ViewTransform::new(Vector2::zeros(), 10.0);
        let mut canvas = Recorder::default();
        draw_labels(&net, 20.0, &view, &mut canvas);

        // Three vertex labels plus six directed edge counts.
        assert_eq!(canvas.shapes.len(), 9);
        assert_eq!(
            canvas.shapes[0],
            Shape::Text(p(0.0, 0.0), 20.0, "0".to_string(), Role::Label)
        );
        // Pair 0 -> 1 labelled 30% of the way along.
        assert_eq!(
            canvas.shapes[3],
            Shape::Text(p(3.0, 0.0), 10.0, "1".to_string(), Role::Label)
        );
    }

    #[test]
    fn test_draw_cursor() {
        let view = ViewTransform::new(Vector2::zeros(), 100.0);
        let mut canvas = Recorder::default();
        draw_cursor(p(0.1, 0.0), p(0.0, 0.0), 0.3, &view, &mut canvas);

        assert_eq!(canvas.shapes.len(), 2);
        assert!(matches!(canvas.shapes[1], Shape::Circle(_, r, Role::Cursor) if (r - 30.0).abs() < 1e-9));
    }
}
