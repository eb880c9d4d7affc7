//! Example: scripted picking session
//!
//! Replays a sequence of clicks against a net the way an interactive viewer
//! would: clicks snap to nearby vertices, every third click adds a triangle,
//! and the traced outline is revealed one edge per animation step. Each frame
//! is written as an SVG file.
//!
//! Run with: `cargo run --example picking_session -- <output-dir>`

use std::path::PathBuf;

use nalgebra::Point2;
use trinet::{
    draw_cursor, draw_net, draw_polygon, NetConfig, PickOutcome, Role, SvgCanvas,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let config = NetConfig::default();
    let mut net = config.net();
    let mut picker = config.picker();
    let mut trace = config.animator();

    // Seed with the classic split square.
    net.add_triangles(&[
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
    ])?;

    // Screen-space clicks; the first two land close enough to snap.
    let clicks = [
        Point2::new(510.0, 305.0),
        Point2::new(505.0, 395.0),
        Point2::new(600.0, 350.0),
    ];

    let mut polygon = net.polygon();
    println!("Initial polygon: {} vertices", polygon.len());

    for (frame, click) in clicks.iter().enumerate() {
        let cursor = config.view.to_world(*click);
        let snapped = picker.snap(&net, cursor);

        match picker.pick(&mut net, cursor)? {
            PickOutcome::Pending { point, pending } => {
                println!("Picked ({:.2}, {:.2}), {} pending", point.x, point.y, pending);
            }
            PickOutcome::TriangleAdded(_) => {
                polygon = net.polygon();
                trace.restart();
                println!("Triangle added; polygon now {} vertices", polygon.len());
            }
        }

        let until = trace.advance(0.4, polygon.len());

        let mut canvas = SvgCanvas::new(config.canvas_size[0], config.canvas_size[1]);
        draw_net(&net, &config.view, &mut canvas);
        draw_polygon(picker.selected(), None, Role::Selection, &config.view, &mut canvas);
        draw_polygon(&polygon, Some(until), Role::Polygon, &config.view, &mut canvas);
        draw_cursor(cursor, snapped, picker.snap_distance(), &config.view, &mut canvas);

        let path = out_dir.join(format!("frame_{:02}.svg", frame));
        std::fs::write(&path, canvas.finish())?;
        println!("Wrote {}", path.display());
    }

    println!("{}", net.validate());

    Ok(())
}
