//! `polygon` command: trace the boundary.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trinet::save_polygon;

use super::Session;
use crate::output;

#[derive(Debug, Serialize)]
pub struct PolygonResult {
    pub indices: Vec<u32>,
    pub points: Vec<[f64; 2]>,
    pub closed: bool,
    pub perimeter: f64,
    pub signed_area: f64,
}

pub fn run(session: &Session, input: &Path, out: Option<&Path>) -> Result<()> {
    let net = session.load_net(input)?;
    let walk = net.boundary_loop();

    if let Some(path) = out {
        save_polygon(walk.points(), path)
            .with_context(|| format!("failed to save polygon to {}", path.display()))?;
        session.success(&format!("Saved {} polygon vertices to {}", walk.len(), path.display()));
    }

    for (index, p) in walk.indices().iter().zip(walk.points()) {
        session.info(&format!("{:>4} {}", index, output::point(p.x, p.y)));
    }

    if !walk.is_closed() {
        session.warning(&format!("Boundary walk is open after {} vertices", walk.len()));
    }

    let perimeter = walk.perimeter();
    let signed_area = walk.signed_area();
    let closed = walk.is_closed();
    let (indices, points) = walk.into_parts();

    let result = PolygonResult {
        indices,
        points: points.iter().map(|p| [p.x, p.y]).collect(),
        closed,
        perimeter,
        signed_area,
    };
    session.print(&result);

    Ok(())
}
