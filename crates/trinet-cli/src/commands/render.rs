//! `render` command: SVG output of the net and its polygon.

use std::path::Path;

use anyhow::{Context, Result};
use trinet::{draw_labels, draw_net, draw_polygon, Role, SvgCanvas};

use super::Session;

pub fn run(
    session: &Session,
    input: &Path,
    out: &Path,
    until: Option<usize>,
    labels: bool,
) -> Result<()> {
    let svg = render(session, input, until, labels)?;
    std::fs::write(out, svg).with_context(|| format!("failed to write {}", out.display()))?;

    session.success(&format!("Rendered {} to {}", input.display(), out.display()));

    Ok(())
}

pub fn render(
    session: &Session,
    input: &Path,
    until: Option<usize>,
    labels: bool,
) -> Result<String> {
    let net = session.load_net(input)?;
    let config = &session.config;
    let view = &config.view;

    let mut canvas = SvgCanvas::new(config.canvas_size[0], config.canvas_size[1]);
    draw_net(&net, view, &mut canvas);
    if labels {
        draw_labels(&net, config.label_size, view, &mut canvas);
    }
    draw_polygon(&net.polygon(), until, Role::Polygon, view, &mut canvas);

    Ok(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{quiet_session, split_square_file};

    #[test]
    fn test_render_with_labels() {
        let file = split_square_file();
        let svg = render(&quiet_session(), file.path(), None, true).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<text"));
        assert!(svg.contains("magenta"));
    }

    #[test]
    fn test_render_partial_trace() {
        let file = split_square_file();
        let full = render(&quiet_session(), file.path(), None, false).unwrap();
        let partial = render(&quiet_session(), file.path(), Some(1), false).unwrap();
        assert!(partial.lines().count() < full.lines().count());
    }
}
