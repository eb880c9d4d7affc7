//! A [`Canvas`] that writes a standalone SVG document.

use std::fmt::Write;

use nalgebra::Point2;

use crate::draw::{Canvas, Role};

/// Collects primitives and serializes them as SVG.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Number of elements drawn so far.
    pub fn element_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Finish the document.
    pub fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n",
                r#"<rect width="100%" height="100%" fill="black"/>"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

/// Stroke colour per role.
fn color(role: Role) -> &'static str {
    match role {
        Role::Boundary => "blue",
        Role::Internal => "red",
        Role::Polygon => "magenta",
        Role::Selection => "lime",
        Role::Cursor => "darkgreen",
        Role::Label => "darkgray",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// Writing to a String cannot fail.
impl Canvas for SvgCanvas {
    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, role: Role) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color(role)
        );
    }

    fn circle(&mut self, center: Point2<f64>, radius: f64, role: Role) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}"/>"#,
            center.x,
            center.y,
            radius,
            color(role)
        );
    }

    fn text(&mut self, at: Point2<f64>, size: f64, text: &str, role: Role) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.1}" fill="{}">{}</text>"#,
            at.x,
            at.y,
            size,
            color(role),
            escape(text)
        );
    }
}
